pub mod assessment;
pub mod attempt;
