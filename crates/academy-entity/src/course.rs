pub mod area;
pub mod course;
pub mod mandatory;
pub mod module;
pub mod unit_link;
