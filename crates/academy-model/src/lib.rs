pub mod assessment;
pub mod badge;
pub mod certificate;
pub mod convert;
pub mod course;
pub mod notification;
pub mod progress;
pub mod status;
pub mod unit;
pub mod user;
