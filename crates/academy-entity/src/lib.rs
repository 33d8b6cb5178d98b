pub mod access_tokens;
pub mod assessment;
pub mod badge;
pub mod certificate;
pub mod course;
pub mod notification;
pub mod progress;
pub mod unit;
pub mod user;
