//! Business workflows on top of the persistence layer: course completion
//! evaluation, badge awards, certificate issuance and the notification
//! emitter. HTTP handlers call into this crate and stay thin.

pub mod access;
pub mod assessments;
pub mod badges;
pub mod certificates;
pub mod notify;
pub mod progress;
