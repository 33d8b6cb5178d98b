pub(crate) mod assessments;
pub(crate) mod badges;
pub(crate) mod blocks;
pub(crate) mod certificates;
pub(crate) mod courses;
pub(crate) mod notifications;
pub(crate) mod progress;
pub(crate) mod status;
pub(crate) mod units;
pub(crate) mod users;
