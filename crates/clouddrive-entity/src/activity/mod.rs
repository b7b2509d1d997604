//! Activity ledger entities.

pub mod action;
pub mod model;

pub use action::ActivityAction;
pub use model::{ActivityRecord, CreateActivityRecord};
