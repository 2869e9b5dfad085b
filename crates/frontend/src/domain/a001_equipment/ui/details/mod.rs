//! Equipment registration page
//!
//! MVVM split:
//! - model.rs: submission call
//! - view_model.rs: form state, image set and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::EquipmentDetails;
pub use view_model::{EquipmentDetailsViewModel, SubmissionState};
