//! Patient Details UI Module
//!
//! - view_model.rs: form state, validation, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PatientDetails;
pub use view_model::PatientDetailsViewModel;
