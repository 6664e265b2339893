mod view;
mod view_model;

pub use view::PrescriptionDetails;
pub use view_model::PrescriptionDetailsViewModel;
