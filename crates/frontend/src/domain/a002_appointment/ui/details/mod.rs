mod view;
mod view_model;

pub use view::AppointmentDetails;
pub use view_model::AppointmentDetailsViewModel;
