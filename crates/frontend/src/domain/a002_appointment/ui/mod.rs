pub mod calendar;
pub mod details;
pub mod list;
