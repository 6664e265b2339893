//! Transport types shared with the clinic backend.
//!
//! - `domain`: patient, appointment and prescription records and their form DTOs
//! - `shared`: form validation rules and the API error type

pub mod domain;
pub mod shared;
