//! Hash router and navigation guard
//!
//! - page.rs: closed set of page keys, titles, classification
//! - transition.rs: pure state machine (state, event) -> (state, effects)
//! - effects.rs: applies effects to history/localStorage/document
//! - context.rs: reactive store provided to the component tree
//! - chrome.rs: navbar/footer/layout rules per page

pub mod chrome;
pub mod context;
pub mod effects;
pub mod page;
pub mod transition;

pub use context::{use_app_context, AppContext};
pub use page::PageKey;
