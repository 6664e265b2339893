pub mod model;
pub mod storage;

pub use model::{Plan, Session};
