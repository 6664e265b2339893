pub mod api_utils;
pub mod date_utils;
pub mod export;
pub mod form;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notice;
