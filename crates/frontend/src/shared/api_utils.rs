//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override of the backend base URL (e.g. `https://api.drfachero.com`)
const API_BASE_OVERRIDE: Option<&str> = option_env!("DR_FACHERO_API_BASE");

/// Port of the clinic backend when it runs next to the site
pub const DEFAULT_API_PORT: u16 = 3000;

pub const PATIENTS_PATH: &str = "/api/pacientes";
pub const APPOINTMENTS_PATH: &str = "/api/turnos";
pub const PRESCRIPTIONS_PATH: &str = "/api/recetas";

/// Get the base URL for API requests
///
/// Uses `DR_FACHERO_API_BASE` when it was set at build time, otherwise the
/// current page's protocol and hostname with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(PATIENTS_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a single resource; the id is percent-encoded
pub fn resource_url(collection: &str, id: &str) -> String {
    format!("{}/{}", api_url(collection), urlencoding::encode(id))
}
