//! `localStorage` keys that survive reloads

use web_sys::window;

pub const USER_PLAN_KEY: &str = "userPlan";
pub const USER_NAME_KEY: &str = "userName";
pub const LAST_PAGE_KEY: &str = "pagina_activa";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Raw values as they sit in storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    pub user_plan: Option<String>,
    pub user_name: Option<String>,
    pub last_page: Option<String>,
}

pub fn load() -> StoredState {
    StoredState {
        user_plan: get_item(USER_PLAN_KEY),
        user_name: get_item(USER_NAME_KEY),
        last_page: get_item(LAST_PAGE_KEY),
    }
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
