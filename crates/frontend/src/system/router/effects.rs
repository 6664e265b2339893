use super::page::PageKey;
use super::transition::Effect;
use crate::system::session::storage::{self, LAST_PAGE_KEY, USER_NAME_KEY, USER_PLAN_KEY};
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Current URL fragment including the leading `#` (empty when absent)
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn apply(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::PushHash(page) => write_hash(*page, false),
            Effect::ReplaceHash(page) => write_hash(*page, true),
            Effect::StoreLastPage(page) => storage::set_item(LAST_PAGE_KEY, page.as_str()),
            Effect::ClearLastPage => storage::remove_item(LAST_PAGE_KEY),
            Effect::StoreSession { user_name, plan } => {
                storage::set_item(USER_PLAN_KEY, plan.as_str());
                storage::set_item(USER_NAME_KEY, user_name);
            }
            Effect::ClearSession => {
                storage::remove_item(USER_PLAN_KEY);
                storage::remove_item(USER_NAME_KEY);
            }
            Effect::ScrollToTop => scroll_to_top(),
            Effect::SetTitle(title) => set_document_title(title),
        }
    }
}

fn write_hash(page: PageKey, replace: bool) {
    let Some(w) = window() else { return };
    let Ok(history) = w.history() else { return };

    let url = page.hash();
    // Re-navigating to the current page must not stack history entries
    let same = current_hash().eq_ignore_ascii_case(&url);
    let result = if replace || same {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&url))
    };
    if let Err(e) = result {
        log::warn!("history update to {} failed: {:?}", url, e);
    }
}

fn scroll_to_top() {
    if let Some(w) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_left(0.0);
        opts.set_behavior(ScrollBehavior::Instant);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
