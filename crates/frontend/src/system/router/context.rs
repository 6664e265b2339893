use super::effects;
use super::page::PageKey;
use super::transition::{HistoryMode, RouterState, Transition};
use crate::system::session::storage::{self, LAST_PAGE_KEY};
use crate::system::session::{Plan, Session};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Application store: current session and active page.
///
/// All mutations go through `navigate`, `login`, `logout` and the
/// `hashchange` listener; components only read through the derived signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    state: RwSignal<RouterState>,
}

impl AppContext {
    pub fn new() -> Self {
        let stored = storage::load();
        let state = RouterState::restore(&effects::current_hash(), &stored);
        log::debug!(
            "router restored: page={} plan={:?}",
            state.page.as_str(),
            state.session.plan
        );
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Subscribe to back/forward and run the guard/title pass after every change.
    pub fn init_router_integration(&self) {
        let this = *self;

        let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let stored_last_page = storage::get_item(LAST_PAGE_KEY);
            let transition = this
                .state
                .with_untracked(|s| s.hash_changed(&effects::current_hash(), stored_last_page.as_deref()));
            log::debug!("hashchange -> {}", transition.state.page.as_str());
            this.apply(transition);
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
        on_hash_change.forget();

        Effect::new(move |_| {
            let settled = this.state.with(|s| s.settle());
            if settled.state.page != this.state.with_untracked(|s| s.page) {
                log::info!(
                    "private page without session, redirecting to {}",
                    settled.state.page.as_str()
                );
            }
            this.apply(settled);
        });
    }

    fn apply(&self, transition: Transition) {
        effects::apply(&transition.effects);
        let changed = self.state.with_untracked(|s| *s != transition.state);
        if changed {
            self.state.set(transition.state);
        }
    }

    pub fn page(&self) -> Signal<PageKey> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page))
    }

    pub fn session(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.clone()))
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.is_authenticated()))
    }

    pub fn navigate(&self, page: PageKey) {
        self.navigate_with(page, HistoryMode::Push);
    }

    pub fn navigate_with(&self, page: PageKey, mode: HistoryMode) {
        log::debug!("navigate -> {} ({:?})", page.as_str(), mode);
        let transition = self.state.with_untracked(|s| s.navigate(page, mode));
        self.apply(transition);
    }

    pub fn login(&self, user_name: &str, plan: Plan) {
        log::info!("login: {} ({})", user_name, plan.as_str());
        let transition = self.state.with_untracked(|s| s.login(user_name, plan));
        self.apply(transition);
    }

    pub fn logout(&self) {
        log::info!("logout");
        let transition = self.state.with_untracked(|s| s.logout());
        self.apply(transition);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the application store
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in component tree")
}
