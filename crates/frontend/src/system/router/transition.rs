//! Router state machine.
//!
//! Every user-visible routing event is a pure function
//! `(RouterState, event) -> Transition`. A transition carries the next state
//! plus the browser side effects (history, storage, title, scroll) that the
//! effect layer in [`super::effects`] performs afterwards.

use super::page::{document_title, PageKey};
use crate::system::session::storage::StoredState;
use crate::system::session::{Plan, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PushHash(PageKey),
    ReplaceHash(PageKey),
    StoreLastPage(PageKey),
    ClearLastPage,
    StoreSession { user_name: String, plan: Plan },
    ClearSession,
    ScrollToTop,
    SetTitle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    pub session: Session,
    pub page: PageKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: RouterState,
    pub effects: Vec<Effect>,
}

/// Pick the page for a URL fragment.
///
/// Known fragment wins, then the remembered public page, then the session's
/// home (its dashboard, or the welcome page when logged out).
pub fn resolve_page(hash: &str, stored_last_page: Option<&str>, session: &Session) -> PageKey {
    PageKey::parse(hash)
        .or_else(|| stored_last_page.and_then(PageKey::parse))
        .unwrap_or_else(|| session.home_page())
}

impl RouterState {
    /// Startup state from the current fragment and persisted values
    pub fn restore(hash: &str, stored: &StoredState) -> Self {
        let session = Session::restore(stored.user_plan.as_deref(), stored.user_name.as_deref());
        let page = resolve_page(hash, stored.last_page.as_deref(), &session);
        Self { session, page }
    }

    /// Private page requested without a plan
    pub fn is_blocked(&self) -> bool {
        self.page.is_private() && !self.session.is_authenticated()
    }

    pub fn navigate(&self, page: PageKey, mode: HistoryMode) -> Transition {
        let history = match mode {
            HistoryMode::Push => Effect::PushHash(page),
            HistoryMode::Replace => Effect::ReplaceHash(page),
        };
        let last_page = if page.is_restorable() {
            Effect::StoreLastPage(page)
        } else {
            Effect::ClearLastPage
        };
        Transition {
            state: RouterState {
                session: self.session.clone(),
                page,
            },
            effects: vec![history, last_page],
        }
    }

    /// Back/forward: the URL is authoritative again
    pub fn hash_changed(&self, hash: &str, stored_last_page: Option<&str>) -> Transition {
        Transition {
            state: RouterState {
                session: self.session.clone(),
                page: resolve_page(hash, stored_last_page, &self.session),
            },
            effects: vec![Effect::ScrollToTop],
        }
    }

    pub fn login(&self, user_name: &str, plan: Plan) -> Transition {
        let logged_in = RouterState {
            session: Session::new(user_name, plan),
            page: self.page,
        };
        let mut effects = vec![Effect::StoreSession {
            user_name: user_name.to_string(),
            plan,
        }];
        let nav = logged_in.navigate(plan.home_page(), HistoryMode::Push);
        effects.extend(nav.effects);
        Transition {
            state: nav.state,
            effects,
        }
    }

    pub fn logout(&self) -> Transition {
        let logged_out = RouterState {
            session: Session::default(),
            page: self.page,
        };
        let mut effects = vec![Effect::ClearSession];
        let nav = logged_out.navigate(PageKey::Login, HistoryMode::Replace);
        effects.extend(nav.effects);
        Transition {
            state: nav.state,
            effects,
        }
    }

    /// Runs after every page or session change: guard, then title.
    pub fn settle(&self) -> Transition {
        let mut transition = if self.is_blocked() {
            self.navigate(PageKey::Login, HistoryMode::Replace)
        } else {
            Transition {
                state: self.clone(),
                effects: Vec::new(),
            }
        };
        let title = document_title(transition.state.page);
        transition.effects.push(Effect::SetTitle(title));
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::storage::{LAST_PAGE_KEY, USER_NAME_KEY, USER_PLAN_KEY};
    use std::collections::BTreeMap;

    type Store = BTreeMap<&'static str, String>;

    /// Replay storage effects onto an in-memory map
    fn persist(mut store: Store, effects: &[Effect]) -> Store {
        for effect in effects {
            match effect {
                Effect::StoreLastPage(page) => {
                    store.insert(LAST_PAGE_KEY, page.as_str().to_string());
                }
                Effect::ClearLastPage => {
                    store.remove(LAST_PAGE_KEY);
                }
                Effect::StoreSession { user_name, plan } => {
                    store.insert(USER_NAME_KEY, user_name.clone());
                    store.insert(USER_PLAN_KEY, plan.as_str().to_string());
                }
                Effect::ClearSession => {
                    store.remove(USER_NAME_KEY);
                    store.remove(USER_PLAN_KEY);
                }
                _ => {}
            }
        }
        store
    }

    fn logged_out(page: PageKey) -> RouterState {
        RouterState {
            session: Session::default(),
            page,
        }
    }

    fn title_of(t: &Transition) -> Option<&str> {
        t.effects.iter().rev().find_map(|e| match e {
            Effect::SetTitle(title) => Some(title.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_unknown_hash_behaves_like_absent_hash() {
        let sessions = [Session::default(), Session::new("Ana", Plan::Estandar)];
        for session in &sessions {
            for stored in [None, Some("planes"), Some("basura")] {
                let absent = resolve_page("", stored, session);
                for hash in ["#nope", "#", "#dashboard", "#PLANES2"] {
                    assert_eq!(resolve_page(hash, stored, session), absent);
                }
            }
        }
    }

    #[test]
    fn test_resolution_scenarios() {
        let anon = Session::default();
        assert_eq!(resolve_page("#blog", None, &anon), PageKey::Blog);
        assert_eq!(resolve_page("", Some("planes"), &anon), PageKey::Planes);
        assert_eq!(resolve_page("", None, &anon), PageKey::Inicio);
        assert_eq!(
            resolve_page("", None, &Session::new("Ana", Plan::Estandar)),
            PageKey::DashboardEstandar
        );
        // fragment beats the stored page
        assert_eq!(resolve_page("#Contacto", Some("planes"), &anon), PageKey::Contacto);
    }

    #[test]
    fn test_restore_from_storage() {
        let stored = StoredState {
            user_plan: Some("pro".into()),
            user_name: Some("Dr. Fachero".into()),
            last_page: None,
        };
        let state = RouterState::restore("", &stored);
        assert_eq!(state.page, PageKey::DashboardPro);
        assert_eq!(state.session.user_name, "Dr. Fachero");

        let bogus = StoredState {
            user_plan: Some("gold".into()),
            ..stored
        };
        let state = RouterState::restore("#pacientes", &bogus);
        assert!(state.is_blocked());
        assert_eq!(state.settle().state.page, PageKey::Login);
    }

    #[test]
    fn test_login_lands_on_plan_dashboard_and_persists() {
        let t = logged_out(PageKey::Login).login("Dr. Fachero", Plan::Pro);
        assert_eq!(t.state.page, PageKey::DashboardPro);
        assert!(t.effects.contains(&Effect::PushHash(PageKey::DashboardPro)));

        let store = persist(Store::new(), &t.effects);
        assert_eq!(store.get(USER_PLAN_KEY).map(String::as_str), Some("pro"));
        assert_eq!(store.get(USER_NAME_KEY).map(String::as_str), Some("Dr. Fachero"));
        assert_eq!(store.get(LAST_PAGE_KEY), None);
        assert_eq!(title_of(&t.state.settle()), Some("Panel Pro - Dr. Fachero"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let state = RouterState {
            session: Session::new("Ana", Plan::Estandar),
            page: PageKey::Pacientes,
        };
        let store = Store::from([
            (USER_PLAN_KEY, "estandar".to_string()),
            (USER_NAME_KEY, "Ana".to_string()),
            (LAST_PAGE_KEY, "planes".to_string()),
        ]);
        let t = state.logout();
        assert!(persist(store, &t.effects).is_empty());
        assert_eq!(t.state.page, PageKey::Login);
        assert!(!t.state.session.is_authenticated());
        assert!(t.effects.contains(&Effect::ReplaceHash(PageKey::Login)));
    }

    #[test]
    fn test_private_pages_redirect_to_login_when_logged_out() {
        for page in PageKey::ALL.into_iter().filter(|p| p.is_private()) {
            let nav = logged_out(PageKey::Inicio).navigate(page, HistoryMode::Push);
            let settled = nav.state.settle();
            assert_eq!(settled.state.page, PageKey::Login, "{page:?}");
            assert!(settled.effects.contains(&Effect::ReplaceHash(PageKey::Login)));
            assert_eq!(title_of(&settled), Some("Iniciar sesión - Dr. Fachero"));
            // settling again is a no-op
            assert_eq!(settled.state.settle().state, settled.state);
        }
    }

    #[test]
    fn test_navigate_updates_last_page_record() {
        let start = logged_out(PageKey::Inicio);
        let store = persist(Store::new(), &start.navigate(PageKey::Planes, HistoryMode::Push).effects);
        assert_eq!(store.get(LAST_PAGE_KEY).map(String::as_str), Some("planes"));

        for page in [PageKey::Login, PageKey::Recuperacion, PageKey::DashboardPro] {
            let t = start.navigate(page, HistoryMode::Push);
            assert!(persist(store.clone(), &t.effects).get(LAST_PAGE_KEY).is_none());
        }
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let start = logged_out(PageKey::Inicio);
        for page in PageKey::ALL {
            let once = start.navigate(page, HistoryMode::Push);
            let twice = once.state.navigate(page, HistoryMode::Push);
            assert_eq!(once.state, twice.state);
            let store_once = persist(Store::new(), &once.effects);
            let store_twice = persist(store_once.clone(), &twice.effects);
            assert_eq!(store_once, store_twice);
        }
    }

    #[test]
    fn test_hash_change_reresolves_and_scrolls() {
        let state = logged_out(PageKey::Planes);
        let t = state.hash_changed("#blog", Some("planes"));
        assert_eq!(t.state.page, PageKey::Blog);
        assert_eq!(t.effects, vec![Effect::ScrollToTop]);

        let t = state.hash_changed("", Some("contacto"));
        assert_eq!(t.state.page, PageKey::Contacto);
    }

    #[test]
    fn test_blog_scenario_title() {
        let state = RouterState::restore("#blog", &StoredState::default());
        let settled = state.settle();
        assert_eq!(settled.state.page, PageKey::Blog);
        assert_eq!(title_of(&settled), Some("Blog - Dr. Fachero"));
    }

    #[test]
    fn test_registro_keeps_fallback_title() {
        let t = logged_out(PageKey::Planes).navigate(PageKey::Registro, HistoryMode::Push);
        assert_eq!(title_of(&t.state.settle()), Some("Dr. Fachero - Dr. Fachero"));
    }
}
