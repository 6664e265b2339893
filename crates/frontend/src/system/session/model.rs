use crate::system::router::page::PageKey;

/// Subscription tier of the logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plan {
    Estandar,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Estandar => "estandar",
            Plan::Pro => "pro",
        }
    }

    /// Only the exact wire values are accepted; anything else means "no plan".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "estandar" => Some(Plan::Estandar),
            "pro" => Some(Plan::Pro),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Estandar => "Estándar",
            Plan::Pro => "Pro",
        }
    }

    /// Dashboard the plan lands on after login
    pub fn home_page(&self) -> PageKey {
        match self {
            Plan::Estandar => PageKey::DashboardEstandar,
            Plan::Pro => PageKey::DashboardPro,
        }
    }
}

/// Current user as restored from storage or set by login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
    pub plan: Option<Plan>,
}

impl Session {
    pub fn new(user_name: impl Into<String>, plan: Plan) -> Self {
        Self {
            user_name: user_name.into(),
            plan: Some(plan),
        }
    }

    /// Rebuild a session from the raw stored values
    pub fn restore(user_plan: Option<&str>, user_name: Option<&str>) -> Self {
        Self {
            user_name: user_name.unwrap_or_default().to_string(),
            plan: user_plan.and_then(Plan::parse),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.plan.is_some()
    }

    /// Landing page for this session: its dashboard, or the public welcome page
    pub fn home_page(&self) -> PageKey {
        self.plan
            .map(|plan| plan.home_page())
            .unwrap_or(PageKey::Inicio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_accepts_only_known_plans() {
        let s = Session::restore(Some("pro"), Some("Dr. Fachero"));
        assert_eq!(s.plan, Some(Plan::Pro));
        assert!(s.is_authenticated());

        for raw in ["", "PRO", "premium", "estándar"] {
            let s = Session::restore(Some(raw), Some("x"));
            assert!(!s.is_authenticated(), "{raw:?} must not authenticate");
            assert_eq!(s.home_page(), PageKey::Inicio);
        }
        assert_eq!(Session::restore(None, None), Session::default());
    }

    #[test]
    fn test_home_page_per_plan() {
        assert_eq!(
            Session::new("a", Plan::Estandar).home_page(),
            PageKey::DashboardEstandar
        );
        assert_eq!(Session::new("a", Plan::Pro).home_page(), PageKey::DashboardPro);
    }
}
