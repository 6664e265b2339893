//! Page keys - единственный источник правды для навигации.
//!
//! A page key is both the in-memory route and the URL fragment (`#planes`).

pub const SITE_NAME: &str = "Dr. Fachero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    // ── Public site ───────────────────────────────────────────────────
    Inicio,
    Funcionalidades,
    Porque,
    Blog,
    Planes,
    Contacto,
    Login,
    Recuperacion,
    /// Linked from the navbar's "Crear Cuenta"; has no title and no page of its own
    Registro,

    // ── Private (requires a plan) ─────────────────────────────────────
    DashboardEstandar,
    DashboardPro,
    Pacientes,
    AgendaMedica,
    RecetasMedicas,
}

impl PageKey {
    pub const ALL: [PageKey; 14] = [
        PageKey::Inicio,
        PageKey::Funcionalidades,
        PageKey::Porque,
        PageKey::Blog,
        PageKey::Planes,
        PageKey::Contacto,
        PageKey::Login,
        PageKey::Recuperacion,
        PageKey::Registro,
        PageKey::DashboardEstandar,
        PageKey::DashboardPro,
        PageKey::Pacientes,
        PageKey::AgendaMedica,
        PageKey::RecetasMedicas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Inicio => "inicio",
            PageKey::Funcionalidades => "funcionalidades",
            PageKey::Porque => "porque",
            PageKey::Blog => "blog",
            PageKey::Planes => "planes",
            PageKey::Contacto => "contacto",
            PageKey::Login => "login",
            PageKey::Recuperacion => "recuperacion",
            PageKey::Registro => "registro",
            PageKey::DashboardEstandar => "dashboard_estandar",
            PageKey::DashboardPro => "dashboard_pro",
            PageKey::Pacientes => "pacientes",
            PageKey::AgendaMedica => "agenda_medica",
            PageKey::RecetasMedicas => "recetas_medicas",
        }
    }

    /// Case-insensitive lookup; a leading `#` is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL.into_iter().find(|page| page.as_str() == key)
    }

    pub fn is_private(&self) -> bool {
        matches!(
            self,
            PageKey::DashboardEstandar
                | PageKey::DashboardPro
                | PageKey::Pacientes
                | PageKey::AgendaMedica
                | PageKey::RecetasMedicas
        )
    }

    /// Login and password recovery
    pub fn is_auth_page(&self) -> bool {
        matches!(self, PageKey::Login | PageKey::Recuperacion)
    }

    /// Whether the page may be remembered as the last visited public page
    pub fn is_restorable(&self) -> bool {
        !self.is_private() && !self.is_auth_page()
    }

    pub fn title(&self) -> Option<&'static str> {
        let title = match self {
            PageKey::Inicio => "Inicio",
            PageKey::Funcionalidades => "Funcionalidades",
            PageKey::Porque => "Por qué elegirnos",
            PageKey::Blog => "Blog",
            PageKey::Planes => "Planes",
            PageKey::Contacto => "Contacto",
            PageKey::Login => "Iniciar sesión",
            PageKey::Recuperacion => "Recuperar contraseña",
            PageKey::Registro => return None,
            PageKey::DashboardEstandar => "Panel Estándar",
            PageKey::DashboardPro => "Panel Pro",
            PageKey::Pacientes => "Pacientes",
            PageKey::AgendaMedica => "Agenda Médica",
            PageKey::RecetasMedicas => "Recetas Médicas",
        };
        Some(title)
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.as_str())
    }
}

/// `"<page title> - Dr. Fachero"`, falling back to the site name
pub fn document_title(page: PageKey) -> String {
    format!("{} - {}", page.title().unwrap_or(SITE_NAME), SITE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PageKey::parse("#BLOG"), Some(PageKey::Blog));
        assert_eq!(PageKey::parse("Agenda_Medica"), Some(PageKey::AgendaMedica));
        assert_eq!(PageKey::parse(""), None);
        assert_eq!(PageKey::parse("#"), None);
        assert_eq!(PageKey::parse("dashboard_premium"), None);
        for page in PageKey::ALL {
            assert_eq!(PageKey::parse(&page.hash()), Some(page));
        }
    }

    #[test]
    fn test_classification() {
        let private: Vec<_> = PageKey::ALL.into_iter().filter(|p| p.is_private()).collect();
        assert_eq!(private.len(), 5);
        assert!(PageKey::Planes.is_restorable());
        assert!(PageKey::Registro.is_restorable());
        assert!(!PageKey::Login.is_restorable());
        assert!(!PageKey::Recuperacion.is_restorable());
        assert!(!PageKey::DashboardPro.is_restorable());
        assert!(!PageKey::Pacientes.is_restorable());
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(PageKey::Blog), "Blog - Dr. Fachero");
        assert_eq!(document_title(PageKey::Registro), "Dr. Fachero - Dr. Fachero");
        assert_eq!(
            document_title(PageKey::AgendaMedica),
            "Agenda Médica - Dr. Fachero"
        );
    }
}
