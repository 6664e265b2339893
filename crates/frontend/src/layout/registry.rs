//! Page registry - единственное место, где page key превращается в View.
//!
//! Selection is a total function of `(session, page)`: a logged-in user only
//! ever sees the private area, a visitor only the public site.

use crate::dashboards::DashboardHome;
use crate::domain::a001_patient::ui::list::PatientList;
use crate::domain::a002_appointment::ui::list::AppointmentList;
use crate::domain::a003_prescription::ui::list::PrescriptionList;
use crate::layout::PrivateLayout;
use crate::site::{BlogPage, ContactPage, FeaturesPage, HomePage, PlansPage, WhyUsPage};
use crate::system::pages::{LoginPage, RecoveryPage};
use crate::system::router::PageKey;
use crate::system::session::{Plan, Session};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Home,
    Features,
    WhyUs,
    Blog,
    Plans,
    Contact,
    Login,
    Recovery,
    Dashboard(Plan),
    Patients,
    Agenda,
    Prescriptions,
}

/// Module links the sidebar offers to a plan, in display order
pub fn modules_for(plan: Plan) -> &'static [PageKey] {
    match plan {
        Plan::Estandar => &[PageKey::Pacientes, PageKey::AgendaMedica],
        Plan::Pro => &[
            PageKey::Pacientes,
            PageKey::AgendaMedica,
            PageKey::RecetasMedicas,
        ],
    }
}

pub fn page_view(session: &Session, page: PageKey) -> PageView {
    match session.plan {
        Some(plan) => private_view(plan, page),
        None => public_view(page),
    }
}

fn private_view(plan: Plan, page: PageKey) -> PageView {
    match page {
        PageKey::DashboardEstandar => PageView::Dashboard(Plan::Estandar),
        PageKey::DashboardPro => PageView::Dashboard(Plan::Pro),
        PageKey::Pacientes => PageView::Patients,
        PageKey::AgendaMedica => PageView::Agenda,
        PageKey::RecetasMedicas => PageView::Prescriptions,
        // публичные ключи -> свой дашборд
        _ => PageView::Dashboard(plan),
    }
}

fn public_view(page: PageKey) -> PageView {
    match page {
        PageKey::Funcionalidades => PageView::Features,
        PageKey::Porque => PageView::WhyUs,
        PageKey::Blog => PageView::Blog,
        PageKey::Planes => PageView::Plans,
        PageKey::Contacto => PageView::Contact,
        PageKey::Login => PageView::Login,
        PageKey::Recuperacion => PageView::Recovery,
        // registro и приватные ключи
        _ => PageView::Home,
    }
}

pub fn render_page(view: PageView) -> AnyView {
    match view {
        PageView::Home => view! { <HomePage /> }.into_any(),
        PageView::Features => view! { <FeaturesPage /> }.into_any(),
        PageView::WhyUs => view! { <WhyUsPage /> }.into_any(),
        PageView::Blog => view! { <BlogPage /> }.into_any(),
        PageView::Plans => view! { <PlansPage /> }.into_any(),
        PageView::Contact => view! { <ContactPage /> }.into_any(),
        PageView::Login => view! { <LoginPage /> }.into_any(),
        PageView::Recovery => view! { <RecoveryPage /> }.into_any(),
        PageView::Dashboard(plan) => view! {
            <PrivateLayout>
                <DashboardHome plan=plan />
            </PrivateLayout>
        }
        .into_any(),
        PageView::Patients => view! {
            <PrivateLayout>
                <PatientList />
            </PrivateLayout>
        }
        .into_any(),
        PageView::Agenda => view! {
            <PrivateLayout>
                <AppointmentList />
            </PrivateLayout>
        }
        .into_any(),
        PageView::Prescriptions => view! {
            <PrivateLayout>
                <PrescriptionList />
            </PrivateLayout>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_sees_only_public_pages() {
        let anon = Session::default();
        assert_eq!(page_view(&anon, PageKey::Blog), PageView::Blog);
        assert_eq!(page_view(&anon, PageKey::Recuperacion), PageView::Recovery);
        assert_eq!(page_view(&anon, PageKey::Registro), PageView::Home);
        for page in PageKey::ALL.into_iter().filter(|p| p.is_private()) {
            assert_eq!(page_view(&anon, page), PageView::Home, "{page:?}");
        }
    }

    #[test]
    fn test_logged_in_sees_only_private_area() {
        let pro = Session::new("Dr. Fachero", Plan::Pro);
        assert_eq!(page_view(&pro, PageKey::RecetasMedicas), PageView::Prescriptions);
        assert_eq!(page_view(&pro, PageKey::AgendaMedica), PageView::Agenda);
        for page in PageKey::ALL.into_iter().filter(|p| !p.is_private()) {
            assert_eq!(page_view(&pro, page), PageView::Dashboard(Plan::Pro), "{page:?}");
        }
    }

    #[test]
    fn test_private_keys_render_their_own_screen_for_any_plan() {
        let session = Session::new("Ana", Plan::Estandar);
        assert_eq!(page_view(&session, PageKey::Pacientes), PageView::Patients);
        assert_eq!(page_view(&session, PageKey::RecetasMedicas), PageView::Prescriptions);
        assert_eq!(
            page_view(&session, PageKey::DashboardPro),
            PageView::Dashboard(Plan::Pro)
        );
        assert_eq!(
            page_view(&session, PageKey::Inicio),
            PageView::Dashboard(Plan::Estandar)
        );
        // ссылки в сайдбаре по-прежнему зависят от плана
        assert!(!modules_for(Plan::Estandar).contains(&PageKey::RecetasMedicas));
        assert!(modules_for(Plan::Pro).contains(&PageKey::RecetasMedicas));
    }
}
