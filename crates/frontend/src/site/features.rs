use super::PageLink;
use crate::shared::icons::icon;
use crate::system::router::PageKey;
use leptos::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "patients",
        "Gestión de pacientes",
        "Alta, edición y búsqueda por nombre o DNI. Exportá el listado a CSV cuando lo necesites.",
    ),
    (
        "calendar",
        "Agenda de turnos",
        "Vista mensual, filtro por día y estados: pendiente, confirmado, cancelado y completado.",
    ),
    (
        "prescription",
        "Recetas médicas",
        "Medicamento, dosis e indicaciones en un formulario simple. Disponible en el plan Pro.",
    ),
    (
        "dashboard",
        "Panel de control",
        "Los números del día apenas iniciás sesión: pacientes, turnos de hoy y pendientes.",
    ),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Funcionalidades"</h1>
            <p class="lead">"Todo lo que un consultorio necesita, sin instalaciones."</p>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(icon_name, title, text)| view! {
                        <article class="feature-card">
                            <div class="feature-card__icon">{icon(icon_name)}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
            <PageLink to=PageKey::Planes class="button button--primary">"Elegí tu plan"</PageLink>
        </section>
    }
}
