use super::PageLink;
use crate::system::router::PageKey;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__text">
                <h1>"Tu consultorio, ordenado."</h1>
                <p>
                    "Dr. Fachero reúne pacientes, turnos y recetas en un solo lugar. "
                    "Menos papeles, más tiempo para atender."
                </p>
                <div class="hero__actions">
                    <PageLink to=PageKey::Planes class="button button--primary">"Ver planes"</PageLink>
                    <PageLink to=PageKey::Funcionalidades class="button button--secondary">
                        "Conocer funcionalidades"
                    </PageLink>
                </div>
            </div>
        </section>

        <section class="highlights">
            <div class="highlight">
                <h3>"Historia de pacientes"</h3>
                <p>"Datos de contacto, obra social y fecha de nacimiento siempre a mano."</p>
            </div>
            <div class="highlight">
                <h3>"Agenda médica"</h3>
                <p>"Calendario mensual con el estado de cada turno."</p>
            </div>
            <div class="highlight">
                <h3>"Recetas digitales"</h3>
                <p>"Emití recetas en segundos con el plan Pro."</p>
            </div>
        </section>
    }
}
