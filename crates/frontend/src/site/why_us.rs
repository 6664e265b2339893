use super::PageLink;
use crate::system::router::PageKey;
use leptos::prelude::*;

#[component]
pub fn WhyUsPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Por qué elegirnos"</h1>
            <div class="reasons">
                <div class="reason">
                    <h3>"Pensado por médicos"</h3>
                    <p>"Cada pantalla nació de la rutina real de un consultorio."</p>
                </div>
                <div class="reason">
                    <h3>"Sin instalación"</h3>
                    <p>"Funciona en el navegador, desde la compu del consultorio o desde casa."</p>
                </div>
                <div class="reason">
                    <h3>"Tus datos son tuyos"</h3>
                    <p>"Exportá tus pacientes cuando quieras, sin ataduras."</p>
                </div>
                <div class="reason">
                    <h3>"Soporte cercano"</h3>
                    <p>"Un equipo que responde en castellano y en horario de atención."</p>
                </div>
            </div>
            <p>
                "¿Tenés dudas? "
                <PageLink to=PageKey::Contacto>"Escribinos"</PageLink>
            </p>
        </section>
    }
}
