use crate::system::router::{use_app_context, PageKey};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = chrono::Local::now().format("%Y").to_string();

    let link = move |key: PageKey| {
        view! {
            <a
                href=key.hash()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(key);
                }
            >
                {key.title().unwrap_or_default()}
            </a>
        }
    };

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__brand">"Dr. Fachero"</span>
                    <p>"Gestión simple para consultorios y clínicas."</p>
                </div>
                <div class="footer__column">
                    <h4>"Producto"</h4>
                    {link(PageKey::Funcionalidades)}
                    {link(PageKey::Planes)}
                    {link(PageKey::Blog)}
                </div>
                <div class="footer__column">
                    <h4>"Empresa"</h4>
                    {link(PageKey::Porque)}
                    {link(PageKey::Contacto)}
                    {link(PageKey::Login)}
                </div>
            </div>
            <div class="footer__copy">{format!("© {} Dr. Fachero. Todos los derechos reservados.", year)}</div>
        </footer>
    }
}
