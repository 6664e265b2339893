use crate::system::router::{use_app_context, PageKey};
use leptos::prelude::*;

/// Links of the public navbar, in display order
const NAV_LINKS: [PageKey; 6] = [
    PageKey::Inicio,
    PageKey::Funcionalidades,
    PageKey::Porque,
    PageKey::Blog,
    PageKey::Planes,
    PageKey::Contacto,
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let page = ctx.page();
    let menu_open = RwSignal::new(false);

    let go = move |key: PageKey| {
        menu_open.set(false);
        ctx.navigate(key);
    };

    view! {
        <header data-zone="header" class="navbar">
            <a
                class="navbar__brand"
                href=PageKey::Inicio.hash()
                on:click=move |ev| {
                    ev.prevent_default();
                    go(PageKey::Inicio);
                }
            >
                "Dr. Fachero"
            </a>
            <button
                class="navbar__toggle button button--ghost"
                aria-label="Menú"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                <ul>
                    {NAV_LINKS
                        .into_iter()
                        .map(|key| {
                            view! {
                                <li>
                                    <a
                                        href=key.hash()
                                        class:navbar__link--active=move || page.get() == key
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go(key);
                                        }
                                    >
                                        {key.title().unwrap_or_default()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="navbar__actions">
                    <button class="button button--secondary" on:click=move |_| go(PageKey::Registro)>
                        "Crear Cuenta"
                    </button>
                    <button class="button button--primary" on:click=move |_| go(PageKey::Login)>
                        "Ingresar"
                    </button>
                </div>
            </nav>
        </header>
    }
}
