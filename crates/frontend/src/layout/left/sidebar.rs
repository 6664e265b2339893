//! Sidebar of the private area: user, plan badge, module links, logout

use crate::layout::registry::modules_for;
use crate::shared::icons::icon;
use crate::system::router::{use_app_context, PageKey};
use crate::system::session::Plan;
use leptos::prelude::*;

fn icon_for(page: PageKey) -> &'static str {
    match page {
        PageKey::Pacientes => "patients",
        PageKey::AgendaMedica => "calendar",
        PageKey::RecetasMedicas => "prescription",
        _ => "dashboard",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let page = ctx.page();
    let session = ctx.session();

    let item = move |key: PageKey, label: &'static str| {
        view! {
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || page.get() == key
                on:click=move |_| ctx.navigate(key)
            >
                <div class="app-sidebar__item-content">
                    {icon(icon_for(key))}
                    <span>{label}</span>
                </div>
            </div>
        }
    };

    view! {
        <aside data-zone="left" class="app-sidebar">
            <div class="app-sidebar__user">
                <span class="app-sidebar__name">{move || session.get().user_name}</span>
                {move || session.get().plan.map(|plan| view! {
                    <span class=format!("plan-badge plan-badge--{}", plan.as_str())>{plan.label()}</span>
                })}
            </div>
            <div class="app-sidebar__content">
                {move || {
                    let plan = session.get().plan.unwrap_or(Plan::Estandar);
                    let home = plan.home_page();
                    std::iter::once(item(home, home.title().unwrap_or("Panel")))
                        .chain(
                            modules_for(plan)
                                .iter()
                                .map(|key| item(*key, key.title().unwrap_or_default())),
                        )
                        .collect_view()
                }}
            </div>
            <div class="app-sidebar__footer">
                <div class="app-sidebar__item" on:click=move |_| ctx.logout()>
                    <div class="app-sidebar__item-content">
                        {icon("logout")}
                        <span>"Cerrar sesión"</span>
                    </div>
                </div>
            </div>
        </aside>
    }
}
