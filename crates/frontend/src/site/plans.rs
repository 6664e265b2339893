use crate::system::router::{use_app_context, PageKey};
use crate::system::session::Plan;
use leptos::prelude::*;

pub struct PlanCard {
    pub plan: Plan,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub const PLAN_CARDS: [PlanCard; 2] = [
    PlanCard {
        plan: Plan::Estandar,
        price: "$ 9.900 / mes",
        features: &[
            "Gestión de pacientes",
            "Agenda médica con calendario",
            "Exportación a CSV",
        ],
    },
    PlanCard {
        plan: Plan::Pro,
        price: "$ 15.900 / mes",
        features: &[
            "Todo lo del plan Estándar",
            "Recetas médicas",
            "Soporte prioritario",
        ],
    },
];

#[component]
pub fn PlansPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="page-section">
            <h1>"Planes"</h1>
            <p class="lead">"Empezá con el plan que mejor se adapte a tu consultorio."</p>
            <div class="plan-grid">
                {PLAN_CARDS
                    .iter()
                    .map(|card| view! {
                        <article class="plan-card" class:plan-card--featured={card.plan == Plan::Pro}>
                            <h3>{card.plan.label()}</h3>
                            <span class="plan-card__price">{card.price}</span>
                            <ul>
                                {card.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                            </ul>
                            <button class="button button--primary" on:click=move |_| ctx.navigate(PageKey::Registro)>
                                "Elegir plan"
                            </button>
                        </article>
                    })
                    .collect_view()}
            </div>
            <p class="plan-grid__login">
                "¿Ya tenés cuenta? "
                <button class="button button--link" on:click=move |_| ctx.navigate(PageKey::Login)>
                    "Ingresá"
                </button>
            </p>
        </section>
    }
}
