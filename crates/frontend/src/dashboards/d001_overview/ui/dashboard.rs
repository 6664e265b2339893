use crate::dashboards::d001_overview::summary::OverviewSummary;
use crate::domain::a001_patient::api as patients_api;
use crate::domain::a002_appointment::api as appointments_api;
use crate::domain::a003_prescription::api as prescriptions_api;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::notice::ErrorBanner;
use crate::system::router::{use_app_context, PageKey};
use crate::system::session::Plan;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn load_summary(plan: Plan) -> Result<OverviewSummary, ApiError> {
    let patients = patients_api::fetch_patients().await?;
    let appointments = appointments_api::fetch_appointments().await?;
    let prescriptions = match plan {
        Plan::Pro => Some(prescriptions_api::fetch_prescriptions().await?.len()),
        Plan::Estandar => None,
    };
    Ok(OverviewSummary::build(
        patients.len(),
        &appointments,
        prescriptions,
        &today_iso(),
    ))
}

#[component]
fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    target: PageKey,
) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="stat-card" on:click=move |_| ctx.navigate(target)>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__value">{move || value.get()}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        </div>
    }
}

/// Home of the private area, one per plan
#[component]
pub fn DashboardHome(plan: Plan) -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session();

    let (data, set_data) = signal(None::<OverviewSummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match load_summary(plan).await {
            Ok(summary) => set_data.set(Some(summary)),
            Err(e) => {
                log::warn!("dashboard summary unavailable: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    let stat = move |f: fn(&OverviewSummary) -> Option<usize>| {
        Signal::derive(move || {
            data.with(|d| {
                d.as_ref()
                    .and_then(f)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string())
            })
        })
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h2>{move || format!("Hola, {}", session.get().user_name)}</h2>
                <span class=format!("plan-badge plan-badge--{}", plan.as_str())>
                    {format!("Plan {}", plan.label())}
                </span>
            </div>

            <ErrorBanner message=error />

            <div class="dashboard__cards">
                <StatCard label="Pacientes" icon_name="patients" value=stat(|s| Some(s.patients)) target=PageKey::Pacientes />
                <StatCard label="Turnos de hoy" icon_name="calendar" value=stat(|s| Some(s.today)) target=PageKey::AgendaMedica />
                <StatCard label="Turnos pendientes" icon_name="calendar" value=stat(|s| Some(s.pending)) target=PageKey::AgendaMedica />
                {(plan == Plan::Pro).then(|| view! {
                    <StatCard label="Recetas emitidas" icon_name="prescription" value=stat(|s| s.prescriptions) target=PageKey::RecetasMedicas />
                })}
            </div>

            <section class="dashboard__upcoming">
                <h3>"Próximos turnos"</h3>
                {move || {
                    if loading.get() {
                        return view! { <p class="muted">"Cargando..."</p> }.into_any();
                    }
                    let upcoming = data.with(|d| d.as_ref().map(|s| s.upcoming.clone()).unwrap_or_default());
                    if upcoming.is_empty() {
                        return view! { <p class="muted">"No hay turnos próximos"</p> }.into_any();
                    }
                    view! {
                        <ul class="upcoming-list">
                            {upcoming
                                .into_iter()
                                .map(|a| view! {
                                    <li>
                                        <span class="upcoming-list__when">
                                            {format!("{} {}", format_date(&a.fecha), a.hora)}
                                        </span>
                                        <span class="upcoming-list__who">{a.paciente.clone()}</span>
                                        <span class=format!("status status--{}", a.estado.as_str())>
                                            {a.estado.label()}
                                        </span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}
