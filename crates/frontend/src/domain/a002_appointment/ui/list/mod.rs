use crate::domain::a002_appointment::api;
use crate::domain::a002_appointment::ui::calendar::AgendaCalendar;
use crate::domain::a002_appointment::ui::details::AppointmentDetails;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Searchable};
use crate::shared::modal::ConfirmModal;
use crate::shared::notice::{alert, flash, ErrorBanner, SuccessBanner};
use contracts::domain::a002_appointment::aggregate::{Appointment, AppointmentStatus};
use leptos::prelude::*;
use thaw::*;

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.paciente.as_str(), self.motivo.as_str()]
    }
}

/// Rows shown in the agenda table: search + optional day, ordered by date and time
fn visible_appointments(items: &[Appointment], filter: &str, day: Option<&str>) -> Vec<Appointment> {
    let mut rows: Vec<Appointment> = items
        .iter()
        .filter(|a| day.map_or(true, |d| a.fecha == d))
        .filter(|a| a.matches_filter(filter))
        .cloned()
        .collect();
    rows.sort_by(|a, b| (a.fecha.as_str(), a.hora.as_str()).cmp(&(b.fecha.as_str(), b.hora.as_str())));
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn AppointmentList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Appointment>::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let filter = RwSignal::new(String::new());
    let selected_day = RwSignal::new(Option::<String>::None);
    let creating = RwSignal::new(false);
    let pending_delete = RwSignal::new(Option::<Appointment>::None);
    let loading = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_appointments().await {
                Ok(v) => {
                    log::debug!("loaded {} appointments", v.len());
                    items.set(v);
                    error.set(None);
                }
                Err(e) => {
                    items.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let visible = move || {
        let day = selected_day.get();
        items.with(|all| visible_appointments(all, &filter.get(), day.as_deref()))
    };

    let change_status = move |appointment: Appointment, estado: AppointmentStatus| {
        if appointment.estado == estado {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(&appointment.id, estado).await {
                Ok(()) => {
                    flash(
                        notice,
                        format!("Turno de {} marcado como {}", appointment.paciente, estado),
                    );
                    fetch();
                }
                Err(e) => {
                    alert(&format!("No se pudo actualizar el turno: {}", e));
                    // вернуть select к прежнему значению
                    fetch();
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        creating.set(false);
        flash(notice, "Turno creado");
        fetch();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(appointment) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_appointment(&appointment.id).await {
                Ok(()) => {
                    flash(notice, "Turno eliminado");
                    fetch();
                }
                Err(e) => alert(&format!("No se pudo eliminar el turno: {}", e)),
            }
        });
    });

    view! {
        <div class="module-page">
            <div class="module-header">
                <h2>"Agenda Médica"</h2>
                <Space>
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| filter.set(v))
                        placeholder="Buscar por paciente o motivo"
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")} " Nuevo turno"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| fetch()>
                        {icon("refresh")}
                    </Button>
                </Space>
            </div>

            <ErrorBanner message=error />
            <SuccessBanner message=notice />

            <div class="agenda">
                <AgendaCalendar appointments=items selected_day=selected_day />

                <div class="agenda__table">
                    {move || selected_day.get().map(|day| view! {
                        <div class="agenda__day-filter">
                            "Turnos del " {format_date(&day)}
                            <button class="button button--link" on:click=move |_| selected_day.set(None)>
                                "Ver todos"
                            </button>
                        </div>
                    })}
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Hora"</TableHeaderCell>
                                <TableHeaderCell>"Paciente"</TableHeaderCell>
                                <TableHeaderCell>"Motivo"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = visible();
                                if rows.is_empty() {
                                    let text = if loading.get() { "Cargando..." } else { "No hay turnos para mostrar" };
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6" class="table__empty">{text}</TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|a| {
                                        let current = a.estado;
                                        let for_status = a.clone();
                                        let for_delete = a.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{format_date(&a.fecha)}</TableCell>
                                                <TableCell>{a.hora.clone()}</TableCell>
                                                <TableCell>{a.paciente.clone()}</TableCell>
                                                <TableCell>{a.motivo.clone()}</TableCell>
                                                <TableCell>
                                                    <select
                                                        class=format!("status-select status-select--{}", current.as_str())
                                                        on:change=move |ev| {
                                                            if let Some(estado) = AppointmentStatus::parse(&event_target_value(&ev)) {
                                                                change_status(for_status.clone(), estado);
                                                            }
                                                        }
                                                    >
                                                        {AppointmentStatus::ALL
                                                            .into_iter()
                                                            .map(|s| view! {
                                                                <option value=s.as_str() selected=s == current>{s.label()}</option>
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || creating.get()>
                <AppointmentDetails
                    day=selected_day.get_untracked()
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| creating.set(false))
                />
            </Show>

            {move || pending_delete.get().map(|a| view! {
                <ConfirmModal
                    title="Eliminar turno"
                    message=format!(
                        "¿Eliminar el turno de {} del {} a las {}?",
                        a.paciente,
                        format_date(&a.fecha),
                        a.hora,
                    )
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;

    fn appt(id: i64, paciente: &str, fecha: &str, hora: &str, motivo: &str) -> Appointment {
        Appointment {
            id: RecordId::Number(id),
            paciente: paciente.into(),
            fecha: fecha.into(),
            hora: hora.into(),
            motivo: motivo.into(),
            estado: AppointmentStatus::Pendiente,
        }
    }

    #[test]
    fn test_visible_appointments_filters_and_sorts() {
        let items = vec![
            appt(1, "Ana Pérez", "2024-06-04", "09:30", "Control"),
            appt(2, "Luis Gómez", "2024-06-03", "11:00", "Dolor de cabeza"),
            appt(3, "Ana Pérez", "2024-06-03", "08:15", "Resultados"),
        ];

        let all = visible_appointments(&items, "", None);
        let ids: Vec<_> = all.iter().map(|a| a.id.as_string()).collect();
        assert_eq!(ids, ["3", "2", "1"]);

        let day = visible_appointments(&items, "", Some("2024-06-03"));
        assert_eq!(day.len(), 2);

        let ana = visible_appointments(&items, "ana", Some("2024-06-03"));
        assert_eq!(ana.len(), 1);
        assert_eq!(ana[0].motivo, "Resultados");

        assert_eq!(visible_appointments(&items, "CABEZA", None).len(), 1);
    }
}
