//! Monthly agenda calendar

pub mod grid;

use crate::shared::icons::icon;
use contracts::domain::a002_appointment::aggregate::{Appointment, AppointmentStatus};
use grid::{month_grid, YearMonth, WEEKDAY_LABELS};
use leptos::prelude::*;
use std::collections::HashMap;

/// Active (not cancelled) appointments per ISO day
fn counts_by_day(appointments: &[Appointment]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for a in appointments
        .iter()
        .filter(|a| a.estado != AppointmentStatus::Cancelado)
    {
        *counts.entry(a.fecha.clone()).or_insert(0) += 1;
    }
    counts
}

#[component]
pub fn AgendaCalendar(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    /// Day filter (`YYYY-MM-DD`); clicking a selected day clears it
    selected_day: RwSignal<Option<String>>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let today_iso = today.format("%Y-%m-%d").to_string();
    let month = RwSignal::new(YearMonth::of(today));
    let counts = Memo::new(move |_| appointments.with(|a| counts_by_day(a)));

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button class="button button--icon" on:click=move |_| month.update(|m| *m = m.prev())>
                    {icon("chevron-left")}
                </button>
                <span class="calendar__title">{move || month.get().label()}</span>
                <button class="button button--icon" on:click=move |_| month.update(|m| *m = m.next())>
                    {icon("chevron-right")}
                </button>
            </div>
            <div class="calendar__grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|d| view! { <div class="calendar__weekday">{*d}</div> })
                    .collect_view()}
                {move || {
                    let m = month.get();
                    let today_iso = today_iso.clone();
                    month_grid(m)
                        .into_iter()
                        .flatten()
                        .map(|cell| match cell {
                            None => view! { <div class="calendar__cell calendar__cell--empty"></div> }.into_any(),
                            Some(day) => {
                                let iso = m.iso_day(day);
                                let count = counts.with(|c| c.get(&iso).copied().unwrap_or(0));
                                let is_today = iso == today_iso;
                                let iso_for_class = iso.clone();
                                let is_selected = move || selected_day.get().as_deref() == Some(iso_for_class.as_str());
                                view! {
                                    <div
                                        class="calendar__cell"
                                        class:calendar__cell--today=is_today
                                        class:calendar__cell--busy={count > 0}
                                        class:calendar__cell--selected=is_selected
                                        on:click=move |_| {
                                            let iso = iso.clone();
                                            selected_day.update(|s| {
                                                *s = if s.as_deref() == Some(iso.as_str()) { None } else { Some(iso) };
                                            });
                                        }
                                    >
                                        <span class="calendar__day">{day}</span>
                                        {(count > 0).then(|| view! { <span class="calendar__badge">{count}</span> })}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;

    fn appt(id: i64, fecha: &str, estado: AppointmentStatus) -> Appointment {
        Appointment {
            id: RecordId::Number(id),
            paciente: "Ana Pérez".into(),
            fecha: fecha.into(),
            hora: "10:00".into(),
            motivo: "Control".into(),
            estado,
        }
    }

    #[test]
    fn test_cancelled_appointments_are_not_counted() {
        let counts = counts_by_day(&[
            appt(1, "2024-06-03", AppointmentStatus::Pendiente),
            appt(2, "2024-06-03", AppointmentStatus::Confirmado),
            appt(3, "2024-06-04", AppointmentStatus::Cancelado),
        ]);
        assert_eq!(counts.get("2024-06-03"), Some(&2));
        assert_eq!(counts.get("2024-06-04"), None);
    }
}
