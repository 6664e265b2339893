use super::view_model::AppointmentDetailsViewModel;
use crate::shared::form::TextField;
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ValidationModal};
use contracts::domain::a002_appointment::aggregate::AppointmentStatus;
use leptos::prelude::*;

#[component]
pub fn AppointmentDetails(
    /// Prefilled date, usually the day selected in the calendar
    day: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AppointmentDetailsViewModel::new(day);
    let form = vm.form;

    view! {
        <Modal title="Nuevo turno" on_close=on_cancel>
            <form
                class="details-form"
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <TextField
                    id="paciente"
                    label="Paciente"
                    required=true
                    placeholder="Nombre y apellido"
                    value=Signal::derive(move || form.with(|f| f.paciente.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.paciente = v))
                />
                <div class="form-row">
                    <TextField
                        id="fecha"
                        label="Fecha"
                        required=true
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.fecha.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.fecha = v))
                    />
                    <TextField
                        id="hora"
                        label="Hora"
                        required=true
                        input_type="time"
                        value=Signal::derive(move || form.with(|f| f.hora.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.hora = v))
                    />
                </div>
                <TextField
                    id="motivo"
                    label="Motivo de la consulta"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.motivo.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.motivo = v))
                />
                <div class="form-group">
                    <label for="estado">"Estado"</label>
                    <select
                        id="estado"
                        on:change=move |ev| {
                            if let Some(estado) = AppointmentStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.estado = estado);
                            }
                        }
                    >
                        {AppointmentStatus::ALL
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.as_str() selected=move || form.with(|f| f.estado == s)>
                                    {s.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        {icon("save")}
                        {move || if vm.saving.get() { "Guardando..." } else { "Crear turno" }}
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </Modal>

        <Show when=move || !vm.validation_errors.get().is_empty()>
            <ValidationModal
                errors=vm.validation_errors.get()
                on_close=Callback::new(move |_| vm.validation_errors.set(Vec::new()))
            />
        </Show>
    }
}
