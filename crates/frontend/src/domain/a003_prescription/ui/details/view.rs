use super::view_model::PrescriptionDetailsViewModel;
use crate::shared::form::{TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ValidationModal};
use leptos::prelude::*;

#[component]
pub fn PrescriptionDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = PrescriptionDetailsViewModel::new();
    let form = vm.form;

    view! {
        <Modal title="Nueva receta" on_close=on_cancel>
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
                        id="medicamento"
                        label="Medicamento"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.medicamento.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.medicamento = v))
                    />
                    <TextField
                        id="dosis"
                        label="Dosis"
                        required=true
                        placeholder="Ej: 1 comprimido cada 8 horas"
                        value=Signal::derive(move || form.with(|f| f.dosis.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.dosis = v))
                    />
                </div>
                <TextField
                    id="fecha"
                    label="Fecha"
                    required=true
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.fecha.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.fecha = v))
                />
                <TextAreaField
                    id="indicaciones"
                    label="Indicaciones"
                    value=Signal::derive(move || form.with(|f| f.indicaciones.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.indicaciones = Some(v)))
                />

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        {icon("save")}
                        {move || if vm.saving.get() { "Guardando..." } else { "Emitir receta" }}
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
