use super::view_model::PatientDetailsViewModel;
use crate::shared::form::TextField;
use crate::shared::icons::icon;
use crate::shared::modal::{Modal, ValidationModal};
use contracts::domain::a001_patient::aggregate::Patient;
use leptos::prelude::*;

#[component]
pub fn PatientDetails(
    existing: Option<Patient>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PatientDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let title = if vm.is_edit_mode() {
        "Editar paciente"
    } else {
        "Nuevo paciente"
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <form
                class="details-form"
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <div class="form-row">
                    <TextField
                        id="nombre"
                        label="Nombre"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.nombre.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.nombre = v))
                    />
                    <TextField
                        id="apellido"
                        label="Apellido"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.apellido.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.apellido = v))
                    />
                </div>
                <div class="form-row">
                    <TextField
                        id="dni"
                        label="DNI"
                        required=true
                        placeholder="Sin puntos, 7 u 8 dígitos"
                        value=Signal::derive(move || form.with(|f| f.dni.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.dni = v))
                    />
                    <TextField
                        id="telefono"
                        label="Teléfono"
                        required=true
                        input_type="tel"
                        placeholder="+54 11 4555-1234"
                        value=Signal::derive(move || form.with(|f| f.telefono.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.telefono = v))
                    />
                </div>
                <div class="form-row">
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = Some(v)))
                    />
                    <TextField
                        id="fecha_nacimiento"
                        label="Fecha de nacimiento"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.fecha_nacimiento.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| form.update(|f| f.fecha_nacimiento = Some(v)))
                    />
                </div>
                <TextField
                    id="obra_social"
                    label="Obra social"
                    placeholder="Particular si no tiene"
                    value=Signal::derive(move || form.with(|f| f.obra_social.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.obra_social = Some(v)))
                />

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        {icon("save")}
                        {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
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
