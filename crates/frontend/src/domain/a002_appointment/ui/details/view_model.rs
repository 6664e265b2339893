use crate::domain::a002_appointment::api;
use crate::shared::date_utils::today_iso;
use crate::shared::form::validation_messages;
use crate::shared::notice::alert;
use contracts::domain::a002_appointment::aggregate::{AppointmentDto, APPOINTMENT_RULES};
use leptos::prelude::*;

/// New appointments only: existing ones change through the status PATCH
#[derive(Clone, Copy)]
pub struct AppointmentDetailsViewModel {
    pub form: RwSignal<AppointmentDto>,
    pub validation_errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
}

impl AppointmentDetailsViewModel {
    pub fn new(day: Option<String>) -> Self {
        let form = AppointmentDto {
            fecha: day.unwrap_or_else(today_iso),
            ..Default::default()
        };
        Self {
            form: RwSignal::new(form),
            validation_errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked().normalized();

        let errors = validation_messages(&current, APPOINTMENT_RULES);
        if !errors.is_empty() {
            self.validation_errors.set(errors);
            return;
        }

        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::create_appointment(&current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("creating appointment failed: {}", e);
                    alert(&format!("No se pudo crear el turno: {}", e));
                }
            }
        });
    }
}
