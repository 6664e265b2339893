use crate::domain::a001_patient::api;
use crate::shared::form::validation_messages;
use crate::shared::notice::alert;
use contracts::domain::a001_patient::aggregate::{Patient, PatientDto, PATIENT_RULES};
use leptos::prelude::*;

/// ViewModel for the patient create/edit form
#[derive(Clone, Copy)]
pub struct PatientDetailsViewModel {
    pub form: RwSignal<PatientDto>,
    /// Non-empty while the validation modal is open
    pub validation_errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
}

impl PatientDetailsViewModel {
    pub fn new(existing: Option<&Patient>) -> Self {
        Self {
            form: RwSignal::new(existing.map(PatientDto::from).unwrap_or_default()),
            validation_errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Validate, then POST (new) or PUT (existing)
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked().normalized();

        let errors = validation_messages(&current, PATIENT_RULES);
        if !errors.is_empty() {
            self.validation_errors.set(errors);
            return;
        }

        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_patient(id, &current).await,
                None => api::create_patient(&current).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("saving patient failed: {}", e);
                    alert(&format!("No se pudo guardar el paciente: {}", e));
                }
            }
        });
    }
}
