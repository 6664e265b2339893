use crate::domain::a003_prescription::api;
use crate::shared::date_utils::today_iso;
use crate::shared::form::validation_messages;
use crate::shared::notice::alert;
use contracts::domain::a003_prescription::aggregate::{PrescriptionDto, PRESCRIPTION_RULES};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PrescriptionDetailsViewModel {
    pub form: RwSignal<PrescriptionDto>,
    pub validation_errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
}

impl PrescriptionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PrescriptionDto {
                fecha: today_iso(),
                ..Default::default()
            }),
            validation_errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked().normalized();

        let errors = validation_messages(&current, PRESCRIPTION_RULES);
        if !errors.is_empty() {
            self.validation_errors.set(errors);
            return;
        }

        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::create_prescription(&current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("creating prescription failed: {}", e);
                    alert(&format!("No se pudo emitir la receta: {}", e));
                }
            }
        });
    }
}

impl Default for PrescriptionDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
