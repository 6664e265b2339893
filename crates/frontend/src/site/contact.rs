use crate::shared::form::{validation_messages, TextAreaField, TextField};
use contracts::shared::validation::{FieldRule, FieldValues, Pattern};
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct ContactForm {
    nombre: String,
    email: String,
    mensaje: String,
}

impl FieldValues for ContactForm {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "nombre" => Some(self.nombre.trim()),
            "email" => Some(self.email.trim()),
            "mensaje" => Some(self.mensaje.trim()),
            _ => None,
        }
    }
}

const CONTACT_RULES: &[FieldRule] = &[
    FieldRule::required("nombre", "Nombre").with_pattern(Pattern::PersonName),
    FieldRule::required("email", "Email").with_pattern(Pattern::Email),
    FieldRule::required("mensaje", "Mensaje"),
];

/// Contact form; the message is only acknowledged locally
#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let messages = form.with_untracked(|f| validation_messages(f, CONTACT_RULES));
        if messages.is_empty() {
            log::info!("contact form accepted");
            errors.set(Vec::new());
            sent.set(true);
        } else {
            errors.set(messages);
        }
    };

    view! {
        <section class="page-section">
            <h1>"Contacto"</h1>
            <Show
                when=move || sent.get()
                fallback=move || view! {
                    <Show when=move || !errors.get().is_empty()>
                        <ul class="error-message">
                            {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    </Show>
                    <form class="contact-form" on:submit=on_submit novalidate>
                        <TextField
                            id="contacto-nombre"
                            label="Nombre"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.nombre.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.nombre = v))
                        />
                        <TextField
                            id="contacto-email"
                            label="Email"
                            input_type="email"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        />
                        <TextAreaField
                            id="contacto-mensaje"
                            label="Mensaje"
                            value=Signal::derive(move || form.with(|f| f.mensaje.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.mensaje = v))
                        />
                        <button type="submit" class="button button--primary">"Enviar"</button>
                    </form>
                }
            >
                <div class="success-message">
                    {move || format!(
                        "¡Gracias, {}! Te responderemos a la brevedad.",
                        form.with(|f| f.nombre.trim().to_string())
                    )}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::validate;

    #[test]
    fn test_contact_rules() {
        let empty = ContactForm::default();
        let fields: Vec<_> = validate(&empty, CONTACT_RULES).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["nombre", "email", "mensaje"]);

        let ok = ContactForm {
            nombre: " Ana Pérez ".into(),
            email: "ana@correo.com".into(),
            mensaje: "Quiero una demo".into(),
        };
        assert!(validate(&ok, CONTACT_RULES).is_empty());

        let bad_email = ContactForm {
            email: "ana@correo".into(),
            ..ok
        };
        assert_eq!(validate(&bad_email, CONTACT_RULES).len(), 1);
    }
}
