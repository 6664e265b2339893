use leptos::prelude::*;

use crate::system::router::{use_app_context, PageKey};
use contracts::shared::validation::{FieldRule, Pattern};

const EMAIL_RULE: FieldRule = FieldRule::required("email", "El correo electrónico").with_pattern(Pattern::Email);

/// Password recovery form. There is no backend for it: a valid address
/// just shows the confirmation.
#[component]
pub fn RecoveryPage() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (sent_to, set_sent_to) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get();
        match EMAIL_RULE.check(&value) {
            Ok(()) => {
                set_error_message.set(None);
                set_sent_to.set(Some(value.trim().to_string()));
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    let back_to_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(PageKey::Login);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Dr. Fachero"</h1>
                <h2>"Recuperar contraseña"</h2>

                <Show
                    when=move || sent_to.get().is_some()
                    fallback=move || view! {
                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>
                        <p>"Ingresá el correo con el que te registraste y te enviaremos un enlace para restablecer tu contraseña."</p>
                        <form on:submit=on_submit novalidate>
                            <div class="form-group">
                                <label for="recovery-email">"Correo electrónico"</label>
                                <input
                                    type="email"
                                    id="recovery-email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn-primary">"Enviar enlace"</button>
                        </form>
                    }
                >
                    <div class="success-message">
                        "Si " <strong>{move || sent_to.get().unwrap_or_default()}</strong>
                        " está registrado, vas a recibir un correo con las instrucciones."
                    </div>
                </Show>

                <div class="login-links">
                    <a href="#login" on:click=back_to_login>"Volver a iniciar sesión"</a>
                </div>
            </div>
        </div>
    }
}
