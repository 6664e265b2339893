use leptos::prelude::*;

use crate::system::auth::credentials::{authenticate, DEMO_ACCOUNTS};
use crate::system::router::{use_app_context, PageKey};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match authenticate(&email.get(), &password.get()) {
            Ok(account) => {
                set_error_message.set(None);
                set_password.set(String::new());
                // Switches the whole app to the dashboard
                ctx.login(account.user_name, account.plan);
            }
            Err(e) => {
                log::debug!("login rejected: {:?}", e);
                set_error_message.set(Some(e.message().to_string()));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Dr. Fachero"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="tu@consultorio.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Ingresar"</button>
                </form>

                <div class="login-links">
                    <a href="#recuperacion" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(PageKey::Recuperacion);
                    }>"¿Olvidaste tu contraseña?"</a>
                    <a href="#inicio" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(PageKey::Inicio);
                    }>"Volver al sitio"</a>
                </div>

                <div class="login-info">
                    <p>"Cuentas de demostración:"</p>
                    {DEMO_ACCOUNTS
                        .iter()
                        .map(|a| view! {
                            <p>
                                <strong>{a.plan.label()}</strong>
                                ": " {a.email} " / " {a.password}
                            </p>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
