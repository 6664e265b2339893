//! Inline banners: persistent errors and short-lived success notices
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_MS: u32 = 3_000;

/// Show `message` in `target` and clear it after a few seconds,
/// unless a newer message replaced it meanwhile.
pub fn flash(target: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    target.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        if target.get_untracked().as_deref() == Some(message.as_str()) {
            target.set(None);
        }
    });
}

/// Browser `alert`, used for backend errors on mutations
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="banner banner--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="banner banner--success" role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
