use crate::app_shell::AppShell;
use crate::shared::modal::ModalStackService;
use crate::system::router::AppContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session + active page for the whole app
    provide_context(AppContext::new());
    // Open modals, for Escape handling
    provide_context(ModalStackService::new());

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
