//! Application Shell - корневой компонент приложения
//!
//! Wires the router into the tree and renders the active page inside the
//! chrome (navbar/footer) that the page calls for.

use crate::layout::registry::{page_view, render_page};
use crate::layout::Shell;
use crate::system::router::chrome::Chrome;
use crate::system::router::use_app_context;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_app_context();

    // hashchange listener + guard/title pass; runs once
    ctx.init_router_integration();

    let page = ctx.page();
    let session = ctx.session();
    let authenticated = ctx.is_authenticated();

    let chrome = Memo::new(move |_| Chrome::for_page(authenticated.get(), page.get()));
    // re-render only when the visible page changes, not on every state write
    let active_view = Memo::new(move |_| session.with(|s| page_view(s, page.get())));

    view! {
        <Shell chrome=chrome>
            {move || {
                let v = active_view.get();
                log::debug!("render {:?}", v);
                render_page(v)
            }}
        </Shell>
    }
}
