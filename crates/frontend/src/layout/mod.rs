pub mod footer;
pub mod header;
pub mod left;
pub mod registry;

use crate::system::router::chrome::Chrome;
use footer::Footer;
use header::Navbar;
use leptos::prelude::*;

/// Outer frame of every page.
///
/// ```text
/// +------------------------------------------+
/// |        Navbar (public pages only)        |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |        Footer (public pages only)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] chrome: Signal<Chrome>, children: Children) -> impl IntoView {
    view! {
        <Show when=move || chrome.get().show_navbar>
            <Navbar />
        </Show>
        <main class=move || chrome.get().container_class()>
            {children()}
        </main>
        <Show when=move || chrome.get().show_footer>
            <Footer />
        </Show>
    }
}

/// Private area: sidebar + module content
#[component]
pub fn PrivateLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Sidebar />
            <div class="app-main">{children()}</div>
        </div>
    }
}
