//! Public marketing site

pub mod blog;
pub mod contact;
pub mod features;
pub mod home;
pub mod plans;
pub mod why_us;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use plans::PlansPage;
pub use why_us::WhyUsPage;

use crate::system::router::{use_app_context, PageKey};
use leptos::prelude::*;

/// In-app link: keeps the `href` for new tabs, navigates through the router on click
#[component]
pub fn PageLink(
    to: PageKey,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <a
            href=to.hash()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
