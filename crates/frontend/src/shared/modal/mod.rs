pub mod stack;

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
pub use stack::{use_modal_stack, ModalStackService};

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let stack = use_modal_stack();
    let id = stack.push();

    // Escape closes the topmost modal only; the event stops there
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && stack.is_top(id) {
            event.stop_immediate_propagation();
            on_close.run(());
        }
    });
    on_cleanup(move || {
        handle.remove();
        stack.remove(id);
    });

    // Clicks inside the dialog must not reach the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-message">{message}</p>
            <div class="details-actions">
                <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                    {icon("trash")} "Eliminar"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </Modal>
    }
}

/// One line per failing field, in the order given
#[component]
pub fn ValidationModal(errors: Vec<String>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Revisá los datos del formulario" on_close=on_close>
            <ul class="validation-errors">
                {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
            <div class="details-actions">
                <button class="btn btn-primary" on:click=move |_| on_close.run(())>"Entendido"</button>
            </div>
        </Modal>
    }
}
