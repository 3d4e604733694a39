//! Delete Confirm Button Component
//!
//! Two-step removal for list cards: the trash icon arms it, then the user
//! confirms or backs out. Clicks never reach the card underneath.

use leptos::prelude::*;

/// Trash button that asks "Remove <item>?" before running `on_confirm`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Shown in the prompt, e.g. the pet's name
    #[prop(optional, into)]
    item: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let prompt = match item {
        Some(item) => format!("Remove {}?", item),
        None => "Remove?".to_string(),
    };

    let disarm = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        title="Delete"
                        aria-label="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(true);
                        }
                    >
                        "🗑"
                    </button>
                }
            }
        >
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    aria-label="Confirm delete"
                    on:click=move |ev| {
                        disarm(ev);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" aria-label="Keep" on:click=disarm>
                    "No"
                </button>
            </span>
        </Show>
    }
}
