//! Notice Bar Component
//!
//! Stack of transient notices in the corner. Timed removal happens in
//! `AppContext::notify`; the × button dismisses early.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || app.notices.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=format!("notice {}", notice.level.css_class())>
                            <div class="notice-body">
                                <strong class="notice-title">{notice.title.clone()}</strong>
                                <p class="notice-description">{notice.description.clone()}</p>
                            </div>
                            <button class="notice-close" on:click=move |_| app.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
