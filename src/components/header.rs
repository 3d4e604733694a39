//! Site Header Component
//!
//! Top navigation. The sign-in / account links follow the session signal,
//! which the storage listener in `App` keeps in step with other tabs.

use leptos::prelude::*;
use petaid_core::{Notice, Route};

use crate::context::use_app;
use crate::store::{store_reload_account_pets, use_app_store};

const NAV_ITEMS: &[Route] = &[
    Route::Home,
    Route::AboutUs,
    Route::Community,
    Route::CareTools,
    Route::ConsultVet,
    Route::PetInsurance,
    Route::ContactUs,
];

#[component]
pub fn NavLink(route: Route, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let app = use_app();
    let label = label.unwrap_or_else(|| route.title().to_string());
    let is_active = move || {
        let current = app.route.get();
        current == route || (route == Route::CareTools && Route::CARE_TOOLS.contains(&current))
    };

    view! {
        <a
            href=route.path()
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
            on:click=move |ev| {
                ev.prevent_default();
                app.navigate(route);
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let sign_out = move |_: leptos::ev::MouseEvent| {
        app.session.update(|s| s.sign_out(&crate::store::BrowserStorage));
        store_reload_account_pets(&store);
        app.notify(Notice::info("Signed Out", "You have been successfully signed out. 👋"));
        set_menu_open.set(false);
        app.navigate(Route::Home);
    };

    view! {
        <header class="site-header">
            <a
                class="brand"
                href="/"
                on:click=move |ev| {
                    ev.prevent_default();
                    app.navigate(Route::Home);
                }
            >
                "🐾 PetAid Hub"
            </a>
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <nav
                class=move || if menu_open.get() { "site-nav open" } else { "site-nav" }
                on:click=move |_| set_menu_open.set(false)
            >
                {NAV_ITEMS.iter().map(|route| view! { <NavLink route=*route /> }).collect_view()}
            </nav>
            <div class="session-links">
                <Show
                    when=move || app.is_authenticated()
                    fallback=|| view! { <NavLink route=Route::SignIn /> }
                >
                    <NavLink route=Route::MyAccount />
                    <button class="btn-outline" on:click=sign_out>"Sign Out"</button>
                </Show>
            </div>
        </header>
    }
}
