//! Sign In / Sign Up Page
//!
//! Demo authentication: sign-in stores a placeholder token, sign-up only
//! checks the form and switches back to sign-in.

use leptos::prelude::*;
use petaid_core::{Credentials, Notice, Route, Session};
use wasm_bindgen::JsCast;

use crate::context::use_app;
use crate::store::BrowserStorage;

/// Read an `<input>`'s current value from its event
fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let app = use_app();
    let (is_sign_up, set_is_sign_up) = signal(false);
    let credentials = RwSignal::new(Credentials::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = credentials.get_untracked();
        if is_sign_up.get_untracked() {
            match Session::sign_up(&form) {
                Ok(()) => {
                    app.notify(Notice::success(
                        "Signup Successful!",
                        "Your account has been created. Please log in. 🎉",
                    ));
                    credentials.update(|c| c.confirm_password.clear());
                    set_is_sign_up.set(false);
                }
                Err(e) => app.notify(Notice::error("Error", e.to_string())),
            }
            return;
        }
        let result = app
            .session
            .try_update(|session| session.sign_in(&BrowserStorage, &form));
        match result {
            Some(Ok(())) => {
                app.notify(Notice::success("Login Successful!", "Welcome back! 🚀"));
                credentials.set(Credentials::default());
                app.navigate(Route::Home);
            }
            Some(Err(e)) => app.notify(Notice::error("Error", e.to_string())),
            None => {}
        }
    };

    let coming_soon = move |feature: &'static str| {
        app.notify(Notice::info(
            "Feature Info",
            format!("{} is not yet implemented. 🚀", feature),
        ))
    };

    view! {
        <section class="page-section auth-page">
            <div class="auth-card">
                <h1>{move || if is_sign_up.get() { "Create Account" } else { "Welcome Back" }}</h1>
                <form class="auth-form" on:submit=submit>
                    <label class="field">
                        <span class="field-label">"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || credentials.with(|c| c.email.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                credentials.update(|c| c.email = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Password"</span>
                        <input
                            type="password"
                            prop:value=move || credentials.with(|c| c.password.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                credentials.update(|c| c.password = value);
                            }
                        />
                    </label>
                    <Show when=move || is_sign_up.get()>
                        <label class="field">
                            <span class="field-label">"Confirm password"</span>
                            <input
                                type="password"
                                prop:value=move || credentials.with(|c| c.confirm_password.clone())
                                on:input=move |ev| {
                                    let value = input_value(&ev);
                                    credentials.update(|c| c.confirm_password = value);
                                }
                            />
                        </label>
                    </Show>
                    <Show when=move || !is_sign_up.get()>
                        <a
                            href="#"
                            class="muted"
                            on:click=move |ev| {
                                ev.prevent_default();
                                coming_soon("Password reset");
                            }
                        >
                            "Forgot your password?"
                        </a>
                    </Show>
                    <button type="submit" class="btn-primary">
                        {move || if is_sign_up.get() { "Sign Up" } else { "Sign In" }}
                    </button>
                </form>
                <button class="btn-outline" on:click=move |_| coming_soon("Social login (Google)")>
                    "Continue with Google"
                </button>
                <p class="auth-switch">
                    {move || if is_sign_up.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_is_sign_up.update(|v| *v = !*v);
                        }
                    >
                        {move || if is_sign_up.get() { "Sign In" } else { "Sign Up" }}
                    </a>
                </p>
            </div>
        </section>
    }
}
