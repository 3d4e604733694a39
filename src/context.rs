//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route, the
//! session and the notice queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use petaid_core::domain::Record;
use petaid_core::{AppConfig, DomainResult, Notice, Route, Session, Submitted};

use crate::store::BrowserStorage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown
    pub route: RwSignal<Route>,
    /// Demo sign-in state, created once at startup
    pub session: RwSignal<Session>,
    /// Visible notices with their ids, oldest first
    pub notices: RwSignal<Vec<(u32, Notice)>>,
    next_notice: StoredValue<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            route: RwSignal::new(current_route()),
            session: RwSignal::new(Session::init(&BrowserStorage)),
            notices: RwSignal::new(Vec::new()),
            next_notice: StoredValue::new(0),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(route.path()),
            ) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
        log::debug!("Navigate to {}", route.path());
        self.route.set(route);
    }

    /// Follow a back/forward navigation
    pub fn sync_route(&self) {
        self.route.set(current_route());
    }

    /// Show a notice; it dismisses itself after the configured timeout
    pub fn notify(&self, notice: Notice) {
        let id = self.next_notice.get_value();
        self.next_notice.set_value(id.wrapping_add(1));
        self.notices.update(|list| list.push((id, notice)));

        let notices = self.notices;
        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            notices.update(|list| list.retain(|(other, _)| *other != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|list| list.retain(|(other, _)| *other != id));
    }

    /// Notice for an editor submit. `None` means the editor signal was gone.
    pub fn report_submit<R: Record>(&self, result: Option<DomainResult<Submitted<R>>>) {
        match result {
            Some(Ok(submitted)) => self.notify(Notice::saved(&submitted)),
            Some(Err(e)) => {
                log::warn!("{} not saved: {}", R::KIND, e);
                self.notify(Notice::from_error(&e));
            }
            None => {}
        }
    }

    /// Re-read the auth token after another tab changed storage
    pub fn refresh_auth(&self) {
        self.session.update(|session| {
            if session.refresh_auth(&BrowserStorage) {
                log::info!("Auth state changed in another tab");
            }
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}
