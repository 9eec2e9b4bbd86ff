use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::core::ConnectionReadyState;
use leptos_use::UseWebSocketError;

use xray_common::{
    resolve_part, BodyPart, CompanionConfig, OculusMessage, PartsApi, Route, SelectOutcome,
    ViewState,
};

use crate::api::HttpPartsApi;

/// Connection control interface exposed to components.
#[derive(Clone)]
pub struct CompanionConnection {
    /// Current socket state as reported by the browser
    pub ready_state: Signal<ConnectionReadyState>,
    /// Close the socket to the relay
    pub close: Arc<dyn Fn() + Send + Sync>,
}

/// Context provided by [`CompanionProvider`](crate::CompanionProvider).
///
/// Owns the page's [`ViewState`] and routes relay frames into it. Components
/// read the state through the hooks in this crate.
#[derive(Clone)]
pub struct CompanionContext {
    /// Everything the explorer page renders
    pub state: RwSignal<ViewState>,
    /// Current socket state
    pub ready_state: Signal<ConnectionReadyState>,
    config: Arc<CompanionConfig>,
    api: Arc<dyn PartsApi + Send + Sync>,
    close: Arc<dyn Fn() + Send + Sync>,
}

impl CompanionContext {
    /// Create a new CompanionContext.
    ///
    /// This is typically called by `CompanionProvider`, not by user code.
    /// Part data comes from [`HttpPartsApi`] at the configured base URL.
    pub fn new(
        state: RwSignal<ViewState>,
        ready_state: Signal<ConnectionReadyState>,
        config: Arc<CompanionConfig>,
        close: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        let api = Arc::new(HttpPartsApi::new(config.api_base_url.clone()));
        Self {
            state,
            ready_state,
            config,
            api,
            close,
        }
    }

    /// Resolve parts through `api` instead of the HTTP client.
    pub fn with_api(mut self, api: Arc<dyn PartsApi + Send + Sync>) -> Self {
        self.api = api;
        self
    }

    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    pub fn connection(&self) -> CompanionConnection {
        CompanionConnection {
            ready_state: self.ready_state,
            close: self.close.clone(),
        }
    }

    /// Route one decoded frame. `Set` frames trigger a REST lookup whose result
    /// lands in the state when it arrives.
    ///
    /// Subscribers are only notified when the frame changed the state.
    pub fn handle_message(&self, message: &OculusMessage) {
        match self.state.try_update_untracked(|state| state.route(message)) {
            Some(Route::Resolve(part)) => self.resolve(part),
            Some(Route::Applied) => self.state.notify(),
            Some(Route::UnknownPart(_)) | Some(Route::Ignored) => {}
            None => log::warn!("Dropping frame received after teardown: {}", message),
        }
    }

    fn resolve(&self, part: BodyPart) {
        let state = self.state;
        let api = self.api.clone();

        spawn_local(async move {
            let Some(data) = resolve_part(api.as_ref(), part.display_name()).await else {
                return;
            };
            let name = data.name.clone();
            match state.try_update(|state| state.apply_part(data)) {
                Some(SelectOutcome::Selected) => log::info!("Selected {}", name),
                Some(SelectOutcome::Retargeted) => log::info!("Switched to {}", name),
                Some(SelectOutcome::Refreshed) => log::debug!("Refreshed bones of {}", name),
                None => {}
            }
        });
    }

    pub(crate) fn on_socket_open(&self) {
        self.state.update(ViewState::on_socket_open);
    }

    pub(crate) fn on_socket_close(&self) {
        let config = self.config.clone();
        self.state.update(|state| state.on_socket_close(&config));
    }

    /// Only error events from the socket itself reach the status line.
    /// Frames the codec rejects are logged and otherwise ignored.
    pub fn on_socket_error<E, D>(&self, error: &UseWebSocketError<E, D>)
    where
        E: std::fmt::Display,
        D: std::fmt::Display,
    {
        match error {
            UseWebSocketError::Event(_) => {
                log::error!("WebSocket connection error");
                self.state.update(ViewState::on_socket_error);
            }
            UseWebSocketError::Codec(e) => log::warn!("Discarding frame: {}", e),
            UseWebSocketError::HeartbeatCodec(e) => log::warn!("Heartbeat codec error: {}", e),
        }
    }
}
