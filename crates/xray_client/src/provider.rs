use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::core::ConnectionReadyState;
use leptos_use::{
    use_websocket_with_options, DummyEncoder, ReconnectLimit, UseWebSocketOptions,
    UseWebSocketReturn,
};

use xray_common::codec::OculusTextCodec;
use xray_common::{CompanionConfig, OculusMessage, PartsApi, ViewState};

use crate::context::CompanionContext;
use crate::hooks::use_reveal_animator;

/// Provider component that connects to the headset relay and provides
/// [`CompanionContext`].
///
/// Exactly one socket is opened per mount. It is closed when the provider is
/// torn down, and it is not reopened unless `reconnect_limit` says so.
///
/// # Example
///
/// ```rust,ignore
/// use xray_client::CompanionProvider;
/// use xray_common::CompanionConfig;
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <CompanionProvider config=CompanionConfig::from_build_env()>
///             <ExplorerPage />
///         </CompanionProvider>
///     }
/// }
/// ```
#[component]
pub fn CompanionProvider(
    /// Endpoints and behaviour; defaults to [`CompanionConfig::from_build_env`]
    #[prop(optional)]
    config: Option<CompanionConfig>,
    /// Source of part data; defaults to the HTTP API at `config.api_base_url`
    #[prop(optional)]
    api: Option<Arc<dyn PartsApi + Send + Sync>>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let config = Arc::new(config.unwrap_or_else(CompanionConfig::from_build_env));
    if let Err(e) = config.validate() {
        log::error!("Invalid companion configuration: {}", e);
    }

    let state = RwSignal::new(ViewState::new());

    // The socket's send/close functions only exist after use_websocket returns,
    // but the callbacks below are built before that.
    let send_fn: StoredValue<Option<Arc<dyn Fn(&String) + Send + Sync>>> = StoredValue::new(None);
    let close_fn: StoredValue<Option<Arc<dyn Fn() + Send + Sync>>> = StoredValue::new(None);

    let close_arc = Arc::new(move || {
        if let Some(close) = close_fn.get_value() {
            close();
        }
    });

    let ready_state_signal = RwSignal::new(ConnectionReadyState::Closed);

    let mut ctx = CompanionContext::new(state, ready_state_signal.into(), config.clone(), close_arc);
    if let Some(api) = api {
        ctx = ctx.with_api(api);
    }
    provide_context(ctx.clone());

    let handshake = config.handshake.clone();
    let ctx_for_open = ctx.clone();
    let ctx_for_message = ctx.clone();
    let ctx_for_close = ctx.clone();
    let ctx_for_error = ctx.clone();

    let UseWebSocketReturn {
        ready_state,
        send,
        close,
        ..
    } = use_websocket_with_options::<String, OculusMessage, OculusTextCodec, (), DummyEncoder>(
        &config.websocket_url,
        UseWebSocketOptions::default()
            .reconnect_limit(ReconnectLimit::Limited(config.reconnect_limit))
            .on_open(move |_| {
                log::info!("WebSocket connection established");
                ctx_for_open.on_socket_open();
                match send_fn.get_value() {
                    Some(send) => send(&handshake),
                    None => log::warn!("Socket opened before the send function was stored"),
                }
            })
            .on_message_raw(|text: &str| {
                log::debug!("Message from relay: {}", text);
            })
            .on_message(move |message: &OculusMessage| {
                ctx_for_message.handle_message(message);
            })
            .on_close(move |_| {
                log::info!("WebSocket connection closed");
                ctx_for_close.on_socket_close();
            })
            .on_error(move |e| {
                ctx_for_error.on_socket_error(&e);
            }),
    );

    send_fn.set_value(Some(Arc::new(move |text: &String| {
        send(text);
    })));
    close_fn.set_value(Some(Arc::new(move || {
        close();
    })));

    Effect::new(move || {
        ready_state_signal.set(ready_state.get());
    });

    on_cleanup(move || {
        if let Some(close) = close_fn.try_get_value().flatten() {
            close();
        }
    });

    use_reveal_animator(state, config.timing.clone());

    children()
}
