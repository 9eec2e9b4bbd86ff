//! # X-Ray Explorer client
//!
//! Leptos integration for the VR companion page.
//!
//! [`CompanionProvider`] opens the socket to the headset relay, routes every
//! frame into a [`ViewState`](xray_common::ViewState), fetches part data from
//! the anatomy REST API, and runs the typewriter reveal. Components read the
//! state through the hooks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use xray_client::{CompanionProvider, use_active_part};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <CompanionProvider>
//!             <PartName/>
//!         </CompanionProvider>
//!     }
//! }
//!
//! #[component]
//! fn PartName() -> impl IntoView {
//!     let part = use_active_part();
//!     view! {
//!         <h3>{move || part.get().map(|p| p.reveal.name().visible().to_string())}</h3>
//!     }
//! }
//! ```

mod api;
mod components;
mod context;
mod hooks;
mod provider;

pub use api::HttpPartsApi;
pub use components::{response_text, wave_tokens, QuestionModal, WaveText, WaveToken};
pub use context::{CompanionConnection, CompanionContext};
pub use hooks::{
    use_active_part, use_companion, use_connection, use_reveal_animator, use_status,
    use_view_state,
};
pub use provider::CompanionProvider;

// Re-export ConnectionReadyState for convenience
pub use leptos_use::core::ConnectionReadyState;
