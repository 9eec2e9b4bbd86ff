//! Application root component.

use leptos::prelude::*;

use xray_client::CompanionProvider;
use xray_common::CompanionConfig;

use crate::components::{Footer, Header};
use crate::pages::ExplorerPage;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = CompanionConfig::from_build_env();
    log::info!(
        "Relay at {}, anatomy API at {}",
        config.websocket_url,
        config.api_base_url
    );

    view! {
        <div class="flex min-h-screen flex-col bg-gradient-to-b from-gray-900 to-gray-800 text-white">
            <Header/>
            <CompanionProvider config=config>
                <ExplorerPage/>
            </CompanionProvider>
            <Footer/>
        </div>
    }
}
