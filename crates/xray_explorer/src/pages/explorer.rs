//! The explorer page: status line, waiting banner and the selected part.

use leptos::prelude::*;

use xray_client::{use_status, use_view_state, WaveText};
use xray_common::StatusMessage;

use crate::components::{FingerprintIcon, PartDetails, SelectionIcon};

#[component]
pub fn ExplorerPage() -> impl IntoView {
    let state = use_view_state();
    let status = use_status();

    // Memos so the reveal ticks only re-render the part details.
    let connected = Memo::new(move |_| state.with(|s| s.connected));
    let awaiting_client = Memo::new(move |_| state.with(|s| s.awaiting_client));
    let has_selection = Memo::new(move |_| state.with(|s| s.active_part().is_some()));

    view! {
        <main class="flex-1 container py-12 mx-auto">
            <div class="rounded-lg border bg-gray-800 border-gray-700 shadow-sm">
                <div class="p-6 pt-6">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-bold mb-2 text-white">
                            "Exploración del Esqueleto Humano"
                        </h2>
                        <p class="text-gray-400">
                            "Descubre los secretos del cuerpo humano en realidad virtual"
                        </p>
                    </div>

                    <Show when=move || status.get().is_some()>
                        <div class="text-center mb-4">
                            <p class="text-blue-400 text-lg">
                                {move || status.get().map(StatusMessage::text)}
                            </p>
                        </div>
                    </Show>

                    <Show when=move || awaiting_client.get()>
                        <div class="text-center py-5">
                            <WaveText
                                text="Esperando conexión..."
                                class="text-2xl font-semibold text-blue-400"
                            />
                        </div>
                    </Show>

                    {move || {
                        if !connected.get() {
                            view! {
                                <div class="text-center py-12">
                                    <FingerprintIcon/>
                                </div>
                            }
                                .into_any()
                        } else if has_selection.get() {
                            view! { <PartDetails/> }.into_any()
                        } else {
                            view! { <AwaitingSelection/> }.into_any()
                        }
                    }}
                </div>
            </div>
        </main>
    }
}

/// Shown while connected and nothing is selected in the headset.
#[component]
fn AwaitingSelection() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <SelectionIcon/>
            <h3 class="text-xl font-semibold mb-2">"Esperando selección de parte del cuerpo"</h3>
            <p class="text-gray-400">
                "Interactúa con una parte del cuerpo en el entorno VR para ver su información detallada"
            </p>
        </div>
    }
}
