//! Page chrome.

use leptos::prelude::*;

use super::EyeIcon;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 border-b border-gray-700 bg-gray-900/95 backdrop-blur supports-[backdrop-filter]:bg-gray-900/60">
            <div class="container flex h-16 items-center justify-between mx-auto">
                <div class="flex items-center gap-2 font-bold text-xl">
                    <EyeIcon/>
                    <span>"X-Ray Explorer VR"</span>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="border-t border-gray-700 py-6">
            <div class="container flex flex-col md:flex-row items-center justify-between gap-4 mx-auto">
                <p class="text-sm text-gray-400">
                    {format!("© {year} X-Ray Explorer VR. Todos los derechos reservados.")}
                </p>
                <div class="flex items-center gap-4">
                    <GhostButton label="Ayuda"/>
                    <GhostButton label="Privacidad"/>
                    <GhostButton label="Términos"/>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn GhostButton(label: &'static str) -> impl IntoView {
    view! {
        <button class="inline-flex items-center justify-center rounded-md text-sm font-medium h-9 px-3 hover:bg-gray-700 hover:text-white transition-colors">
            {label}
        </button>
    }
}
