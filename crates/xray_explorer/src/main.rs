//! X-Ray Explorer VR
//!
//! Companion page for the headset: shows the skeleton region the user points
//! at, revealed character by character, with its main bones.

mod app;
mod components;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| leptos::view! { <app::App/> });
}
