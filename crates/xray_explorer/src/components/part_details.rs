use leptos::prelude::*;

use xray_client::use_active_part;

use super::{BoneList, SkeletonIcon};

/// Selected part: typewriter name and description, then its bones.
#[component]
pub fn PartDetails() -> impl IntoView {
    let part = use_active_part();

    let name = move || {
        part.with(|p| {
            p.as_ref()
                .map(|p| p.reveal.name().visible().to_string())
                .unwrap_or_default()
        })
    };
    let description = move || {
        part.with(|p| {
            p.as_ref()
                .map(|p| p.reveal.description().visible().to_string())
                .unwrap_or_default()
        })
    };
    let name_cursor = move || part.with(|p| p.as_ref().is_some_and(|p| p.reveal.name_cursor()));
    let description_cursor =
        move || part.with(|p| p.as_ref().is_some_and(|p| p.reveal.description_cursor()));
    let bones = Signal::derive(move || {
        part.with(|p| p.as_ref().map(|p| p.bones.clone()).unwrap_or_default())
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-center">
                <SkeletonIcon/>
            </div>
            <div class="text-center">
                <h3 class="text-4xl font-bold text-blue-400 mb-4 min-h-[2.5rem]">
                    {name}
                    <Show when=name_cursor>
                        <span class="animate-pulse text-blue-300">"|"</span>
                    </Show>
                </h3>
                <p class="text-gray-300 max-w-2xl mx-auto min-h-[6rem] text-lg">
                    {description}
                    <Show when=description_cursor>
                        <span class="animate-pulse text-blue-300">"|"</span>
                    </Show>
                </p>
            </div>
            <BoneList bones=bones/>
        </div>
    }
}
