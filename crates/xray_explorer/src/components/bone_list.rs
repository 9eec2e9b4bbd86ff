use leptos::prelude::*;

use xray_common::Bone;

/// "Huesos principales" panel. Shows a loading line while the list is empty.
#[component]
pub fn BoneList(#[prop(into)] bones: Signal<Vec<Bone>>) -> impl IntoView {
    view! {
        <div class="bg-gray-700 p-6 rounded-lg">
            <h4 class="font-semibold text-blue-300 mb-4 text-xl">"Huesos principales:"</h4>
            <ul class="list-disc list-inside text-gray-300 space-y-2">
                {move || {
                    let bones = bones.get();
                    if bones.is_empty() {
                        view! { <li class="text-lg text-gray-400">"Cargando huesos..."</li> }
                            .into_any()
                    } else {
                        bones
                            .into_iter()
                            .map(|bone| {
                                view! {
                                    <li class="text-lg">
                                        <strong>{bone.name}</strong>
                                        ": "
                                        {bone.description}
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>
        </div>
    }
}
