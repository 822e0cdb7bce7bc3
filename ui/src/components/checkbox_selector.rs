use leptos::prelude::*;

use crate::types::CatalogEntry;

/// Checkbox list over a catalog; `selected` holds the checked ids and
/// `on_toggle` receives the id of every clicked box
#[component]
pub fn CheckboxSelector(
    title: &'static str,
    #[prop(into)] entries: Signal<Vec<CatalogEntry>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <fieldset class="border border-gray-200 rounded p-3">
            <legend class="text-sm font-medium text-gray-700 px-1">{title}</legend>
            {move || {
                let list = entries.get();
                if list.is_empty() {
                    view! {
                        <p class="text-sm text-gray-400">"None available"</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-2 gap-2">
                            {list.into_iter().map(|entry| {
                                let id = entry.id.clone();
                                let id_for_toggle = entry.id.clone();
                                view! {
                                    <label class="flex items-center space-x-2 text-sm text-gray-800">
                                        <input
                                            type="checkbox"
                                            class="rounded border-gray-300"
                                            prop:checked=move || selected.with(|ids| ids.contains(&id))
                                            on:change=move |_| on_toggle.run(id_for_toggle.clone())
                                        />
                                        <span>{entry.name}</span>
                                    </label>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            }}
        </fieldset>
    }
}
