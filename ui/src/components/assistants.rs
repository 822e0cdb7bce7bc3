//! Virtual assistant management page
//!
//! Loads models, knowledge bases, MCP servers and the assistant list on
//! mount. The form creates a new assistant or, after "Edit", updates the
//! selected one; every successful save or delete reloads the list.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::actions::{self, Resource, DELETE_FAILED_MESSAGE, SAVE_FAILED_MESSAGE};
use crate::api::HttpAssistantApi;
use crate::components::checkbox_selector::CheckboxSelector;
use crate::form::{AssistantForm, GenerationParameter};
use crate::types::{CatalogEntry, ModelRef, VirtualAssistant};

/// Log the detail and block on an alert with the user-facing message
fn report_failure(message: &str, detail: &str) {
    log::error!("{}: {}", message, detail);
    web_sys::window().and_then(|w| w.alert_with_message(message).ok());
}

#[component]
pub fn VirtualAssistants() -> impl IntoView {
    let form = RwSignal::new(AssistantForm::new());
    let (models, set_models) = signal(Vec::<ModelRef>::new());
    let (knowledge_bases, set_knowledge_bases) = signal(Vec::<CatalogEntry>::new());
    let (mcp_servers, set_mcp_servers) = signal(Vec::<CatalogEntry>::new());
    let (assistants, set_assistants) = signal(Vec::<VirtualAssistant>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let apply_list = move |result: Result<Vec<VirtualAssistant>, String>| match result {
        Ok(list) => set_assistants.set(list),
        Err(e) => report_failure(&Resource::Assistants.load_failure_message(), &e),
    };

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let data = actions::load_reference_data(&HttpAssistantApi).await;
            for (resource, e) in data.failures() {
                report_failure(&resource.load_failure_message(), &e);
            }
            if let Ok(list) = data.models {
                set_models.set(list);
            }
            if let Ok(list) = data.knowledge_bases {
                set_knowledge_bases.set(list);
            }
            if let Ok(list) = data.mcp_servers {
                set_mcp_servers.set(list);
            }
        });

        spawn_local(async move {
            apply_list(actions::reload_assistants(&HttpAssistantApi).await);
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked().record;
        set_saving.set(true);
        spawn_local(async move {
            match actions::submit_assistant(&HttpAssistantApi, &draft).await {
                Ok(refreshed) => {
                    form.update(|f| f.reset());
                    apply_list(refreshed.assistants);
                }
                Err(e) => report_failure(SAVE_FAILED_MESSAGE, &e),
            }
            set_saving.set(false);
        });
    };

    let on_edit = Callback::new(move |assistant: VirtualAssistant| {
        form.update(|f| f.edit(&assistant));
    });

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match actions::delete_assistant(&HttpAssistantApi, &id).await {
                Ok(refreshed) => apply_list(refreshed.assistants),
                Err(e) => report_failure(DELETE_FAILED_MESSAGE, &e),
            }
        });
    });

    let toggle_knowledge_base = Callback::new(move |id: String| {
        form.update(|f| f.toggle_knowledge_base(&id));
    });

    let toggle_mcp_server = Callback::new(move |id: String| {
        form.update(|f| f.toggle_mcp_server(&id));
    });

    let selected_knowledge_bases =
        Signal::derive(move || form.with(|f| f.record.knowledge_base_ids.clone()));
    let selected_mcp_servers =
        Signal::derive(move || form.with(|f| f.record.mcp_server_ids.clone()));

    view! {
        <div class="p-6 space-y-6">
            <h2 class="text-2xl font-bold">"Virtual Assistants"</h2>

            <form class="bg-white rounded-lg shadow p-6 space-y-4" on:submit=on_submit>
                <h3 class="text-lg font-semibold">
                    {move || if form.with(|f| f.is_editing()) { "Edit Assistant" } else { "New Assistant" }}
                </h3>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Name"</label>
                    <input
                        type="text"
                        class="w-full border border-gray-300 rounded px-3 py-2"
                        prop:value=move || form.with(|f| f.record.name.clone())
                        on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Prompt"</label>
                    <textarea
                        class="w-full border border-gray-300 rounded px-3 py-2 h-32"
                        prop:value=move || form.with(|f| f.record.prompt.clone())
                        on:input=move |ev| form.update(|f| f.set_prompt(event_target_value(&ev)))
                    ></textarea>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Model"</label>
                    <select
                        class="w-full border border-gray-300 rounded px-3 py-2"
                        on:change=move |ev| form.update(|f| f.set_model_name(event_target_value(&ev)))
                    >
                        <option value="" prop:selected=move || form.with(|f| f.record.model_name.is_empty())>
                            "Select a model"
                        </option>
                        {move || models.get().into_iter().map(|model| {
                            let id = model.id.clone();
                            view! {
                                <option
                                    value=model.id.clone()
                                    prop:selected=move || form.with(|f| f.record.model_name == id)
                                >
                                    {model.name}
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <CheckboxSelector
                    title="Knowledge Bases"
                    entries=knowledge_bases
                    selected=selected_knowledge_bases
                    on_toggle=toggle_knowledge_base
                />

                <CheckboxSelector
                    title="MCP Servers"
                    entries=mcp_servers
                    selected=selected_mcp_servers
                    on_toggle=toggle_mcp_server
                />

                <fieldset class="border border-gray-200 rounded p-3">
                    <legend class="text-sm font-medium text-gray-700 px-1">"Generation Settings"</legend>
                    <div class="grid grid-cols-2 gap-4">
                        {GenerationParameter::ALL.into_iter().map(|parameter| view! {
                            <div>
                                <label class="block text-sm text-gray-700 mb-1">{parameter.label()}</label>
                                <input
                                    type="number"
                                    step=parameter.step()
                                    placeholder="Backend default"
                                    class="w-full border border-gray-300 rounded px-3 py-2"
                                    prop:value=move || form.with(|f| f.parameter_text(parameter))
                                    on:change=move |ev| {
                                        let raw = event_target_value(&ev);
                                        let mut outcome = Ok(());
                                        form.update(|f| outcome = f.set_parameter(parameter, &raw));
                                        if let Err(e) = outcome {
                                            report_failure(&e, &raw);
                                        }
                                    }
                                />
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </fieldset>

                <div class="flex justify-end space-x-2">
                    {move || form.with(|f| f.is_editing()).then(|| view! {
                        <button
                            type="button"
                            class="px-4 py-2 text-sm bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                            on:click=move |_| form.update(|f| f.reset())
                        >
                            "Cancel"
                        </button>
                    })}
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || saving.get()
                    >
                        {move || if form.with(|f| f.is_editing()) { "Update Assistant" } else { "Create Assistant" }}
                    </button>
                </div>
            </form>

            <div class="space-y-4">
                {move || {
                    let list = assistants.get();
                    if loading.get() {
                        view! { <div class="text-gray-500">"Loading..."</div> }.into_any()
                    } else if list.is_empty() {
                        view! {
                            <div class="text-center py-12 bg-white rounded-lg shadow">
                                <p class="text-gray-500">"No virtual assistants yet"</p>
                            </div>
                        }.into_any()
                    } else {
                        list.into_iter().map(|assistant| view! {
                            <AssistantCard
                                assistant=assistant
                                models=models
                                knowledge_bases=knowledge_bases
                                mcp_servers=mcp_servers
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn AssistantCard(
    assistant: VirtualAssistant,
    models: ReadSignal<Vec<ModelRef>>,
    knowledge_bases: ReadSignal<Vec<CatalogEntry>>,
    mcp_servers: ReadSignal<Vec<CatalogEntry>>,
    on_edit: Callback<VirtualAssistant>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let model_id = assistant.model_name.clone();
    let kb_ids = assistant.knowledge_base_ids.clone();
    let mcp_ids = assistant.mcp_server_ids.clone();
    let for_edit = assistant.clone();
    let id_for_delete = assistant.id.clone();

    let model_label = move || {
        models.with(|list| {
            list.iter()
                .find(|m| m.id == model_id)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| model_id.clone())
        })
    };
    let kb_labels = move || {
        knowledge_bases.with(|list| {
            kb_ids.iter().map(|id| CatalogEntry::name_for(list, id)).collect::<Vec<_>>().join(", ")
        })
    };
    let mcp_labels = move || {
        mcp_servers.with(|list| {
            mcp_ids.iter().map(|id| CatalogEntry::name_for(list, id)).collect::<Vec<_>>().join(", ")
        })
    };

    view! {
        <div class="bg-white rounded-lg shadow p-4 hover:shadow-md transition-shadow">
            <div class="flex justify-between items-start mb-2">
                <div>
                    <h3 class="font-bold text-lg text-gray-900">{assistant.name.clone()}</h3>
                    <p class="text-gray-600 text-sm whitespace-pre-line">{assistant.prompt.clone()}</p>
                </div>
                <span class="px-2 py-1 text-xs rounded bg-purple-100 text-purple-800">
                    {model_label}
                </span>
            </div>
            <dl class="text-sm text-gray-700 space-y-1">
                <div class="flex space-x-2">
                    <dt class="font-medium">"Knowledge bases:"</dt>
                    <dd>{kb_labels}</dd>
                </div>
                <div class="flex space-x-2">
                    <dt class="font-medium">"MCP servers:"</dt>
                    <dd>{mcp_labels}</dd>
                </div>
            </dl>
            <div class="flex justify-end space-x-2 mt-4">
                <button
                    class="text-sm text-blue-600 hover:text-blue-900"
                    on:click=move |_| on_edit.run(for_edit.clone())
                >
                    "Edit"
                </button>
                {id_for_delete.map(|id| view! {
                    <button
                        class="text-sm text-red-600 hover:text-red-900"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "Delete"
                    </button>
                })}
            </div>
        </div>
    }
}
