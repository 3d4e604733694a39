//! Record Editor Modal
//!
//! One modal for every care-tool form. Inputs are generated from the draft's
//! field schema and bound to the editor signal; nothing is written to the
//! store until the page's submit callback runs.

use leptos::prelude::*;
use petaid_core::domain::Record;
use petaid_core::form::{Draft, FieldKind, FieldSpec, FieldValue};
use petaid_core::RecordEditor;

#[component]
pub fn RecordEditorModal<R: Record>(
    editor: RwSignal<RecordEditor<R>>,
    /// Singular noun for the heading, e.g. "Pet"
    noun: &'static str,
    /// Choices for `PetName` fields
    #[prop(into)]
    pet_names: Signal<Vec<String>>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let heading = move || {
        if editor.with(|e| e.is_editing()) {
            format!("Edit {}", noun)
        } else {
            format!("Add New {}", noun)
        }
    };
    let submit_label = move || {
        if editor.with(|e| e.is_editing()) {
            "Save Changes".to_string()
        } else {
            format!("Add {}", noun)
        }
    };
    let close = move |_: leptos::ev::MouseEvent| editor.update(|e| e.cancel());

    view! {
        <Show when=move || editor.with(|e| e.is_open())>
            <div class="modal-backdrop" on:click=close>
                <form
                    class="modal"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <h2 class="modal-title">{heading}</h2>
                    {R::Draft::schema()
                        .iter()
                        .map(|spec| field_input(*spec, editor, pet_names))
                        .collect_view()}
                    <div class="modal-actions">
                        <button type="button" class="btn-outline" on:click=close>"Cancel"</button>
                        <button type="submit" class="btn-primary">{submit_label}</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// One labelled input bound to `spec.name` in the open draft
fn field_input<R: Record>(
    spec: FieldSpec,
    editor: RwSignal<RecordEditor<R>>,
    pet_names: Signal<Vec<String>>,
) -> AnyView {
    let name = spec.name;
    let text = move || editor.with(|e| e.field(name).as_text());
    let set_text = move |raw: String| editor.update(|e| e.set_field(name, FieldValue::Text(raw)));
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    let input = match spec.kind {
        FieldKind::Checkbox => {
            return view! {
                <label class="field field-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || editor.with(|e| e.field(name).as_flag())
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            editor.update(|e| e.set_field(name, FieldValue::Flag(checked)));
                        }
                    />
                    {spec.label}
                </label>
            }
            .into_any();
        }
        FieldKind::TextArea => view! {
            <textarea
                placeholder=spec.placeholder
                prop:value=text
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select prop:value=text on:change=move |ev| set_text(event_target_value(&ev))>
                <option value="">{spec.placeholder}</option>
                {options
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <option value=*value selected=move || text() == *value>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::PetName => view! {
            <select prop:value=text on:change=move |ev| set_text(event_target_value(&ev))>
                <option value="">{spec.placeholder}</option>
                {move || {
                    let names = pet_names.get();
                    if names.is_empty() {
                        view! {
                            <option value="" disabled=true>
                                "No pets found. Add pets in Health Tracker."
                            </option>
                        }
                        .into_any()
                    } else {
                        names
                            .into_iter()
                            .map(|pet| {
                                let current = pet.clone();
                                let value = pet.clone();
                                view! {
                                    <option value=value selected=move || text() == current>
                                        {pet}
                                    </option>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </select>
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                FieldKind::Time => "time",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    step=if kind == FieldKind::Number { Some("0.1") } else { None }
                    placeholder=spec.placeholder
                    prop:value=text
                    on:input=move |ev| set_text(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
        </label>
    }
    .into_any()
}
