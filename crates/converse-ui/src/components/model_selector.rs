//! Model Selector Component
//!
//! Compact dropdown over the environment-provided model catalog. Keeps
//! a local selection that resynchronizes whenever the host's current
//! model changes externally, and only notifies the host when the chosen
//! value actually differs from it.

use dioxus::prelude::*;

use converse_core::available_models;

/// Model selection dropdown.
#[component]
pub fn ModelSelector(
    /// The host's current model, the value selections are compared against
    current_model: ReadOnlySignal<String>,
    /// Disabled while a send is in flight or the assistant is running
    #[props(default = false)]
    disabled: bool,
    /// Handler called when the user picks a different model
    on_change: EventHandler<String>,
) -> Element {
    let mut selected = use_signal(move || current_model());

    // Resync local selection when the host's model changes externally.
    use_effect(move || {
        let model = current_model();
        if !model.is_empty() {
            selected.set(model);
        }
    });

    // Catalog plus the current model when it is not listed, so the
    // dropdown never shows a value the session does not have.
    let options = use_memo(move || {
        let mut models = available_models();
        let current = current_model();
        if !current.is_empty() && !models.contains(&current) {
            models.insert(0, current);
        }
        models
    });

    let handle_change = move |e: Event<FormData>| {
        let new_model = e.value();
        if new_model != current_model() {
            selected.set(new_model.clone());
            on_change.call(new_model);
        }
    };

    rsx! {
        div { class: "model-selector",
            label {
                class: "model-selector-label",
                r#for: "model-select",
                "Model:"
            }
            select {
                id: "model-select",
                class: "model-selector-dropdown",
                disabled: disabled,
                value: "{selected}",
                onchange: handle_change,
                for model in options() {
                    option {
                        key: "{model}",
                        value: "{model}",
                        selected: model == selected(),
                        "{model}"
                    }
                }
            }
        }
    }
}
