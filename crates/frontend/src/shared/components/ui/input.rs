use leptos::prelude::*;

/// Labelled input bound to a form field
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with `(name, value)` on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<(String, String)>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let field_name = name.clone();

    view! {
        <div class="form__group">
            {
                let for_id = name.clone();
                move || label.get().map(|l| view! {
                    <label class="form__label" for=for_id.clone()>
                        {l}
                    </label>
                })
            }
            <input
                id=name.clone()
                name=name
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run((field_name.clone(), event_target_value(&ev)));
                    }
                }
            />
        </div>
    }
}
