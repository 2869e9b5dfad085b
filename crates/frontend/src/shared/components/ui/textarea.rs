use leptos::prelude::*;

/// Labelled multi-line input bound to a form field
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Called with `(name, value)` on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<(String, String)>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
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
            <textarea
                id=name.clone()
                name=name
                class="form__textarea"
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run((field_name.clone(), event_target_value(&ev)));
                    }
                }
            />
        </div>
    }
}
