use leptos::prelude::*;

/// Boolean switch with a label and an optional hint line
#[component]
pub fn Switch(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Secondary text under the label
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__switch-row">
            <div class="form__switch-text">
                <label class="form__label" for=id.clone()>
                    {label}
                </label>
                {move || hint.get().map(|h| view! { <p class="form__hint">{h}</p> })}
            </div>
            <input
                id=id
                type="checkbox"
                role="switch"
                class="form__switch"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </div>
    }
}
