use dioxus::prelude::*;

/// A themed native select element for forms.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
