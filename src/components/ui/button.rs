use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 text-white \
                 hover:bg-indigo-500 \
                 focus:ring-2 focus:ring-blue-400"
            }
            ButtonVariant::Success => {
                "bg-green-600 text-white \
                 hover:bg-green-500 \
                 focus:ring-2 focus:ring-green-400"
            }
        }
    }
}

impl ButtonSize {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "px-3 py-2 text-sm",
            ButtonSize::Large => "py-3 px-6 text-lg",
        }
    }
}

const DISABLED_CLASSES: &str = "bg-indigo-500/50 text-white cursor-not-allowed";

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] full_width: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.map(|d| d.get()).unwrap_or(false);

    let base_classes = "rounded-lg font-medium transition-all duration-300 focus:outline-none";
    let size_classes = size.get_classes();
    let width_classes = if full_width { "w-full" } else { "" };

    let combined_classes = move || {
        let state_classes = if is_disabled() {
            DISABLED_CLASSES
        } else {
            variant.get_classes()
        };
        format!(
            "{} {} {} {} {}",
            base_classes, state_classes, size_classes, width_classes, class
        )
    };

    view! {
        <button
            type=button_type
            class=combined_classes
            disabled=is_disabled
            on:click=move |ev| {
                if !is_disabled() {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            }
        >
            {children()}
        </button>
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Primary
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        ButtonSize::Medium
    }
}
