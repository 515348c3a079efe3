use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub toast: Toast,
}

/// Tailwind classes and glyph for each kind of toast.
fn appearance(toast_type: ToastType) -> (&'static str, &'static str) {
    match toast_type {
        ToastType::Error => (
            "bg-red-50 border-red-200 text-red-700 dark:bg-red-900 dark:border-red-800 dark:text-red-300",
            "✕",
        ),
        ToastType::Warning => (
            "bg-amber-50 border-amber-200 text-amber-800 dark:bg-amber-900 dark:border-amber-800 dark:text-amber-200",
            "!",
        ),
        ToastType::Success => (
            "bg-green-50 border-green-200 text-green-700 dark:bg-green-900 dark:border-green-800 dark:text-green-300",
            "✓",
        ),
        ToastType::Info => (
            "bg-white border-neutral-200 text-neutral-700 dark:bg-neutral-800 dark:border-neutral-700 dark:text-neutral-300",
            "i",
        ),
    }
}

#[function_component]
pub fn ToastItem(props: &Props) -> Html {
    let toasts = use_toast();
    let toast = &props.toast;
    let (colors, glyph) = appearance(toast.toast_type);

    let on_close = {
        let id = toast.id;
        Callback::from(move |_: MouseEvent| toasts.remove(id))
    };

    // Errors interrupt screen readers, everything else waits
    let role = if toast.toast_type == ToastType::Error {
        "alert"
    } else {
        "status"
    };

    html! {
        <div {role} class={classes!("flex", "items-start", "gap-3", "p-4", "rounded-lg", "border", "shadow-lg", colors)}>
            <span class="text-sm font-semibold" aria-hidden="true">{glyph}</span>
            <div class="flex-1 min-w-0">
                <p class="text-sm font-medium">{&toast.title}</p>
                if let Some(description) = &toast.description {
                    <p class="mt-1 text-sm opacity-80">{description}</p>
                }
            </div>
            <button
                onclick={on_close}
                title="Dismiss"
                class="text-lg leading-none opacity-60 hover:opacity-100"
            >
                {"×"}
            </button>
        </div>
    }
}
