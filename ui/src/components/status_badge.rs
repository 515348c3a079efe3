use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Positive,
    Neutral,
    Caution,
    Negative,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub tone: Tone,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    let classes = match props.tone {
        Tone::Positive => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
        }
        Tone::Neutral => {
            "bg-neutral-200 text-neutral-800 dark:bg-neutral-600 dark:text-neutral-200"
        }
        Tone::Caution => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-200"
        }
        Tone::Negative => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200"
        }
    };

    html! {
        <span class={format!("px-2 py-1 text-xs font-medium rounded-full {}", classes)}>
            {&props.label}
        </span>
    }
}
