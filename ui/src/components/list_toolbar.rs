use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub search: AttrValue,
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
    /// `(value, label)` pairs for the filter select
    #[prop_or_default]
    pub filter_options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub filter: Option<AttrValue>,
    /// Label of the "no filter" entry, e.g. "All statuses"
    #[prop_or(AttrValue::from("All statuses"))]
    pub filter_label: AttrValue,
    #[prop_or_default]
    pub on_filter: Callback<Option<String>>,
}

/// Search box plus an optional categorical filter.
///
/// Search is sent when the input is committed (Enter or blur) so a fetch
/// doesn't start on every keystroke.
#[function_component]
pub fn ListToolbar(props: &Props) -> Html {
    let onchange = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_filter_change = {
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_filter.emit((!value.is_empty()).then_some(value));
        })
    };

    let selected = props.filter.clone().unwrap_or_default();

    html! {
        <div class="flex flex-col sm:flex-row gap-3 mb-4">
            <input
                type="search"
                value={props.search.clone()}
                placeholder={props.placeholder.clone()}
                {onchange}
                class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 text-sm"
            />
            if !props.filter_options.is_empty() {
                <select
                    onchange={on_filter_change}
                    class="px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-800 text-sm"
                >
                    <option value="" selected={selected.is_empty()}>
                        {&props.filter_label}
                    </option>
                    {for props.filter_options.iter().map(|(value, label)| html! {
                        <option
                            value={value.clone()}
                            selected={*value == selected}
                        >
                            {label}
                        </option>
                    })}
                </select>
            }
        </div>
    }
}
