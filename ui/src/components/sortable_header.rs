use listing::SortSpec;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    /// Sort key the column sorts by
    pub field: AttrValue,
    pub sort: Option<SortSpec>,
    pub on_sort: Callback<String>,
}

/// A table header cell that sorts by its column when clicked. Clicking the
/// sorted column again reverses the direction.
#[function_component]
pub fn SortableHeader(props: &Props) -> Html {
    let indicator = props
        .sort
        .as_ref()
        .filter(|sort| sort.field == props.field.as_str())
        .map(|sort| sort.direction.indicator());

    let onclick = {
        let on_sort = props.on_sort.clone();
        let field = props.field.to_string();
        Callback::from(move |_: MouseEvent| on_sort.emit(field.clone()))
    };

    html! {
        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500 dark:text-neutral-400">
            <button {onclick} class="inline-flex items-center space-x-1 hover:text-neutral-900 dark:hover:text-neutral-100">
                <span>{&props.label}</span>
                if let Some(indicator) = indicator {
                    <span aria-hidden="true">{indicator}</span>
                }
            </button>
        </th>
    }
}
