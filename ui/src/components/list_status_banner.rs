use listing::FetchError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Plural noun for the rows, e.g. "campaigns"
    pub context: AttrValue,
    pub is_loading: bool,
    pub using_fallback: bool,
    #[prop_or_default]
    pub error: Option<FetchError>,
    pub on_retry: Callback<()>,
}

/// Loading, error and sample-data notices above a list.
#[function_component]
pub fn ListStatusBanner(props: &Props) -> Html {
    let on_retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    let loading = props.is_loading.then(|| {
        html! {
            <div class="flex items-center space-x-2 text-sm text-neutral-600 dark:text-neutral-400">
                <span class="inline-block w-4 h-4 border-2 border-neutral-300 border-t-neutral-700 rounded-full animate-spin" />
                <span>{format!("Loading {}...", props.context)}</span>
            </div>
        }
    })
    .unwrap_or_default();

    let error = props.error.as_ref().map(|error| {
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Error loading {}: {}", props.context, error)}
                </p>
            </div>
        }
    })
    .unwrap_or_default();

    let sample = (props.using_fallback && !props.is_loading).then(|| {
        html! {
            <div class="flex items-center justify-between p-4 rounded-md bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800">
                <p class="text-sm text-amber-800 dark:text-amber-300">
                    {"Showing sample data. Changes you make here are not saved."}
                </p>
                <button
                    onclick={on_retry}
                    class="text-sm font-medium text-amber-900 dark:text-amber-200 underline"
                >
                    {"Retry"}
                </button>
            </div>
        }
    })
    .unwrap_or_default();

    html! {
        <div class="space-y-3 mb-4">
            {loading}
            {error}
            {sample}
        </div>
    }
}
