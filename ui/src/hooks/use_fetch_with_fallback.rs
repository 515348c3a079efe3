use listing::{
    FetchController, FetchError, FetchTicket, Fetcher, Pagination,
    ParamsKey, QueryParams, Resolution, drive,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::contexts::toast::{ToastHandle, use_toast};

/// What a list page renders from.
pub struct FallbackHookReturn<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    /// The rows are sample data, not the backend's.
    pub using_fallback: bool,
    pub pagination: Pagination,
    /// Fetch the current params again.
    pub refresh: Callback<()>,
    /// Swap the displayed rows without fetching, e.g. after a delete.
    pub replace_items: Callback<Vec<T>>,
}

/// Fetch a page for `params`, falling back to sample rows when the backend
/// has none or can't be reached.
///
/// A fetch starts on mount and whenever `params` serialize differently from
/// the last ones seen. Only the newest fetch updates the page; a slow
/// response for earlier params is discarded. Empty and failed fetches raise
/// a toast.
///
/// The fetcher and fallback are captured on the first render; later values
/// are ignored.
///
/// # Example
///
/// ```ignore
/// let campaigns = use_fetch_with_fallback(
///     |query: ListQuery| async move {
///         get_api_client().list_campaigns(&query).await
///     },
///     sample_data::campaigns,
///     query.clone(),
/// );
/// ```
#[hook]
pub fn use_fetch_with_fallback<P, T, F>(
    fetcher: F,
    fallback: fn() -> Vec<T>,
    params: P,
) -> FallbackHookReturn<T>
where
    P: QueryParams + 'static,
    T: Clone + 'static,
    F: Fetcher<P, T> + 'static,
{
    let controller =
        use_mut_ref(move || FetchController::<P, T>::new(fallback()));
    let fetcher = use_memo((), move |_| fetcher);
    let toast = use_toast();
    let force_update = use_force_update();

    let run = {
        let controller = controller.clone();
        let fetcher = fetcher.clone();
        let toast = toast.clone();
        let force_update = force_update.clone();
        Rc::new(move |ticket: FetchTicket<P>| {
            spawn_fetch(
                controller.clone(),
                ticket,
                fetcher.clone(),
                toast.clone(),
                force_update.clone(),
            )
        })
    };

    // Fetch on mount and when params change structurally
    {
        let controller = controller.clone();
        let run = run.clone();
        use_effect_with(ParamsKey::of(&params), move |_| {
            let ticket = controller.borrow_mut().observe(&params);
            if let Some(ticket) = ticket {
                run(ticket);
            }
        });
    }

    let refresh = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let ticket = controller.borrow_mut().refresh();
            if let Some(ticket) = ticket {
                run(ticket);
            }
        })
    };

    let replace_items = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        Callback::from(move |items: Vec<T>| {
            controller.borrow_mut().replace_items(items);
            force_update.force_update();
        })
    };

    let controller = controller.borrow();
    let view = controller.view();
    FallbackHookReturn {
        items: view.items.to_vec(),
        is_loading: view.is_loading,
        error: view.error.cloned(),
        using_fallback: view.using_fallback,
        pagination: view.pagination,
        refresh,
        replace_items,
    }
}

fn spawn_fetch<P, T, F>(
    controller: Rc<RefCell<FetchController<P, T>>>,
    ticket: FetchTicket<P>,
    fetcher: Rc<F>,
    toast: ToastHandle,
    force_update: UseForceUpdateHandle,
) where
    P: QueryParams + 'static,
    T: Clone + 'static,
    F: Fetcher<P, T> + 'static,
{
    // Show the loading state straight away
    force_update.force_update();

    yew::platform::spawn_local(async move {
        let resolution = drive(&*controller, ticket, &*fetcher, &toast).await;
        if resolution != Resolution::Stale {
            force_update.force_update();
        }
    });
}
