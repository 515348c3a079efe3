use listing::{CategoryFilter, ListState, SortSpec};
use payloads::CompanyId;
use payloads::requests::{DEFAULT_PAGE_SIZE, ListQuery};
use yew::prelude::*;

/// Search, status filter, page and sort for one list page.
///
/// Search, status and page go to the backend as query params. Sorting
/// happens on the rows of the current page.
pub struct ListQueryHandle {
    pub query: ListQuery,
    pub sort: Option<SortSpec>,
    pub on_search: Callback<String>,
    pub on_status: Callback<Option<String>>,
    /// Emit the page to show; callers clamp it first.
    pub on_page: Callback<u32>,
    /// Emit the column clicked.
    pub on_sort: Callback<String>,
}

impl ListQueryHandle {
    /// The client-side view of the same search and filter, for narrowing
    /// fallback rows the backend never saw.
    pub fn list_state(&self, status_field: &str) -> ListState {
        ListState {
            search: self.query.search.clone().unwrap_or_default(),
            category: self
                .query
                .status
                .as_ref()
                .map(|status| CategoryFilter::new(status_field, status)),
            sort: self.sort.clone(),
            ..ListState::default()
        }
    }
}

#[hook]
pub fn use_list_query(company_id: Option<CompanyId>) -> ListQueryHandle {
    let query = use_state(move || {
        ListQuery::for_company(company_id).with_page_size(DEFAULT_PAGE_SIZE)
    });
    let sort = use_state(|| None::<SortSpec>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set((*query).clone().with_search(search).with_page(1));
        })
    };

    let on_status = {
        let query = query.clone();
        Callback::from(move |status: Option<String>| {
            query.set((*query).clone().with_status(status).with_page(1));
        })
    };

    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set((*query).clone().with_page(page));
        })
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |field: String| {
            sort.set(Some(SortSpec::select((*sort).as_ref(), &field)));
        })
    };

    ListQueryHandle {
        query: (*query).clone(),
        sort: (*sort).clone(),
        on_search,
        on_status,
        on_page,
        on_sort,
    }
}
