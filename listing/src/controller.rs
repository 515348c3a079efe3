use crate::error::FetchError;
use crate::notice::{Notice, Notifier};
use crate::params::{ParamsKey, ParamsVersion, QueryParams};
use payloads::PageResult;
use std::cell::RefCell;
use std::future::Future;

/// Where a controller is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    /// Showing real rows from the backend.
    Success,
    /// The backend returned no rows; showing the fallback set.
    Empty,
    /// The fetch failed; showing the fallback set.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-indexed.
    pub current_page: u32,
    /// Always at least 1, even with no rows.
    pub total_pages: u32,
    pub total_count: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single_page(0)
    }
}

impl Pagination {
    /// One page holding `count` rows.
    pub fn single_page(count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: count as u64,
        }
    }

    /// Pagination for `total_count` rows split into pages of `page_size`,
    /// positioned at `page` (clamped into range).
    pub fn for_rows(total_count: usize, page_size: usize, page: u32) -> Self {
        let page_size = page_size.max(1);
        let total_pages =
            u32::try_from(total_count.div_ceil(page_size).max(1))
                .unwrap_or(u32::MAX);
        Self {
            current_page: page.clamp(1, total_pages),
            total_pages,
            total_count: total_count as u64,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Clamp a requested page into `[1, total_pages]`.
    ///
    /// The controller doesn't validate requested pages itself; views clamp
    /// before changing their params.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }
}

/// Permission to run one fetch, handed out when params change.
#[derive(Debug, Clone)]
pub struct FetchTicket<P> {
    version: ParamsVersion,
    params: P,
}

impl<P> FetchTicket<P> {
    pub fn version(&self) -> ParamsVersion {
        self.version
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn into_params(self) -> P {
        self.params
    }
}

/// What happened to a fetch outcome handed to [`FetchController::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied and the controller is now in this state.
    Committed(LoadState),
    /// A newer fetch was started since; the outcome was dropped.
    Stale,
}

/// Everything a list view renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSnapshot<'a, T> {
    pub items: &'a [T],
    pub is_loading: bool,
    pub error: Option<&'a FetchError>,
    pub using_fallback: bool,
    pub pagination: Pagination,
}

/// The asynchronous source of pages for a controller.
pub trait Fetcher<P, T> {
    type Error: Into<FetchError>;

    fn fetch(
        &self,
        params: P,
    ) -> impl Future<Output = Result<PageResult<T>, Self::Error>>;
}

impl<P, T, E, F, Fut> Fetcher<P, T> for F
where
    F: Fn(P) -> Fut,
    Fut: Future<Output = Result<PageResult<T>, E>>,
    E: Into<FetchError>,
{
    type Error = E;

    fn fetch(
        &self,
        params: P,
    ) -> impl Future<Output = Result<PageResult<T>, E>> {
        self(params)
    }
}

/// Load state for one list view.
///
/// The controller never hands back an empty screen because of a failure:
/// an empty or failed fetch swaps in the fallback set and raises a notice.
/// Each fetch is stamped with a [`ParamsVersion`] and only the newest one
/// may change state, so a slow response for old params can't overwrite a
/// newer one.
///
/// The controller itself does no I/O. [`observe`](Self::observe) decides
/// whether a fetch is needed and [`resolve`](Self::resolve) applies its
/// outcome; [`drive`] and [`load`] glue the two to a [`Fetcher`].
#[derive(Debug)]
pub struct FetchController<P, T> {
    fallback: Vec<T>,
    params: Option<(ParamsKey, P)>,
    version: ParamsVersion,
    state: LoadState,
    items: Vec<T>,
    error: Option<FetchError>,
    using_fallback: bool,
    pagination: Pagination,
}

impl<P: QueryParams, T: Clone> FetchController<P, T> {
    pub fn new(fallback: Vec<T>) -> Self {
        Self {
            fallback,
            params: None,
            version: ParamsVersion::default(),
            state: LoadState::Idle,
            items: Vec::new(),
            error: None,
            using_fallback: false,
            pagination: Pagination::default(),
        }
    }

    /// Note the params the view currently wants.
    ///
    /// Returns a ticket when they differ structurally from the last ones
    /// seen, in which case the controller is now `Loading` and the caller
    /// should run the fetch. Identical params return `None`.
    pub fn observe(&mut self, params: &P) -> Option<FetchTicket<P>> {
        let key = ParamsKey::of(params);
        if let Some((current, _)) = &self.params
            && *current == key
        {
            return None;
        }
        tracing::debug!(params = key.as_str(), "list params changed");
        self.params = Some((key, params.clone()));
        Some(self.begin(params.clone()))
    }

    /// Fetch the current params again. `None` before the first observe.
    pub fn refresh(&mut self) -> Option<FetchTicket<P>> {
        let params = self.params.as_ref().map(|(_, params)| params.clone())?;
        Some(self.begin(params))
    }

    fn begin(&mut self, params: P) -> FetchTicket<P> {
        self.version = self.version.next();
        self.state = LoadState::Loading;
        self.error = None;
        FetchTicket {
            version: self.version,
            params,
        }
    }

    /// Apply the outcome of the fetch started under `version`.
    pub fn resolve<E: Into<FetchError>>(
        &mut self,
        version: ParamsVersion,
        outcome: Result<PageResult<T>, E>,
        notifier: &impl Notifier,
    ) -> Resolution {
        if version != self.version || self.state != LoadState::Loading {
            tracing::debug!(
                ?version,
                current = ?self.version,
                "dropping stale fetch result"
            );
            return Resolution::Stale;
        }

        match outcome.map_err(Into::into) {
            Ok(page) if !page.items.is_empty() => {
                let current_page = self
                    .params
                    .as_ref()
                    .and_then(|(_, params)| params.page())
                    .unwrap_or(1)
                    .max(1);
                self.pagination = Pagination {
                    current_page,
                    total_pages: page.total_pages.max(1),
                    total_count: page.total_count,
                };
                self.items = page.items;
                self.using_fallback = false;
                self.state = LoadState::Success;
            }
            Ok(_) => {
                tracing::info!("no rows returned, showing sample data");
                self.show_fallback();
                self.state = LoadState::Empty;
                notifier.notify(
                    Notice::info("No data found")
                        .with_description("Showing sample data instead."),
                );
            }
            Err(error) => {
                match &error {
                    FetchError::Malformed { detail } => {
                        tracing::error!("invalid list response: {detail}")
                    }
                    FetchError::NonJson { detail } => {
                        tracing::error!("non-JSON list response: {detail}")
                    }
                    other => tracing::warn!("failed to load list: {other}"),
                }
                self.show_fallback();
                self.state = LoadState::Failed;
                notifier.notify(error.notice());
                self.error = Some(error);
            }
        }

        Resolution::Committed(self.state)
    }

    fn show_fallback(&mut self) {
        self.items = self.fallback.clone();
        self.pagination = Pagination::single_page(self.fallback.len());
        self.using_fallback = true;
    }

    /// Overwrite the displayed rows without fetching, e.g. after a local
    /// delete. Pagination and the fallback flag are left alone.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn view(&self) -> ListSnapshot<'_, T> {
        ListSnapshot {
            items: &self.items,
            is_loading: self.is_loading(),
            error: self.error.as_ref(),
            using_fallback: self.using_fallback,
            pagination: self.pagination,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn version(&self) -> ParamsVersion {
        self.version
    }

    /// The params most recently observed.
    pub fn params(&self) -> Option<&P> {
        self.params.as_ref().map(|(_, params)| params)
    }
}

/// Run the fetch a ticket allows and apply its outcome.
///
/// The controller is only borrowed after the fetch completes, so other
/// tickets may be issued and resolved while this one is in flight.
pub async fn drive<P, T, F, N>(
    controller: &RefCell<FetchController<P, T>>,
    ticket: FetchTicket<P>,
    fetcher: &F,
    notifier: &N,
) -> Resolution
where
    P: QueryParams,
    T: Clone,
    F: Fetcher<P, T>,
    N: Notifier,
{
    let version = ticket.version();
    let outcome = fetcher.fetch(ticket.into_params()).await;
    controller.borrow_mut().resolve(version, outcome, notifier)
}

/// Observe `params` and, if they changed, fetch and resolve.
///
/// Returns `None` when the params were unchanged and nothing was fetched.
pub async fn load<P, T, F, N>(
    controller: &RefCell<FetchController<P, T>>,
    params: &P,
    fetcher: &F,
    notifier: &N,
) -> Option<Resolution>
where
    P: QueryParams,
    T: Clone,
    F: Fetcher<P, T>,
    N: Notifier,
{
    let ticket = controller.borrow_mut().observe(params)?;
    Some(drive(controller, ticket, fetcher, notifier).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLog;
    use payloads::requests::ListQuery;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
    }

    fn rows(ids: &[&'static str]) -> Vec<Row> {
        ids.iter().map(|&id| Row { id }).collect()
    }

    fn page(ids: &[&'static str], total_pages: u32) -> PageResult<Row> {
        PageResult {
            items: rows(ids),
            total_count: ids.len() as u64,
            total_pages,
        }
    }

    type Controller = FetchController<ListQuery, Row>;

    #[test]
    fn starts_idle_with_nothing_to_show() {
        let controller = Controller::new(rows(&["mock"]));
        let view = controller.view();
        assert_eq!(controller.state(), LoadState::Idle);
        assert!(view.items.is_empty());
        assert!(!view.is_loading);
        assert_eq!(view.pagination, Pagination::single_page(0));
    }

    #[test]
    fn success_shows_real_rows() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(Vec::new());
        let ticket = controller
            .observe(&ListQuery::default().with_page(1))
            .unwrap();
        assert!(controller.is_loading());

        let resolution = controller.resolve(
            ticket.version(),
            Ok::<_, FetchError>(page(&["1", "2"], 1)),
            &log,
        );

        assert_eq!(resolution, Resolution::Committed(LoadState::Success));
        assert_eq!(controller.items(), rows(&["1", "2"]).as_slice());
        assert!(!controller.using_fallback());
        assert_eq!(
            controller.pagination(),
            Pagination {
                current_page: 1,
                total_pages: 1,
                total_count: 2
            }
        );
        assert!(log.is_empty());
    }

    #[test]
    fn current_page_comes_from_params() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(Vec::new());
        let ticket = controller
            .observe(&ListQuery::default().with_page(3))
            .unwrap();
        controller.resolve(
            ticket.version(),
            Ok::<_, FetchError>(page(&["21"], 4)),
            &log,
        );
        let pagination = controller.pagination();
        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.total_pages, 4);
        assert!(pagination.has_previous());
        assert!(pagination.has_next());
    }

    #[test]
    fn empty_page_falls_back() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(rows(&["mock"]));
        let ticket = controller.observe(&ListQuery::default()).unwrap();

        controller.resolve(
            ticket.version(),
            Ok::<_, FetchError>(page(&[], 0)),
            &log,
        );

        assert_eq!(controller.state(), LoadState::Empty);
        assert_eq!(controller.items(), rows(&["mock"]).as_slice());
        assert!(controller.using_fallback());
        assert!(controller.error().is_none());
        assert_eq!(controller.pagination(), Pagination::single_page(1));
        assert_eq!(log.titles(), vec!["No data found"]);
    }

    #[test]
    fn failure_falls_back_and_keeps_the_error() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(Vec::new());
        let ticket = controller.observe(&ListQuery::default()).unwrap();

        controller.resolve(
            ticket.version(),
            Err(FetchError::status(401, "")),
            &log,
        );

        assert_eq!(controller.state(), LoadState::Failed);
        assert!(controller.items().is_empty());
        assert!(controller.using_fallback());
        assert!(controller.error().is_some());
        assert_eq!(log.titles(), vec!["Authentication error"]);
    }

    #[test]
    fn failure_after_success_replaces_rows_and_pagination() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(rows(&["m"]));
        let first = controller
            .observe(&ListQuery::default().with_page(2))
            .unwrap();
        controller.resolve(
            first.version(),
            Ok::<_, FetchError>(page(&["a", "b"], 5)),
            &log,
        );

        let second = controller
            .observe(&ListQuery::default().with_page(3))
            .unwrap();
        controller.resolve(
            second.version(),
            Err(FetchError::network("connection reset")),
            &log,
        );

        assert_eq!(controller.items(), rows(&["m"]).as_slice());
        assert_eq!(controller.pagination(), Pagination::single_page(1));
    }

    #[test]
    fn identical_params_do_not_refetch() {
        let mut controller = Controller::new(Vec::new());
        let query = ListQuery::default().with_search("acme");
        assert!(controller.observe(&query).is_some());
        assert!(controller.observe(&query.clone()).is_none());
        assert!(controller.observe(&query.with_page(2)).is_some());
    }

    #[test]
    fn older_ticket_is_stale_once_params_change() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(Vec::new());
        let a = controller
            .observe(&ListQuery::default().with_page(1))
            .unwrap();
        let b = controller
            .observe(&ListQuery::default().with_page(2))
            .unwrap();

        let committed = controller.resolve(
            b.version(),
            Ok::<_, FetchError>(page(&["b"], 2)),
            &log,
        );
        let late = controller.resolve(
            a.version(),
            Ok::<_, FetchError>(page(&["a"], 1)),
            &log,
        );

        assert_eq!(committed, Resolution::Committed(LoadState::Success));
        assert_eq!(late, Resolution::Stale);
        assert_eq!(controller.items(), rows(&["b"]).as_slice());
        assert_eq!(controller.pagination().current_page, 2);
    }

    #[test]
    fn replace_items_keeps_flags_and_pagination() {
        let log = NoticeLog::new();
        let mut controller = Controller::new(rows(&["m1", "m2"]));
        let ticket = controller.observe(&ListQuery::default()).unwrap();
        controller.resolve(
            ticket.version(),
            Err(FetchError::network("offline")),
            &log,
        );
        let before = controller.pagination();

        controller.replace_items(rows(&["m2"]));

        assert_eq!(controller.items(), rows(&["m2"]).as_slice());
        assert!(controller.using_fallback());
        assert_eq!(controller.pagination(), before);
        assert_eq!(controller.state(), LoadState::Failed);
    }

    #[test]
    fn refresh_reissues_current_params() {
        let mut controller = Controller::new(Vec::new());
        assert!(controller.refresh().is_none());

        let query = ListQuery::default().with_page(2);
        let first = controller.observe(&query).unwrap();
        let again = controller.refresh().unwrap();

        assert_eq!(again.params(), &query);
        assert!(again.version() > first.version());
        assert!(controller.is_loading());
    }

    #[test]
    fn pagination_bounds() {
        let single = Pagination::single_page(0);
        assert!(!single.has_previous());
        assert!(!single.has_next());
        assert_eq!(single.clamp_page(9), 1);

        let paged = Pagination::for_rows(25, 10, 7);
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.current_page, 3);
        assert_eq!(paged.next_page(), None);
        assert_eq!(paged.previous_page(), Some(2));
        assert_eq!(paged.clamp_page(0), 1);

        assert_eq!(Pagination::for_rows(0, 10, 1).total_pages, 1);
    }
}
