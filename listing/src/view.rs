//! Client-side search, filtering, sorting and paging for list views.

use crate::controller::Pagination;
use icu_collator::{Collator, CollatorOptions, Strength};
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// The sort after a user picks `field`: the same field flips
    /// direction, a new field starts ascending.
    pub fn select(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(current) if current.field == field => SortSpec {
                field: current.field.clone(),
                direction: current.direction.toggled(),
            },
            _ => SortSpec::asc(field),
        }
    }
}

/// A comparable value pulled out of a row for sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    /// Missing dates sort as the Unix epoch.
    Date(Option<Timestamp>),
    Number(Decimal),
}

impl<'a> SortKey<'a> {
    pub fn text(value: Option<&'a str>) -> Self {
        Self::Text(value.unwrap_or(""))
    }

    /// Parse a date leniently: RFC 3339 timestamps and plain `YYYY-MM-DD`
    /// dates are understood, anything else counts as missing.
    pub fn date_str(value: Option<&str>) -> Self {
        let parsed = value.and_then(|value| {
            value.parse::<Timestamp>().ok().or_else(|| {
                value
                    .parse::<Date>()
                    .ok()?
                    .to_zoned(TimeZone::UTC)
                    .ok()
                    .map(|zoned| zoned.timestamp())
            })
        });
        Self::Date(parsed)
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::Number(value.into())
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            (Self::Date(a), Self::Date(b)) => a
                .unwrap_or(Timestamp::UNIX_EPOCH)
                .cmp(&b.unwrap_or(Timestamp::UNIX_EPOCH)),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            // Mixed kinds only come from a buggy Listable impl.
            _ => Ordering::Equal,
        }
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = text_collator();
}

/// Root-locale collator at secondary strength: accents count, case
/// doesn't.
fn text_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("no collation data, sorting by code point: {e}");
            None
        }
    }
}

/// Case-insensitive, collation-aware comparison, so "Émile" sorts with
/// the other E's rather than after "Z".
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    })
}

/// A row type that can be searched, filtered and sorted in a list view.
pub trait Listable {
    /// Text fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field (e.g. "status"), compared exactly.
    fn category(&self, field: &str) -> Option<&str>;

    /// Sort key for a column. Unknown columns leave the order unchanged.
    fn sort_key(&self, field: &str) -> Option<SortKey<'_>>;
}

pub fn matches_search<T: Listable>(item: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub field: String,
    pub value: String,
}

impl CategoryFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        item.category(&self.field) == Some(self.value.as_str())
    }
}

/// Stable sort of rows by one column.
pub fn sort_rows<T: Listable>(rows: &mut [&T], sort: &SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = match (a.sort_key(&sort.field), b.sort_key(&sort.field))
        {
            (Some(a), Some(b)) => a.compare(&b),
            _ => Ordering::Equal,
        };
        sort.direction.apply(ordering)
    });
}

/// The search, filter, sort and page a list view is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search: String,
    pub category: Option<CategoryFilter>,
    pub sort: Option<SortSpec>,
    /// Rows per page when paging client side. `None` shows every row and
    /// leaves paging to the backend.
    pub page_size: Option<usize>,
    pub page: u32,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: None,
            page_size: None,
            page: 1,
        }
    }
}

/// The rows a list view renders after [`ListState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListWindow<'a, T> {
    pub rows: Vec<&'a T>,
    /// Rows matching search and filter, across all pages.
    pub matched: usize,
    /// Present when paging client side.
    pub pagination: Option<Pagination>,
}

impl<T> ListWindow<'_, T> {
    /// Views render a "no results" message instead of an empty table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ListState {
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Changing the search sends the view back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<CategoryFilter>) {
        self.category = category;
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortSpec::select(self.sort.as_ref(), field));
    }

    pub fn apply<'a, T: Listable>(&self, items: &'a [T]) -> ListWindow<'a, T> {
        let mut rows: Vec<&T> = items
            .iter()
            .filter(|item| matches_search(*item, &self.search))
            .filter(|item| {
                self.category
                    .as_ref()
                    .is_none_or(|category| category.matches(*item))
            })
            .collect();

        if let Some(sort) = &self.sort {
            sort_rows(&mut rows, sort);
        }

        let matched = rows.len();
        let Some(page_size) = self.page_size else {
            return ListWindow {
                rows,
                matched,
                pagination: None,
            };
        };

        let pagination = Pagination::for_rows(matched, page_size, self.page);
        let start = (pagination.current_page as usize - 1) * page_size;
        let rows = rows.into_iter().skip(start).take(page_size).collect();
        ListWindow {
            rows,
            matched,
            pagination: Some(pagination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        title: &'static str,
        status: &'static str,
        created: Option<&'static str>,
        rank: u32,
    }

    impl Listable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title]
        }

        fn category(&self, field: &str) -> Option<&str> {
            (field == "status").then_some(self.status)
        }

        fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
            match field {
                "title" => Some(SortKey::Text(self.title)),
                "created" => Some(SortKey::date_str(self.created)),
                "rank" => Some(SortKey::number(self.rank)),
                _ => None,
            }
        }
    }

    fn item(title: &'static str) -> Item {
        Item {
            title,
            status: "active",
            created: None,
            rank: 0,
        }
    }

    fn titles(window: &ListWindow<'_, Item>) -> Vec<&'static str> {
        window.rows.iter().map(|item| item.title).collect()
    }

    #[test]
    fn sorting_by_title_and_toggling() {
        let items = vec![item("B"), item("A")];
        let mut state = ListState::default();

        state.toggle_sort("title");
        assert_eq!(titles(&state.apply(&items)), vec!["A", "B"]);

        state.toggle_sort("title");
        assert_eq!(state.sort, Some(SortSpec::desc("title")));
        assert_eq!(titles(&state.apply(&items)), vec!["B", "A"]);

        state.toggle_sort("created");
        assert_eq!(state.sort, Some(SortSpec::asc("created")));
    }

    #[test]
    fn text_comparison_ignores_case() {
        let items = vec![item("banana"), item("Apple"), item("cherry")];
        let state = ListState::default().with_sort(SortSpec::asc("title"));
        assert_eq!(
            titles(&state.apply(&items)),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn accented_text_sorts_with_its_base_letter() {
        let items = vec![item("Zeta"), item("Émile"), item("Eve"), item("Fay")];
        let state = ListState::default().with_sort(SortSpec::asc("title"));
        assert_eq!(
            titles(&state.apply(&items)),
            vec!["Émile", "Eve", "Fay", "Zeta"]
        );
        assert_eq!(compare_text("émile", "ÉMILE"), Ordering::Equal);
        assert_eq!(compare_text("Emile", "Émile"), Ordering::Less);
    }

    #[test]
    fn ties_keep_upstream_order() {
        let mut first = item("same");
        first.rank = 1;
        let mut second = item("SAME");
        second.rank = 2;
        let items = vec![first, second, item("a")];

        for sort in [SortSpec::asc("title"), SortSpec::desc("title")] {
            let state = ListState::default().with_sort(sort);
            let ranks: Vec<u32> = state
                .apply(&items)
                .rows
                .iter()
                .filter(|item| item.title.eq_ignore_ascii_case("same"))
                .map(|item| item.rank)
                .collect();
            assert_eq!(ranks, vec![1, 2]);
        }
    }

    #[test]
    fn missing_or_invalid_dates_sort_as_epoch() {
        let mut newer = item("newer");
        newer.created = Some("2024-03-01T00:00:00Z");
        let mut older = item("older");
        older.created = Some("1999-12-31");
        let mut invalid = item("invalid");
        invalid.created = Some("not a date");
        let missing = item("missing");

        let items = vec![newer, invalid, older, missing];
        let state = ListState::default().with_sort(SortSpec::asc("created"));
        assert_eq!(
            titles(&state.apply(&items)),
            vec!["invalid", "missing", "older", "newer"]
        );
    }

    #[test]
    fn unknown_sort_field_keeps_order() {
        let items = vec![item("b"), item("a")];
        let state = ListState::default().with_sort(SortSpec::asc("nope"));
        assert_eq!(titles(&state.apply(&items)), vec!["b", "a"]);
    }

    #[test]
    fn search_and_category_filter() {
        let mut paused = item("Summer Reviews");
        paused.status = "paused";
        let items = vec![item("Spring reviews"), paused, item("Launch")];

        let mut state = ListState::default();
        state.set_search("  REVIEWS ");
        assert_eq!(
            titles(&state.apply(&items)),
            vec!["Spring reviews", "Summer Reviews"]
        );

        state.set_category(Some(CategoryFilter::new("status", "paused")));
        assert_eq!(titles(&state.apply(&items)), vec!["Summer Reviews"]);

        state.set_search("launch");
        let window = state.apply(&items);
        assert!(window.is_empty());
        assert_eq!(window.matched, 0);
    }

    #[test]
    fn client_paging_windows_rows() {
        let items: Vec<Item> =
            ["a", "b", "c", "d", "e"].into_iter().map(item).collect();
        let mut state = ListState::default().with_page_size(2);

        let window = state.apply(&items);
        assert_eq!(titles(&window), vec!["a", "b"]);
        let pagination = window.pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert!(!pagination.has_previous());
        assert!(pagination.has_next());

        state.page = 3;
        let window = state.apply(&items);
        assert_eq!(titles(&window), vec!["e"]);
        assert!(!window.pagination.unwrap().has_next());

        state.page = 42;
        assert_eq!(titles(&state.apply(&items)), vec!["e"]);

        state.set_search("a");
        assert_eq!(state.page, 1);
    }
}
