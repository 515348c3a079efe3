use listing::Pagination;
use yew::prelude::*;

/// Numbered buttons shown around the current page.
const PAGE_BUTTONS: u32 = 5;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub pagination: Pagination,
    /// Callback with the page to show, already clamped into range
    pub on_page_change: Callback<u32>,
    /// Buttons are disabled while a page loads
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Up to `span` consecutive pages containing the current one, shifted to
/// stay inside `1..=total_pages`.
fn page_window(pagination: &Pagination, span: u32) -> Vec<u32> {
    let total = pagination.total_pages.max(1);
    let span = span.clamp(1, total);
    let current = pagination.clamp_page(pagination.current_page);
    let first = current.saturating_sub(span / 2).clamp(1, total - span + 1);
    (first..first + span).collect()
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let pagination = props.pagination;
    let is_loading = props.is_loading;

    if pagination.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: Option<u32>| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = page {
                on_page_change.emit(pagination.clamp_page(page));
            }
        })
    };

    let prev_disabled = !pagination.has_previous() || is_loading;
    let next_disabled = !pagination.has_next() || is_loading;

    let button = |disabled: bool, active: bool| {
        classes!(
            "px-3",
            "py-1.5",
            "rounded-md",
            "text-sm",
            "font-medium",
            "border",
            "border-neutral-300",
            "dark:border-neutral-600",
            match (active, disabled) {
                (true, _) => "bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900",
                (false, true) => "text-neutral-400 dark:text-neutral-500 cursor-not-allowed",
                (false, false) => "text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700",
            }
        )
    };

    html! {
        <nav
            aria-label="Pagination"
            class="flex flex-wrap items-center justify-between gap-3 mt-4 pt-4 border-t border-neutral-200 dark:border-neutral-700"
        >
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!(
                    "Page {} of {} ({} total)",
                    pagination.current_page,
                    pagination.total_pages,
                    pagination.total_count
                )}
            </span>

            <div class="flex items-center gap-1">
                <button
                    onclick={go_to(pagination.previous_page())}
                    disabled={prev_disabled}
                    class={button(prev_disabled, false)}
                >
                    {"Previous"}
                </button>
                {for page_window(&pagination, PAGE_BUTTONS).into_iter().map(|page| {
                    let active = page == pagination.current_page;
                    html! {
                        <button
                            key={page}
                            onclick={go_to(Some(page))}
                            disabled={active || is_loading}
                            aria-current={active.then_some("page")}
                            class={button(is_loading, active)}
                        >
                            {page}
                        </button>
                    }
                })}
                <button
                    onclick={go_to(pagination.next_page())}
                    disabled={next_disabled}
                    class={button(next_disabled, false)}
                >
                    {"Next"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(current_page: u32, total_pages: u32) -> Pagination {
        Pagination {
            current_page,
            total_pages,
            total_count: u64::from(total_pages) * 10,
        }
    }

    #[test]
    fn window_centres_on_the_current_page() {
        assert_eq!(page_window(&pagination(5, 10), 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_stays_inside_the_page_range() {
        assert_eq!(page_window(&pagination(1, 10), 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(&pagination(10, 10), 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(&pagination(2, 3), 5), vec![1, 2, 3]);
    }
}
