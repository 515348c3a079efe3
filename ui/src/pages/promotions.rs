use payloads::SessionIdentity;
use payloads::requests::ListQuery;
use payloads::responses::PromotionStatus;
use yew::prelude::*;

use crate::components::{
    ListStatusBanner, ListToolbar, PaginationControls, SortableHeader,
    StatusBadge, Tone,
};
use crate::hooks::{use_fetch_with_fallback, use_list_query};
use crate::utils::time::format_date;
use crate::{get_api_client, sample_data};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: SessionIdentity,
}

fn tone(status: PromotionStatus) -> Tone {
    match status {
        PromotionStatus::Scheduled => Tone::Caution,
        PromotionStatus::Active => Tone::Positive,
        PromotionStatus::Expired => Tone::Neutral,
    }
}

#[function_component]
pub fn PromotionsPage(props: &Props) -> Html {
    let list = use_list_query(props.session.company_scope());
    let promotions = use_fetch_with_fallback(
        |query: ListQuery| async move {
            get_api_client().list_promotions(&query).await
        },
        sample_data::promotions,
        list.query.clone(),
    );

    let status_options = PromotionStatus::ALL
        .iter()
        .map(|status| (status.as_str().into(), status.label().into()))
        .collect::<Vec<(AttrValue, AttrValue)>>();

    let state = list.list_state("status");
    let window = state.apply(&promotions.items);

    html! {
        <div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Promotions"}
            </h1>

            <ListToolbar
                search={list.query.search.clone().unwrap_or_default()}
                placeholder="Search promotions..."
                on_search={list.on_search.clone()}
                filter_options={status_options}
                filter={list.query.status.clone().map(AttrValue::from)}
                on_filter={list.on_status.clone()}
            />

            <ListStatusBanner
                context="promotions"
                is_loading={promotions.is_loading}
                using_fallback={promotions.using_fallback}
                error={promotions.error.clone()}
                on_retry={promotions.refresh.clone()}
            />

            if window.is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No promotions found."}
                    </p>
                </div>
            } else {
                <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead class="bg-neutral-50 dark:bg-neutral-800">
                            <tr>
                                <SortableHeader label="Title" field="title" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Offer" field="offer_type" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Status" field="status" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Starts" field="starts_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Ends" field="ends_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                            </tr>
                        </thead>
                        <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for window.rows.iter().map(|promotion| html! {
                                <tr key={promotion.id.to_string()}>
                                    <td class="px-4 py-3 text-sm font-medium text-neutral-900 dark:text-neutral-100">
                                        {&promotion.title}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {promotion.offer_type.replace('_', " ")}
                                    </td>
                                    <td class="px-4 py-3 text-sm">
                                        <StatusBadge label={promotion.status.label()} tone={tone(promotion.status)} />
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {format_date(promotion.starts_at)}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {format_date(promotion.ends_at)}
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <PaginationControls
                pagination={promotions.pagination}
                on_page_change={list.on_page.clone()}
                is_loading={promotions.is_loading}
            />
        </div>
    }
}
