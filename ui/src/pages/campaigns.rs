use payloads::requests::ListQuery;
use payloads::responses::{Campaign, CampaignStatus};
use payloads::{CampaignId, SessionIdentity};
use yew::prelude::*;

use crate::components::{
    ListStatusBanner, ListToolbar, PaginationControls, SortableHeader,
    StatusBadge, Tone,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_fetch_with_fallback, use_list_query};
use crate::utils::time::format_date;
use crate::{get_api_client, sample_data};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: SessionIdentity,
}

fn tone(status: CampaignStatus) -> Tone {
    match status {
        CampaignStatus::Active => Tone::Positive,
        CampaignStatus::Draft => Tone::Neutral,
        CampaignStatus::Paused => Tone::Caution,
        CampaignStatus::Completed => Tone::Neutral,
    }
}

#[function_component]
pub fn CampaignsPage(props: &Props) -> Html {
    let list = use_list_query(props.session.company_scope());
    let campaigns = use_fetch_with_fallback(
        |query: ListQuery| async move {
            get_api_client().list_campaigns(&query).await
        },
        sample_data::campaigns,
        list.query.clone(),
    );
    let toast = use_toast();

    let on_delete = {
        let items = campaigns.items.clone();
        let using_fallback = campaigns.using_fallback;
        let replace_items = campaigns.replace_items.clone();
        let toast = toast.clone();
        Callback::from(move |campaign_id: CampaignId| {
            let remaining: Vec<Campaign> = items
                .iter()
                .filter(|campaign| campaign.id != campaign_id)
                .cloned()
                .collect();

            // Sample rows don't exist on the backend
            if using_fallback {
                replace_items.emit(remaining);
                return;
            }

            let replace_items = replace_items.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_campaign(&campaign_id).await {
                    Ok(()) => {
                        replace_items.emit(remaining);
                        toast.success("Campaign deleted");
                    }
                    Err(e) => {
                        tracing::warn!("delete campaign {campaign_id}: {e}");
                        toast.error(format!("Failed to delete campaign: {e}"));
                    }
                }
            });
        })
    };

    let status_options = CampaignStatus::ALL
        .iter()
        .map(|status| (status.as_str().into(), status.label().into()))
        .collect::<Vec<(AttrValue, AttrValue)>>();

    let state = list.list_state("status");
    let window = state.apply(&campaigns.items);

    html! {
        <div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Campaigns"}
            </h1>

            <ListToolbar
                search={list.query.search.clone().unwrap_or_default()}
                placeholder="Search campaigns..."
                on_search={list.on_search.clone()}
                filter_options={status_options}
                filter={list.query.status.clone().map(AttrValue::from)}
                on_filter={list.on_status.clone()}
            />

            <ListStatusBanner
                context="campaigns"
                is_loading={campaigns.is_loading}
                using_fallback={campaigns.using_fallback}
                error={campaigns.error.clone()}
                on_retry={campaigns.refresh.clone()}
            />

            if window.is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No campaigns match your search."}
                    </p>
                </div>
            } else {
                <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead class="bg-neutral-50 dark:bg-neutral-800">
                            <tr>
                                <SortableHeader label="Title" field="title" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Status" field="status" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Reviews" field="reviews_collected" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Created" field="created_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <th class="px-4 py-3" />
                            </tr>
                        </thead>
                        <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for window.rows.iter().map(|campaign| {
                                let onclick = {
                                    let on_delete = on_delete.clone();
                                    let campaign_id = campaign.id;
                                    Callback::from(move |_: MouseEvent| on_delete.emit(campaign_id))
                                };
                                html! {
                                    <tr key={campaign.id.to_string()}>
                                        <td class="px-4 py-3 text-sm">
                                            <div class="font-medium text-neutral-900 dark:text-neutral-100">
                                                {&campaign.title}
                                            </div>
                                            if let Some(description) = &campaign.description {
                                                <div class="text-neutral-500 dark:text-neutral-400">
                                                    {description}
                                                </div>
                                            }
                                        </td>
                                        <td class="px-4 py-3 text-sm">
                                            <StatusBadge label={campaign.status.label()} tone={tone(campaign.status)} />
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                            {campaign.reviews_collected}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                            {format_date(campaign.created_at)}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-right">
                                            <button
                                                {onclick}
                                                class="text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300"
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <PaginationControls
                pagination={campaigns.pagination}
                on_page_change={list.on_page.clone()}
                is_loading={campaigns.is_loading}
            />
        </div>
    }
}
