use payloads::requests::ListQuery;
use payloads::responses::{DiscountCode, DiscountCodeStatus};
use payloads::{DiscountCodeId, SessionIdentity};
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

fn tone(status: DiscountCodeStatus) -> Tone {
    match status {
        DiscountCodeStatus::Active => Tone::Positive,
        DiscountCodeStatus::Disabled => Tone::Neutral,
        DiscountCodeStatus::Expired => Tone::Negative,
    }
}

#[function_component]
pub fn DiscountCodesPage(props: &Props) -> Html {
    let list = use_list_query(props.session.company_scope());
    let codes = use_fetch_with_fallback(
        |query: ListQuery| async move {
            get_api_client().list_discount_codes(&query).await
        },
        sample_data::discount_codes,
        list.query.clone(),
    );
    let toast = use_toast();

    let on_delete = {
        let items = codes.items.clone();
        let using_fallback = codes.using_fallback;
        let replace_items = codes.replace_items.clone();
        Callback::from(move |code_id: DiscountCodeId| {
            let remaining: Vec<DiscountCode> = items
                .iter()
                .filter(|code| code.id != code_id)
                .cloned()
                .collect();

            if using_fallback {
                replace_items.emit(remaining);
                return;
            }

            let replace_items = replace_items.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_discount_code(&code_id).await {
                    Ok(()) => {
                        replace_items.emit(remaining);
                        toast.success("Discount code deleted");
                    }
                    Err(e) => {
                        tracing::warn!("delete discount code {code_id}: {e}");
                        toast.error(format!(
                            "Failed to delete discount code: {e}"
                        ));
                    }
                }
            });
        })
    };

    let status_options = DiscountCodeStatus::ALL
        .iter()
        .map(|status| (status.as_str().into(), status.label().into()))
        .collect::<Vec<(AttrValue, AttrValue)>>();

    let state = list.list_state("status");
    let window = state.apply(&codes.items);

    html! {
        <div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Discount Codes"}
            </h1>

            <ListToolbar
                search={list.query.search.clone().unwrap_or_default()}
                placeholder="Search codes..."
                on_search={list.on_search.clone()}
                filter_options={status_options}
                filter={list.query.status.clone().map(AttrValue::from)}
                on_filter={list.on_status.clone()}
            />

            <ListStatusBanner
                context="discount codes"
                is_loading={codes.is_loading}
                using_fallback={codes.using_fallback}
                error={codes.error.clone()}
                on_retry={codes.refresh.clone()}
            />

            if window.is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No discount codes found."}
                    </p>
                </div>
            } else {
                <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead class="bg-neutral-50 dark:bg-neutral-800">
                            <tr>
                                <SortableHeader label="Code" field="code" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Discount" field="percent_off" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Status" field="status" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Used" field="times_used" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Expires" field="expires_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <th class="px-4 py-3" />
                            </tr>
                        </thead>
                        <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for window.rows.iter().map(|code| {
                                let onclick = {
                                    let on_delete = on_delete.clone();
                                    let code_id = code.id;
                                    Callback::from(move |_: MouseEvent| on_delete.emit(code_id))
                                };
                                html! {
                                    <tr key={code.id.to_string()}>
                                        <td class="px-4 py-3 text-sm">
                                            <div class="font-mono font-medium text-neutral-900 dark:text-neutral-100">
                                                {&code.code}
                                            </div>
                                            if let Some(description) = &code.description {
                                                <div class="text-neutral-500 dark:text-neutral-400">
                                                    {description}
                                                </div>
                                            }
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                            {format!("{}%", code.percent_off.normalize())}
                                        </td>
                                        <td class="px-4 py-3 text-sm">
                                            <StatusBadge label={code.status.label()} tone={tone(code.status)} />
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                            {code.times_used}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                            {format_date(code.expires_at)}
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
                pagination={codes.pagination}
                on_page_change={list.on_page.clone()}
                is_loading={codes.is_loading}
            />
        </div>
    }
}
