use payloads::SessionIdentity;
use payloads::requests::ListQuery;
use payloads::responses::VendorStatus;
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

fn tone(status: VendorStatus) -> Tone {
    match status {
        VendorStatus::Active => Tone::Positive,
        VendorStatus::Pending => Tone::Caution,
        VendorStatus::Suspended => Tone::Negative,
    }
}

#[function_component]
pub fn VendorsPage(props: &Props) -> Html {
    if !props.session.is_admin() {
        return html! {
            <div class="text-center py-12">
                <h1 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Access denied"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Only administrators can view vendors."}
                </p>
            </div>
        };
    }

    html! { <VendorList /> }
}

#[function_component]
fn VendorList() -> Html {
    // Admins aren't scoped to a company
    let list = use_list_query(None);
    let vendors = use_fetch_with_fallback(
        |query: ListQuery| async move {
            get_api_client().list_vendors(&query).await
        },
        sample_data::vendors,
        list.query.clone(),
    );

    let status_options = VendorStatus::ALL
        .iter()
        .map(|status| (status.as_str().into(), status.label().into()))
        .collect::<Vec<(AttrValue, AttrValue)>>();

    let state = list.list_state("status");
    let window = state.apply(&vendors.items);

    html! {
        <div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Vendors"}
            </h1>

            <ListToolbar
                search={list.query.search.clone().unwrap_or_default()}
                placeholder="Search vendors..."
                on_search={list.on_search.clone()}
                filter_options={status_options}
                filter={list.query.status.clone().map(AttrValue::from)}
                on_filter={list.on_status.clone()}
            />

            <ListStatusBanner
                context="vendors"
                is_loading={vendors.is_loading}
                using_fallback={vendors.using_fallback}
                error={vendors.error.clone()}
                on_retry={vendors.refresh.clone()}
            />

            if window.is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No vendors found."}
                    </p>
                </div>
            } else {
                <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead class="bg-neutral-50 dark:bg-neutral-800">
                            <tr>
                                <SortableHeader label="Company" field="company_name" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Contact" field="contact_email" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Status" field="status" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Plan" field="plan" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Joined" field="created_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                            </tr>
                        </thead>
                        <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for window.rows.iter().map(|vendor| html! {
                                <tr key={vendor.id.to_string()}>
                                    <td class="px-4 py-3 text-sm font-medium text-neutral-900 dark:text-neutral-100">
                                        {&vendor.company_name}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {&vendor.contact_email}
                                    </td>
                                    <td class="px-4 py-3 text-sm">
                                        <StatusBadge label={vendor.status.label()} tone={tone(vendor.status)} />
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {vendor.plan.clone().unwrap_or_else(|| "-".into())}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {format_date(vendor.created_at)}
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <PaginationControls
                pagination={vendors.pagination}
                on_page_change={list.on_page.clone()}
                is_loading={vendors.is_loading}
            />
        </div>
    }
}
