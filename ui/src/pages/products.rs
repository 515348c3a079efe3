use payloads::SessionIdentity;
use payloads::requests::ListQuery;
use payloads::responses::Product;
use std::collections::BTreeSet;
use yew::prelude::*;

use crate::components::{
    ListStatusBanner, ListToolbar, PaginationControls, SortableHeader,
};
use crate::hooks::{use_fetch_with_fallback, use_list_query};
use crate::utils::time::format_date;
use crate::{get_api_client, sample_data};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: SessionIdentity,
}

/// Categories offered in the filter: those on screen plus the selected one,
/// so the selection survives a page with no rows.
fn category_options(
    products: &[Product],
    selected: Option<&str>,
) -> Vec<(AttrValue, AttrValue)> {
    products
        .iter()
        .map(|product| product.category.as_str())
        .chain(selected)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|category| {
            let category = AttrValue::from(category.to_string());
            (category.clone(), category)
        })
        .collect()
}

/// The backend filters products by category through the `status` param.
#[function_component]
pub fn ProductsPage(props: &Props) -> Html {
    let list = use_list_query(props.session.company_scope());
    let products = use_fetch_with_fallback(
        |query: ListQuery| async move {
            get_api_client().list_products(&query).await
        },
        sample_data::products,
        list.query.clone(),
    );

    let filter_options =
        category_options(&products.items, list.query.status.as_deref());

    let state = list.list_state("category");
    let window = state.apply(&products.items);

    html! {
        <div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Products"}
            </h1>

            <ListToolbar
                search={list.query.search.clone().unwrap_or_default()}
                placeholder="Search by name or SKU..."
                on_search={list.on_search.clone()}
                {filter_options}
                filter={list.query.status.clone().map(AttrValue::from)}
                filter_label="All categories"
                on_filter={list.on_status.clone()}
            />

            <ListStatusBanner
                context="products"
                is_loading={products.is_loading}
                using_fallback={products.using_fallback}
                error={products.error.clone()}
                on_retry={products.refresh.clone()}
            />

            if window.is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No products found."}
                    </p>
                </div>
            } else {
                <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead class="bg-neutral-50 dark:bg-neutral-800">
                            <tr>
                                <SortableHeader label="Name" field="name" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="SKU" field="sku" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Category" field="category" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Price" field="price" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                                <SortableHeader label="Added" field="created_at" sort={list.sort.clone()} on_sort={list.on_sort.clone()} />
                            </tr>
                        </thead>
                        <tbody class="bg-white dark:bg-neutral-900 divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for window.rows.iter().map(|product| html! {
                                <tr key={product.id.to_string()}>
                                    <td class="px-4 py-3 text-sm font-medium text-neutral-900 dark:text-neutral-100">
                                        {&product.name}
                                    </td>
                                    <td class="px-4 py-3 text-sm font-mono text-neutral-700 dark:text-neutral-300">
                                        {&product.sku}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {&product.category}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {format!("${:.2}", product.price)}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-neutral-700 dark:text-neutral-300">
                                        {format_date(product.created_at)}
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <PaginationControls
                pagination={products.pagination}
                on_page_change={list.on_page.clone()}
                is_loading={products.is_loading}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_options_are_distinct_and_keep_selection() {
        let products = sample_data::products();
        let options = category_options(&products, Some("gifts"));
        let values: Vec<&str> =
            options.iter().map(|(value, _)| value.as_str()).collect();
        assert_eq!(values, vec!["accessories", "brewing", "coffee", "gifts"]);
    }
}
