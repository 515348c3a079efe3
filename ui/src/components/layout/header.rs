use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let current = use_route::<Route>();
    let is_admin = state.identity().is_some_and(|identity| identity.is_admin());

    let links = Route::NAV
        .into_iter()
        // Only admins manage vendors
        .filter(|(route, _)| *route != Route::Vendors || is_admin)
        .map(|(route, label)| {
            let class = if current.as_ref() == Some(&route) {
                "px-3 py-2 rounded-md text-sm font-medium bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-white"
            };
            html! {
                <Link<Route> to={route} classes={classes!(class)}>{label}</Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"ReviewBrothers"}</h1>
                    </div>
                    <nav class="flex items-center space-x-2">
                        {links}
                    </nav>
                    if let Some(identity) = state.identity() {
                        <div class="flex items-center space-x-2 text-sm text-neutral-600 dark:text-neutral-400">
                            <span>{&identity.email}</span>
                            if identity.is_admin() {
                                <span class="px-2 py-0.5 text-xs rounded-full bg-neutral-200 dark:bg-neutral-700">{"Admin"}</span>
                            } else if identity.can_manage_users() {
                                <span class="px-2 py-0.5 text-xs rounded-full bg-neutral-200 dark:bg-neutral-700">{"Owner"}</span>
                            }
                        </div>
                    }
                </div>
            </div>
        </header>
    }
}
