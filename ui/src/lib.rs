use payloads::{APIClient, SessionIdentity};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
pub mod sample_data;
mod state;
mod utils;

use components::{MainLayout, SessionPageWrapper, ToastContainer};
use contexts::toast::ToastProvider;
use pages::{
    CampaignsPage, DiscountCodesPage, NotFoundPage, ProductsPage,
    PromotionsPage, VendorsPage,
};
pub(crate) use state::{SessionState, State};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    hooks::use_session();

    html! {
        <ToastProvider>
            <BrowserRouter>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/vendors")]
    Vendors,
    #[at("/campaigns")]
    Campaigns,
    #[at("/promotions")]
    Promotions,
    #[at("/products")]
    Products,
    #[at("/discount-codes")]
    DiscountCodes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries in the navigation bar, in order.
    pub const NAV: [(Route, &'static str); 5] = [
        (Route::Campaigns, "Campaigns"),
        (Route::Promotions, "Promotions"),
        (Route::Products, "Products"),
        (Route::DiscountCodes, "Discount Codes"),
        (Route::Vendors, "Vendors"),
    ];
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => return html! { <Redirect<Route> to={Route::Campaigns} /> },
        Route::NotFound => return html! { <NotFoundPage /> },
        Route::Vendors => Callback::from(|session: SessionIdentity| {
            html! { <VendorsPage {session} /> }
        }),
        Route::Campaigns => Callback::from(|session: SessionIdentity| {
            html! { <CampaignsPage {session} /> }
        }),
        Route::Promotions => Callback::from(|session: SessionIdentity| {
            html! { <PromotionsPage {session} /> }
        }),
        Route::Products => Callback::from(|session: SessionIdentity| {
            html! { <ProductsPage {session} /> }
        }),
        Route::DiscountCodes => Callback::from(|session: SessionIdentity| {
            html! { <DiscountCodesPage {session} /> }
        }),
    };
    html! { <SessionPageWrapper children={page} /> }
}
