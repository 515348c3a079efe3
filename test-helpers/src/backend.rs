//! An in-process stand-in for the dashboard's REST backend.
//!
//! It serves the list endpoints the dashboard reads from, scoped and paged
//! the way the real backend does it, and can be switched into failure modes
//! to exercise the client's fallback paths.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{
    App, HttpResponse, HttpServer, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, post, web,
};
use payloads::requests::ListQuery;
use payloads::responses::{
    Campaign, DiscountCode, PageEnvelope, Product, Promotion, Vendor,
};
use payloads::{CampaignId, CompanyId, DiscountCodeId, SessionIdentity};
use serde::Serialize;
use std::net::TcpListener;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// How list endpoints should misbehave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Serve real pages.
    #[default]
    Healthy,
    /// Answer 401.
    Unauthorized,
    /// Answer 403.
    Forbidden,
    /// Answer 500.
    ServerError,
    /// Answer 200 with an HTML body.
    NonJson,
    /// Answer 200 with JSON that lacks the `data` array.
    Malformed,
    /// Answer 200 with an empty page.
    Empty,
    /// Serve real rows but leave out `totalPages` and `totalCount`.
    BarePage,
}

/// Rows served by the backend.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub vendors: Vec<Vendor>,
    pub campaigns: Vec<Campaign>,
    pub promotions: Vec<Promotion>,
    pub products: Vec<Product>,
    pub discount_codes: Vec<DiscountCode>,
}

/// A list request as the backend received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub resource: &'static str,
    pub query: ListQuery,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    dataset: Mutex<Dataset>,
    session: Mutex<Option<SessionIdentity>>,
    failure: Mutex<FailureMode>,
    requests: Mutex<Vec<RecordedRequest>>,
}

// A handler panicking mid-request shouldn't wedge the rest of a test.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockBackend {
    pub fn new(dataset: Dataset, session: Option<SessionIdentity>) -> Self {
        Self {
            dataset: Mutex::new(dataset),
            session: Mutex::new(session),
            ..Self::default()
        }
    }

    pub fn set_failure(&self, mode: FailureMode) {
        *lock(&self.failure) = mode;
    }

    pub fn failure(&self) -> FailureMode {
        *lock(&self.failure)
    }

    pub fn set_session(&self, session: Option<SessionIdentity>) {
        *lock(&self.session) = session;
    }

    pub fn dataset(&self) -> Dataset {
        lock(&self.dataset).clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    fn record(&self, resource: &'static str, query: &ListQuery) {
        lock(&self.requests).push(RecordedRequest {
            resource,
            query: query.clone(),
        });
    }
}

/// Fields the backend filters on.
pub trait Record {
    fn company_id(&self) -> CompanyId;
    fn search_text(&self) -> Vec<&str>;
    fn status(&self) -> &str;
}

impl Record for Vendor {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.company_name.as_str(), self.contact_email.as_str()]
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Record for Campaign {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str()];
        text.extend(self.description.as_deref());
        text
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Record for Promotion {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.offer_type.as_str()]
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Record for Product {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str()]
    }

    fn status(&self) -> &str {
        self.category.as_str()
    }
}

impl Record for DiscountCode {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.code.as_str()];
        text.extend(self.description.as_deref());
        text
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

/// Filter and page `rows` the way the backend does.
pub fn select_page<T: Record + Clone>(
    rows: &[T],
    query: &ListQuery,
) -> PageEnvelope<T> {
    let search = query.search.as_deref().map(str::to_lowercase);
    let matching: Vec<&T> = rows
        .iter()
        .filter(|row| {
            query
                .company_id
                .is_none_or(|company_id| row.company_id() == company_id)
        })
        .filter(|row| {
            query
                .status
                .as_deref()
                .is_none_or(|status| row.status() == status)
        })
        .filter(|row| {
            search.as_deref().is_none_or(|search| {
                row.search_text()
                    .iter()
                    .any(|text| text.to_lowercase().contains(search))
            })
        })
        .collect();

    let page_size = query.page_size_or_default() as usize;
    let total_count = matching.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let start = (query.page_or_first() as usize - 1).saturating_mul(page_size);
    PageEnvelope {
        data: matching
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect(),
        total_pages: Some(u32::try_from(total_pages).unwrap_or(u32::MAX)),
        total_count: Some(total_count as u64),
    }
}

fn list_response<T: Record + Clone + Serialize>(
    backend: &MockBackend,
    resource: &'static str,
    rows: &[T],
    query: &ListQuery,
) -> HttpResponse {
    backend.record(resource, query);
    match backend.failure() {
        FailureMode::Healthy => HttpResponse::Ok().json(select_page(rows, query)),
        FailureMode::Unauthorized => {
            HttpResponse::Unauthorized().body("Authentication failed")
        }
        FailureMode::Forbidden => HttpResponse::Forbidden().body("Forbidden"),
        FailureMode::ServerError => {
            HttpResponse::InternalServerError().body("Something went wrong")
        }
        FailureMode::NonJson => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html><body><h1>502 Bad Gateway</h1></body></html>"),
        FailureMode::Malformed => HttpResponse::Ok().json(serde_json::json!({
            "items": select_page(rows, query).data,
            "count": rows.len(),
        })),
        FailureMode::Empty => HttpResponse::Ok().json(PageEnvelope::<T> {
            data: Vec::new(),
            total_pages: Some(1),
            total_count: Some(0),
        }),
        FailureMode::BarePage => HttpResponse::Ok().json(PageEnvelope {
            data: select_page(rows, query).data,
            total_pages: None,
            total_count: None,
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError,
    #[error("Not found")]
    NotFound,
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError => HttpResponse::Unauthorized().body(self.to_string()),
            Self::NotFound => HttpResponse::NotFound().body(self.to_string()),
        }
    }
}

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(current_session)
        .service(list_vendors)
        .service(list_campaigns)
        .service(list_promotions)
        .service(list_products)
        .service(list_discount_codes)
        .service(delete_campaign)
        .service(delete_discount_code)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[get("/session")]
pub async fn current_session(
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, APIError> {
    let session = lock(&backend.session).clone();
    session
        .map(|session| HttpResponse::Ok().json(session))
        .ok_or(APIError::AuthError)
}

#[tracing::instrument(skip(backend))]
#[get("/vendors")]
pub async fn list_vendors(
    query: web::Query<ListQuery>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let rows = lock(&backend.dataset).vendors.clone();
    list_response(&backend, "vendors", &rows, &query)
}

#[tracing::instrument(skip(backend))]
#[get("/campaigns")]
pub async fn list_campaigns(
    query: web::Query<ListQuery>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let rows = lock(&backend.dataset).campaigns.clone();
    list_response(&backend, "campaigns", &rows, &query)
}

#[tracing::instrument(skip(backend))]
#[get("/promotions")]
pub async fn list_promotions(
    query: web::Query<ListQuery>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let rows = lock(&backend.dataset).promotions.clone();
    list_response(&backend, "promotions", &rows, &query)
}

#[tracing::instrument(skip(backend))]
#[get("/products")]
pub async fn list_products(
    query: web::Query<ListQuery>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let rows = lock(&backend.dataset).products.clone();
    list_response(&backend, "products", &rows, &query)
}

#[tracing::instrument(skip(backend))]
#[get("/discount_codes")]
pub async fn list_discount_codes(
    query: web::Query<ListQuery>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let rows = lock(&backend.dataset).discount_codes.clone();
    list_response(&backend, "discount_codes", &rows, &query)
}

#[tracing::instrument(skip(backend))]
#[post("/delete_campaign")]
pub async fn delete_campaign(
    campaign_id: web::Json<CampaignId>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, APIError> {
    let mut dataset = lock(&backend.dataset);
    let before = dataset.campaigns.len();
    dataset.campaigns.retain(|campaign| campaign.id != *campaign_id);
    if dataset.campaigns.len() == before {
        return Err(APIError::NotFound);
    }
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(backend))]
#[post("/delete_discount_code")]
pub async fn delete_discount_code(
    discount_code_id: web::Json<DiscountCodeId>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, APIError> {
    let mut dataset = lock(&backend.dataset);
    let before = dataset.discount_codes.len();
    dataset.discount_codes.retain(|code| code.id != *discount_code_id);
    if dataset.discount_codes.len() == before {
        return Err(APIError::NotFound);
    }
    Ok(HttpResponse::Ok().finish())
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match var("PORT") {
                Ok(port) => port.parse().context("PORT is not a port number")?,
                Err(_) => 8000,
            },
            allowed_origins,
        })
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    backend: web::Data<MockBackend>,
) -> std::io::Result<Server> {
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            allowed_origins.iter().fold(
                Cors::default()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        App::new()
            .wrap(cors)
            .service(api_services())
            .app_data(backend.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn pages_are_scoped_and_counted() {
        let dataset = mock::sample_dataset();
        let acme = ListQuery::for_company(Some(mock::ACME_COMPANY))
            .with_page_size(5);

        let first = select_page(&dataset.campaigns, &acme);
        let expected = dataset
            .campaigns
            .iter()
            .filter(|campaign| campaign.company_id == mock::ACME_COMPANY)
            .count();
        assert_eq!(first.total_count, Some(expected as u64));
        assert_eq!(first.data.len(), 5.min(expected));
        assert!(
            first
                .data
                .iter()
                .all(|campaign| campaign.company_id == mock::ACME_COMPANY)
        );

        let past_end = select_page(&dataset.campaigns, &acme.with_page(99));
        assert!(past_end.data.is_empty());
        assert!(past_end.total_pages >= Some(1));
    }
}
