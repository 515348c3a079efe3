use std::cell::RefCell;

use listing::error::{MALFORMED_MESSAGE, NON_JSON_MESSAGE};
use listing::{
    FetchController, FetchError, LoadState, NoticeLog, Pagination, Resolution,
    Severity, load,
};
use payloads::requests::ListQuery;
use payloads::responses::Campaign;
use test_helpers::backend::FailureMode;
use test_helpers::mock::ACME_COMPANY;
use test_helpers::{TestApp, spawn_app};

use crate::{sample_campaign, unreachable_client};

type Controller = FetchController<ListQuery, Campaign>;

#[tokio::test]
async fn real_rows_replace_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller = RefCell::new(Controller::new(Vec::new()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };

    let query = ListQuery::for_company(Some(ACME_COMPANY)).with_page(2);
    let resolution = load(&controller, &query, &fetch, &log).await;

    assert_eq!(resolution, Some(Resolution::Committed(LoadState::Success)));
    let controller = controller.borrow();
    let view = controller.view();
    assert_eq!(view.items.len(), 10);
    assert!(!view.using_fallback);
    assert!(view.error.is_none());
    assert_eq!(
        view.pagination,
        Pagination {
            current_page: 2,
            total_pages: 3,
            total_count: 23,
        }
    );
    assert!(log.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_page_shows_sample_rows() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_failure(FailureMode::Empty);
    let fallback = vec![sample_campaign("mock")];
    let controller = RefCell::new(Controller::new(fallback.clone()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };

    load(&controller, &ListQuery::default(), &fetch, &log).await;

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::Empty);
    assert_eq!(controller.items(), fallback.as_slice());
    assert!(controller.using_fallback());
    assert!(controller.error().is_none());
    let notices = log.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "No data found");
    assert_eq!(notices[0].severity, Severity::Info);
    Ok(())
}

#[tokio::test]
async fn unauthorized_sets_the_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_failure(FailureMode::Unauthorized);
    let controller = RefCell::new(Controller::new(Vec::new()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };

    load(&controller, &ListQuery::default(), &fetch, &log).await;

    let controller = controller.borrow();
    assert!(controller.items().is_empty());
    assert_eq!(controller.error().and_then(FetchError::http_status), Some(401));
    assert_eq!(log.titles(), vec!["Authentication error"]);
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_uses_sample_data() -> anyhow::Result<()> {
    let client = unreachable_client();
    let fallback = vec![sample_campaign("m")];
    let controller = RefCell::new(Controller::new(fallback.clone()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &client;
        async move { client.list_campaigns(&query).await }
    };

    load(&controller, &ListQuery::default(), &fetch, &log).await;

    let controller = controller.borrow();
    assert_eq!(controller.state(), LoadState::Failed);
    assert_eq!(controller.items(), fallback.as_slice());
    assert!(matches!(
        controller.error(),
        Some(FetchError::Network { .. } | FetchError::Unknown)
    ));
    let notices = log.notices();
    assert_eq!(notices[0].title, "Network error");
    assert_eq!(notices[0].severity, Severity::Warning);
    assert!(
        notices[0]
            .description
            .as_deref()
            .is_some_and(|text| text.contains("sample data"))
    );
    Ok(())
}

#[tokio::test]
async fn unchanged_params_fetch_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller = RefCell::new(Controller::new(Vec::new()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };

    let query = ListQuery::for_company(Some(ACME_COMPANY)).with_search("win");
    assert!(load(&controller, &query, &fetch, &log).await.is_some());
    assert!(load(&controller, &query.clone(), &fetch, &log).await.is_none());
    assert_eq!(app.requests_for("campaigns").len(), 1);

    let ticket = controller.borrow_mut().refresh().unwrap();
    listing::drive(&controller, ticket, &fetch, &log).await;
    assert_eq!(app.requests_for("campaigns").len(), 2);
    Ok(())
}

#[tokio::test]
async fn delete_then_replace_rows_locally() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller = RefCell::new(Controller::new(Vec::new()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };
    let query = ListQuery::for_company(Some(ACME_COMPANY));
    load(&controller, &query, &fetch, &log).await;

    let doomed = controller.borrow().items()[0].id;
    app.client.delete_campaign(&doomed).await?;
    let remaining: Vec<Campaign> = controller
        .borrow()
        .items()
        .iter()
        .filter(|campaign| campaign.id != doomed)
        .cloned()
        .collect();
    let before = controller.borrow().pagination();
    controller.borrow_mut().replace_items(remaining);
    assert!(
        app.backend
            .dataset()
            .campaigns
            .iter()
            .all(|campaign| campaign.id != doomed)
    );

    let controller = controller.borrow();
    assert_eq!(controller.items().len(), 9);
    assert_eq!(controller.pagination(), before);
    assert_eq!(app.requests_for("campaigns").len(), 1);
    Ok(())
}

/// Load the first page with the backend failing in `mode`, over a
/// one-row fallback set.
async fn load_failing(
    app: &TestApp,
    mode: FailureMode,
) -> (Controller, NoticeLog) {
    app.set_failure(mode);
    let controller =
        RefCell::new(Controller::new(vec![sample_campaign("fallback")]));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move { client.list_campaigns(&query).await }
    };

    let resolution = load(&controller, &ListQuery::default(), &fetch, &log).await;
    assert_eq!(resolution, Some(Resolution::Committed(LoadState::Failed)));
    (controller.into_inner(), log)
}

fn assert_shows_fallback(controller: &Controller) {
    assert_eq!(controller.state(), LoadState::Failed);
    assert!(controller.using_fallback());
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].title, "fallback");
    assert_eq!(controller.pagination(), Pagination::single_page(1));
}

#[tokio::test]
async fn malformed_envelope_falls_back() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (controller, log) = load_failing(&app, FailureMode::Malformed).await;

    assert_shows_fallback(&controller);
    let error = controller.error().expect("malformed page keeps its error");
    assert!(matches!(error, FetchError::Malformed { .. }));
    assert_eq!(error.to_string(), MALFORMED_MESSAGE);
    assert_eq!(log.len(), 1);
    assert_eq!(log.titles(), vec![MALFORMED_MESSAGE]);
    assert_eq!(log.notices()[0].severity, Severity::Error);
    Ok(())
}

#[tokio::test]
async fn html_body_falls_back() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (controller, log) = load_failing(&app, FailureMode::NonJson).await;

    assert_shows_fallback(&controller);
    let error = controller.error().expect("non-JSON body keeps its error");
    assert!(matches!(error, FetchError::NonJson { .. }));
    assert_eq!(error.to_string(), NON_JSON_MESSAGE);
    assert_eq!(log.len(), 1);
    assert_eq!(log.titles(), vec!["Network error"]);
    Ok(())
}

#[tokio::test]
async fn forbidden_falls_back() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (controller, log) = load_failing(&app, FailureMode::Forbidden).await;

    assert_shows_fallback(&controller);
    assert_eq!(controller.error().and_then(FetchError::http_status), Some(403));
    let notices = log.notices();
    assert_eq!(log.len(), 1);
    assert_eq!(notices[0].title, "Access denied");
    assert_eq!(
        notices[0].description.as_deref(),
        Some("You don't have permission to view this data.")
    );
    Ok(())
}

#[tokio::test]
async fn server_error_falls_back() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (controller, log) = load_failing(&app, FailureMode::ServerError).await;

    assert_shows_fallback(&controller);
    let error = controller.error().expect("server error keeps its error");
    assert_eq!(error.http_status(), Some(500));
    assert_eq!(error.to_string(), "Something went wrong");
    let notices = log.notices();
    assert_eq!(log.len(), 1);
    assert_eq!(notices[0].title, "Failed to load data");
    assert_eq!(notices[0].severity, Severity::Error);
    Ok(())
}
