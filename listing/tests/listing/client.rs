use listing::FetchError;
use payloads::ClientError;
use payloads::requests::ListQuery;
use reqwest::StatusCode;
use test_helpers::backend::FailureMode;
use test_helpers::mock::{self, ACME_COMPANY, GLOBEX_COMPANY};
use test_helpers::{assert_status_code, spawn_app, spawn_app_with};

#[tokio::test]
async fn campaigns_are_paged_by_the_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let query = ListQuery::for_company(Some(ACME_COMPANY)).with_page_size(10);

    let first = app.client.list_campaigns(&query).await?;
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 23);
    assert_eq!(first.total_pages, 3);

    let last = app.client.list_campaigns(&query.with_page(3)).await?;
    assert_eq!(last.items.len(), 3);
    assert!(
        last.items
            .iter()
            .all(|campaign| campaign.company_id == ACME_COMPANY)
    );
    Ok(())
}

#[tokio::test]
async fn query_reaches_the_backend_intact() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let query = ListQuery::for_company(Some(GLOBEX_COMPANY))
        .with_search("  kitchen ")
        .with_status(Some("active"))
        .with_page(1);

    let page = app.client.list_campaigns(&query).await?;
    assert_eq!(page.items.len(), 2);

    let recorded = app.requests_for("campaigns");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].query, query);
    assert_eq!(recorded[0].query.search.as_deref(), Some("kitchen"));
    Ok(())
}

#[tokio::test]
async fn bare_page_defaults_its_totals() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_failure(FailureMode::BarePage);

    let page = app
        .client
        .list_products(&ListQuery::for_company(Some(ACME_COMPANY)))
        .await?;

    assert_eq!(page.items.len(), 4);
    assert_eq!(page.total_count, 4);
    assert_eq!(page.total_pages, 1);
    Ok(())
}

#[tokio::test]
async fn error_statuses_keep_their_code() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let query = ListQuery::default();

    app.set_failure(FailureMode::Unauthorized);
    assert_status_code(
        app.client.list_vendors(&query).await,
        StatusCode::UNAUTHORIZED,
    );

    app.set_failure(FailureMode::Forbidden);
    assert_status_code(
        app.client.list_promotions(&query).await,
        StatusCode::FORBIDDEN,
    );

    app.set_failure(FailureMode::ServerError);
    let error: FetchError =
        app.client.list_discount_codes(&query).await.unwrap_err().into();
    assert_eq!(error.http_status(), Some(500));
    assert_eq!(error.notice().title, "Failed to load data");
    assert_eq!(
        error.notice().description.as_deref(),
        Some("Something went wrong")
    );
    Ok(())
}

#[tokio::test]
async fn html_body_is_not_json() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_failure(FailureMode::NonJson);

    let result = app.client.list_campaigns(&ListQuery::default()).await;
    assert!(matches!(result, Err(ClientError::NonJson(_))));

    let error = FetchError::from(result.unwrap_err());
    assert!(matches!(error, FetchError::NonJson { .. }));
    assert_eq!(error.notice().title, "Network error");
    Ok(())
}

#[tokio::test]
async fn wrong_shape_is_malformed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_failure(FailureMode::Malformed);

    let result = app.client.list_campaigns(&ListQuery::default()).await;
    assert!(matches!(result, Err(ClientError::Malformed(_))));

    let error = FetchError::from(result.unwrap_err());
    assert_eq!(error.notice().title, "Invalid response format");
    Ok(())
}

#[tokio::test]
async fn session_and_deletes() -> anyhow::Result<()> {
    let app = spawn_app_with(
        0,
        mock::sample_dataset(),
        Some(mock::vendor_session()),
    )
    .await;

    let session = app.client.current_session().await?;
    assert_eq!(session.company_scope(), Some(ACME_COMPANY));
    assert!(!session.is_admin());

    let query = ListQuery::for_company(session.company_scope());
    let codes = app.client.list_discount_codes(&query).await?;
    let doomed = codes.items[0].id;
    app.client.delete_discount_code(&doomed).await?;

    let after = app.client.list_discount_codes(&query).await?;
    assert_eq!(after.total_count, codes.total_count - 1);
    assert!(after.items.iter().all(|code| code.id != doomed));

    assert_status_code(
        app.client.delete_discount_code(&doomed).await,
        StatusCode::NOT_FOUND,
    );

    app.set_session(None);
    assert_status_code(
        app.client.current_session().await,
        StatusCode::UNAUTHORIZED,
    );
    Ok(())
}
