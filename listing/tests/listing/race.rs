use std::cell::RefCell;
use std::time::Duration;

use listing::{FetchController, LoadState, NoticeLog, Resolution, drive};
use payloads::requests::ListQuery;
use payloads::responses::Campaign;
use test_helpers::mock::ACME_COMPANY;
use test_helpers::spawn_app;

#[tokio::test]
async fn slow_response_for_old_params_is_dropped() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller =
        RefCell::new(FetchController::<ListQuery, Campaign>::new(Vec::new()));
    let log = NoticeLog::new();
    let fetch = |query: ListQuery| {
        let client = &app.client;
        async move {
            if query.page_or_first() == 1 {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            client.list_campaigns(&query).await
        }
    };

    let base = ListQuery::for_company(Some(ACME_COMPANY));
    let second_page = base.clone().with_page(2);
    let a = controller.borrow_mut().observe(&base.with_page(1));
    let b = controller.borrow_mut().observe(&second_page);
    let (Some(a), Some(b)) = (a, b) else {
        panic!("both param changes should issue a ticket");
    };

    let (first, second) = tokio::join!(
        drive(&controller, a, &fetch, &log),
        drive(&controller, b, &fetch, &log),
    );

    assert_eq!(first, Resolution::Stale);
    assert_eq!(second, Resolution::Committed(LoadState::Success));
    assert_eq!(app.requests_for("campaigns").len(), 2);

    let expected = app.client.list_campaigns(&second_page).await?;
    let controller = controller.borrow();
    assert_eq!(controller.pagination().current_page, 2);
    assert_eq!(controller.items(), expected.items.as_slice());
    Ok(())
}
