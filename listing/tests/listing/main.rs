mod client;
mod fallback;
mod race;

use payloads::responses::{Campaign, CampaignStatus};
use payloads::{CampaignId, CompanyId};
use test_helpers::spawn_app;
use uuid::Uuid;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> payloads::APIClient {
    payloads::APIClient {
        address: "http://127.0.0.1:9".into(),
        inner_client: reqwest::Client::new(),
    }
}

pub fn sample_campaign(title: &str) -> Campaign {
    Campaign {
        id: CampaignId(Uuid::new_v4()),
        company_id: CompanyId(Uuid::nil()),
        title: title.into(),
        description: None,
        status: CampaignStatus::Draft,
        reviews_collected: 0,
        created_at: None,
    }
}
