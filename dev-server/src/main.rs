//! Development server for ReviewBrothers dashboard UI work
//!
//! Serves the mock backend on a fixed port, populated with sample vendors,
//! campaigns, promotions, products and discount codes. Failure modes can be
//! picked at startup with `MOCK_FAILURE` to try the UI's fallback paths.
//!
//! Usage: cargo run -p dev-server

use actix_web::web;
use anyhow::Result;
use payloads::SessionIdentity;
use test_helpers::backend::{self, Config, FailureMode, MockBackend};
use test_helpers::{mock, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting ReviewBrothers development server");

    let mut config = Config::from_env()?;
    let session = session_from_env();
    let failure = failure_from_env()?;

    let dataset = mock::sample_dataset();
    let backend = web::Data::new(MockBackend::new(dataset.clone(), session));
    backend.set_failure(failure);

    let server = backend::build(&mut config, backend.clone())?;
    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = server.await {
            telemetry::log_error(e);
        }
    });

    info!("🎯 Development server ready!");
    info!("   API: http://{}:{}", config.ip, config.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );
    info!("   Failure mode: {failure:?}");
    info!("");
    mock::print_summary(&dataset);
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    handle.stop(true).await;
    Ok(())
}

/// `MOCK_ROLE=vendor` signs in as the Acme owner, `none` signs out.
/// Anything else is an admin.
fn session_from_env() -> Option<SessionIdentity> {
    match std::env::var("MOCK_ROLE").as_deref() {
        Ok("vendor") => Some(mock::vendor_session()),
        Ok("none") => None,
        _ => Some(mock::admin_session()),
    }
}

fn failure_from_env() -> Result<FailureMode> {
    let Ok(mode) = std::env::var("MOCK_FAILURE") else {
        return Ok(FailureMode::Healthy);
    };
    Ok(match mode.as_str() {
        "" | "healthy" => FailureMode::Healthy,
        "unauthorized" => FailureMode::Unauthorized,
        "forbidden" => FailureMode::Forbidden,
        "server_error" => FailureMode::ServerError,
        "non_json" => FailureMode::NonJson,
        "malformed" => FailureMode::Malformed,
        "empty" => FailureMode::Empty,
        "bare_page" => FailureMode::BarePage,
        other => anyhow::bail!("unknown MOCK_FAILURE {other:?}"),
    })
}
