pub mod backend;
pub mod mock;
pub mod telemetry;

use actix_web::web;
use backend::{Dataset, FailureMode, MockBackend, RecordedRequest};
use payloads::SessionIdentity;
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub backend: web::Data<MockBackend>,
}

impl TestApp {
    pub fn set_failure(&self, mode: FailureMode) {
        self.backend.set_failure(mode);
    }

    pub fn set_session(&self, session: Option<SessionIdentity>) {
        self.backend.set_session(session);
    }

    /// List requests the backend has received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.requests()
    }

    pub fn requests_for(&self, resource: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.resource == resource)
            .collect()
    }
}

pub async fn spawn_app_with(
    port: u16,
    dataset: Dataset,
    session: Option<SessionIdentity>,
) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = backend::Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };
    let backend = web::Data::new(MockBackend::new(dataset, session));

    let server = backend::build(&mut config, backend.clone()).unwrap();
    tokio::spawn(server);

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
        backend,
    }
}

/// Sample data, signed in as an admin.
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with(port, mock::sample_dataset(), Some(mock::admin_session()))
        .await
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
