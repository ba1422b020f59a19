//! Shared utilities for integration testing.

use std::sync::Arc;

use tokio::net::TcpListener;

use activities_api::config::AppConfig;
use activities_api::http::HttpServer;
use activities_api::lifecycle::Shutdown;
use activities_api::registry::{seed, ActivityRegistry};

/// A running server instance with its own registry.
pub struct TestApp {
    address: String,
    // Dropping the sender would close the shutdown channel and stop the
    // server, so the handle rides along for the test's lifetime.
    _shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

/// Boot the full server on an ephemeral port with the built-in seed.
///
/// Every call gets an isolated registry, so tests never observe each other's
/// mutations.
pub async fn spawn_app() -> TestApp {
    let config = AppConfig::default();
    let registry =
        Arc::new(ActivityRegistry::from_seed(seed::default_activities()).unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&config, registry);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp {
        address,
        _shutdown: shutdown,
    }
}

/// Client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Client that surfaces redirects instead of following them.
#[allow(dead_code)]
pub fn non_following_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
