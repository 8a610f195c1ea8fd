//! Integration tests for Shop Chain.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-chain-integration-tests
//! ```
//!
//! Each test starts its own storefront on an ephemeral local port, loaded
//! with the bundled catalog feeds, and talks to it over real HTTP with a
//! cookie-keeping client, so every test gets a fresh visitor session.

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::Client;
use shop_chain_storefront::catalog::CatalogStore;
use shop_chain_storefront::config::StorefrontConfig;
use shop_chain_storefront::state::AppState;

/// A running storefront and a client bound to one visitor session.
///
/// Clones share the client's cookie store, so they act as the same visitor.
#[derive(Clone)]
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront on `127.0.0.1:0` and return a context for it.
    ///
    /// # Panics
    ///
    /// Panics if the bundled feeds cannot be loaded or the listener cannot
    /// bind. Both are test setup failures.
    #[allow(clippy::expect_used)]
    pub async fn start() -> Self {
        let data = data_dir();
        let static_dir = static_dir();
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "STOREFRONT_STATIC_DIR").then(|| static_dir.display().to_string())
        })
        .expect("default configuration");
        let catalog = CatalogStore::load(
            &data.join("products.json"),
            &data.join("featured_products.json"),
        )
        .expect("bundled catalog feeds");
        let app = shop_chain_storefront::app(AppState::new(config, catalog));

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and return the body text.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or non-success status.
    #[allow(clippy::expect_used)]
    pub async fn page(&self, path: &str) -> String {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        assert!(resp.status().is_success(), "GET {path}: {}", resp.status());
        resp.text().await.expect("response body")
    }

    /// POST a `product_id` form to `path`, following the redirect, and
    /// return the body of the page it lands on.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or non-success status.
    #[allow(clippy::expect_used)]
    pub async fn post_product(&self, path: &str, product_id: i32) -> String {
        let resp = self
            .client
            .post(self.url(path))
            .form(&[("product_id", product_id)])
            .send()
            .await
            .expect("POST request");
        assert!(resp.status().is_success(), "POST {path}: {}", resp.status());
        resp.text().await.expect("response body")
    }
}

/// Directory holding the storefront's bundled catalog feeds.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/data")
}

/// Directory holding the storefront's static assets.
#[must_use]
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static")
}
