//! Per-visitor cart state.
//!
//! Both cart pages of one visitor live in a single [`VisitorCarts`] value
//! behind an async mutex. Handlers hold the lock across load, transition and
//! write back, so concurrent requests from the same visitor apply one after
//! another instead of overwriting each other.
//!
//! Entries are kept in a `moka` cache keyed by the visitor id stored in the
//! session, and are evicted after the same idle period as the session itself.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use shop_chain_core::{Catalog, CatalogBrowser, LineAction, StandaloneCart};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Maximum number of visitors whose carts are held at once.
const MAX_VISITORS: u64 = 100_000;

/// State of both cart pages for one visitor.
#[derive(Debug, Default)]
pub struct VisitorCarts {
    standalone: Option<StandaloneCart>,
    browser: CatalogBrowser,
}

impl VisitorCarts {
    /// The standalone cart, seeded from `catalog` on first access.
    pub fn standalone(&mut self, catalog: &Catalog) -> &StandaloneCart {
        self.standalone.get_or_insert_with(|| {
            let seeded = StandaloneCart::seeded(catalog);
            tracing::debug!(lines = seeded.cart().len(), "Seeded standalone cart from catalog");
            seeded
        })
    }

    /// Apply a line action to the standalone cart, seeding it first if needed.
    pub fn apply_standalone(&mut self, catalog: &Catalog, action: LineAction) -> &StandaloneCart {
        let current = self
            .standalone
            .take()
            .unwrap_or_else(|| StandaloneCart::seeded(catalog));
        self.standalone.insert(current.apply(action))
    }

    /// The catalog page state.
    #[must_use]
    pub const fn browser(&self) -> &CatalogBrowser {
        &self.browser
    }

    /// Replace the catalog page state with `f` applied to it.
    pub fn update_browser(
        &mut self,
        f: impl FnOnce(CatalogBrowser) -> CatalogBrowser,
    ) -> &CatalogBrowser {
        self.browser = f(std::mem::take(&mut self.browser));
        &self.browser
    }
}

/// Cart state for all visitors.
#[derive(Clone)]
pub struct CartRegistry {
    cache: Cache<Uuid, Arc<Mutex<VisitorCarts>>>,
}

impl CartRegistry {
    /// Create a registry whose entries expire after `idle` without access.
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_VISITORS)
            .time_to_idle(idle)
            .build();
        Self { cache }
    }

    /// Lock the carts of `visitor`, creating empty state on first use.
    ///
    /// The guard must be held for the whole read-modify-write of a request.
    pub async fn lock(&self, visitor: Uuid) -> OwnedMutexGuard<VisitorCarts> {
        let entry = self
            .cache
            .get_with(visitor, async { Arc::new(Mutex::new(VisitorCarts::default())) })
            .await;
        entry.lock_owned().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_chain_core::ProductId;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "name": "Toe Ring", "price": 150, "image": "1.png"},
                {"id": 2, "name": "Nose Pin", "price": 250, "image": "2.png"}
            ]"#,
        )
        .unwrap()
    }

    fn registry() -> CartRegistry {
        CartRegistry::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_standalone_seeded_once() {
        let registry = registry();
        let catalog = catalog();
        let visitor = Uuid::new_v4();

        {
            let mut carts = registry.lock(visitor).await;
            assert_eq!(carts.standalone(&catalog).cart().len(), 2);
            carts.apply_standalone(&catalog, LineAction::Remove(ProductId::new(1)));
        }

        let mut carts = registry.lock(visitor).await;
        assert_eq!(carts.standalone(&catalog).cart().len(), 1);
    }

    #[tokio::test]
    async fn test_pages_keep_separate_carts() {
        let registry = registry();
        let catalog = catalog();
        let mut carts = registry.lock(Uuid::new_v4()).await;

        let product = catalog.find(ProductId::new(2)).unwrap();
        carts.update_browser(|browser| browser.add(product));

        assert_eq!(carts.standalone(&catalog).cart().len(), 2);
        assert_eq!(carts.browser().cart().len(), 1);
        assert!(carts.browser().is_drawer_open());
    }

    #[tokio::test]
    async fn test_visitors_are_isolated() {
        let registry = registry();
        let catalog = catalog();
        let product = catalog.find(ProductId::new(1)).unwrap();

        registry
            .lock(Uuid::new_v4())
            .await
            .update_browser(|browser| browser.add(product));

        let carts = registry.lock(Uuid::new_v4()).await;
        assert!(carts.browser().cart().is_empty());
        assert!(!carts.browser().is_drawer_open());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_all_apply() {
        let registry = registry();
        let catalog = Arc::new(catalog());
        let visitor = Uuid::new_v4();

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..50 {
            let registry = registry.clone();
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move {
                let mut carts = registry.lock(visitor).await;
                carts.apply_standalone(&catalog, LineAction::Increase(ProductId::new(2)));
                tokio::task::yield_now().await;
                let product = catalog.find(ProductId::new(1)).unwrap();
                carts.update_browser(|browser| browser.add(product));
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        let mut carts = registry.lock(visitor).await;
        let increased = carts
            .standalone(&catalog)
            .cart()
            .get(ProductId::new(2))
            .unwrap()
            .quantity
            .get();
        assert_eq!(increased, 51);
        assert_eq!(carts.browser().cart().item_count(), 50);
    }
}
