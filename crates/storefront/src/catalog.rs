//! Catalog feed loading.
//!
//! The product and featured-product feeds are JSON files read once at
//! startup and kept in memory for the life of the process.

use std::path::Path;
use std::sync::Arc;

use shop_chain_core::{Catalog, Product, ProductId};

/// In-memory catalog and featured products.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Catalog>,
    featured: Arc<Catalog>,
}

impl CatalogStore {
    /// Load both feeds from disk.
    ///
    /// A missing featured feed is tolerated and yields an empty side panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read, or if either feed is
    /// malformed.
    pub fn load(catalog_path: &Path, featured_path: &Path) -> Result<Self, CatalogLoadError> {
        let products = Self::load_feed(catalog_path)?;
        tracing::info!(
            path = %catalog_path.display(),
            products = products.len(),
            "Loaded catalog"
        );

        let featured = if featured_path.exists() {
            let featured = Self::load_feed(featured_path)?;
            tracing::info!(
                path = %featured_path.display(),
                products = featured.len(),
                "Loaded featured products"
            );
            featured
        } else {
            tracing::warn!("Featured products feed does not exist: {:?}", featured_path);
            Catalog::default()
        };

        Ok(Self::new(products, featured))
    }

    /// Wrap already-parsed feeds.
    #[must_use]
    pub fn new(products: Catalog, featured: Catalog) -> Self {
        Self {
            products: Arc::new(products),
            featured: Arc::new(featured),
        }
    }

    fn load_feed(path: &Path) -> Result<Catalog, CatalogLoadError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogLoadError::Io(format!("{}: {e}", path.display())))?;
        Catalog::from_json(&json)
            .map_err(|e| CatalogLoadError::Parse(format!("{}: {e}", path.display())))
    }

    #[must_use]
    pub fn products(&self) -> &Catalog {
        &self.products
    }

    #[must_use]
    pub fn featured(&self) -> &Catalog {
        &self.featured
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.find(id)
    }
}

/// Errors that can occur while loading catalog feeds.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
