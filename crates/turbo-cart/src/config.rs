//! Store configuration: catalog, gift and threshold.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cart::{CartEngine, GiftRule};
use crate::catalog::{Catalog, GiftSpec, Product};
use crate::error::CartError;
use crate::money::Money;

/// Externally supplied store data that seeds a cart session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Subtotal at or above which the gift is granted.
    pub threshold: Money,

    /// Congratulation text; `{gift}` is replaced by the gift name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,

    /// The free gift.
    pub gift: GiftSpec,

    /// Purchasable products, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl StoreConfig {
    /// Load config from a file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CartError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Save config to a file, picking the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CartError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_toml_string()?
        };

        std::fs::write(path, content).map_err(|source| CartError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, CartError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every entry and the gift/catalog separation.
    pub fn validate(&self) -> Result<(), CartError> {
        self.catalog().map(|_| ())
    }

    /// Build the validated catalog.
    pub fn catalog(&self) -> Result<Catalog, CartError> {
        if self.threshold.is_negative() {
            return Err(CartError::NegativeThreshold(self.threshold));
        }
        self.gift.validate()?;
        if self
            .gift_message
            .as_deref()
            .is_some_and(|template| template.trim().is_empty())
        {
            return Err(CartError::BlankGiftMessage);
        }
        let catalog = Catalog::new(self.products.clone())?;
        if catalog.contains(&self.gift.id) {
            return Err(CartError::GiftInCatalog(self.gift.id.clone()));
        }
        Ok(catalog)
    }

    /// Build the cart engine for this store.
    pub fn engine(&self) -> CartEngine {
        let rule = GiftRule::new(self.gift.clone(), self.threshold);
        let rule = match &self.gift_message {
            Some(template) => rule.with_message_template(template.clone()),
            None => rule,
        };
        CartEngine::new(rule)
    }

    /// A small electronics store with a wireless mouse as the gift.
    pub fn demo() -> Self {
        Self {
            threshold: Money::new(1000),
            gift_message: None,
            gift: GiftSpec::new("wireless-mouse", "Wireless Mouse", 0),
            products: vec![
                Product::new("laptop", "Laptop", 500),
                Product::new("smartphone", "Smartphone", 300),
                Product::new("headphones", "Headphones", 100),
                Product::new("smartwatch", "Smartwatch", 150),
            ],
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::demo()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
