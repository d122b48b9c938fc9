use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::{DomainError, DomainResult, Entity};

/// Product identifier.
///
/// Any string is accepted, including the empty string. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh identifier for products that have none assigned externally.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A sellable catalog item.
///
/// Plain data: every field can be overwritten at any time and no value is
/// rejected. Use [`Product::validate`] to ask whether the current values make
/// sense for selling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    category: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<ProductId>) {
        let id = id.into();
        tracing::trace!(from = %self.id, to = %id, "product id reassigned");
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        tracing::trace!(product_id = %self.id, field = "name", "product updated");
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        tracing::trace!(product_id = %self.id, field = "description", "product updated");
    }

    /// Unit price. Negative and non-finite values are stored as given.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        tracing::trace!(product_id = %self.id, field = "price", price, "product updated");
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        tracing::trace!(product_id = %self.id, field = "category", "product updated");
    }

    /// Check the current values against intended use.
    ///
    /// Never called by the constructor or setters; the product is left untouched.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }

        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        if self.price < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {})",
                self.price
            )));
        }

        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
