use chrono::NaiveDate;
use serde::Serialize;

use solidforge_core::{DomainError, DomainResult, ValueObject};

/// Format used for the `created_at` / `updated_at` date stamps.
pub const DATE_STAMP_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date stamp.
pub fn parse_date_stamp(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_STAMP_FORMAT)
        .map_err(|e| DomainError::validation(format!("invalid date stamp {raw:?}: {e}")))
}

/// Immutable catalog product.
///
/// Only obtainable through [`ProductBuilder::build`], so every `Product` has a
/// name and a strictly positive price. There are no setters; "changing" a
/// product means building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    description: Option<String>,
    price: i64,
    brand: Option<String>,
    category: Option<String>,
    discount: i64,
    created_at: Option<NaiveDate>,
    updated_at: Option<NaiveDate>,
    images: Vec<String>,
}

impl ValueObject for Product {}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Price in whole currency units.
    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Discount as a percentage.
    pub fn discount(&self) -> i64 {
        self.discount
    }

    pub fn created_at(&self) -> Option<NaiveDate> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<NaiveDate> {
        self.updated_at
    }

    /// Image filenames, in the order they were supplied.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Price after applying the percentage discount (rounded down to whole
    /// units). Discounts outside `0..=100` are clamped.
    pub fn discounted_price(&self) -> i64 {
        let pct = i128::from(self.discount.clamp(0, 100));
        let off = i128::from(self.price) * pct / 100;
        // |off| <= |price|, so the narrowing is lossless.
        self.price - off as i64
    }
}

/// Fluent builder for [`Product`].
///
/// ```ignore
/// let product = ProductBuilder::new()
///     .name("iPhone 15 Pro")
///     .price(1399)?
///     .brand("Apple")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductBuilder {
    name: Option<String>,
    description: Option<String>,
    price: i64,
    brand: Option<String>,
    category: Option<String>,
    discount: i64,
    created_at: Option<NaiveDate>,
    updated_at: Option<NaiveDate>,
    images: Vec<String>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the price. Negative prices are rejected immediately; zero is
    /// accepted here and rejected by [`ProductBuilder::build`].
    pub fn price(mut self, price: i64) -> DomainResult<Self> {
        if price < 0 {
            tracing::warn!(price, "rejected negative product price");
            return Err(DomainError::validation("price must be positive"));
        }
        self.price = price;
        Ok(self)
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: NaiveDate) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, updated_at: NaiveDate) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Set `created_at` from a `YYYY-MM-DD` stamp.
    pub fn created_at_str(self, raw: &str) -> DomainResult<Self> {
        Ok(self.created_at(parse_date_stamp(raw)?))
    }

    /// Set `updated_at` from a `YYYY-MM-DD` stamp.
    pub fn updated_at_str(self, raw: &str) -> DomainResult<Self> {
        Ok(self.updated_at(parse_date_stamp(raw)?))
    }

    /// Replace the image list.
    #[must_use]
    pub fn images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single image.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Validate and produce the immutable [`Product`].
    pub fn build(self) -> DomainResult<Product> {
        let name = match self.name {
            Some(name) if self.price > 0 => name,
            name => {
                tracing::warn!(
                    has_name = name.is_some(),
                    price = self.price,
                    "product build rejected"
                );
                return Err(DomainError::invariant("name and valid price are required"));
            }
        };

        tracing::debug!(name = %name, price = self.price, "product built");

        Ok(Product {
            name,
            description: self.description,
            price: self.price,
            brand: self.brand,
            category: self.category,
            discount: self.discount,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images: self.images,
        })
    }
}
