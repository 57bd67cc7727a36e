//! Lenient product construction.
//!
//! The draft collects values and [`LenientProduct::from_draft`] copies them
//! verbatim. Nothing is validated: a draft with no name and a negative price
//! still yields a product.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mutable accumulator for a [`LenientProduct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
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

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_price(&mut self, price: i64) -> &mut Self {
        self.price = price;
        self
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) -> &mut Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = Some(category.into());
        self
    }

    pub fn set_discount(&mut self, discount: i64) -> &mut Self {
        self.discount = discount;
        self
    }

    pub fn set_created_at(&mut self, created_at: NaiveDate) -> &mut Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: NaiveDate) -> &mut Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn set_images(&mut self, images: Vec<String>) -> &mut Self {
        self.images = images;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn discount(&self) -> i64 {
        self.discount
    }

    pub fn created_at(&self) -> Option<NaiveDate> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<NaiveDate> {
        self.updated_at
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }
}

/// Product produced from a [`ProductDraft`] without any checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LenientProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: i64,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub discount: i64,
    pub created_at: Option<NaiveDate>,
    pub updated_at: Option<NaiveDate>,
    pub images: Vec<String>,
}

impl LenientProduct {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        if draft.price() <= 0 {
            tracing::debug!(price = draft.price(), "lenient product accepted non-positive price");
        }

        Self {
            name: draft.name().map(str::to_owned),
            description: draft.description().map(str::to_owned),
            price: draft.price(),
            brand: draft.brand().map(str::to_owned),
            category: draft.category().map(str::to_owned),
            discount: draft.discount(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
            images: draft.images().to_vec(),
        }
    }
}

impl From<&ProductDraft> for LenientProduct {
    fn from(draft: &ProductDraft) -> Self {
        Self::from_draft(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_every_field() {
        let mut draft = ProductDraft::new();
        draft
            .set_name("Pixel 9")
            .set_description("Tensor G4")
            .set_price(899)
            .set_brand("Google")
            .set_category("Mobile")
            .set_discount(10)
            .set_created_at(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .set_images(vec!["front.jpg".to_string()]);

        let product = LenientProduct::from_draft(&draft);

        assert_eq!(product.name.as_deref(), Some("Pixel 9"));
        assert_eq!(product.description.as_deref(), Some("Tensor G4"));
        assert_eq!(product.price, 899);
        assert_eq!(product.brand.as_deref(), Some("Google"));
        assert_eq!(product.category.as_deref(), Some("Mobile"));
        assert_eq!(product.discount, 10);
        assert_eq!(product.created_at, NaiveDate::from_ymd_opt(2025, 7, 1));
        assert_eq!(product.updated_at, None);
        assert_eq!(product.images, vec!["front.jpg".to_string()]);
    }

    #[test]
    fn accepts_what_the_strict_builder_rejects() {
        let mut draft = ProductDraft::new();
        draft.set_price(-5);

        let product = LenientProduct::from(&draft);

        assert_eq!(product.name, None);
        assert_eq!(product.price, -5);
    }

    #[test]
    fn product_is_a_snapshot_of_the_draft() {
        let mut draft = ProductDraft::new();
        draft.set_name("before");
        let product = LenientProduct::from_draft(&draft);

        draft.set_name("after");

        assert_eq!(product.name.as_deref(), Some("before"));
        assert_eq!(draft.name(), Some("after"));
    }
}
