//! Form state and input parsing.
//!
//! Each screen edits its own form struct; parsing turns the raw text fields
//! into domain values, reporting `InvalidValue` for anything malformed. The
//! catalog re-checks nothing that the value-object constructors already
//! guarantee.

use rust_decimal::Decimal;

use stockdesk_catalog::{ExpiryDate, Price, Product, Quantity};
use stockdesk_core::{DomainError, DomainResult, ProductId};

/// Parse a price field into the raw decimal the domain validates.
pub fn parse_price(raw: &str) -> DomainResult<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| DomainError::invalid_value("price must be a valid number"))
}

/// Parse a quantity field into the raw integer the domain validates.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::invalid_value("quantity must be a whole number"))
}

/// State of the add-product form.
#[derive(Debug, Default, Clone)]
pub struct AddForm {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub perishable: bool,
    pub expiry: String,
}

impl AddForm {
    /// Validate the raw fields and build the product to add.
    pub fn build(&self) -> DomainResult<Product> {
        let id = ProductId::new(&self.id)?;
        let price = Price::new(parse_price(&self.price)?)?;
        let quantity = Quantity::new(parse_quantity(&self.quantity)?)?;
        if self.perishable {
            let expiry = ExpiryDate::parse(&self.expiry)?;
            Product::perishable(id, self.name.clone(), price, quantity, expiry)
        } else {
            Product::new(id, self.name.clone(), price, quantity)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State of the update-product form.
#[derive(Debug, Default, Clone)]
pub struct UpdateForm {
    pub id: String,
    pub price: String,
    pub quantity: String,
}

impl UpdateForm {
    /// Validate the raw fields into the update arguments.
    ///
    /// Price and quantity stay raw here; the catalog validates them after
    /// resolving the identifier, so an unknown id wins over a bad value.
    pub fn parsed(&self) -> DomainResult<(ProductId, Decimal, i64)> {
        let id = ProductId::new(&self.id)?;
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;
        Ok((id, price, quantity))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Single-identifier form shared by the delete and search screens.
#[derive(Debug, Default, Clone)]
pub struct IdForm {
    pub id: String,
}

impl IdForm {
    pub fn parsed(&self) -> DomainResult<ProductId> {
        ProductId::new(&self.id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
