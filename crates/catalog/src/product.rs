use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Unit price in catalog currency, canonicalised to two decimal places.
///
/// Negative amounts are unrepresentable; the constructor rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::invalid_value("price cannot be negative"));
        }
        let mut amount = amount;
        amount.rescale(2);
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// On-hand count for a product.
///
/// Accepts the signed integer parsed from form input and rejects negatives,
/// so a held quantity is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(count: i64) -> DomainResult<Self> {
        if count < 0 {
            return Err(DomainError::invalid_value("quantity cannot be negative"));
        }
        let count = u32::try_from(count)
            .map_err(|_| DomainError::invalid_value("quantity is too large"))?;
        Ok(Self(count))
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Expiry date of a perishable product, entered and displayed as
/// `DD/MM/YYYY`. Display-only: the catalog never removes expired products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    const FORMAT: &'static str = "%d/%m/%Y";

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_value(
                "perishable product requires an expiry date",
            ));
        }
        let date = NaiveDate::parse_from_str(trimmed, Self::FORMAT).map_err(|_| {
            DomainError::invalid_value("expiry date must be in DD/MM/YYYY format")
        })?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ExpiryDate {}

impl core::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Product variant tag. Perishables carry their expiry date here instead of
/// living in a separate subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Standard,
    Perishable { expiry: ExpiryDate },
}

/// Entity: a catalog product.
///
/// Identity is the [`ProductId`]; price and quantity are the only fields
/// mutated after construction, and only through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    quantity: Quantity,
    kind: ProductKind,
}

impl Product {
    /// Create a standard product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: Quantity,
    ) -> DomainResult<Self> {
        Self::with_kind(id, name, price, quantity, ProductKind::Standard)
    }

    /// Create a perishable product carrying an expiry date.
    pub fn perishable(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: Quantity,
        expiry: ExpiryDate,
    ) -> DomainResult<Self> {
        Self::with_kind(id, name, price, quantity, ProductKind::Perishable { expiry })
    }

    fn with_kind(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: Quantity,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_value("product name cannot be empty"));
        }
        Ok(Self {
            id,
            name: name.to_owned(),
            price,
            quantity,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn is_perishable(&self) -> bool {
        matches!(self.kind, ProductKind::Perishable { .. })
    }

    pub fn expiry(&self) -> Option<ExpiryDate> {
        match self.kind {
            ProductKind::Perishable { expiry } => Some(expiry),
            ProductKind::Standard => None,
        }
    }

    pub(crate) fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// One-line display row for list and search views.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "ID: {:<5} | Name: {:<15} | Price: AED{} | Qty: {}",
            self.id, self.name, self.price, self.quantity
        );
        if let ProductKind::Perishable { expiry } = self.kind {
            line.push_str(&format!(" | Expiry: {expiry}"));
        }
        line
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
