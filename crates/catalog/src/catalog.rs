use rust_decimal::Decimal;

use stockdesk_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{ExpiryDate, Price, Product, Quantity};

/// In-memory product catalog.
///
/// Owns the backing list; all mutation goes through this interface, so the
/// uniqueness invariant (no two products share an identifier) holds for any
/// reachable catalog. Insertion order is preserved and lookups are linear
/// scans — n stays tiny.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo catalog of five products the application preloads.
    pub fn seeded() -> DomainResult<Self> {
        let mut catalog = Self::new();
        catalog.add(Product::new(
            ProductId::new("01")?,
            "Water",
            Price::new(Decimal::new(100, 2))?,
            Quantity::new(50)?,
        )?)?;
        catalog.add(Product::perishable(
            ProductId::new("02")?,
            "Biscuit",
            Price::new(Decimal::new(300, 2))?,
            Quantity::new(30)?,
            ExpiryDate::parse("15/11/2025")?,
        )?)?;
        catalog.add(Product::new(
            ProductId::new("03")?,
            "Chocolate",
            Price::new(Decimal::new(300, 2))?,
            Quantity::new(45)?,
        )?)?;
        catalog.add(Product::perishable(
            ProductId::new("04")?,
            "Ice Cream",
            Price::new(Decimal::new(150, 2))?,
            Quantity::new(29)?,
            ExpiryDate::parse("10/11/2025")?,
        )?)?;
        catalog.add(Product::new(
            ProductId::new("05")?,
            "Gummy Bears",
            Price::new(Decimal::new(250, 2))?,
            Quantity::new(45)?,
        )?)?;
        Ok(catalog)
    }

    /// Add a product. Rejects an identifier that is already present and
    /// leaves the catalog unchanged in that case.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        if self.index_of(product.id()).is_some() {
            return Err(DomainError::duplicate_key(product.id().clone()));
        }
        self.products.push(product);
        Ok(())
    }

    /// Look up a product by identifier.
    pub fn find(&self, id: &ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Replace a product's price and quantity in place.
    ///
    /// The identifier is resolved before the replacement values are
    /// validated, so an unknown identifier reports `NotFound` even when the
    /// new values are also bad. Name, kind and expiry are untouched.
    pub fn update(&mut self, id: &ProductId, price: Decimal, quantity: i64) -> DomainResult<()> {
        let index = self.index_of(id).ok_or_else(DomainError::not_found)?;
        let price = Price::new(price)?;
        let quantity = Quantity::new(quantity)?;
        let product = &mut self.products[index];
        product.set_price(price);
        product.set_quantity(quantity);
        Ok(())
    }

    /// Remove a product, returning it.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let index = self.index_of(id).ok_or_else(DomainError::not_found)?;
        Ok(self.products.remove(index))
    }

    /// Number of products currently held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Read-only view of the backing list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn index_of(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    fn product(raw_id: &str, name: &str, cents: i64, quantity: i64) -> Product {
        Product::new(
            id(raw_id),
            name,
            Price::new(Decimal::new(cents, 2)).unwrap(),
            Quantity::new(quantity).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn seeded_catalog_has_five_products() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.find(&id("01")).unwrap().name(), "Water");
        assert_eq!(catalog.find(&id("05")).unwrap().name(), "Gummy Bears");
    }

    #[test]
    fn seeded_catalog_marks_biscuit_and_ice_cream_perishable() {
        let catalog = Catalog::seeded().unwrap();
        let biscuit = catalog.find(&id("02")).unwrap();
        assert!(biscuit.is_perishable());
        assert_eq!(biscuit.expiry().unwrap().to_string(), "15/11/2025");
        assert!(catalog.find(&id("04")).unwrap().is_perishable());
        assert!(!catalog.find(&id("03")).unwrap().is_perishable());
    }

    #[test]
    fn add_with_unused_id_increases_count_and_is_findable() {
        let mut catalog = Catalog::new();
        catalog.add(product("01", "Water", 100, 50)).unwrap();
        assert_eq!(catalog.len(), 1);
        let found = catalog.find(&id("01")).unwrap();
        assert_eq!(found.name(), "Water");
        assert_eq!(found.quantity().count(), 50);
    }

    #[test]
    fn add_with_duplicate_id_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(product("01", "Water", 100, 50)).unwrap();
        let before = catalog.clone();

        let err = catalog.add(product("01", "Juice", 200, 10)).unwrap_err();
        match err {
            DomainError::DuplicateKey(dup) => assert_eq!(dup, id("01")),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn find_unknown_id_reports_not_found() {
        let catalog = Catalog::seeded().unwrap();
        let err = catalog.find(&id("99")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn update_changes_only_price_and_quantity() {
        let mut catalog = Catalog::seeded().unwrap();
        catalog.update(&id("03"), Decimal::new(425, 2), 10).unwrap();

        let updated = catalog.find(&id("03")).unwrap();
        assert_eq!(updated.name(), "Chocolate");
        assert!(!updated.is_perishable());
        assert_eq!(updated.price().to_string(), "4.25");
        assert_eq!(updated.quantity().count(), 10);

        // neighbours untouched
        assert_eq!(catalog.find(&id("02")).unwrap().quantity().count(), 30);
        assert_eq!(catalog.find(&id("04")).unwrap().price().to_string(), "1.50");
    }

    #[test]
    fn update_keeps_expiry_of_perishables() {
        let mut catalog = Catalog::seeded().unwrap();
        catalog.update(&id("02"), Decimal::new(350, 2), 12).unwrap();
        let biscuit = catalog.find(&id("02")).unwrap();
        assert_eq!(biscuit.expiry().unwrap().to_string(), "15/11/2025");
    }

    #[test]
    fn update_unknown_id_reports_not_found_even_with_bad_values() {
        let mut catalog = Catalog::seeded().unwrap();
        let err = catalog.update(&id("99"), Decimal::new(-100, 2), -5).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn update_with_negative_price_leaves_product_unchanged() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = catalog.clone();

        let err = catalog.update(&id("01"), Decimal::new(-100, 2), 5).unwrap_err();
        match err {
            DomainError::InvalidValue(_) => {}
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn update_with_negative_quantity_leaves_product_unchanged() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = catalog.clone();

        let err = catalog.update(&id("01"), Decimal::new(100, 2), -5).unwrap_err();
        match err {
            DomainError::InvalidValue(_) => {}
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_returns_product_and_decrements_count() {
        let mut catalog = Catalog::seeded().unwrap();
        let removed = catalog.remove(&id("03")).unwrap();
        assert_eq!(removed.name(), "Chocolate");
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find(&id("03")).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn remove_unknown_id_leaves_catalog_unchanged() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = catalog.clone();
        let err = catalog.remove(&id("99")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(catalog, before);
    }

    #[test]
    fn adding_then_removing_restores_seeded_count() {
        let mut catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 5);

        catalog.add(product("06", "Crisps", 175, 20)).unwrap();
        assert_eq!(catalog.len(), 6);

        catalog.remove(&id("06")).unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog = Catalog::seeded().unwrap();
        let names: Vec<&str> = catalog.iter().map(Product::name).collect();
        assert_eq!(
            names,
            ["Water", "Biscuit", "Chocolate", "Ice Cream", "Gummy Bears"]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[0-9]{1,6}",
                "[A-Za-z][A-Za-z0-9 ]{0,20}",
                0i64..=1_000_000,
                0i64..=1_000_000,
            )
                .prop_map(|(raw_id, name, cents, quantity)| {
                    product(&raw_id, &name, cents, quantity)
                })
        }

        proptest! {
            /// Property: a freshly added product is findable and counted.
            #[test]
            fn added_product_is_findable(p in arb_product()) {
                let mut catalog = Catalog::new();
                let pid = p.id().clone();
                catalog.add(p.clone()).unwrap();

                prop_assert_eq!(catalog.len(), 1);
                prop_assert_eq!(catalog.find(&pid).unwrap(), &p);
            }

            /// Property: adding a duplicate identifier never changes state.
            #[test]
            fn duplicate_add_is_rejected_and_harmless(
                p in arb_product(),
                other_name in "[A-Za-z][A-Za-z0-9 ]{0,20}",
            ) {
                let mut catalog = Catalog::new();
                let pid = p.id().clone();
                catalog.add(p).unwrap();
                let before = catalog.clone();

                let dup = Product::new(
                    pid,
                    other_name,
                    Price::new(Decimal::new(999, 2)).unwrap(),
                    Quantity::new(1).unwrap(),
                )
                .unwrap();
                let err = catalog.add(dup).unwrap_err();

                prop_assert!(matches!(err, DomainError::DuplicateKey(_)));
                prop_assert_eq!(catalog, before);
            }

            /// Property: update touches exactly the price and quantity.
            #[test]
            fn update_preserves_identity_name_and_kind(
                p in arb_product(),
                new_cents in 0i64..=1_000_000,
                new_quantity in 0i64..=1_000_000,
            ) {
                let mut catalog = Catalog::new();
                let pid = p.id().clone();
                let name = p.name().to_owned();
                let kind = p.kind();
                catalog.add(p).unwrap();

                catalog.update(&pid, Decimal::new(new_cents, 2), new_quantity).unwrap();

                let updated = catalog.find(&pid).unwrap();
                prop_assert_eq!(updated.name(), name.as_str());
                prop_assert_eq!(updated.kind(), kind);
                prop_assert_eq!(
                    updated.price().amount(),
                    Decimal::new(new_cents, 2)
                );
                prop_assert_eq!(i64::from(updated.quantity().count()), new_quantity);
            }

            /// Property: negative inputs never construct a value object.
            #[test]
            fn negative_values_are_rejected(
                cents in 1i64..=1_000_000,
                quantity in i64::MIN..0,
            ) {
                prop_assert!(Price::new(Decimal::new(-cents, 2)).is_err());
                prop_assert!(Quantity::new(quantity).is_err());
            }
        }
    }
}
