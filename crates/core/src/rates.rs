//! Rate catalog

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::items::ServiceKind;

slotmap::new_key_type! {
    /// Key for a rate row in a [`RateCatalog`].
    pub struct RateKey;
}

/// One rate-sheet row: a sellable service and its per-person base price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rate {
    city: String,
    name: String,
    kind: ServiceKind,
    base_price: u64,
}

impl Rate {
    /// Creates a rate row.
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        name: impl Into<String>,
        kind: ServiceKind,
        base_price: u64,
    ) -> Self {
        Self {
            city: city.into(),
            name: name.into(),
            kind,
            base_price,
        }
    }

    /// City the service operates in.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Service name as listed on the rate sheet.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Service category.
    #[must_use]
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Per-person base price in JPY.
    #[must_use]
    pub fn base_price(&self) -> u64 {
        self.base_price
    }
}

/// Rate rows keyed by [`RateKey`], with the name lookups the builder form
/// needs.
#[derive(Clone, Debug, Default)]
pub struct RateCatalog {
    rates: SlotMap<RateKey, Rate>,
    by_name: FxHashMap<String, RateKey>,
}

impl RateCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled sample sheet.
    ///
    /// Rate-sheet ingestion does not exist yet, so this stands in for
    /// whatever the operator uploads.
    #[must_use]
    pub fn bundled_sample() -> Self {
        let mut catalog = Self::new();

        catalog.insert(Rate::new(
            "Tokyo",
            "Tokyo Full Day Private Tour",
            ServiceKind::Tour,
            50_000,
        ));
        catalog.insert(Rate::new(
            "Kyoto",
            "Kyoto Highlights Shared Tour",
            ServiceKind::Tour,
            15_000,
        ));
        catalog.insert(Rate::new(
            "Tokyo",
            "NRT Airport Transfer Private",
            ServiceKind::Transfer,
            25_000,
        ));
        catalog.insert(Rate::new(
            "Tokyo",
            "Tokyo Skytree Ticket",
            ServiceKind::Ticket,
            2_500,
        ));
        catalog.insert(Rate::new("Japan", "JR Pass 7 Day", ServiceKind::Ticket, 40_000));

        catalog
    }

    /// Inserts a rate row, replacing any previous row with the same name.
    pub fn insert(&mut self, rate: Rate) -> RateKey {
        if let Some(previous) = self.by_name.remove(rate.name()) {
            self.rates.remove(previous);
        }

        let name = rate.name().to_owned();
        let key = self.rates.insert(rate);

        self.by_name.insert(name, key);

        key
    }

    /// Looks up a rate row by key.
    #[must_use]
    pub fn get(&self, key: RateKey) -> Option<&Rate> {
        self.rates.get(key)
    }

    /// Looks up a rate row by its rate-sheet service name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Rate> {
        self.by_name.get(name).and_then(|key| self.rates.get(*key))
    }

    /// Rate rows of the given category.
    pub fn services_of_kind(&self, kind: ServiceKind) -> impl Iterator<Item = &Rate> {
        self.rates.values().filter(move |rate| rate.kind() == kind)
    }

    /// All rate rows with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (RateKey, &Rate)> {
        self.rates.iter()
    }

    /// Number of rate rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the catalog holds no rate rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_has_the_expected_rows() {
        let catalog = RateCatalog::bundled_sample();

        assert_eq!(catalog.len(), 5);

        let tour = catalog
            .find_by_name("Tokyo Full Day Private Tour")
            .map(Rate::base_price);

        assert_eq!(tour, Some(50_000));
    }

    #[test]
    fn services_of_kind_filters_by_category() {
        let catalog = RateCatalog::bundled_sample();

        let tours: Vec<&str> = catalog
            .services_of_kind(ServiceKind::Tour)
            .map(Rate::name)
            .collect();

        assert_eq!(tours.len(), 2);
        assert!(tours.contains(&"Tokyo Full Day Private Tour"));
        assert!(tours.contains(&"Kyoto Highlights Shared Tour"));
    }

    #[test]
    fn inserting_a_duplicate_name_replaces_the_row() {
        let mut catalog = RateCatalog::new();

        catalog.insert(Rate::new("Tokyo", "Tokyo Skytree Ticket", ServiceKind::Ticket, 2_500));
        catalog.insert(Rate::new("Tokyo", "Tokyo Skytree Ticket", ServiceKind::Ticket, 2_800));

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.find_by_name("Tokyo Skytree Ticket").map(Rate::base_price),
            Some(2_800)
        );
    }

    #[test]
    fn unknown_name_finds_nothing() {
        let catalog = RateCatalog::bundled_sample();

        assert!(catalog.find_by_name("Mount Fuji Day Hike").is_none());
    }
}
