//! Voucher snapshots

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use jiff::civil::Date;
use thiserror::Error;

use crate::{cart::Cart, items::CartItem};

/// Kind of document a submission produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A priced quote, not yet confirmed by the guest.
    Quote,

    /// A confirmed service voucher.
    Service,
}

impl DocumentKind {
    /// Stored wire form of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "QUOTE",
            Self::Service => "SERVICE",
        }
    }

    /// Lifecycle status a voucher of this kind is stored with.
    #[must_use]
    pub const fn status(self) -> VoucherStatus {
        match self {
            Self::Quote => VoucherStatus::Quoted,
            Self::Service => VoucherStatus::Confirmed,
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error parsing a stored document kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown document kind {0:?}")]
pub struct ParseDocumentKindError(String);

impl FromStr for DocumentKind {
    type Err = ParseDocumentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUOTE" => Ok(Self::Quote),
            "SERVICE" => Ok(Self::Service),
            other => Err(ParseDocumentKindError(other.to_owned())),
        }
    }
}

/// Lifecycle status a stored voucher carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoucherStatus {
    /// Quoted but not confirmed.
    Quoted,

    /// Confirmed service.
    Confirmed,
}

impl VoucherStatus {
    /// Stored wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quoted => "Quoted",
            Self::Confirmed => "Confirmed",
        }
    }
}

impl Display for VoucherStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error parsing a stored voucher status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown voucher status {0:?}")]
pub struct ParseVoucherStatusError(String);

impl FromStr for VoucherStatus {
    type Err = ParseVoucherStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Quoted" => Ok(Self::Quoted),
            "Confirmed" => Ok(Self::Confirmed),
            other => Err(ParseVoucherStatusError(other.to_owned())),
        }
    }
}

/// Trip-level details captured by the builder form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripDetails {
    /// Lead guest name(s).
    pub guest_name: String,

    /// Total number of travellers.
    pub pax_count: u32,

    /// First day of travel.
    pub date_start: Date,

    /// Last day of travel.
    pub date_end: Date,

    /// Cities covered, free text.
    pub cities: String,
}

/// Errors rejecting a submission before any side effect happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoucherError {
    /// The lead guest name was empty.
    #[error("lead guest name must not be empty")]
    MissingGuestName,

    /// The itinerary cart held no items.
    #[error("itinerary cart must not be empty")]
    EmptyItinerary,

    /// A trip needs at least one traveller.
    #[error("pax count must be at least 1")]
    ZeroPax,

    /// The travel end date did not fall after the start date.
    #[error("travel end date must fall after the start date")]
    DatesOutOfOrder,
}

/// Immutable snapshot of a cart plus trip details, ready to persist.
///
/// Only [`VoucherDraft::build`] produces one, so a draft is valid by
/// construction: the guest name is non-empty, the item list is non-empty,
/// and the total matches the cart it was snapshotted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoucherDraft {
    guest_name: String,
    pax_count: u32,
    date_start: Date,
    date_end: Date,
    cities: String,
    kind: DocumentKind,
    items: Vec<CartItem>,
    total: u64,
}

impl VoucherDraft {
    /// Validates trip details against the cart and snapshots both.
    ///
    /// # Errors
    ///
    /// Any [`VoucherError`] rejects the submission with no side effects.
    pub fn build(details: TripDetails, kind: DocumentKind, cart: &Cart) -> Result<Self, VoucherError> {
        let guest_name = details.guest_name.trim().to_owned();

        if guest_name.is_empty() {
            return Err(VoucherError::MissingGuestName);
        }

        if cart.is_empty() {
            return Err(VoucherError::EmptyItinerary);
        }

        if details.pax_count == 0 {
            return Err(VoucherError::ZeroPax);
        }

        if details.date_end <= details.date_start {
            return Err(VoucherError::DatesOutOfOrder);
        }

        Ok(Self {
            guest_name,
            pax_count: details.pax_count,
            date_start: details.date_start,
            date_end: details.date_end,
            cities: details.cities,
            kind,
            items: cart.items().to_vec(),
            total: cart.total(),
        })
    }

    /// Lead guest name(s).
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Total number of travellers.
    #[must_use]
    pub fn pax_count(&self) -> u32 {
        self.pax_count
    }

    /// First day of travel.
    #[must_use]
    pub fn date_start(&self) -> Date {
        self.date_start
    }

    /// Last day of travel.
    #[must_use]
    pub fn date_end(&self) -> Date {
        self.date_end
    }

    /// Cities covered.
    #[must_use]
    pub fn cities(&self) -> &str {
        &self.cities
    }

    /// Kind of document the submission produces.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Snapshotted itinerary items.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Snapshotted cart total in JPY.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of days the trip spans, inclusive of both ends.
    #[must_use]
    pub fn num_days(&self) -> i32 {
        self.date_end.since(self.date_start).map_or(1, |span| span.get_days() + 1)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::items::ServiceKind;

    use super::*;

    fn details() -> TripDetails {
        TripDetails {
            guest_name: "Sato Kenji".to_owned(),
            pax_count: 2,
            date_start: date(2026, 9, 10),
            date_end: date(2026, 9, 17),
            cities: "Tokyo, Kyoto".to_owned(),
        }
    }

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();

        cart.add(CartItem::new(
            1,
            ServiceKind::Tour,
            "Tokyo Full Day Private Tour",
            2,
            "",
            100_000,
        ));

        cart
    }

    #[test]
    fn build_snapshots_cart_and_details() -> testresult::TestResult {
        let cart = cart_with_one_item();
        let draft = VoucherDraft::build(details(), DocumentKind::Quote, &cart)?;

        assert_eq!(draft.guest_name(), "Sato Kenji");
        assert_eq!(draft.total(), cart.total());
        assert_eq!(draft.items(), cart.items());
        assert_eq!(draft.num_days(), 8);
        assert_eq!(draft.kind().status(), VoucherStatus::Quoted);

        Ok(())
    }

    #[test]
    fn empty_guest_name_is_rejected_even_with_items() {
        let cart = cart_with_one_item();

        let mut missing_name = details();
        missing_name.guest_name = "   ".to_owned();

        let result = VoucherDraft::build(missing_name, DocumentKind::Quote, &cart);

        assert_eq!(result, Err(VoucherError::MissingGuestName));
    }

    #[test]
    fn empty_cart_is_rejected_even_with_a_name() {
        let result = VoucherDraft::build(details(), DocumentKind::Service, &Cart::new());

        assert_eq!(result, Err(VoucherError::EmptyItinerary));
    }

    #[test]
    fn zero_pax_is_rejected() {
        let cart = cart_with_one_item();

        let mut zero_pax = details();
        zero_pax.pax_count = 0;

        let result = VoucherDraft::build(zero_pax, DocumentKind::Quote, &cart);

        assert_eq!(result, Err(VoucherError::ZeroPax));
    }

    #[test]
    fn end_date_must_fall_after_start_date() {
        let cart = cart_with_one_item();

        let mut same_day = details();
        same_day.date_end = same_day.date_start;

        let result = VoucherDraft::build(same_day, DocumentKind::Quote, &cart);

        assert_eq!(result, Err(VoucherError::DatesOutOfOrder));
    }

    #[test]
    fn kind_round_trips_through_its_wire_form() -> testresult::TestResult {
        assert_eq!("QUOTE".parse::<DocumentKind>()?, DocumentKind::Quote);
        assert_eq!("SERVICE".parse::<DocumentKind>()?, DocumentKind::Service);
        assert_eq!("Confirmed".parse::<VoucherStatus>()?, VoucherStatus::Confirmed);
        assert!("INVOICE".parse::<DocumentKind>().is_err());

        Ok(())
    }
}
