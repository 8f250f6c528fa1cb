//! Voucher Models

use jiff::{Timestamp, civil::Date};

use itinera::{
    items::CartItem,
    voucher::{DocumentKind, VoucherDraft, VoucherStatus},
};

use crate::uuids::TypedUuid;

/// Voucher UUID
pub type VoucherUuid = TypedUuid<Voucher>;

/// Persisted voucher record: the immutable snapshot written at submission.
#[derive(Debug, Clone)]
pub struct Voucher {
    pub uuid: VoucherUuid,
    pub guest_name: String,
    pub pax_count: u32,
    pub date_start: Date,
    pub date_end: Date,
    pub cities: String,
    pub kind: DocumentKind,
    pub status: VoucherStatus,
    pub total: u64,
    pub itinerary: Vec<CartItem>,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// New Voucher Model
///
/// The draft is valid by construction, so persisting one cannot hit the
/// submission validation errors.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVoucher {
    pub uuid: VoucherUuid,
    pub draft: VoucherDraft,
    pub created_by: String,
}
