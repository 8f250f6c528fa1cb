//! Vouchers Repository

use std::str::FromStr;

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};
use uuid::Uuid;

use itinera::{items::CartItem, voucher::VoucherDraft};

use crate::domain::vouchers::models::{Voucher, VoucherUuid};

const CREATE_VOUCHER_SQL: &str = include_str!("sql/create_voucher.sql");
const GET_VOUCHER_SQL: &str = include_str!("sql/get_voucher.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVouchersRepository;

impl PgVouchersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_voucher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: VoucherUuid,
        draft: &VoucherDraft,
        pax_count: i32,
        total: i64,
        created_by: &str,
    ) -> Result<Voucher, sqlx::Error> {
        query_as::<Postgres, Voucher>(CREATE_VOUCHER_SQL)
            .bind(uuid.into_uuid())
            .bind(draft.guest_name())
            .bind(pax_count)
            .bind(SqlxDate::from(draft.date_start()))
            .bind(SqlxDate::from(draft.date_end()))
            .bind(draft.cities())
            .bind(draft.kind().as_str())
            .bind(draft.kind().status().as_str())
            .bind(total)
            .bind(Json(draft.items()))
            .bind(created_by)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_voucher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: VoucherUuid,
    ) -> Result<Voucher, sqlx::Error> {
        query_as::<Postgres, Voucher>(GET_VOUCHER_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Voucher {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total = try_get_amount(row, "total")?;
        let pax_count = try_get_count(row, "pax_count")?;
        let kind = try_parse(row, "doc_type")?;
        let status = try_parse(row, "status")?;

        let itinerary: Vec<CartItem> = row.try_get::<Json<Vec<CartItem>>, _>("itinerary")?.0;

        Ok(Self {
            uuid: VoucherUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            guest_name: row.try_get("guest_name")?,
            pax_count,
            date_start: row.try_get::<SqlxDate, _>("date_start")?.to_jiff(),
            date_end: row.try_get::<SqlxDate, _>("date_end")?.to_jiff(),
            cities: row.try_get("cities")?,
            kind,
            status,
            total,
            itinerary,
            created_by: row.try_get("created_by")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_parse<T>(row: &PgRow, col: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(col)?;

    raw.parse().map_err(|e: T::Err| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
