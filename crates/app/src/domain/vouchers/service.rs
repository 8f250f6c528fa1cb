//! Vouchers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::vouchers::{
        errors::VouchersServiceError,
        models::{NewVoucher, Voucher, VoucherUuid},
        repository::PgVouchersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgVouchersService {
    db: Db,
    repository: PgVouchersRepository,
}

impl PgVouchersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgVouchersRepository::new(),
        }
    }
}

#[async_trait]
impl VouchersService for PgVouchersService {
    async fn submit_voucher(&self, voucher: NewVoucher) -> Result<Voucher, VouchersServiceError> {
        let NewVoucher {
            uuid,
            draft,
            created_by,
        } = voucher;

        // signed storage columns
        let pax_count = i32::try_from(draft.pax_count())?;
        let total = i64::try_from(draft.total())?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_voucher(&mut tx, uuid, &draft, pax_count, total, &created_by)
            .await?;

        tx.commit().await?;

        info!(voucher_uuid = %created.uuid, status = %created.status, total = created.total, "voucher saved");

        Ok(created)
    }

    async fn get_voucher(&self, uuid: VoucherUuid) -> Result<Voucher, VouchersServiceError> {
        let mut tx = self.db.begin().await?;

        let voucher = self.repository.get_voucher(&mut tx, uuid).await?;

        tx.commit().await?;

        Ok(voucher)
    }
}

#[automock]
#[async_trait]
pub trait VouchersService: Send + Sync {
    /// Persists a validated voucher snapshot as one record.
    async fn submit_voucher(&self, voucher: NewVoucher) -> Result<Voucher, VouchersServiceError>;

    /// Retrieves a single persisted voucher.
    async fn get_voucher(&self, uuid: VoucherUuid) -> Result<Voucher, VouchersServiceError>;
}
