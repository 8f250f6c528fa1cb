//! Rate Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use itinera::rates::Rate;

use crate::{extensions::*, state::State};

/// Rates Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatesResponse {
    /// The rate-sheet rows the builder form can quote from
    pub rates: Vec<RateResponse>,
}

/// Rate Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RateResponse {
    /// City the service operates in
    pub city: String,

    /// Service name as listed on the rate sheet
    pub service_name: String,

    /// Rate-sheet label of the service category
    pub service_type: String,

    /// Per-person base price in JPY
    pub base_price: u64,
}

impl From<&Rate> for RateResponse {
    fn from(rate: &Rate) -> Self {
        Self {
            city: rate.city().to_owned(),
            service_name: rate.name().to_owned(),
            service_type: rate.kind().label().to_owned(),
            base_price: rate.base_price(),
        }
    }
}

/// Rate Index Handler
///
/// Returns the loaded rate catalog. Until rate-sheet ingestion exists this
/// is always the bundled sample sheet.
#[endpoint(tags("rates"), summary = "List Rates")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RatesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let mut rates: Vec<RateResponse> = state
        .app
        .rates
        .iter()
        .map(|(_, rate)| RateResponse::from(rate))
        .collect();

    rates.sort_by(|a, b| a.service_name.cmp(&b.service_name));

    Ok(Json(RatesResponse { rates }))
}
