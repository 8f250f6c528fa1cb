//! Request-level logging.

use std::time::Instant;

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, info, info_span, warn};

use super::settings;

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let remote_addr = req.remote_addr().to_string();

    let span = info_span!(
        parent: None,
        "http.request",
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res).instrument(span.clone()).await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = res.status_code.unwrap_or(StatusCode::OK);

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    if duration_ms >= settings::slow_request_threshold_ms() {
        warn!(%method, %path, status = status.as_u16(), duration_ms, "slow request");
    } else {
        info!(%method, %path, status = status.as_u16(), duration_ms, "request completed");
    }
}
