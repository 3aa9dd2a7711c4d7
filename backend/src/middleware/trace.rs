//! Per-request trace scope and completion logging.
//!
//! Every request is served inside a fresh [`TraceId`] scope. The failure
//! boundary reads that scope when it writes an error envelope, so a failed
//! response's `traceId` always equals its `trace-id` header. Successful
//! responses get the header here.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tracing::{debug, info, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Function middleware; wrap with `actix_web::middleware::from_fn`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use actix_web::middleware::from_fn;
/// use tripline::middleware::trace_requests;
///
/// let app = App::new().wrap(from_fn(trace_requests));
/// ```
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse, Error> {
    let trace_id = TraceId::generate();
    let method = req.method().clone();
    let path = req.path().to_owned();

    let mut res = TraceId::scope(trace_id, next.call(req)).await?;

    let status = res.status().as_u16();
    match res.response().error() {
        Some(failure) if res.status().is_server_error() => {
            warn!(%trace_id, %method, %path, status, error = %failure, "request failed");
        }
        Some(failure) => {
            info!(%trace_id, %method, %path, status, error = %failure, "request rejected");
        }
        None => debug!(%trace_id, %method, %path, status, "request completed"),
    }

    if !res.headers().contains_key(TRACE_ID_HEADER) {
        stamp(&mut res, trace_id);
    }
    Ok(res.map_into_boxed_body())
}

fn stamp<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => warn!(%error, %trace_id, "trace identifier is not a valid header"),
    }
}
