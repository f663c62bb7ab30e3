//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates the request tracing layer.
///
/// Every request gets an `INFO` span carrying method, URI and version. Request
/// start is logged at `DEBUG`, completion at `INFO` with status and latency,
/// and 5xx responses additionally at `ERROR`. Headers are never recorded, so
/// bearer tokens stay out of the logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/c9a343debf version=HTTP/1.1}: finished processing request latency=1 ms status=307
/// INFO request{method=POST uri=/create_url?original_url=https://example.com version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
