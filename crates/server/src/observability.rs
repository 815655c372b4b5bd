use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder};

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "categories_operations_total",
        "Category operations handled, by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static RECORDS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "categories_records",
        "Categories currently held in the store"
    )
    .expect("register records")
});

pub fn record(operation: &str, outcome: &str) {
    OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    // touch the statics so an idle process still exports them
    Lazy::force(&OPERATIONS_TOTAL);
    Lazy::force(&RECORDS);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
