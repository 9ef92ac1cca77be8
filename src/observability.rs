use std::time::Instant;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total queries executed. Labels: operation, status.
pub const QUERIES_TOTAL: &str = "stowage_queries_total";

/// Histogram: query latency in seconds. Labels: operation.
pub const QUERY_DURATION_SECONDS: &str = "stowage_query_duration_seconds";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: warehouses held by the most recently modified engine.
pub const WAREHOUSES: &str = "stowage_warehouses";

// ── Operation labels ────────────────────────────────────────────

pub const FIND_AVAILABLE_WAREHOUSE: &str = "find_available_warehouse";
pub const FULLY_UTILIZED_DATES: &str = "fully_utilized_dates";
pub const AVAILABLE_CAPACITY: &str = "available_capacity";
pub const LEAST_USED_WAREHOUSE: &str = "least_used_warehouse";

/// Count one query and record its latency. No-op until the host installs a recorder.
pub fn record_query(operation: &'static str, ok: bool, started: Instant) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(QUERIES_TOTAL, "operation" => operation, "status" => status).increment(1);
    metrics::histogram!(QUERY_DURATION_SECONDS, "operation" => operation)
        .record(started.elapsed().as_secs_f64());
}
