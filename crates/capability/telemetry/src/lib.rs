//! 追踪初始化与契约指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 契约层指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub downstream_values: u64,
    pub upstream_values: u64,
    pub rejected_payloads: u64,
    pub encoded_objects: u64,
}

/// 契约层指标。
pub struct TelemetryMetrics {
    downstream_values: AtomicU64,
    upstream_values: AtomicU64,
    rejected_payloads: AtomicU64,
    encoded_objects: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            downstream_values: AtomicU64::new(0),
            upstream_values: AtomicU64::new(0),
            rejected_payloads: AtomicU64::new(0),
            encoded_objects: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            downstream_values: self.downstream_values.load(Ordering::Relaxed),
            upstream_values: self.upstream_values.load(Ordering::Relaxed),
            rejected_payloads: self.rejected_payloads.load(Ordering::Relaxed),
            encoded_objects: self.encoded_objects.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info，RUST_LOG 可覆盖）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 记录下行报文解析成功次数。
pub fn record_downstream_value() {
    metrics().downstream_values.fetch_add(1, Ordering::Relaxed);
}

/// 记录上行报文解析成功次数。
pub fn record_upstream_value() {
    metrics().upstream_values.fetch_add(1, Ordering::Relaxed);
}

/// 记录被拒绝的报文次数。
pub fn record_rejected_payload() {
    metrics().rejected_payloads.fetch_add(1, Ordering::Relaxed);
}

/// 记录序列化输出次数。
pub fn record_encoded_object() {
    metrics().encoded_objects.fetch_add(1, Ordering::Relaxed);
}
