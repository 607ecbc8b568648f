//! 日志初始化
//! 按配置把 tracing 输出格式化为 JSON 或人类可读文本

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化全局日志订阅器
///
/// RUST_LOG 环境变量优先于配置中的级别，便于临时调试。
pub fn init_telemetry(logging: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // pretty 用于本地开发，其余一律输出 JSON
    let format_layer = if logging.format.eq_ignore_ascii_case("pretty") {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(format_layer)
        .init();

    tracing::info!(
        service = "flix-service",
        version = env!("CARGO_PKG_VERSION"),
        level = %logging.level,
        format = %logging.format,
        "Logging initialized"
    );
}
