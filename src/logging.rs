//! 로깅 초기화
//!
//! 터미널은 UI가 사용하므로 로그는 데이터 디렉토리의 파일로 기록한다.
//! 필터는 `RUST_LOG`가 우선이고, 없으면 설정 파일의 `log_level`을 사용한다.

use crate::utils::error::{NexusError, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "nexus-tui.log";

/// 로그 디렉토리 (`<data_local_dir>/nexus-tui`, 없으면 임시 디렉토리)
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("nexus-tui")
}

/// 레벨 문자열로 필터 생성 (`info`, `nexus_tui=debug` 등)
pub fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level.trim())
        .map_err(|e| NexusError::Logging(format!("invalid log filter '{}': {}", level, e)))
}

/// 파일 로거 초기화
///
/// 반환된 guard가 살아 있는 동안만 로그가 기록되므로 main에서 보관해야 한다.
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_level)?,
    };

    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| NexusError::Logging(format!("failed to initialize tracing: {}", e)))?;

    tracing::info!(path = %dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}
