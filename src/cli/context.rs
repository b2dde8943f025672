use std::path::PathBuf;

use anyhow::{Result, anyhow};
use time::{UtcOffset, macros::format_description};
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{AppConfig, ConfigError, LoggingConfig, gateway_endpoint, load_config};
use crate::lander::RpcLander;
use crate::wallet::KeyDirAddressReader;

/// 初始化 tracing，兼顾 JSON 与文本输出模式；日志写入 stderr，stdout 留给命令结果。
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let mut filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // 默认压低 HTTP 客户端的调试输出
    const QUIET_TARGETS: &[(&str, &str)] = &[("hyper", "warn"), ("reqwest", "info")];
    for (module, level) in QUIET_TARGETS {
        if !config.level.contains(module) {
            if let Ok(directive) = format!("{module}={level}").parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    let time_format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");
    let offset = UtcOffset::from_hms(config.timezone_offset_hours, 0, 0).map_err(|err| {
        anyhow!(
            "invalid logging timezone offset {}: {err}",
            config.timezone_offset_hours
        )
    })?;
    let offset_timer = OffsetTime::new(offset, time_format);

    let base = fmt()
        .with_writer(std::io::stderr)
        .with_timer(offset_timer)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true)
        .with_level(true);

    if config.json {
        base.json()
            .with_current_span(false)
            .with_span_list(false)
            .with_env_filter(filter)
            .try_init()
            .map_err(|err| anyhow!(err.to_string()))?;
    } else {
        base.compact()
            .with_env_filter(filter)
            .try_init()
            .map_err(|err| anyhow!(err.to_string()))?;
    }
    Ok(())
}

/// 加载主配置；用于 `consensus-invoke --config` 的入口。
pub fn load_configuration(path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

pub fn resolve_key_reader(config: &AppConfig) -> KeyDirAddressReader {
    KeyDirAddressReader::new(config.global.keys_dir())
}

/// 构造直接提交使用的网关客户端；未配置网关时仅在真正提交时报错。
pub fn resolve_lander(config: &AppConfig) -> Result<RpcLander> {
    let endpoint = gateway_endpoint(&config.global)?;
    RpcLander::new(endpoint, config.global.request_timeout()).map_err(|err| anyhow!(err))
}
