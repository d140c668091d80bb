use anyhow::anyhow;
use std::collections::HashMap;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖日志过滤规则的环境变量，例如 `assign_reviewers=trace`
pub const LOG_FILTER_ENV: &str = "ASSIGN_REVIEWERS_LOG";

/// 日志格式配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人类可读格式
    Pretty,
    /// 紧凑格式，适合 CI 日志
    Compact,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: Level,
    /// 输出格式
    pub format: LogFormat,
    /// 是否显示目标模块
    pub show_target: bool,
    /// 是否输出 ANSI 颜色
    pub ansi: bool,
    /// 自定义过滤规则，优先于 level
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            show_target: true,
            ansi: true,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// GitHub Actions runner: compact lines, DEBUG when step debugging is enabled.
    pub fn github_actions(runner_debug: bool) -> Self {
        Self {
            level: if runner_debug { Level::DEBUG } else { Level::INFO },
            format: LogFormat::Compact,
            show_target: false,
            ansi: true,
            filter: None,
        }
    }

    /// Picks a configuration from the process environment.
    pub fn from_env(env_map: &HashMap<String, String>) -> Self {
        let mut config = if env_map.get("GITHUB_ACTIONS").map(String::as_str) == Some("true") {
            Self::github_actions(env_map.get("RUNNER_DEBUG").map(String::as_str) == Some("1"))
        } else {
            Self::default()
        };
        config.filter = env_map
            .get(LOG_FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .cloned();
        config
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.filter {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::new(self.level.to_string().to_lowercase()),
        }
    }
}

/// 初始化日志系统
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let filter = config.env_filter();

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_target(config.show_target)
                .with_ansi(config.ansi);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_target(config.show_target)
                .with_ansi(config.ansi);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;
        }
    }

    tracing::debug!(
        level = ?config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}

/// 操作性能计时器
pub struct OperationTimer {
    start: Instant,
    operation: String,
    metadata: HashMap<String, String>,
}

impl OperationTimer {
    /// 创建新的计时器
    pub fn new(operation: &str) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
            metadata: HashMap::new(),
        }
    }

    /// 添加元数据
    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// 完成计时并记录日志
    pub fn finish(self) {
        let duration = self.start.elapsed();

        tracing::info!(
            operation = %self.operation,
            duration_ms = duration.as_millis() as u64,
            metadata = ?self.metadata,
            "Operation completed"
        );
    }
}
