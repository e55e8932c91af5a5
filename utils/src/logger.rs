use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

struct LocalTimer;
impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f")
        )
    }
}

static ADDITION_DIRECTIVE: &[&str] = &["hyper=warn", "actix_server::worker=warn", "mio=warn"];

pub fn init(config: &Config) -> Result<()> {
    let std_out = {
        let mut filter = EnvFilter::from_default_env().add_directive(
            config
                .level
                .parse()
                .with_context(|| format!("invalid log level: {}", config.level))?,
        );
        for d in ADDITION_DIRECTIVE {
            filter = filter.add_directive(d.parse()?);
        }
        fmt::Layer::new()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_writer(std::io::stdout)
            .with_file(false)
            .with_filter(filter)
    };

    // try_init 同时会把 `log` 记录转发到 tracing，actix 的访问日志依赖这一点
    tracing_subscriber::registry()
        .with(std_out)
        .try_init()
        .context("failed to init logger")?;
    Ok(())
}
