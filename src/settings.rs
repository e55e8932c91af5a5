use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use config::{builder::DefaultState, Config, ConfigBuilder};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub log: utils::logger::Config,
    pub http_server: HttpServer,
    pub registry: RegistryCfg,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct HttpServer {
    pub bind: String,
    pub port: u16,
    /// 前端页面所在目录，挂载在 `/static` 下
    pub static_dir: PathBuf,
}

impl Default for HttpServer {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegistryCfg {
    /// 为 true 时报名会检查 `max_participants`
    pub enforce_capacity: bool,
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// School activity signup service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(false))]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long)]
    enforce_capacity: bool,
}

pub fn load_settings() -> Result<&'static Settings> {
    let default = config::File::from(Path::new("./configs/default.toml")).required(false);
    let mut builder = Config::builder().add_source(default);

    // 在测试中，会默认传入多个测试相关的参数，所以跳过解析
    #[cfg(not(test))]
    {
        let args: Args = Args::parse();
        if let Some(path) = args.config {
            println!("loading settings. path = {:?}", path);
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = with_env(builder);

        if args.enforce_capacity {
            builder = builder.set_override("registry.enforce_capacity", true)?;
        }
    }

    let settings = build(builder)?;
    Ok(SETTINGS.get_or_init(|| settings))
}

#[cfg(not(test))]
fn with_env(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        config::Environment::with_prefix("SIGNUP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    builder
        .build()
        .context("cannot load config")?
        .try_deserialize()
        .context("wrong config format")
}

pub fn get_settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}
