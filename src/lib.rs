use std::path::PathBuf;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use settings::get_settings;
use tracing::info;
use utils::logger;

use crate::{
    application::activity::ActivityStore, domain::activity::registry::CapacityPolicy,
    settings::load_settings,
};

pub mod application;
pub mod domain;
pub mod http;
mod presentation;
pub mod settings;

/// 注册所有路由，`store` 由调用方持有并注入
pub fn app_config(
    store: web::Data<ActivityStore>,
    static_dir: PathBuf,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(store);
        presentation::config(cfg);
        presentation::activity::config(cfg);
        cfg.service(Files::new("/static", static_dir).index_file("index.html"));
    }
}

pub async fn build_http_server(store: web::Data<ActivityStore>) -> Result<Server> {
    let settings = &get_settings().http_server;
    info!(?settings, "building http server. Powered by actix-web!");

    let static_dir = settings.static_dir.clone();
    let server: Server = HttpServer::new(move || {
        App::new()
            .configure(app_config(store.clone(), static_dir.clone()))
            .wrap(Logger::default())
    })
    .bind((&*settings.bind, settings.port))
    .with_context(|| format!("bind {}:{}", settings.bind, settings.port))?
    .run();

    Ok(server)
}

pub fn build_activity_store() -> Result<web::Data<ActivityStore>> {
    let policy = CapacityPolicy::from_flag(get_settings().registry.enforce_capacity);
    let store = ActivityStore::seeded(policy).context("init activity registry")?;
    Ok(web::Data::new(store))
}

pub fn init_global() -> Result<()> {
    let settings = load_settings().context("load settings")?;
    logger::init(&settings.log)?;

    info!("global environment loaded");
    Ok(())
}
