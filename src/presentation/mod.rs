use actix_web::{http::header, web, HttpResponse};

pub mod activity;

pub const INDEX_PAGE: &str = "/static/index.html";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/ping").route(web::get().to(http_ping)));
}

pub async fn index() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PAGE))
        .finish()
}

pub async fn http_ping() -> &'static str {
    "pong"
}
