use actix_web::{
    http::StatusCode,
    web::{self, Json, Query},
};
use serde::Deserialize;

use crate::{
    application::activity::ActivityStore,
    domain::activity::{ActivityRegistry, SignupErr, UnregisterErr},
    http::{query_error_handler, ApiMessage, HttpBizError, JsonResponse},
};

impl HttpBizError for SignupErr {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupErr::NotFound => StatusCode::NOT_FOUND,
            SignupErr::AlreadyRegistered | SignupErr::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }
}

impl HttpBizError for UnregisterErr {
    fn status_code(&self) -> StatusCode {
        match self {
            UnregisterErr::NotFound => StatusCode::NOT_FOUND,
            UnregisterErr::NotRegistered => StatusCode::BAD_REQUEST,
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/activities")
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(web::resource("").route(web::get().to(list_activities)))
            .service(web::resource("/{activity_name}/signup").route(web::post().to(signup)))
            .service(
                web::resource("/{activity_name}/unregister").route(web::post().to(unregister)),
            ),
    );
}

#[derive(Deserialize, Debug)]
pub struct EmailQuery {
    email: String,
}

pub async fn list_activities(store: web::Data<ActivityStore>) -> JsonResponse<ActivityRegistry> {
    let activities = store.list_activities()?;
    Ok(Json(activities))
}

pub async fn signup(
    store: web::Data<ActivityStore>,
    activity_name: web::Path<String>,
    params: Query<EmailQuery>,
) -> JsonResponse<ApiMessage> {
    let msg = store.signup(&activity_name, &params.email)??;
    ApiMessage::Ok(msg)
}

pub async fn unregister(
    store: web::Data<ActivityStore>,
    activity_name: web::Path<String>,
    params: Query<EmailQuery>,
) -> JsonResponse<ApiMessage> {
    let msg = store.unregister(&activity_name, &params.email)??;
    ApiMessage::Ok(msg)
}
