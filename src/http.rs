use std::fmt::{Debug, Display};

use actix_web::{
    body::BoxBody, error::InternalError, error::QueryPayloadError, http::StatusCode, web::Json,
    HttpRequest, HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

type Result<T, E = ApiError> = std::result::Result<T, E>;
pub type JsonResponse<T> = Result<Json<T>>;

/// 外层为基础设施错误，内层为业务错误
pub type BizResult<T, E> = anyhow::Result<std::result::Result<T, E>>;

/// 写操作成功后的返回体
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    #[allow(non_snake_case)]
    pub fn Ok(message: String) -> JsonResponse<Self> {
        Ok(Json(Self { message }))
    }
}

/// 所有错误响应的返回体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(derive_more::Display, Debug)]
pub struct ApiError {
    msg: Box<dyn HttpBizError>,
}

impl ApiError {
    pub fn detail(&self) -> String {
        self.msg.detail()
    }
}

pub trait HttpBizError: Display + Debug + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn detail(&self) -> String {
        self.to_string()
    }
}

impl HttpBizError for anyhow::Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn detail(&self) -> String {
        "Internal server error".to_string()
    }
}

impl<T> From<T> for ApiError
where
    T: HttpBizError,
{
    fn from(value: T) -> Self {
        Self {
            msg: Box::new(value),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.msg.status_code()
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            error!(err = ?self.msg, "request failed");
        } else {
            debug!(%status, err = %self.msg, "request rejected");
        }

        HttpResponse::build(status).json(ErrorDetail {
            detail: self.detail(),
        })
    }
}

/// 查询参数缺失或格式错误时返回 422，与其它错误保持相同的 `detail` 结构
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), ?err, "bad query string");
    let resp = HttpResponse::UnprocessableEntity().json(ErrorDetail {
        detail: err.to_string(),
    });
    InternalError::from_response(err, resp).into()
}

#[cfg(test)]
mod test {
    use actix_web::body::to_bytes;

    use super::*;

    #[derive(Debug, derive_more::Display)]
    #[display(fmt = "Activity not found")]
    struct Missing;

    impl HttpBizError for Missing {
        fn status_code(&self) -> StatusCode {
            StatusCode::NOT_FOUND
        }
    }

    async fn body_of(err: ApiError) -> (StatusCode, ErrorDetail) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn t_biz_error_body() {
        let (status, body) = body_of(Missing.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Activity not found");
    }

    #[actix_web::test]
    async fn t_internal_error_hides_cause() {
        let err: ApiError = anyhow::anyhow!("lock poisoned").into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, "Internal server error");
    }
}
