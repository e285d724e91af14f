use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

/// 路径参数 `{id}` 中的记录 ID，必须为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeRecordId(pub i64);

impl SafeRecordId {
    fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().filter(|id| *id > 0).map(SafeRecordId)
    }
}

impl FromRequest for SafeRecordId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(Self::parse(raw).ok_or_else(|| {
            InternalError::from_response(
                format!("Invalid record id: '{raw}'"),
                HttpResponse::BadRequest()
                    .content_type("text/html; charset=utf-8")
                    .body("<p class=\"has-text-danger\">Ungültige ID</p>"),
            )
            .into()
        }))
    }
}
