//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

/// Assert a response carries `status` and a `{"detail": ...}` body
pub async fn assert_detail<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: StatusCode,
    detail: &str,
) {
    assert_eq!(resp.status(), status, "unexpected status code");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], detail, "unexpected body: {}", body);
}

/// Assert a 200 response with a `{"message": ...}` body
pub async fn assert_message<B: MessageBody>(resp: ServiceResponse<B>, message: &str) {
    assert_eq!(resp.status(), StatusCode::OK, "unexpected status code");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], message, "unexpected body: {}", body);
}

/// Role labels of `email` in a members body
pub fn roles_of(members: &Value, email: &str) -> Vec<String> {
    members[email]
        .as_array()
        .map(|roles| {
            roles
                .iter()
                .filter_map(|r| r.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
