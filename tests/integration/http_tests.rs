//! HTTP endpoint integration tests
//!
//! Every request goes through the full application: CORS, tracing,
//! request ids and the `/activities` routes.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_detail, assert_message, roles_of};
    use crate::common::fixtures::{
        CHESS, DANIEL, MICHAEL, RegistryFactory, default_state, state_with,
    };
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use mergington_activities::server::HttpServer;
    use serde_json::Value;

    const NEW_STUDENT: &str = "new@mergington.edu";

    // ==================== Listing ====================

    #[actix_web::test]
    async fn test_list_activities_returns_full_catalog() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get().uri("/activities").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let activities = body.as_object().unwrap();
        assert_eq!(activities.len(), 9);

        let chess = &body[CHESS];
        assert_eq!(
            chess["description"],
            "Learn strategies and compete in chess tournaments"
        );
        assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess["max_participants"], 12);
        assert_eq!(roles_of(&chess["members"], MICHAEL), vec!["participant"]);
        assert_eq!(roles_of(&chess["members"], DANIEL), vec!["participant"]);
    }

    #[actix_web::test]
    async fn test_get_single_activity() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get()
            .uri("/activities/Programming%20Class")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["max_participants"], 20);
        assert!(body["members"].is_object());
    }

    #[actix_web::test]
    async fn test_unknown_activity_is_not_found() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get()
            .uri("/activities/Underwater%20Basket%20Weaving")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::NOT_FOUND, "Activity not found").await;

        let req = test::TestRequest::post()
            .uri("/activities/Nope/signup?email=a@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::NOT_FOUND, "Activity not found").await;

        let req = test::TestRequest::get()
            .uri("/activities/Nope/members")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::NOT_FOUND, "Activity not found").await;
    }

    #[actix_web::test]
    async fn test_activity_names_are_case_sensitive() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get()
            .uri("/activities/chess%20club")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // ==================== Signup / Unregister ====================

    #[actix_web::test]
    async fn test_signup_then_unregister_roundtrip() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::post()
            .uri("/activities/Chess%20Club/signup?email=new@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_message(resp, "Signed up new@mergington.edu for Chess Club").await;

        let req = test::TestRequest::get()
            .uri("/activities/Chess%20Club/members")
            .to_request();
        let members: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(roles_of(&members, NEW_STUDENT), vec!["participant"]);

        let req = test::TestRequest::delete()
            .uri("/activities/Chess%20Club/unregister?email=new@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_message(resp, "Unregistered new@mergington.edu from Chess Club").await;

        let req = test::TestRequest::get()
            .uri("/activities/Chess%20Club/members")
            .to_request();
        let members: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert!(members.get(NEW_STUDENT).is_none());
        assert_eq!(members.as_object().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_duplicate_signup_rejected() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::post()
            .uri("/activities/Chess%20Club/signup?email=michael@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::BAD_REQUEST, "Student is already signed up").await;
    }

    #[actix_web::test]
    async fn test_unregister_non_member_rejected() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::delete()
            .uri("/activities/Chess%20Club/unregister?email=ghost@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(
            resp,
            StatusCode::BAD_REQUEST,
            "Student is not signed up for this activity",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_percent_encoded_email_is_decoded() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::post()
            .uri("/activities/Chess%20Club/signup?email=first.last%2Btag%40mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_message(resp, "Signed up first.last+tag@mergington.edu for Chess Club").await;
    }

    #[actix_web::test]
    async fn test_signup_past_capacity_is_allowed_by_default() {
        let registry = RegistryFactory::single("Robotics", 1, &["a@mergington.edu"]);
        let app = test::init_service(HttpServer::create_app(state_with(registry))).await;

        let req = test::TestRequest::post()
            .uri("/activities/Robotics/signup?email=b@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_signup_past_capacity_rejected_when_enforced() {
        let registry = RegistryFactory::capped("Robotics", 1, &["a@mergington.edu"]);
        let app = test::init_service(HttpServer::create_app(state_with(registry))).await;

        let req = test::TestRequest::post()
            .uri("/activities/Robotics/signup?email=b@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::BAD_REQUEST, "Activity is full").await;

        // Duplicate check comes first
        let req = test::TestRequest::post()
            .uri("/activities/Robotics/signup?email=a@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_detail(resp, StatusCode::BAD_REQUEST, "Student is already signed up").await;
    }

    // ==================== Request plumbing ====================

    #[actix_web::test]
    async fn test_missing_email_query_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::delete()
            .uri("/activities/Chess%20Club/unregister")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_role_query_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::post()
            .uri("/activities/Chess%20Club/roles/assign?email=michael@mergington.edu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_root_redirects_to_static_index() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/static/index.html"
        );
    }

    #[actix_web::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get()
            .uri("/activities")
            .insert_header(("x-request-id", "trace-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");

        let req = test::TestRequest::get().uri("/activities").to_request();
        let resp = test::call_service(&app, req).await;
        let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(!generated.is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = test::TestRequest::get()
            .uri("/activities/Chess%20Club/roster")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
