//! Extractor configuration and the fallback route.
//!
//! Extraction failures become domain errors so they render through the
//! shared envelope: bad JSON bodies are 422, bad path ids are 404, bad query
//! strings are 400.
//!
//! Requests that reach the fallback are resolved against the route table:
//! `OPTIONS` on a known path is a bare 200 with an `Allow` header (CORS
//! preflight), any other method on a known path is 405, and unknown paths
//! are 404.

use std::sync::OnceLock;

use actix_web::dev::ResourceDef;
use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse, web};
use futures_util::future::{Ready, ready};

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Every mounted path and the methods it serves.
///
/// Integer segments only match digits so `/questions/abc` stays unknown.
const ROUTE_METHODS: [(&str, &[&str]); 8] = [
    ("/categories", &["GET"]),
    (r"/categories/{category_id:\d+}/questions", &["GET"]),
    ("/questions", &["GET", "POST"]),
    (r"/questions/{question_id:\d+}", &["DELETE"]),
    ("/questionsSearch", &["POST"]),
    ("/quizzes", &["POST"]),
    ("/health/ready", &["GET"]),
    ("/health/live", &["GET"]),
];

struct KnownRoute {
    pattern: ResourceDef,
    methods: &'static [&'static str],
    allow: String,
}

impl KnownRoute {
    fn serves(&self, method: &Method) -> bool {
        self.methods.contains(&method.as_str())
    }
}

static KNOWN_ROUTES: OnceLock<Vec<KnownRoute>> = OnceLock::new();

fn known_routes() -> &'static [KnownRoute] {
    KNOWN_ROUTES.get_or_init(|| {
        ROUTE_METHODS
            .iter()
            .map(|(pattern, methods)| KnownRoute {
                pattern: ResourceDef::new(*pattern),
                methods: *methods,
                allow: format!("{}, OPTIONS", methods.join(", ")),
            })
            .collect()
    })
}

/// JSON body configuration mapping parse failures to 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::unprocessable(format!("unusable JSON body: {err}")).into()
    })
}

/// Path configuration mapping unparseable segments to 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        Error::not_found(format!("no resource at {}: {err}", req.path())).into()
    })
}

/// Query string configuration mapping malformed queries to 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed query: {err}")).into()
    })
}

/// Fallback handler for requests no service matched.
pub fn route_fallback(req: HttpRequest) -> Ready<ApiResult<HttpResponse>> {
    ready(resolve_unmatched(&req))
}

fn resolve_unmatched(req: &HttpRequest) -> ApiResult<HttpResponse> {
    let method = req.method();
    let path = req.path();
    let Some(route) = known_routes()
        .iter()
        .find(|route| route.pattern.is_match(path))
    else {
        return Err(Error::not_found(format!("no route for {method} {path}")));
    };

    if *method == Method::OPTIONS {
        return Ok(HttpResponse::Ok()
            .insert_header((header::ALLOW, route.allow.as_str()))
            .finish());
    }
    if route.serves(method) {
        // Known path whose service is not mounted in this app.
        return Err(Error::not_found(format!("{method} {path} is not mounted")));
    }
    Err(Error::method_not_allowed(format!(
        "{method} is not allowed on {path}; allowed: {}",
        route.allow
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, post, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[post("/echo/{id}")]
    async fn echo(_id: web::Path<i32>, _body: web::Json<Value>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn respond(req: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(path_config())
                .service(echo)
                .default_service(web::to(route_fallback)),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    async fn send(req: test::TestRequest) -> (StatusCode, Value) {
        let res = respond(req).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn malformed_json_is_unprocessable() {
        let req = test::TestRequest::post()
            .uri("/echo/1")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "error": 422, "Message": "Unprocessable entity"})
        );
    }

    #[actix_web::test]
    async fn non_integer_path_is_not_found() {
        let req = test::TestRequest::post()
            .uri("/echo/abc")
            .set_json(json!({"name": "x"}));
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Message"], "Not Found");
    }

    #[rstest]
    #[case("/nowhere")]
    #[case("/questions/abc")]
    #[case("/questions")]
    #[actix_web::test]
    async fn unmatched_get_is_not_found(#[case] uri: &str) {
        let (status, body) = send(test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], 404);
    }

    #[rstest]
    #[case("/questions", "GET, POST, OPTIONS")]
    #[case("/questions/12", "DELETE, OPTIONS")]
    #[case("/categories/3/questions", "GET, OPTIONS")]
    #[case("/quizzes", "POST, OPTIONS")]
    #[actix_web::test]
    async fn options_on_known_path_lists_allowed_methods(#[case] uri: &str, #[case] allow: &str) {
        let res = respond(test::TestRequest::default().method(Method::OPTIONS).uri(uri)).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::ALLOW)
                .and_then(|value| value.to_str().ok()),
            Some(allow)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn options_on_unknown_path_is_not_found() {
        let res = respond(
            test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/nowhere"),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(Method::PATCH, "/questions/1")]
    #[case(Method::POST, "/categories")]
    #[case(Method::DELETE, "/questions")]
    #[case(Method::PUT, "/quizzes")]
    #[actix_web::test]
    async fn wrong_method_on_known_path_is_not_allowed(#[case] method: Method, #[case] uri: &str) {
        let (status, body) = send(test::TestRequest::default().method(method).uri(uri)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": 405,
                "Message": "Method is Not allowed for requested URL"
            })
        );
    }
}
