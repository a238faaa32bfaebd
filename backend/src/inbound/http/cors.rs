//! Permissive CORS headers attached to every response.
//!
//! The trivia frontend is served from a different origin. Its JSON `POST`
//! and `DELETE` calls are preceded by an `OPTIONS` preflight, which the
//! fallback route answers with 200; this middleware adds the allow headers
//! to that answer and to every other response.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Build the middleware inserting the CORS allow headers.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    #[actix_web::test]
    async fn every_response_carries_allow_headers() {
        let app = test::init_service(
            App::new()
                .wrap(cors_headers())
                .route("/", web::get().to(|| async { HttpResponse::NotFound().finish() })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let value_of = |name: header::HeaderName| {
            res.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        assert_eq!(value_of(header::ACCESS_CONTROL_ALLOW_ORIGIN).as_deref(), Some(ALLOW_ORIGIN));
        assert_eq!(value_of(header::ACCESS_CONTROL_ALLOW_HEADERS).as_deref(), Some(ALLOW_HEADERS));
        assert_eq!(value_of(header::ACCESS_CONTROL_ALLOW_METHODS).as_deref(), Some(ALLOW_METHODS));
    }
}
