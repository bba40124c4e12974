//! HTTP surface: route registration and the server entry point.

pub mod compare;

pub use compare::{compare_urls, ComparisonResult, FetchOutcome};

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::scrape::{FetchPage, PageClient};

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "healthy", "message": "API is running" }))
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "Universal Feature Comparator API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/compare": "POST - Compare features from two URLs",
            "/health": "GET - Health check"
        },
        "note": "Some websites (Amazon, Flipkart) use anti-bot protection and may not always work."
    }))
}

/// Registers all routes; shared between the server and handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(compare::compare).service(health).service(index);
}

/// Runs the API server until shutdown.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let fetcher: Arc<dyn FetchPage> = Arc::new(PageClient::new(&config));
    let data = web::Data::from(fetcher);

    info!("Serving on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "API is running");
    }

    #[actix_web::test]
    async fn test_index_endpoint() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Universal Feature Comparator API");
        assert!(body["endpoints"]["/compare"].as_str().unwrap().starts_with("POST"));
        assert!(body["endpoints"]["/health"].as_str().unwrap().starts_with("GET"));
    }
}
