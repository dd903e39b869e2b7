use crate::application::PredictUseCase;
use crate::domain::error::AppError;
use crate::infrastructure::config::ServerConfig;
use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

pub const GREETING: &str = "Diabetes ML Model Server is up!";

pub struct HttpState {
    pub predict_use_case: Arc<PredictUseCase>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn bad_request(message: String) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorResponse { error: message })
    }
}

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}

#[post("/predict")]
async fn predict(data: web::Data<HttpState>, body: web::Json<Value>) -> impl Responder {
    match data.predict_use_case.execute(&body) {
        Ok(prediction) => HttpResponse::Ok().json(prediction),
        Err(e) => {
            log_rejection("/predict", &e);
            ErrorResponse::bad_request(e.to_string())
        }
    }
}

#[post("/assess")]
async fn assess(data: web::Data<HttpState>, body: web::Json<Value>) -> impl Responder {
    match data.predict_use_case.assess(&body) {
        Ok(assessment) => HttpResponse::Ok().json(assessment),
        Err(e) => {
            log_rejection("/assess", &e);
            ErrorResponse::bad_request(e.to_string())
        }
    }
}

fn log_rejection(route: &str, err: &AppError) {
    match err {
        AppError::ValidationError(_) => warn!(route, error = %err, "Rejected request"),
        _ => warn!(route, error = %err, "Prediction failed"),
    }
}

/// Body extraction failures (bad JSON, wrong content type) answer with the
/// same `{"error": ...}` shape as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        warn!(error = %message, "Rejected request body");
        InternalError::from_response(err, ErrorResponse::bad_request(message)).into()
    })
}

/// Routes and extractor config, shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(home)
        .service(predict)
        .service(assess);
}

fn cors_for(origin: &str) -> Cors {
    if origin == "*" {
        Cors::permissive()
    } else {
        Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
    }
}

pub fn start_server(
    predict_use_case: Arc<PredictUseCase>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { predict_use_case });
    let cors_origin = config.cors_origin.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_for(&cors_origin))
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    info!(host = %config.host, port = config.port, "Model server listening");
    Ok(server)
}
