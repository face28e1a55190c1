//! API 라우트 설정 모듈
//!
//! 인증 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/api/auth/signup` | - |
//! | POST | `/api/auth/signin` | - |
//! | POST | `/api/auth/google` | - |
//! | GET | `/api/auth/me` | Bearer 토큰 |
//! | GET | `/health` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_service)
//!     .app_data(google_auth_service)
//!     .app_data(token_service)
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 `{"message": "..."}` 형태의 400 응답으로 변환합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// ```bash
/// # 로컬 로그인
/// curl -X POST http://localhost:5000/api/auth/signin \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@x.com","password":"secret1"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::signin)
            .service(handlers::auth::google)
            .service(handlers::auth::me)
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "auth_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
