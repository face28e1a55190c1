//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 세션 토큰 추출 및 검증
//! - 검증된 사용자 ID를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 401 응답
//!
//! 토큰 검증에는 `app_data`에 등록된 `web::Data<TokenService>`를 사용합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/api/auth")
//!             .service(
//!                 web::resource("/me")
//!                     .wrap(AuthMiddleware)
//!                     .route(web::get().to(me)),
//!             ),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
