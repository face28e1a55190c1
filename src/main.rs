use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use auth_service::config::{CorsConfig, FirebaseConfig, ServerConfig};
use auth_service::db::Database;
use auth_service::repositories::users::{MongoUserRepository, UserStore};
use auth_service::routes::configure_all_routes;
use auth_service::services::auth::{FirebaseTokenVerifier, GoogleAuthService, IdTokenVerifier, TokenService};
use auth_service::services::users::UserService;

/// 핸들러에 전달되는 공유 서비스 묶음
#[derive(Clone)]
struct AppServices {
    user_service: web::Data<UserService>,
    google_auth_service: web::Data<GoogleAuthService>,
    token_service: web::Data<TokenService>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 인증 서비스 시작중...");

    let services = initialize_services().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// 데이터베이스 연결, 인덱스 생성, Firebase 검증기 생성 후 서비스를 조립합니다
///
/// 서버가 요청을 받기 전에 모두 완료되어야 하며, 하나라도 실패하면 시작하지 않습니다.
async fn initialize_services() -> io::Result<AppServices> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?);

    let mongo_repo = MongoUserRepository::new(database);
    mongo_repo.create_indexes().await.map_err(|e| {
        error!("인덱스 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;
    let user_repo: Arc<dyn UserStore> = Arc::new(mongo_repo);

    let verifier = FirebaseTokenVerifier::from_service_account_file(
        &FirebaseConfig::service_account_path(),
    )
    .map_err(|e| {
        error!("Firebase 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;
    let verifier: Arc<dyn IdTokenVerifier> = Arc::new(verifier);

    let token_service = Arc::new(TokenService::from_env());

    Ok(AppServices {
        user_service: web::Data::new(UserService::new(user_repo.clone(), token_service.clone())),
        google_auth_service: web::Data::new(GoogleAuthService::new(
            user_repo,
            token_service.clone(),
            verifier,
        )),
        token_service: web::Data::from(token_service),
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// ```rust,ignore
/// // 기본값: 0.0.0.0:5000
/// // Health check: http://localhost:5000/health
/// // API 엔드포인트: http://localhost:5000/api/auth/*
/// ```
async fn start_http_server(services: AppServices) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    if allowed_origins.is_empty() {
        warn!("CORS_ALLOWED_ORIGINS 미설정: 모든 Origin 허용");
    }

    HttpServer::new(move || {
        App::new()
            .app_data(services.user_service.clone())
            .app_data(services.google_auth_service.clone())
            .app_data(services.token_service.clone())
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 프로필 파일이 없으면 기본 .env 파일로 대체합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(name) => match dotenv::from_filename(name) {
            Ok(_) => info!("{} 파일 로드 됨", name),
            Err(e) => {
                warn!("{} 파일 로드 실패: {}", name, e);
                dotenv().ok();
            }
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 허용 Origin 목록이 비어 있으면 모든 Origin을 허용합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
