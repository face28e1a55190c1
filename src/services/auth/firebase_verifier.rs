//! # Firebase ID 토큰 검증기
//!
//! 클라이언트가 Firebase Authentication으로 Google 로그인을 마친 뒤 전달하는
//! ID 토큰을 검증합니다. Firebase Admin SDK의 `verifyIdToken`과 같은 규칙을 따릅니다.
//!
//! ## 검증 규칙
//!
//! | 항목 | 조건 |
//! |------|------|
//! | `alg` | `RS256` |
//! | `kid` | Google securetoken JWKS에 존재 |
//! | `aud` | Firebase 프로젝트 ID |
//! | `iss` | `https://securetoken.google.com/<프로젝트 ID>` |
//! | `exp` | 현재 시각 이후 (60초 허용 오차) |
//! | `iat` | 현재 시각 이전 (60초 허용 오차) |
//! | `sub` | 비어 있지 않고 128자 이하 |
//! | `email` | 존재 |
//!
//! ## 공개키 캐싱
//!
//! JWKS는 프로세스 메모리에 캐시되며, 응답의 `Cache-Control: max-age`가 지나거나
//! 캐시에 없는 `kid`가 들어오면 다시 가져옵니다. 알 수 없는 `kid`로 인한 갱신은
//! 마지막 갱신 후 [`MIN_REFRESH_INTERVAL`]이 지나야 다시 일어납니다.
//!
//! ## 생성
//!
//! 검증기는 애플리케이션 시작 시 서비스 계정 키 파일로 한 번 생성되어
//! `Arc` 핸들로 [`GoogleAuthService`](super::GoogleAuthService)에 전달됩니다.
//!
//! ```rust,ignore
//! let verifier = FirebaseTokenVerifier::from_service_account_file(
//!     &FirebaseConfig::service_account_path(),
//! )?;
//! let verifier: Arc<dyn IdTokenVerifier> = Arc::new(verifier);
//! ```

use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use log::{debug, info};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use crate::{
    config::{FirebaseConfig, FIREBASE_ISSUER_PREFIX},
    domain::models::oauth::{FirebaseIdClaims, GoogleIdentity},
    errors::{AppError, AppResult, ErrorContext},
};

/// `exp` / `iat` 허용 오차 (초)
const CLOCK_SKEW_SECS: u64 = 60;

/// Firebase UID 최대 길이
const MAX_SUBJECT_LENGTH: usize = 128;

/// `Cache-Control` 헤더가 없을 때 사용하는 JWKS 캐시 기간
const DEFAULT_JWKS_TTL: Duration = Duration::from_secs(60 * 60);

/// 알 수 없는 `kid`로 JWKS를 다시 가져오기 위한 최소 간격
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// 외부 ID 토큰 검증 추상화
///
/// 검증에 실패하면 어떤 사용자 정보도 반환하지 않습니다.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> AppResult<GoogleIdentity>;
}

/// 서비스 계정 키 파일에서 필요한 필드
#[derive(Debug, Deserialize)]
struct ServiceAccount {
    project_id: String,
    #[serde(default)]
    client_email: Option<String>,
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
    expires_at: Instant,
}

impl CachedKeys {
    fn new(keys: JwkSet, ttl: Duration) -> Self {
        let fetched_at = Instant::now();
        Self { keys, fetched_at, expires_at: fetched_at + ttl }
    }

    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }

    fn recently_fetched(&self) -> bool {
        self.is_fresh() && self.fetched_at.elapsed() < MIN_REFRESH_INTERVAL
    }
}

/// Firebase ID 토큰 검증기
pub struct FirebaseTokenVerifier {
    project_id: String,
    issuer: String,
    jwks_uri: String,
    http: reqwest::Client,
    keys: RwLock<Option<CachedKeys>>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>, jwks_uri: impl Into<String>) -> Self {
        let project_id = project_id.into();

        Self {
            issuer: format!("{}{}", FIREBASE_ISSUER_PREFIX, project_id),
            project_id,
            jwks_uri: jwks_uri.into(),
            http: reqwest::Client::new(),
            keys: RwLock::new(None),
        }
    }

    /// 서비스 계정 키 파일에서 프로젝트 ID를 읽어 검증기를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 파일을 읽을 수 없거나 형식이 잘못된 경우
    pub fn from_service_account_file(path: &str) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("서비스 계정 키 파일을 읽을 수 없습니다 ({})", path))?;

        let account: ServiceAccount = serde_json::from_str(&contents)
            .with_context(|| format!("서비스 계정 키 파일 형식이 잘못되었습니다 ({})", path))?;

        if account.project_id.trim().is_empty() {
            return Err(AppError::InternalError(
                "서비스 계정 키 파일에 project_id가 없습니다".to_string(),
            ));
        }

        info!(
            "🔑 Firebase 서비스 계정 로드: project={} account={}",
            account.project_id,
            account.client_email.as_deref().unwrap_or("-")
        );

        Ok(Self::new(account.project_id, FirebaseConfig::jwks_uri()))
    }

    /// 미리 준비된 공개키 집합으로 캐시를 채웁니다.
    pub fn with_keys(self, keys: JwkSet, ttl: Duration) -> Self {
        if let Ok(mut cache) = self.keys.write() {
            *cache = Some(CachedKeys::new(keys, ttl));
        }
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// `kid`에 해당하는 서명 검증 키를 찾습니다.
    ///
    /// 캐시가 만료되었거나 `kid`가 캐시에 없으면 JWKS를 한 번 다시 가져옵니다.
    /// 방금 가져온 캐시에 없는 `kid`는 다시 가져오지 않고 거부합니다.
    async fn decoding_key(&self, kid: &str) -> AppResult<DecodingKey> {
        if let Some(key) = self.cached_key(kid, true)? {
            return Ok(key);
        }

        if self.recently_refreshed()? {
            debug!("JWKS 갱신 생략 (최근 갱신됨): kid={}", kid);
            return Err(unknown_kid(kid));
        }

        self.refresh_keys().await?;

        self.cached_key(kid, false)?.ok_or_else(|| unknown_kid(kid))
    }

    fn recently_refreshed(&self) -> AppResult<bool> {
        let cache = self.keys
            .read()
            .map_err(|_| AppError::InternalError("JWKS 캐시 잠금 실패".to_string()))?;

        Ok(cache.as_ref().is_some_and(CachedKeys::recently_fetched))
    }

    fn cached_key(&self, kid: &str, require_fresh: bool) -> AppResult<Option<DecodingKey>> {
        let cache = self.keys
            .read()
            .map_err(|_| AppError::InternalError("JWKS 캐시 잠금 실패".to_string()))?;

        let Some(cached) = cache.as_ref() else {
            return Ok(None);
        };
        if require_fresh && !cached.is_fresh() {
            return Ok(None);
        }

        match cached.keys.find(kid) {
            Some(jwk) => DecodingKey::from_jwk(jwk)
                .map(Some)
                .map_err(|e| AppError::InternalError(format!("JWK 변환 실패: {}", e))),
            None => Ok(None),
        }
    }

    async fn refresh_keys(&self) -> AppResult<()> {
        debug!("JWKS 갱신: {}", self.jwks_uri);

        let response = self.http
            .get(&self.jwks_uri)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 요청 실패: {}", e)))?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(DEFAULT_JWKS_TTL);

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 응답 파싱 실패: {}", e)))?;

        let mut cache = self.keys
            .write()
            .map_err(|_| AppError::InternalError("JWKS 캐시 잠금 실패".to_string()))?;
        *cache = Some(CachedKeys::new(keys, ttl));

        Ok(())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
        validation.leeway = CLOCK_SKEW_SECS;
        validation
    }
}

#[async_trait]
impl IdTokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, id_token: &str) -> AppResult<GoogleIdentity> {
        let header = decode_header(id_token)
            .map_err(|e| AppError::AuthenticationError(format!("토큰 헤더 파싱 실패: {}", e)))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::AuthenticationError(format!(
                "지원하지 않는 서명 알고리즘입니다: {:?}",
                header.alg
            )));
        }

        let kid = header.kid.ok_or_else(|| {
            AppError::AuthenticationError("토큰 헤더에 kid가 없습니다".to_string())
        })?;

        let key = self.decoding_key(&kid).await?;

        let claims = decode::<FirebaseIdClaims>(id_token, &key, &self.validation())
            .map(|data| data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("ID 토큰 검증 실패: {}", e)))?;

        if claims.iat > Utc::now().timestamp() + CLOCK_SKEW_SECS as i64 {
            return Err(AppError::AuthenticationError("발급 시간이 미래입니다".to_string()));
        }

        if claims.sub.is_empty() || claims.sub.chars().count() > MAX_SUBJECT_LENGTH {
            return Err(AppError::AuthenticationError("유효하지 않은 sub 클레임입니다".to_string()));
        }

        GoogleIdentity::from_claims(claims).ok_or_else(|| {
            AppError::AuthenticationError("ID 토큰에 이메일이 없습니다".to_string())
        })
    }
}

fn unknown_kid(kid: &str) -> AppError {
    AppError::AuthenticationError(format!("알 수 없는 키 ID입니다: {}", kid))
}

/// `Cache-Control` 헤더에서 `max-age` 값을 읽습니다.
fn parse_max_age(header: &str) -> Option<Duration> {
    header
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|seconds| seconds.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
