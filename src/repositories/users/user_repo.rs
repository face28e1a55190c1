//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **저장소 추상화**: [`UserStore`] trait으로 서비스 계층과 저장소를 분리
//! - **데이터 무결성**: `email` 유니크 인덱스로 동시 가입 경쟁 상태에서도 중복 방지
//! - **에러 매핑**: MongoDB 중복 키 에러(11000)를 [`AppError::ConflictError`]로 변환

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::User,
    errors::AppError,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 중복 가입 시 클라이언트에게 전달되는 메시지
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 추상화
///
/// 모든 이메일 인자는 이미 정규화(소문자, 공백 제거)된 값이어야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 프로바이더와 무관하게 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 이메일과 프로바이더가 모두 일치하는 사용자 조회
    async fn find_by_email_and_provider(
        &self,
        email: &str,
        provider: AuthProvider,
    ) -> Result<Option<User>, AppError>;

    /// ObjectId 16진수 문자열로 사용자 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// 같은 이메일의 사용자가 이미 있으면 [`AppError::ConflictError`]를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **이메일 유니크 인덱스** (`email_unique`): 중복 가입 방지
    /// 2. **이메일 + 프로바이더 인덱스** (`email_provider`): 로컬 로그인 조회
    ///
    /// 이미 중복 데이터가 있는 컬렉션에서는 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let provider_index = IndexModel::builder()
            .keys(doc! { "email": 1, "provider": 1 })
            .options(IndexOptions::builder()
                .name("email_provider".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, provider_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email_and_provider(
        &self,
        email: &str,
        provider: AuthProvider,
    ) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email, "provider": provider.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        // 형식이 잘못된 ID는 존재하지 않는 사용자로 취급
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted_id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        return AppError::ConflictError(USER_EXISTS_MESSAGE.to_string());
    }
    AppError::DatabaseError(error.to_string())
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
