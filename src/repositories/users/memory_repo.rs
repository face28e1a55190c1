//! 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 서비스 계층을 실행하기 위한 [`UserStore`] 구현체입니다.
//! 이메일 유니크 제약은 쓰기 잠금 안에서 검사하여 MongoDB 유니크 인덱스와 같은
//! 동작을 보장합니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    config::AuthProvider,
    domain::entities::users::User,
    errors::AppError,
};
use super::user_repo::{UserStore, USER_EXISTS_MESSAGE};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.read(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read<T>(&self, f: impl FnOnce(&[User]) -> T) -> Result<T, AppError> {
        let users = self.users
            .read()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))?;
        Ok(f(&users))
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Result<Option<User>, AppError> {
        self.read(|users| users.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.find(|user| user.email == email)
    }

    async fn find_by_email_and_provider(
        &self,
        email: &str,
        provider: AuthProvider,
    ) -> Result<Option<User>, AppError> {
        self.find(|user| user.email == email && user.provider() == provider)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.find(|user| user.id == Some(object_id))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users
            .write()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }
}
