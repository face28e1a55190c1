//! 세션 토큰 저장소
//!
//! 클라이언트가 영속화하는 유일한 상태는 세션 토큰 하나입니다.
//! 토큰은 `<데이터 디렉터리>/auth_client/token` 파일에 저장되며,
//! `AUTH_CLIENT_HOME` 환경 변수로 디렉터리를 바꿀 수 있습니다.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use super::ClientError;

/// 토큰 파일 이름
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// `dir/token` 파일을 사용하는 저장소
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(TOKEN_KEY) }
    }

    /// `AUTH_CLIENT_HOME` 또는 플랫폼 데이터 디렉터리 아래의 저장소
    pub fn from_env() -> Result<Self, ClientError> {
        if let Ok(home) = std::env::var("AUTH_CLIENT_HOME") {
            return Ok(Self::new(home));
        }

        let dir = dirs::data_dir().ok_or(ClientError::NoDataDir)?;
        Ok(Self::new(dir.join("auth_client")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<String>, ClientError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// 저장된 토큰을 삭제합니다. 토큰이 없어도 성공입니다.
    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
