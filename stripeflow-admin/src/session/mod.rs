// src/session/mod.rs

//! 資格情報の保持と永続化
//!
//! APIクライアントはグローバルな保存領域を直接読まず、構築時に渡された
//! [`Session`] からヘッダーを得る。更新経路は [`Session::login`] と
//! [`Session::logout`] のみ。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::config::AuthScheme;
use crate::error::{ApiError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Credential {
    Bearer(String),
    ApiKey(String),
}

impl Credential {
    pub fn new(scheme: AuthScheme, value: impl Into<String>) -> Self {
        match scheme {
            AuthScheme::Bearer => Self::Bearer(value.into()),
            AuthScheme::ApiKey => Self::ApiKey(value.into()),
        }
    }

    /// (ヘッダー名, ヘッダー値)
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::Bearer(token) => ("Authorization", format!("Bearer {}", token)),
            Self::ApiKey(key) => ("X-API-Key", key.clone()),
        }
    }
}

/// 資格情報の永続化先
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> AppResult<Option<Credential>>;
    fn save(&self, credential: &Credential) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// JSONファイルに保存するストア
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> AppResult<Option<Credential>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ApiError::Storage(format!("Failed to read credential file: {}", e)))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let credential = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Storage(format!("Corrupt credential file: {}", e)))?;
        Ok(Some(credential))
    }

    fn save(&self, credential: &Credential) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ApiError::Storage(format!("Failed to create credential directory: {}", e))
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, raw)
            .map_err(|e| ApiError::Storage(format!("Failed to write credential file: {}", e)))
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "Failed to remove credential file: {}",
                e
            ))),
        }
    }
}

/// プロセス内だけで保持するストア（テスト用）
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            inner: Mutex::new(Some(credential)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> AppResult<Option<Credential>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| ApiError::Storage("credential store poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, credential: &Credential) -> AppResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ApiError::Storage("credential store poisoned".to_string()))?;
        *guard = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ApiError::Storage("credential store poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// 現在の資格情報（メモリ上のキャッシュ + 永続化ストア）
#[derive(Clone)]
pub struct Session {
    current: Arc<RwLock<Option<Credential>>>,
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// ストアから資格情報を読み込んでセッションを作成
    pub fn restore(store: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let credential = store.load()?;
        if credential.is_some() {
            tracing::debug!("Restored stored credential");
        }
        Ok(Self {
            current: Arc::new(RwLock::new(credential)),
            store,
        })
    }

    /// 永続化なしの匿名セッション
    pub fn anonymous() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            store: Arc::new(MemoryCredentialStore::default()),
        }
    }

    pub fn credential(&self) -> Option<Credential> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    pub fn login(&self, credential: Credential) -> AppResult<()> {
        self.store.save(&credential)?;
        let mut guard = self
            .current
            .write()
            .map_err(|_| ApiError::Storage("session lock poisoned".to_string()))?;
        *guard = Some(credential);
        tracing::info!("Credential stored");
        Ok(())
    }

    pub fn logout(&self) -> AppResult<()> {
        {
            let mut guard = self
                .current
                .write()
                .map_err(|_| ApiError::Storage("session lock poisoned".to_string()))?;
            *guard = None;
        }
        self.store.clear()?;
        tracing::info!("Credential cleared");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // トークンはログに出さない
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
