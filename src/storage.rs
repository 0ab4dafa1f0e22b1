use crate::errors::SessionError;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// On-disk layout of the session file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Persistent holder of the bearer token set after login.
///
/// There is no clear operation: a session without a token is the only
/// logged-out state callers can observe.
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    data: Arc<Mutex<SessionData>>,
}

impl SessionStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_session(&path).await;
        Self {
            path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn get_token(&self) -> Option<String> {
        self.data.lock().await.access_token.clone()
    }

    pub async fn set_token(&self, token: impl Into<String>) -> Result<(), SessionError> {
        let mut data = self.data.lock().await;
        let updated = SessionData {
            access_token: Some(token.into()),
        };
        persist_session(&self.path, &updated).await?;
        *data = updated;
        Ok(())
    }
}

pub async fn load_session(path: &Path) -> SessionData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse session file: {err}");
                SessionData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => SessionData::default(),
        Err(err) => {
            error!("failed to read session file: {err}");
            SessionData::default()
        }
    }
}

pub async fn persist_session(path: &Path, data: &SessionData) -> Result<(), SessionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn unique_temp_path(prefix: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("{prefix}_{}_{}.json", std::process::id(), nanos));
    path
}
