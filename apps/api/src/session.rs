//! In-memory store of open screens.
//!
//! The store holds the only long-lived strong reference to each screen, so
//! removing an entry disposes that screen once in-flight requests finish.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

pub struct SessionStore<T> {
    kind: &'static str,
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<T>>>>,
}

impl<T> SessionStore<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn open(&self, screen: T) -> (Uuid, Arc<Mutex<T>>) {
        let id = Uuid::new_v4();
        let screen = Arc::new(Mutex::new(screen));
        self.sessions.write().await.insert(id, screen.clone());
        info!(kind = self.kind, %id, "Session opened");
        (id, screen)
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<Mutex<T>>, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("{} session {id} not found", self.kind)))
    }

    pub async fn dispose(&self, id: Uuid) -> Result<(), AppError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                info!(kind = self.kind, %id, "Session disposed");
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "{} session {id} not found",
                self.kind
            ))),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
