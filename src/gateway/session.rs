//! Session registry over an external connector.
//!
//! The registry hands out opaque session ids, keeps one connection per id,
//! and turns raw query results into rendered tables using the session's
//! timezone.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::wrapper::{Context, DefaultFactory, Factory};
use crate::{Error, Result};
use super::{ExecuteResult, GatewayConfig, QueryResult};

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection layer to the graph service. Implemented outside this crate.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Send + Sync;

    /// Authenticate and open a session.
    async fn connect(&self, config: &GatewayConfig) -> Result<Self::Connection>;

    /// Run a query; cells of the result are raw [`crate::Value`]s.
    async fn execute(
        &self,
        conn: &Self::Connection,
        gql: &str,
        params: &[String],
    ) -> Result<QueryResult>;

    /// Release the session on the service side.
    async fn disconnect(&self, conn: &Self::Connection) -> Result<()>;
}

/// Live sessions keyed by [`SessionId`].
pub struct SessionRegistry<C: Connector> {
    connector: C,
    factory: Arc<dyn Factory>,
    sessions: RwLock<HashMap<SessionId, Arc<C::Connection>>>,
    next_id: AtomicU64,
}

impl<C: Connector> SessionRegistry<C> {
    pub fn new(connector: C) -> Self {
        Self::with_factory(connector, Arc::new(DefaultFactory))
    }

    /// Use a version-specific factory for rendering results.
    pub fn with_factory(connector: C, factory: Arc<dyn Factory>) -> Self {
        Self {
            connector,
            factory,
            sessions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    pub async fn connect(&self, config: &GatewayConfig) -> Result<SessionId> {
        let conn = self.connector.connect(config).await?;
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.sessions.write().insert(id, Arc::new(conn));
        tracing::debug!(session = %id, address = %config.address, "session opened");
        Ok(id)
    }

    fn session(&self, id: SessionId) -> Result<Arc<C::Connection>> {
        self.sessions.read().get(&id).cloned().ok_or(Error::SessionNotFound(id))
    }

    /// Execute and render the result table with the session's timezone.
    pub async fn execute(
        &self,
        id: SessionId,
        gql: &str,
        params: &[String],
    ) -> Result<ExecuteResult> {
        let conn = self.session(id)?;
        let result = self.connector.execute(&conn, gql, params).await?;
        let ctx = Context::new(Arc::clone(&self.factory), result.timezone.clone());
        ExecuteResult::from_query(&result, &ctx)
    }

    pub async fn disconnect(&self, id: SessionId) -> Result<()> {
        let conn = self.sessions.write().remove(&id).ok_or(Error::SessionNotFound(id))?;
        tracing::debug!(session = %id, "session closed");
        self.connector.disconnect(&conn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(42).to_string(), "42");
        assert_eq!(Error::SessionNotFound(SessionId(3)).to_string(), "Session not found: 3");
    }
}
