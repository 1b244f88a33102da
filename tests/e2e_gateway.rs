//! End-to-end tests for the gateway boundary: sessions, execution and the
//! JSON shapes returned to clients, against an in-process connector.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use nebula_wrapper::{
    Connector, Error, ExecuteRequest, GatewayConfig, QueryResult, Response, SessionId,
    SessionRegistry, Tag, Time, TimezoneInfo, Value, Vertex,
};

// ============================================================================
// Helper: a connector that answers every query with a fixed table.
// ============================================================================

#[derive(Default)]
struct FixedConnector {
    disconnects: AtomicUsize,
}

struct FixedConnection {
    user: String,
}

#[async_trait]
impl Connector for FixedConnector {
    type Connection = FixedConnection;

    async fn connect(&self, config: &GatewayConfig) -> nebula_wrapper::Result<FixedConnection> {
        if config.password != "nebula" {
            return Err(Error::Connection("bad credentials".into()));
        }
        Ok(FixedConnection { user: config.username.clone() })
    }

    async fn execute(
        &self,
        conn: &FixedConnection,
        gql: &str,
        params: &[String],
    ) -> nebula_wrapper::Result<QueryResult> {
        if gql.trim().is_empty() {
            return Err(Error::ExecutionError("empty statement".into()));
        }
        Ok(QueryResult {
            columns: vec!["user".into(), "v".into(), "t".into(), "params".into()],
            rows: vec![vec![
                Value::from(conn.user.as_str()),
                Value::from(Vertex::new("p1").with_tag(Tag::new("player").with_property("age", 33))),
                Value::Time(Time::new(23, 0, 0, 0)),
                Value::Int(params.len() as i64),
            ]],
            timezone: TimezoneInfo::new(2 * 3600, "+02:00"),
            latency_us: 250,
        })
    }

    async fn disconnect(&self, _conn: &FixedConnection) -> nebula_wrapper::Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn config(password: &str) -> GatewayConfig {
    GatewayConfig {
        username: "root".into(),
        password: password.into(),
        address: "127.0.0.1".into(),
        port: 9669,
        version: String::new(),
    }
}

// ============================================================================
// 1. Connect, execute, disconnect
// ============================================================================

#[tokio::test]
async fn test_session_lifecycle() {
    let registry = SessionRegistry::new(FixedConnector::default());
    let id = registry.connect(&config("nebula")).await.unwrap();
    assert_eq!(registry.session_count(), 1);

    let req: ExecuteRequest =
        serde_json::from_str(r#"{"gql":"MATCH (v) RETURN v","paramList":[":param x => 1"]}"#).unwrap();
    let result = registry.execute(id, &req.gql, &req.param_list).await.unwrap();
    assert_eq!(result.headers, vec!["user", "v", "t", "params"]);
    assert_eq!(result.time_cost, 250);

    let row = &result.tables[0];
    assert_eq!(row["user"], "\"root\"");
    assert_eq!(row["v"], r#"("p1" :player{age: 33})"#);
    assert_eq!(row["t"], "01:00:00.000000");
    assert_eq!(row["params"], "1");

    registry.disconnect(id).await.unwrap();
    assert_eq!(registry.session_count(), 0);
    assert_eq!(registry.connector().disconnects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_sessions_are_distinct() {
    let registry = SessionRegistry::new(FixedConnector::default());
    let a = registry.connect(&config("nebula")).await.unwrap();
    let b = registry.connect(&config("nebula")).await.unwrap();
    assert_ne!(a, b);
    registry.disconnect(a).await.unwrap();
    assert!(registry.execute(b, "RETURN 1", &[]).await.is_ok());
}

// ============================================================================
// 2. Failures
// ============================================================================

#[tokio::test]
async fn test_unknown_session() {
    let registry = SessionRegistry::new(FixedConnector::default());
    let err = registry.execute(SessionId(99), "RETURN 1", &[]).await.unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(SessionId(99))));
    let err = registry.disconnect(SessionId(99)).await.unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(_)));
}

#[tokio::test]
async fn test_connect_failure_registers_nothing() {
    let registry = SessionRegistry::new(FixedConnector::default());
    assert!(matches!(
        registry.connect(&config("wrong")).await,
        Err(Error::Connection(_))
    ));
    assert_eq!(registry.session_count(), 0);
}

// ============================================================================
// 3. Response envelope
// ============================================================================

#[tokio::test]
async fn test_response_envelope() {
    let registry = SessionRegistry::new(FixedConnector::default());
    let id = registry.connect(&config("nebula")).await.unwrap();

    let ok = Response::from_result(registry.execute(id, "RETURN 1", &[]).await, "");
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["code"], 0);
    assert_eq!(json["data"]["headers"][0], "user");
    assert_eq!(json["data"]["tables"][0]["params"], "0");

    let failed = Response::from_result(registry.execute(id, "  ", &[]).await, "");
    assert_eq!(failed.code, -1);
    assert_eq!(failed.message, "Execution error: empty statement");
    assert_eq!(failed.data, serde_json::Value::Null);
}
