use crate::QueryGuard;
use crate::policy::{CheckPolicy, GuardPolicy};
use queryguard_types::{ConnectionDraft, ConnectionTest, DbType, ReasonCode};

pub fn guard() -> QueryGuard {
    QueryGuard::default()
}

pub fn guard_with(policy: GuardPolicy) -> QueryGuard {
    QueryGuard::new(policy).expect("test policy must compile")
}

pub fn guard_without(check_ids: &[&str]) -> QueryGuard {
    let policy = check_ids
        .iter()
        .fold(GuardPolicy::default(), |p, id| p.with_check(id, CheckPolicy::disabled()));
    guard_with(policy)
}

/// Reason reported by the default guard for a valid target.
pub fn reason_of(query: &str) -> Option<ReasonCode> {
    guard().validate(query, 1).reason()
}

pub fn sql_server_draft() -> ConnectionDraft {
    ConnectionDraft {
        conn_name: "Production SQL Server".to_string(),
        db_type: DbType::SqlServer,
        host: "localhost".to_string(),
        port: 1433,
        db_user: "sa".to_string(),
        db_password: "SecurePass123!".to_string(),
        database_name: Some("master".to_string()),
    }
}

pub fn sql_server_probe() -> ConnectionTest {
    ConnectionTest {
        db_type: DbType::SqlServer,
        host: "localhost".to_string(),
        port: 1433,
        db_user: "sa".to_string(),
        db_password: "password".to_string(),
        database_name: Some("testdb".to_string()),
    }
}
