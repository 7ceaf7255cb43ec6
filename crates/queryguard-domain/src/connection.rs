//! Connection form validation.
//!
//! Fields are checked in form order and the first offending field is reported. The `db_type`
//! enum is enforced when the form is decoded, so it never fails here.

use queryguard_types::connection::{
    FIELD_CONN_NAME, FIELD_DB_PASSWORD, FIELD_DB_USER, FIELD_HOST, FIELD_PORT,
};
use queryguard_types::{ConnectionDraft, ConnectionIssue, ConnectionPatch, ConnectionTest};

pub const CONN_NAME_MIN: usize = 3;
pub const CONN_NAME_MAX: usize = 100;
pub const PORT_MIN: i64 = 1;
pub const PORT_MAX: i64 = 65_535;

pub fn validate_draft(draft: &ConnectionDraft) -> Result<(), ConnectionIssue> {
    check_conn_name(&draft.conn_name)?;
    check_endpoint(
        &draft.host,
        draft.port,
        &draft.db_user,
        &draft.db_password,
    )
}

pub fn validate_test(probe: &ConnectionTest) -> Result<(), ConnectionIssue> {
    check_endpoint(
        &probe.host,
        probe.port,
        &probe.db_user,
        &probe.db_password,
    )
}

/// Present fields follow the create rules; absent fields are left alone.
pub fn validate_patch(patch: &ConnectionPatch) -> Result<(), ConnectionIssue> {
    if let Some(name) = patch.conn_name.as_deref() {
        check_conn_name(name)?;
    }
    if let Some(host) = patch.host.as_deref() {
        check_required(FIELD_HOST, host)?;
    }
    if let Some(port) = patch.port {
        check_port(port)?;
    }
    if let Some(user) = patch.db_user.as_deref() {
        check_required(FIELD_DB_USER, user)?;
    }
    if let Some(password) = patch.db_password.as_deref() {
        check_required(FIELD_DB_PASSWORD, password)?;
    }
    Ok(())
}

fn check_endpoint(host: &str, port: i64, user: &str, password: &str) -> Result<(), ConnectionIssue> {
    check_required(FIELD_HOST, host)?;
    check_port(port)?;
    check_required(FIELD_DB_USER, user)?;
    check_required(FIELD_DB_PASSWORD, password)
}

fn check_conn_name(name: &str) -> Result<(), ConnectionIssue> {
    let len = name.chars().count();
    if len < CONN_NAME_MIN {
        return Err(ConnectionIssue::new(
            FIELD_CONN_NAME,
            format!("connection name must be at least {CONN_NAME_MIN} characters"),
        ));
    }
    if len > CONN_NAME_MAX {
        return Err(ConnectionIssue::new(
            FIELD_CONN_NAME,
            format!("connection name cannot exceed {CONN_NAME_MAX} characters"),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-')
    {
        return Err(ConnectionIssue::new(
            FIELD_CONN_NAME,
            "connection name may only contain letters, digits, spaces, `_` and `-`",
        ));
    }
    Ok(())
}

fn check_required(field: &str, value: &str) -> Result<(), ConnectionIssue> {
    if value.trim().is_empty() {
        return Err(ConnectionIssue::new(field, format!("{field} is required")));
    }
    Ok(())
}

fn check_port(port: i64) -> Result<(), ConnectionIssue> {
    if !(PORT_MIN..=PORT_MAX).contains(&port) {
        return Err(ConnectionIssue::new(
            FIELD_PORT,
            format!("port must be between {PORT_MIN} and {PORT_MAX}"),
        ));
    }
    Ok(())
}
