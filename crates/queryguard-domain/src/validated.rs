use queryguard_types::TranslateRequest;

/// A query the guard accepted. Only [`crate::QueryGuard::accept`] constructs one, so holding a
/// `ValidatedQuery` is proof the text passed every enabled rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedQuery {
    sql_query: String,
    target_id: i64,
}

impl ValidatedQuery {
    pub(crate) fn new(sql_query: &str, target_id: i64) -> Self {
        Self {
            sql_query: sql_query.to_string(),
            target_id,
        }
    }

    pub fn sql_query(&self) -> &str {
        &self.sql_query
    }

    pub fn target_id(&self) -> i64 {
        self.target_id
    }

    pub fn into_translate_request(self) -> TranslateRequest {
        TranslateRequest {
            sql_query: self.sql_query,
            neo4j_connection_id: self.target_id,
        }
    }
}

impl From<ValidatedQuery> for TranslateRequest {
    fn from(value: ValidatedQuery) -> Self {
        value.into_translate_request()
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryGuard;
    use queryguard_types::TranslateRequest;
    use serde_json::json;

    #[test]
    fn translate_request_uses_backend_field_names() {
        let validated = QueryGuard::default()
            .accept("SELECT * FROM users WHERE age > 25", 1)
            .expect("accepted");
        let request: TranslateRequest = validated.into();
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({
                "sql_query": "SELECT * FROM users WHERE age > 25",
                "neo4j_connection_id": 1,
            })
        );
    }
}
