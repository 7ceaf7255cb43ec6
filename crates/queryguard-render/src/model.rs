#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRejection {
    pub check_id: String,
    pub reason: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub target_id: i64,
    pub query_chars: u64,
    pub query_sha256: String,
    pub checks_run: u32,
    pub config_source: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub rejections: Vec<RenderableRejection>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// First 12 hex digits of the query fingerprint.
    pub fn short_fingerprint(&self) -> &str {
        let sha = self.data.query_sha256.as_str();
        sha.get(..12).unwrap_or(sha)
    }
}
