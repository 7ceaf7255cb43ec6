//! The `scan` use case: validate every `.sql` file beneath a directory.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use queryguard_settings::Overrides;
use queryguard_types::Rejection;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::resolve_guard;

#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    pub root: &'a Utf8Path,
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub target_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    Accepted,
    Rejected(Rejection),
    /// The file could not be read as UTF-8 text.
    Unreadable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanEntry {
    /// Relative to the scan root, `/`-separated.
    pub path: Utf8PathBuf,
    pub outcome: ScanOutcome,
}

#[derive(Clone, Debug, Default)]
pub struct ScanOutput {
    /// Sorted by path.
    pub entries: Vec<ScanEntry>,
}

impl ScanOutput {
    pub fn accepted(&self) -> usize {
        self.count(|o| matches!(o, ScanOutcome::Accepted))
    }

    pub fn rejected(&self) -> usize {
        self.count(|o| matches!(o, ScanOutcome::Rejected(_)))
    }

    pub fn unreadable(&self) -> usize {
        self.count(|o| matches!(o, ScanOutcome::Unreadable(_)))
    }

    /// 1 if any file was unreadable, else 2 if any was rejected, else 0.
    pub fn exit_code(&self) -> i32 {
        if self.unreadable() > 0 {
            1
        } else if self.rejected() > 0 {
            2
        } else {
            0
        }
    }

    fn count(&self, pred: impl Fn(&ScanOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let resolved = resolve_guard(input.config_text, input.overrides.clone())?;
    let guard = &resolved.guard;

    let files = discover_sql_files(input.root)?;
    tracing::debug!(root = %input.root, files = files.len(), "scanning");

    let mut entries: Vec<ScanEntry> = files
        .par_iter()
        .map(|rel| {
            let outcome = match std::fs::read_to_string(input.root.join(rel)) {
                Ok(text) => guard.validate(&text, input.target_id).into(),
                Err(err) => ScanOutcome::Unreadable(err.to_string()),
            };
            ScanEntry {
                path: rel.clone(),
                outcome,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(ScanOutput { entries })
}

fn discover_sql_files(root: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(path) = Utf8Path::from_path(entry.path()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        let is_sql = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"));
        if !is_sql {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        files.push(Utf8PathBuf::from(rel.as_str().replace('\\', "/")));
    }
    Ok(files)
}

impl From<queryguard_types::ValidationResult> for ScanOutcome {
    fn from(value: queryguard_types::ValidationResult) -> Self {
        match value {
            queryguard_types::ValidationResult::Accepted => ScanOutcome::Accepted,
            queryguard_types::ValidationResult::Rejected(r) => ScanOutcome::Rejected(r),
        }
    }
}

/// One line per file followed by a summary line.
pub fn format_scan(output: &ScanOutput) -> String {
    let mut out = String::new();
    for e in &output.entries {
        match &e.outcome {
            ScanOutcome::Accepted => out.push_str(&format!("ok       {}\n", e.path)),
            ScanOutcome::Rejected(r) => out.push_str(&format!(
                "rejected {}: {} [{}] {}\n",
                e.path, r.reason, r.check_id, r.message
            )),
            ScanOutcome::Unreadable(err) => {
                out.push_str(&format!("error    {}: {}\n", e.path, err))
            }
        }
    }
    out.push_str(&format!(
        "{} files: {} accepted, {} rejected, {} unreadable\n",
        output.entries.len(),
        output.accepted(),
        output.rejected(),
        output.unreadable()
    ));
    out
}
