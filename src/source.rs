use std::fs;
use std::path::{Path, PathBuf};

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use log::{debug, info};
use serde_json::Value;

use crate::errors::ExtractError;

/// Shard extensions the loaders know how to parse.
const SHARD_EXTENSIONS: [&str; 3] = ["json", "jsonl", "ndjson"];

/// A collaborator that materializes the raw rows of one dataset split.
pub trait RecordSource {
    /// Human-readable name used in logs and error context.
    fn describe(&self) -> String;

    /// Fetch every row of the given split, in a deterministic order.
    fn fetch_rows(&self, split: &str) -> Result<Vec<Value>, ExtractError>;
}

/// A dataset repo on the Hugging Face Hub.
///
/// Lists the repo's files, keeps the JSON/JSONL shards belonging to the
/// requested split, and pulls each one through the local Hub cache.
pub struct HubDataset {
    dataset: String,
    revision: String,
    token: Option<String>,
}

impl HubDataset {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            revision: "main".to_string(),
            token: None,
        }
    }

    /// HF access token (falls back to cached creds when `None`).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    fn unavailable(&self, reason: impl Into<String>) -> ExtractError {
        ExtractError::DataSource {
            dataset: self.dataset.clone(),
            reason: reason.into(),
        }
    }
}

impl RecordSource for HubDataset {
    fn describe(&self) -> String {
        format!("hub dataset {}@{}", self.dataset, self.revision)
    }

    fn fetch_rows(&self, split: &str) -> Result<Vec<Value>, ExtractError> {
        let api = ApiBuilder::new()
            .with_token(self.token.clone())
            .build()
            .map_err(|err| self.unavailable(format!("building hub client: {err}")))?;
        let repo = Repo::with_revision(
            self.dataset.clone(),
            RepoType::Dataset,
            self.revision.clone(),
        );
        let handle = api.repo(repo);

        let repo_info = handle
            .info()
            .map_err(|err| self.unavailable(format!("fetching repo metadata: {err}")))?;

        // sorted sibling order keeps row order deterministic across runs
        let mut shards: Vec<String> = repo_info
            .siblings
            .into_iter()
            .map(|sib| sib.rfilename)
            .filter(|name| is_split_shard(name, split))
            .collect();
        shards.sort();

        if shards.is_empty() {
            return Err(self.unavailable(format!(
                "no JSON/JSONL shards found for split '{split}'"
            )));
        }
        info!("Found {} shard(s) for split '{split}'", shards.len());

        let mut rows = Vec::new();
        for name in &shards {
            let local = handle
                .get(name)
                .map_err(|err| self.unavailable(format!("downloading shard {name}: {err}")))?;
            let count = read_shard_rows(&local, &mut rows)
                .map_err(|reason| self.unavailable(format!("shard {name}: {reason}")))?;
            debug!("Shard {name}: {count} row(s)");
        }
        Ok(rows)
    }
}

/// One local JSON or JSONL file standing in for a hub split.
///
/// The file is taken as-is; the requested split name is ignored.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn unavailable(&self, reason: impl Into<String>) -> ExtractError {
        ExtractError::DataSource {
            dataset: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    fn fetch_rows(&self, _split: &str) -> Result<Vec<Value>, ExtractError> {
        let mut rows = Vec::new();
        read_shard_rows(&self.path, &mut rows).map_err(|reason| self.unavailable(reason))?;
        Ok(rows)
    }
}

fn is_split_shard(name: &str, split: &str) -> bool {
    let has_known_extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SHARD_EXTENSIONS.contains(&ext))
        .unwrap_or(false);
    has_known_extension && name.contains(split)
}

/// Append every row of one shard file. A top-level JSON array contributes
/// its elements; anything else is read as JSONL, one row per non-blank line.
fn read_shard_rows(path: &Path, rows: &mut Vec<Value>) -> Result<usize, String> {
    let text =
        fs::read_to_string(path).map_err(|err| format!("reading {}: {err}", path.display()))?;

    if text.trim_start().starts_with('[') {
        let parsed: Vec<Value> =
            serde_json::from_str(&text).map_err(|err| format!("invalid JSON array: {err}"))?;
        let count = parsed.len();
        rows.extend(parsed);
        return Ok(count);
    }

    let mut count = 0;
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Value = serde_json::from_str(line)
            .map_err(|err| format!("invalid JSON on line {}: {err}", line_no + 1))?;
        rows.push(row);
        count += 1;
    }
    Ok(count)
}
