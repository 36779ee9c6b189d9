use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum LsTreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("git ls-tree exited with status {}: {stderr}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    CommandFailed { code: Option<i32>, stderr: String },
    #[error("line {line_number} is not valid ls-tree output: {line:?}")]
    MalformedLine { line_number: usize, line: String },
    #[error("the {} tree does not have a '{missing}' subtree or blob", describe_owner(.owner))]
    BrokenTree { owner: String, missing: String },
    #[error("the {} tree already has an entry named '{name}'", describe_owner(.parent))]
    DuplicateEntry { parent: String, name: String },
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl LsTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LsTreeError::Io {
            path: path.into(),
            source,
        }
    }
    /// Process exit code for this error. A failing git keeps its own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            LsTreeError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
fn describe_owner(path: &str) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        format!("'{}'", path)
    }
}
