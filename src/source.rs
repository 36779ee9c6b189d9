//! Where the raw listing lines come from.

use crate::error::LsTreeError;
use crate::options::LsTreeOptions;
use std::process::Command;
#[cfg(feature = "logging")]
use tracing;

/// Produces the raw, ordered lines of a recursive ls-tree listing.
pub trait ListingSource {
    fn list(&self, options: &LsTreeOptions) -> Result<Vec<String>, LsTreeError>;
}

/// Runs `git ls-tree` in the configured working directory.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: String,
}

impl Default for GitCommand {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl GitCommand {
    /// Uses `program` instead of the `git` found on `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ListingSource for GitCommand {
    fn list(&self, options: &LsTreeOptions) -> Result<Vec<String>, LsTreeError> {
        let args = options.git_args();
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Running {} {:?} in {}",
            self.program,
            args,
            options.working_dir.display()
        );
        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&options.working_dir)
            .output()
            .map_err(|e| LsTreeError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(LsTreeError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines = split_listing(&stdout);
        #[cfg(feature = "logging")]
        tracing::debug!("git ls-tree returned {} lines", lines.len());
        Ok(lines)
    }
}

/// A listing held in memory, for feeding captured output through the builder.
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    lines: Vec<String>,
}

impl StaticListing {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits captured ls-tree output the same way the git source does.
    pub fn from_output(output: &str) -> Self {
        Self {
            lines: split_listing(output),
        }
    }
}

impl ListingSource for StaticListing {
    fn list(&self, _options: &LsTreeOptions) -> Result<Vec<String>, LsTreeError> {
        Ok(self.lines.clone())
    }
}

fn split_listing(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect()
}
