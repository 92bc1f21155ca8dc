//! Patch runner: load the target, apply every rule in order, save, report.
//!
//! The run is a fixed sequence. A rule that matches nothing leaves the buffer
//! as it was and is not an error; only I/O failures stop the run.

use crate::document::{Document, RuleOutcome};
use crate::file::{atomic_write, read_text};
use crate::rules::{load_builtin, RuleError, RuleSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File the built-in rules repair, relative to the working directory.
pub const DEFAULT_TARGET: &str = "frontend/src/pages/JobsPage.tsx";

#[derive(Error, Debug)]
pub enum FixError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rules(#[from] RuleError),
}

/// Progress notifications emitted while a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Reading(&'a Path),
    Writing(&'a Path),
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RunReport describes what the run changed"]
pub struct RunReport {
    pub file: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    pub original: String,
    pub fixed: String,
    /// False only for dry runs.
    pub written: bool,
}

impl RunReport {
    pub fn changed(&self) -> bool {
        self.original != self.fixed
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }
}

#[derive(Debug, Clone)]
pub struct PatchRunner {
    target: PathBuf,
    rules: RuleSet,
    dry_run: bool,
}

impl PatchRunner {
    pub fn new(target: impl Into<PathBuf>, rules: RuleSet) -> Self {
        Self {
            target: target.into(),
            rules,
            dry_run: false,
        }
    }

    /// Runner for `target` using the built-in rule catalog.
    pub fn builtin(target: impl Into<PathBuf>) -> Result<Self, FixError> {
        Ok(Self::new(target, load_builtin()?))
    }

    /// Skip the save step.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn run(&self) -> Result<RunReport, FixError> {
        self.run_with(|_| {})
    }

    /// Execute the run, calling `progress` before the load and save steps.
    pub fn run_with<F>(&self, mut progress: F) -> Result<RunReport, FixError>
    where
        F: FnMut(Stage<'_>),
    {
        progress(Stage::Reading(&self.target));
        let original = read_text(&self.target).map_err(|source| FixError::Read {
            path: self.target.clone(),
            source,
        })?;
        tracing::debug!(file = %self.target.display(), bytes = original.len(), "loaded target");

        let mut doc = Document::new(original.clone());
        let outcomes = doc.apply_all(&self.rules);
        let fixed = doc.into_string();

        // The file is rewritten even when no rule matched.
        if !self.dry_run {
            progress(Stage::Writing(&self.target));
            atomic_write(&self.target, fixed.as_bytes()).map_err(|source| FixError::Write {
                path: self.target.clone(),
                source,
            })?;
            tracing::debug!(file = %self.target.display(), bytes = fixed.len(), "saved target");
        }

        Ok(RunReport {
            file: self.target.clone(),
            outcomes,
            original,
            fixed,
            written: !self.dry_run,
        })
    }
}
