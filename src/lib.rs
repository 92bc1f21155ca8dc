//! JobsPage autofix: one-shot repair of `frontend/src/pages/JobsPage.tsx`
//!
//! The tool loads the page source, applies two regex substitution rules in
//! order, and writes the result back to the same path:
//!
//! 1. `fix-imports` moves the React import above the
//!    `NaturalLanguageSearch` component import.
//! 2. `fix-refresh-button` restores the `startIcon` and `onClick` props on
//!    the outlined "Refresh" button.
//!
//! A rule that finds nothing leaves the text alone. The file is always
//! rewritten (atomically: tempfile + fsync + rename), even when unchanged.
//!
//! # Example
//!
//! ```no_run
//! use jobspage_autofix::{PatchRunner, DEFAULT_TARGET};
//!
//! let report = PatchRunner::builtin(DEFAULT_TARGET)?.run()?;
//! println!("{} replacements", report.total_replacements());
//! # Ok::<(), jobspage_autofix::FixError>(())
//! ```

pub mod document;
pub mod file;
pub mod logging;
pub mod rules;
pub mod runner;

// Re-exports
pub use document::{fix_text, Document, RuleOutcome};
pub use rules::{
    load_builtin, load_from_str, CompiledRule, Rule, RuleConfig, RuleError, RuleSet,
    ValidationError, ValidationIssue,
};
pub use runner::{FixError, PatchRunner, RunReport, Stage, DEFAULT_TARGET};
