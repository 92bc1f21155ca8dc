//! Substitution rules: the embedded catalog, its schema and the compiled set.

pub mod loader;
pub mod schema;

pub use loader::{load_builtin, load_from_str, RuleError, BUILTIN_CATALOG};
pub use schema::{Metadata, Rule, RuleConfig, ValidationError, ValidationIssue};

use regex::Regex;
use std::path::{Path, PathBuf};

/// A rule together with its compiled search pattern.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    pub pattern: Regex,
}

impl CompiledRule {
    pub fn new(rule: Rule) -> Result<Self, RuleError> {
        let pattern = Regex::new(&rule.search).map_err(|source| RuleError::Pattern {
            id: rule.id.clone(),
            source,
        })?;
        Ok(Self { rule, pattern })
    }

    pub fn id(&self) -> &str {
        &self.rule.id
    }
}

/// Ordered rules; they are applied in declaration order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    target: Option<PathBuf>,
}

impl RuleSet {
    pub fn compile(config: &RuleConfig) -> Result<Self, RuleError> {
        let rules = config
            .rules
            .iter()
            .cloned()
            .map(CompiledRule::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            target: config.meta.target.as_ref().map(PathBuf::from),
        })
    }

    /// Default file the catalog was written for, if it names one.
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
