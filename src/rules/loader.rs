use crate::rules::schema::{RuleConfig, ValidationError};
use crate::rules::RuleSet;
use thiserror::Error;

/// Rule catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("../../rules/jobspage.toml");

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("failed to parse rule catalog TOML: {0}")]
    Toml(#[from] toml_edit::de::Error),

    #[error("invalid rule catalog: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to compile pattern for rule '{id}': {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}

pub fn load_from_str(input: &str) -> Result<RuleConfig, RuleError> {
    let config: RuleConfig = toml_edit::de::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Parse, validate and compile the built-in catalog.
pub fn load_builtin() -> Result<RuleSet, RuleError> {
    let config = load_from_str(BUILTIN_CATALOG)?;
    RuleSet::compile(&config)
}
