//! In-memory text buffer that substitution rules are applied to.

use crate::rules::{CompiledRule, RuleSet};
use regex::NoExpand;
use std::borrow::Cow;

/// Match count for one rule over one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub id: String,
    pub replacements: usize,
}

/// The full text of the target file for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Replace every match of `rule` with its literal replacement text.
    ///
    /// Returns the number of spans replaced. With zero matches the buffer is
    /// left untouched.
    pub fn apply(&mut self, rule: &CompiledRule) -> usize {
        let count = rule.pattern.find_iter(&self.text).count();
        if count == 0 {
            return 0;
        }

        let replaced = match rule
            .pattern
            .replace_all(&self.text, NoExpand(rule.rule.replace.as_str()))
        {
            Cow::Owned(text) => text,
            Cow::Borrowed(_) => return count,
        };
        self.text = replaced;
        count
    }

    pub fn apply_all(&mut self, rules: &RuleSet) -> Vec<RuleOutcome> {
        rules
            .iter()
            .map(|rule| {
                let replacements = self.apply(rule);
                tracing::debug!(rule = rule.id(), replacements, "applied rule");
                RuleOutcome {
                    id: rule.id().to_string(),
                    replacements,
                }
            })
            .collect()
    }
}

/// Apply every rule to `input` and return the resulting text.
pub fn fix_text(rules: &RuleSet, input: &str) -> String {
    let mut doc = Document::new(input);
    let _ = doc.apply_all(rules);
    doc.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{load_builtin, Rule};

    const BROKEN_IMPORTS: &str = "import NaturalLanguageSearch from '../components/NaturalLanguageSearch';\nimport React, { useState, useEffect } from 'react';";
    const FIXED_IMPORTS: &str = "import React, { useState, useEffect } from 'react';\nimport NaturalLanguageSearch from '../components/NaturalLanguageSearch';";
    const FIXED_BUTTON: &str = r#"<Button
            variant="outlined"
            startIcon={<Refresh />}
            onClick={() => activeTab === 0 ? fetchMatchedJobs() : fetchAllJobs()}
          >
            Refresh
          </Button>"#;

    fn rule(search: &str, replace: &str) -> CompiledRule {
        CompiledRule::new(Rule {
            id: "test".to_string(),
            summary: String::new(),
            search: search.to_string(),
            replace: replace.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_reorders_imports() {
        let rules = load_builtin().unwrap();
        assert_eq!(fix_text(&rules, BROKEN_IMPORTS), FIXED_IMPORTS);
    }

    #[test]
    fn test_reorders_imports_without_semicolon_and_extra_blank_lines() {
        let rules = load_builtin().unwrap();
        let input = "import NaturalLanguageSearch from \"../components/NaturalLanguageSearch\"\n\n  import React, { useState, useEffect } from \"react\";\nconst x = 1;\n";
        let expected = format!("{FIXED_IMPORTS}\nconst x = 1;\n");
        assert_eq!(fix_text(&rules, input), expected);
    }

    #[test]
    fn test_semicolon_then_whitespace_variant() {
        let rules = load_builtin().unwrap();
        let input = "import NaturalLanguageSearch from '../components/NaturalLanguageSearch' ;   import React, { useState, useEffect } from 'react';";
        assert_eq!(fix_text(&rules, input), FIXED_IMPORTS);
    }

    #[test]
    fn test_expands_refresh_button() {
        let rules = load_builtin().unwrap();
        let input = r#"<Button variant="outlined" >Refresh</Button>"#;
        assert_eq!(fix_text(&rules, input), FIXED_BUTTON);
    }

    #[test]
    fn test_expands_refresh_button_in_context() {
        let rules = load_builtin().unwrap();
        let input = "<Box>\n          <Button\n            variant=\"outlined\"\n          >\n            Refresh\n          </Button>\n</Box>\n";
        let expected = format!("<Box>\n          {FIXED_BUTTON}\n</Box>\n");
        assert_eq!(fix_text(&rules, input), expected);
    }

    #[test]
    fn test_other_buttons_untouched() {
        let rules = load_builtin().unwrap();
        let input = r#"<Button variant="contained">Refresh</Button><Button variant="outlined">Reload</Button>"#;
        assert_eq!(fix_text(&rules, input), input);
    }

    #[test]
    fn test_correct_imports_untouched() {
        let rules = load_builtin().unwrap();
        assert_eq!(fix_text(&rules, FIXED_IMPORTS), FIXED_IMPORTS);
    }

    #[test]
    fn test_both_rules_in_one_pass() {
        let rules = load_builtin().unwrap();
        let input = format!(
            "{BROKEN_IMPORTS}\n\nexport default function JobsPage() {{\n  return <Button variant=\"outlined\">Refresh</Button>;\n}}\n"
        );
        let expected = format!(
            "{FIXED_IMPORTS}\n\nexport default function JobsPage() {{\n  return {FIXED_BUTTON};\n}}\n"
        );

        let mut doc = Document::new(input);
        let outcomes = doc.apply_all(&rules);
        assert_eq!(doc.as_str(), expected);
        assert_eq!(
            outcomes,
            vec![
                RuleOutcome {
                    id: "fix-imports".to_string(),
                    replacements: 1
                },
                RuleOutcome {
                    id: "fix-refresh-button".to_string(),
                    replacements: 1
                },
            ]
        );
    }

    #[test]
    fn test_apply_counts_every_match() {
        let mut doc = Document::new("a-a-a");
        assert_eq!(doc.apply(&rule("a", "b")), 3);
        assert_eq!(doc.as_str(), "b-b-b");
    }

    #[test]
    fn test_apply_without_match_is_noop() {
        let mut doc = Document::new("unchanged");
        assert_eq!(doc.apply(&rule("zzz", "b")), 0);
        assert_eq!(doc.as_str(), "unchanged");
    }

    #[test]
    fn test_replacement_is_literal() {
        let mut doc = Document::new("price");
        doc.apply(&rule("(price)", "$1 and ${cost}"));
        assert_eq!(doc.as_str(), "$1 and ${cost}");
    }
}
