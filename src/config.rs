//! Tunable thresholds for the signature heuristics

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// Thresholds used when deciding whether a trailing block is a signature
///
/// The defaults reproduce the standard heuristic. Every field has a default,
/// so a partial JSON/TOML document deserializes into a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Pure-dash rules at least this long may be content separators
    pub long_rule_len: usize,

    /// Lines after a long rule searched for `From:`/`Sent:`/`Subject:`
    pub header_lookahead_lines: usize,

    /// A line is substantial when its trimmed length exceeds this
    pub content_line_min_len: usize,

    /// Substantial lines needed after a long rule to keep it as content
    pub content_lines_required: usize,

    /// Most tokens a single-dash line may carry and still be a sign-off
    pub max_signature_words: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            long_rule_len: 8,
            header_lookahead_lines: 5,
            content_line_min_len: 20,
            content_lines_required: 3,
            max_signature_words: 3,
        }
    }
}

impl ParserConfig {
    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<()> {
        // "--" is the shortest rule the signature marker recognises
        if self.long_rule_len < 2 {
            return Err(ParseError::invalid_config(
                "long_rule_len",
                format!("must be at least 2, got {}", self.long_rule_len),
            ));
        }

        if self.content_lines_required == 0 {
            return Err(ParseError::invalid_config(
                "content_lines_required",
                "must be at least 1",
            ));
        }

        if self.max_signature_words == 0 {
            return Err(ParseError::invalid_config(
                "max_signature_words",
                "must be at least 1",
            ));
        }

        Ok(())
    }
}
