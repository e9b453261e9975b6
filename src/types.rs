//! Core types for parsed email bodies

use crate::patterns;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed email body split into fragments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailMessage {
    /// Body after line-ending and header normalization
    pub text: String,

    /// Finished fragments in reading order
    pub fragments: Vec<Fragment>,

    /// Whether a visible fragment was still in effect when the scan ended
    pub found_visible: bool,
}

impl EmailMessage {
    /// The text the sender actually wrote
    #[must_use]
    pub fn reply(&self) -> String {
        join_contents(self.fragments.iter().filter(|f| f.is_visible()))
    }

    /// Quoted history, forwarded headers, signatures and filler
    #[must_use]
    pub fn chain(&self) -> String {
        join_contents(self.fragments.iter().filter(|f| !f.is_visible()))
    }

    /// Fragments that make up the reply
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.is_visible())
    }

    /// Fragments that make up the chain
    pub fn hidden_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.is_visible())
    }
}

fn join_contents<'a>(fragments: impl Iterator<Item = &'a Fragment>) -> String {
    fragments.map(Fragment::content).collect::<Vec<_>>().join("\n")
}

/// A contiguous run of lines sharing quote/header classification
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fragment {
    /// Lines as they appear in the normalized body, joined by `\n`
    raw: String,

    /// Lines start with `>`
    pub quoted: bool,

    /// Mail-client metadata (`From:`/`Sent:`/... or `On ... wrote:`)
    pub header: bool,

    /// Closed as a sign-off or mobile footer
    pub signature: bool,

    /// Excluded from the reply
    pub hidden: bool,
}

impl Fragment {
    pub(crate) const fn new(raw: String, quoted: bool, header: bool, signature: bool) -> Self {
        Self {
            raw,
            quoted,
            header,
            signature,
            hidden: false,
        }
    }

    /// Trimmed text of the fragment
    #[must_use]
    pub fn content(&self) -> &str {
        self.raw.trim()
    }

    /// Untrimmed text, exactly as the lines appeared
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Physical lines of the fragment in reading order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw.split('\n')
    }

    /// Whether this fragment belongs to the reply
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !(self.hidden || self.quoted)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content())
    }
}

/// How a single line is classified before it joins a fragment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineClass {
    /// `On ... wrote:` on one line
    pub quote_header: bool,

    /// Starts with `>`
    pub quoted: bool,

    /// Any header shape, including a quote header
    pub header: bool,
}

impl LineClass {
    /// Classify one physical line of a normalized body
    #[must_use]
    pub fn classify(line: &str) -> Self {
        let quote_header = patterns::is_quote_header(line);
        let quoted = patterns::is_quoted(line);

        let header = quote_header
            || patterns::is_asterisk_header(line)
            || patterns::is_concatenated_headers(line)
            || patterns::is_from_header(line)
            || patterns::is_to_header(line)
            || patterns::is_sent_header(line)
            || patterns::is_subject_header(line);

        Self {
            quote_header,
            quoted,
            header,
        }
    }
}
