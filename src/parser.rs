//! Backward line scanner that splits a body into fragments

use crate::config::ParserConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::patterns::{self, CONTENT_EXCLUDED_KEYWORDS, LOOKAHEAD_HEADER_KEYWORDS};
use crate::types::{EmailMessage, Fragment, LineClass};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Splits email bodies into reply and chain fragments
#[derive(Debug, Clone, Default)]
pub struct EmailReplyParser {
    config: ParserConfig,
}

impl EmailReplyParser {
    /// Create a parser with custom signature thresholds
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a decoded plain-text body into fragments
    #[must_use]
    pub fn read(&self, text: &str) -> EmailMessage {
        let text = normalize(text);

        let mut scanner = Scanner::new(&self.config, &text);
        // Bottom-up; fragment order is restored below
        for line in text.split('\n').rev() {
            scanner.scan_line(line);
        }
        scanner.finish_fragment();

        let Scanner {
            mut fragments,
            found_visible,
            ..
        } = scanner;
        fragments.reverse();

        let message = EmailMessage {
            text,
            fragments,
            found_visible,
        };

        debug!(
            "Parsed body into {} fragments ({} visible), reply {} bytes, chain {} bytes",
            message.fragments.len(),
            message.visible_fragments().count(),
            message.reply().len(),
            message.chain().len()
        );

        message
    }

    /// Extract only the reply text
    #[must_use]
    pub fn parse_reply(&self, text: &str) -> String {
        self.read(text).reply()
    }

    /// Extract only the quoted/forwarded chain
    #[must_use]
    pub fn parse_chain(&self, text: &str) -> String {
        self.read(text).chain()
    }
}

/// Fragment still receiving lines; lines are held bottom-up
struct OpenFragment<'t> {
    lines: Vec<&'t str>,
    quoted: bool,
    header: bool,
    signature: bool,
}

impl<'t> OpenFragment<'t> {
    fn new(line: &'t str, class: LineClass) -> Self {
        Self {
            lines: vec![line],
            quoted: class.quoted,
            header: class.header,
            signature: false,
        }
    }

    /// Whether `line` continues this fragment rather than starting a new one
    const fn accepts(&self, class: LineClass, blank: bool) -> bool {
        (self.header == class.header && self.quoted == class.quoted)
            || (self.quoted && (class.quote_header || blank))
    }

    /// Topmost line seen so far
    fn top_line(&self) -> Option<&'t str> {
        self.lines.last().copied()
    }

    fn finish(self) -> Fragment {
        let mut lines = self.lines;
        lines.reverse();
        Fragment::new(lines.join("\n"), self.quoted, self.header, self.signature)
    }
}

struct Scanner<'a> {
    config: &'a ParserConfig,
    text: &'a str,
    fragments: Vec<Fragment>,
    current: Option<OpenFragment<'a>>,
    found_visible: bool,
    /// Look-ahead verdict per long rule; it depends only on the rule text
    separators: HashMap<&'a str, bool>,
}

impl<'a> Scanner<'a> {
    fn new(config: &'a ParserConfig, text: &'a str) -> Self {
        Self {
            config,
            text,
            fragments: Vec::new(),
            current: None,
            found_visible: false,
            separators: HashMap::new(),
        }
    }

    fn scan_line(&mut self, line: &'a str) {
        let class = LineClass::classify(line);
        let blank = patterns::is_blank(line);

        // A blank line above a sign-off closes it before anything else
        if blank && self.at_signature_boundary() {
            if let Some(current) = self.current.as_mut() {
                current.signature = true;
            }
            self.finish_fragment();
        }

        if let Some(current) = self.current.as_mut()
            && current.accepts(class, blank)
        {
            current.lines.push(line);
        } else {
            self.finish_fragment();
            self.current = Some(OpenFragment::new(line, class));
        }
    }

    /// Close the open fragment and decide whether it is hidden
    fn finish_fragment(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };
        let mut fragment = open.finish();

        // Headers only appear at a quote/forward boundary, so everything
        // below one belongs to the chain
        if fragment.header {
            self.found_visible = false;
            for earlier in &mut self.fragments {
                earlier.hidden = true;
            }
        }

        if !self.found_visible {
            if fragment.quoted || fragment.header || fragment.signature || fragment.is_empty() {
                fragment.hidden = true;
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            quoted = fragment.quoted,
            header = fragment.header,
            signature = fragment.signature,
            hidden = fragment.hidden,
            "Closed fragment"
        );

        self.fragments.push(fragment);
    }

    /// Decide whether the top line of the open fragment starts a signature block
    fn at_signature_boundary(&mut self) -> bool {
        let Some(top) = self.current.as_ref().and_then(OpenFragment::top_line) else {
            return false;
        };
        let top = top.trim();

        if !patterns::is_signature_start(top) {
            return false;
        }

        let has_letters = top.chars().any(char::is_alphabetic);

        let is_signature = if top.starts_with(patterns::MOBILE_SIGNATURE_PREFIX) {
            true
        } else if top.starts_with("--") && !has_letters {
            top.chars().count() < self.config.long_rule_len || !self.separates_content(top)
        } else if top.starts_with("__") && !has_letters {
            true
        } else if top.starts_with('-')
            && top.split_whitespace().count() <= self.config.max_signature_words
        {
            // One dash line is a sign-off; several in a row are a list
            self.current
                .as_ref()
                .is_some_and(|open| leading_dash_lines(open) == 1)
        } else {
            false
        };

        trace!(line = top, is_signature, "Signature candidate");
        is_signature
    }

    fn separates_content(&mut self, rule: &'a str) -> bool {
        let (text, config) = (self.text, self.config);
        *self
            .separators
            .entry(rule)
            .or_insert_with(|| is_content_separator(text, rule, config))
    }
}

/// Count single-dash lines from the top of the fragment downwards
fn leading_dash_lines(open: &OpenFragment<'_>) -> usize {
    open.lines
        .iter()
        .rev()
        .map(|line| line.trim())
        .take_while(|line| line.starts_with('-') && !line.starts_with("--"))
        .count()
}

/// A long rule followed by real prose and no forwarded headers is a divider
fn is_content_separator(text: &str, rule: &str, config: &ParserConfig) -> bool {
    let rule_line = text
        .find(rule)
        .map_or(0, |pos| text[..pos].matches('\n').count());
    let following = || text.split('\n').skip(rule_line + 1);

    let has_headers = following()
        .take(config.header_lookahead_lines)
        .any(|line| LOOKAHEAD_HEADER_KEYWORDS.iter().any(|k| line.contains(k)));
    if has_headers {
        return false;
    }

    let required = config.content_lines_required;
    let content_lines = following()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.chars().count() > config.content_line_min_len
                && !trimmed.starts_with('*')
                && !CONTENT_EXCLUDED_KEYWORDS.iter().any(|k| line.contains(k))
        })
        .take(required)
        .count();

    content_lines == required
}
