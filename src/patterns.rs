//! Line-level matchers shared by normalization and classification

use regex::Regex;
use std::sync::LazyLock;

/// `On <anything> wrote:` filling a whole line
static QUOTE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^On.*wrote:$").unwrap());

/// Opening of a possibly wrapped quote header
pub static QUOTE_HEADER_OPENER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"On\s").unwrap());

pub const QUOTE_HEADER_CLOSER: &str = "wrote:";

static SIGNATURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:--|__|-\w|Sent from my (?:\w+\s*){1,3})").unwrap());

pub const MOBILE_SIGNATURE_PREFIX: &str = "Sent from my";

// Outlook bold headers: `*From:*`, `*Sent:*`, ...
static ASTERISK_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*?(?:From|Sent|To|Subject):").unwrap());

static CONCATENATED_HEADERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"From:.*Sent:.*To:.*Subject:").unwrap());

static FROM_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^From:.*@").unwrap());

static TO_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^To:.*@").unwrap());

static SENT_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sent:.*\d{1,2}.*\d{4}").unwrap());

/// A line opening with an optional space and a run of 7+ `_`/`-`
pub static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ ?[_-]{7,}").unwrap());

/// `From:` with an address, followed on the same line by two more header tokens
///
/// The leading character keeps blocks that already start a line, or sit
/// behind a bold `*`, out of the match. Group 1 is the block itself.
pub static INLINE_HEADERS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[^\n*](From:[^@\n]*@[^\n]*?(?:Sent:|To:|Subject:)[^\n]*?(?:Sent:|To:|Subject:))",
    )
    .unwrap()
});

/// Keywords that mark a forwarded block when scanning ahead of a rule
pub const LOOKAHEAD_HEADER_KEYWORDS: [&str; 3] = ["From:", "Sent:", "Subject:"];

/// Keywords that disqualify a line from counting as body content
pub const CONTENT_EXCLUDED_KEYWORDS: [&str; 2] = ["From:", "Sent:"];

pub fn is_quote_header(line: &str) -> bool {
    QUOTE_HEADER_REGEX.is_match(line)
}

pub fn is_quoted(line: &str) -> bool {
    line.starts_with('>')
}

pub fn is_signature_start(line: &str) -> bool {
    SIGNATURE_REGEX.is_match(line)
}

/// Bold Outlook header; a single stray `*` is not enough
pub fn is_asterisk_header(line: &str) -> bool {
    ASTERISK_HEADER_REGEX.is_match(line) && line.matches('*').count() >= 2
}

pub fn is_concatenated_headers(line: &str) -> bool {
    CONCATENATED_HEADERS_REGEX.is_match(line)
}

// The bare-keyword checks demand an address or a date so prose such as
// "From: the beginning, ..." stays in the body.

pub fn is_from_header(line: &str) -> bool {
    FROM_HEADER_REGEX.is_match(line)
}

pub fn is_to_header(line: &str) -> bool {
    TO_HEADER_REGEX.is_match(line)
}

pub fn is_sent_header(line: &str) -> bool {
    SENT_HEADER_REGEX.is_match(line)
}

pub fn is_subject_header(line: &str) -> bool {
    line.starts_with("Subject:")
}

/// Whether the line is blank once surrounding whitespace is removed
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
