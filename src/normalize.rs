//! Rewrites irregular mail-client output into one line-based convention

use crate::patterns::{
    INLINE_HEADERS_REGEX, QUOTE_HEADER_CLOSER, QUOTE_HEADER_OPENER_REGEX, SEPARATOR_REGEX,
};

/// Normalize a raw body before line classification
///
/// Steps, in order: CRLF to LF, unwrap a quote header split over several
/// lines, put an empty line above separator rules glued to the text above,
/// and break run-together `From: ... Sent: ... To:` header blocks onto their
/// own line.
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = collapse_quote_header(&text);
    let text = separate_rules(&text);
    break_inline_headers(&text)
}

/// Join a wrapped `On ... wrote:` header back onto a single line
///
/// Only the innermost header is touched: the one opening at the last `On`
/// that still has a `wrote:` after it. The scan is linear so repeated
/// near-matches cannot blow up.
fn collapse_quote_header(text: &str) -> String {
    let Some(last_closer) = text.rfind(QUOTE_HEADER_CLOSER) else {
        return text.to_string();
    };

    // The header text needs at least one character after `On\s`
    let opener = QUOTE_HEADER_OPENER_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let first = text[m.end()..].chars().next()?;
            let body_start = m.end() + first.len_utf8();
            (body_start <= last_closer).then_some((m.start(), body_start))
        })
        .last();

    let Some((start, body_start)) = opener else {
        return text.to_string();
    };
    let Some(offset) = text[body_start..].find(QUOTE_HEADER_CLOSER) else {
        return text.to_string();
    };
    let end = body_start + offset + QUOTE_HEADER_CLOSER.len();

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.extend(text[start..end].split('\n'));
    out.push_str(&text[end..]);
    out
}

/// Insert an empty line above `_______`/`-------` rules that follow text
fn separate_rules(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<&str> = None;

    for line in text.split('\n') {
        if let Some(prev) = previous {
            out.push('\n');
            if !prev.is_empty() && SEPARATOR_REGEX.is_match(line) {
                out.push('\n');
            }
        }
        out.push_str(line);
        previous = Some(line);
    }

    out
}

/// Start a new line at each `From:` that opens a run-together header block
fn break_inline_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(block) = INLINE_HEADERS_REGEX
        .captures_at(text, pos)
        .and_then(|caps| caps.get(1))
    {
        out.push_str(&text[copied..block.start()]);
        out.push('\n');
        copied = block.start();
        // The closing `:` may be the character in front of the next `From:`
        pos = block.end() - 1;
    }

    out.push_str(&text[copied..]);
    out
}
