use email_reply_parser::normalize;
use pretty_assertions::assert_eq;

#[test]
fn test_crlf_becomes_lf() {
    assert_eq!(normalize("one\r\ntwo\r\n"), "one\ntwo\n");
}

#[test]
fn test_plain_text_is_untouched() {
    let text = "Hello\n\nNothing to see here.\n";
    assert_eq!(normalize(text), text);
}

#[test]
fn test_wrapped_quote_header_is_joined() {
    let text = "Hello!\n\nOn Tue, Mar 1, 2011 at 6:02 PM, Jane Doe\n<jane@example.com> wrote:\n\n> Quoted";
    assert_eq!(
        normalize(text),
        "Hello!\n\nOn Tue, Mar 1, 2011 at 6:02 PM, Jane Doe<jane@example.com> wrote:\n\n> Quoted"
    );
}

#[test]
fn test_only_innermost_quote_header_is_joined() {
    let text = "On your remote host\nyou can run it.\n\nOn 9 Jan 2014,\nGeorge wrote:\n> hi";
    assert_eq!(
        normalize(text),
        "On your remote host\nyou can run it.\n\nOn 9 Jan 2014,George wrote:\n> hi"
    );
}

#[test]
fn test_quote_header_without_wrote_is_untouched() {
    let text = "On Monday\nwe ship.";
    assert_eq!(normalize(text), text);
}

#[test]
fn test_blank_line_inserted_above_glued_rule() {
    assert_eq!(
        normalize("Reply text\n________\nFrom: x"),
        "Reply text\n\n________\nFrom: x"
    );
    assert_eq!(
        normalize("Reply text\n -------\nmore"),
        "Reply text\n\n -------\nmore"
    );
}

#[test]
fn test_rule_after_blank_line_or_too_short_is_untouched() {
    let spaced = "Reply text\n\n________\nFrom: x";
    assert_eq!(normalize(spaced), spaced);

    let short = "Reply text\n------\nmore";
    assert_eq!(normalize(short), short);
}

#[test]
fn test_stacked_rules_each_get_a_break() {
    assert_eq!(
        normalize("a\n_______\n-------"),
        "a\n\n_______\n\n-------"
    );
}

#[test]
fn test_inline_headers_are_broken_out() {
    let text = "New body From: Al <al@x.com>Sent: Monday, 1 Jan 2024To: Bo <bo@x.com>Subject: Hi";
    assert_eq!(
        normalize(text),
        "New body \nFrom: Al <al@x.com>Sent: Monday, 1 Jan 2024To: Bo <bo@x.com>Subject: Hi"
    );
}

#[test]
fn test_every_inline_header_block_is_broken_out() {
    let text = "top From: a@x.com Sent: 1 To: b Subject: one From: c@x.com Sent: 2 To: d Subject: two";
    assert_eq!(
        normalize(text),
        "top \nFrom: a@x.com Sent: 1 To: b Subject: one \nFrom: c@x.com Sent: 2 To: d Subject: two"
    );
}

#[test]
fn test_inline_headers_at_line_start_or_bold_are_untouched() {
    let at_start = "From: a@x.com Sent: 1 To: b";
    assert_eq!(normalize(at_start), at_start);

    let after_newline = "body\nFrom: a@x.com Sent: 1 To: b";
    assert_eq!(normalize(after_newline), after_newline);

    let bold = "body *From:* a@x.com *Sent:* 1 *To:* b";
    assert_eq!(normalize(bold), bold);
}

#[test]
fn test_inline_headers_after_bold_tokens_are_broken_out() {
    let bold = "*From: a@ ".repeat(3);
    let text = format!("{bold}y From: b@c.d Sent: 1 To: z");
    assert_eq!(
        normalize(&text),
        format!("{bold}y \nFrom: b@c.d Sent: 1 To: z")
    );
}

#[test]
fn test_inline_headers_need_an_address() {
    let text = "body From: Al Sent: 1 To: b";
    assert_eq!(normalize(text), text);
}
