//! document.rs
//!
//! Line-oriented scanner over WireGuard's INI-style configuration text.
//! Sections carry byte offsets into the source so edits can splice a
//! section out without touching anything around it.

/// Kind of section introduced by a `[...]` header line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SectionKind {
    Interface,
    Peer,
    /// Any other `[...]` header; kept so following sections still end in
    /// the right place
    Other,
}

/// One section of a configuration document
pub(crate) struct Section<'a> {
    pub kind: SectionKind,

    /// Byte offset of the start of the header line
    pub start: usize,

    /// Byte offset one past the last byte belonging to the section
    pub end: usize,

    /// Section body: everything after the header line
    pub body: &'a str,
}

/// Splits configuration text into its sections, in document order
///
/// Header matching is ASCII case-insensitive.  Text before the first header
/// belongs to no section and is skipped.
pub(crate) fn sections(text: &str) -> Vec<Section<'_>> {
    let mut found = Vec::new();
    let mut open: Option<(SectionKind, usize, usize)> = None;

    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if let Some(kind) = header_kind(line) {
            if let Some((kind, start, body_start)) = open.take() {
                found.push(Section {
                    kind,
                    start,
                    end: line_start,
                    body: &text[body_start..line_start],
                });
            }
            open = Some((kind, line_start, offset));
        }
    }

    if let Some((kind, start, body_start)) = open {
        found.push(Section {
            kind,
            start,
            end: text.len(),
            body: &text[body_start..],
        });
    }

    found
}

fn header_kind(line: &str) -> Option<SectionKind> {
    let line = line.trim();
    if !(line.starts_with('[') && line.ends_with(']')) {
        return None;
    }

    if line.eq_ignore_ascii_case("[interface]") {
        Some(SectionKind::Interface)
    } else if line.eq_ignore_ascii_case("[peer]") {
        Some(SectionKind::Peer)
    } else {
        Some(SectionKind::Other)
    }
}

/// Splits a `Key = Value` line, trimming both halves
///
/// Returns `None` for blank lines, comments, headers, and anything without
/// a `=`.
pub(crate) fn key_value(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// First value set for `key` within a section body
///
/// Key names compare ASCII case-insensitively; later assignments of the
/// same key are ignored.
pub(crate) fn first_value<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    body.lines().find_map(|line| match key_value(line) {
        Some((k, v)) if k.eq_ignore_ascii_case(key) => Some(v),
        _ => None,
    })
}

/// First non-empty `#` comment line within a section body, marker stripped
pub(crate) fn first_comment(body: &str) -> Option<&str> {
    body.lines().find_map(|line| {
        let comment = line.trim().strip_prefix('#')?.trim();
        if comment.is_empty() {
            None
        } else {
            Some(comment)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
# managed file, do not edit
[Interface]
PrivateKey = abc
Address = 10.0.0.1/24

[peer]
PublicKey = def

[Unknown]
Foo = bar

[PEER]
PublicKey = ghi
";

    #[test]
    fn splits_sections_in_document_order() {
        let sections = sections(TEXT);
        assert_eq!(sections.len(), 4, "expected four sections");

        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Interface,
                SectionKind::Peer,
                SectionKind::Other,
                SectionKind::Peer
            ]
        );
    }

    #[test]
    fn section_spans_cover_header_through_next_header() {
        let sections = sections(TEXT);

        // first section starts at its header, not at the leading comment
        assert!(TEXT[sections[0].start..].starts_with("[Interface]"));

        // each section ends exactly where the next begins
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "sections must not overlap");
        }
        assert_eq!(sections[3].end, TEXT.len());
    }

    #[test]
    fn section_bodies_exclude_the_header_line() {
        let sections = sections(TEXT);
        assert!(sections[0].body.contains("PrivateKey"));
        assert!(!sections[0].body.contains("[Interface]"));
    }

    #[test]
    fn text_without_headers_has_no_sections() {
        assert!(sections("PrivateKey = abc\n").is_empty());
        assert!(sections("").is_empty());
    }

    #[test]
    fn key_value_trims_and_filters() {
        assert_eq!(key_value("  Address =  10.0.0.1/24 "), Some(("Address", "10.0.0.1/24")));
        assert_eq!(key_value("Empty ="), Some(("Empty", "")));
        assert_eq!(key_value("# comment = nope"), None);
        assert_eq!(key_value("[Peer]"), None);
        assert_eq!(key_value("no delimiter here"), None);
        assert_eq!(key_value(""), None);
    }

    #[test]
    fn key_value_splits_at_first_equals() {
        assert_eq!(
            key_value("PostUp = iptables -A FORWARD; echo a=b"),
            Some(("PostUp", "iptables -A FORWARD; echo a=b"))
        );
    }

    #[test]
    fn first_value_is_case_insensitive_and_first_match_wins() {
        let body = "listenport = 51821\nListenPort = 51900\n";
        assert_eq!(first_value(body, "ListenPort"), Some("51821"));
        assert_eq!(first_value(body, "PrivateKey"), None);
    }

    #[test]
    fn first_comment_skips_bare_markers() {
        assert_eq!(first_comment("#\n#   phone  \n"), Some("phone"));
        assert_eq!(first_comment("PublicKey = abc\n"), None);
    }
}
