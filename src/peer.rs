//! Peer section extraction and config text edits

use crate::document::{self, Section, SectionKind};

/// One `[Peer]` record from a configuration document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Peer {
    /// Display name, from the section's first comment line or a positional
    /// `peer_<n>` fallback
    pub name: String,

    /// Base64-encoded public key; always present on extracted records
    pub public_key: String,

    /// Base64-encoded preshared key, empty when the section has none
    pub preshared_key: String,

    /// `AllowedIPs` value as written, empty when the section has none
    pub allowed_ips: String,
}

impl Peer {
    /// Renders this peer as a `[Peer]` block, newline-terminated
    ///
    /// The name becomes the leading comment line; empty optional fields
    /// are omitted.
    pub fn render(&self) -> String {
        let mut block = String::from("[Peer]\n");
        if !self.name.is_empty() {
            block.push_str(&format!("# {}\n", self.name));
        }
        block.push_str(&format!("PublicKey = {}\n", self.public_key));
        if !self.preshared_key.is_empty() {
            block.push_str(&format!("PresharedKey = {}\n", self.preshared_key));
        }
        if !self.allowed_ips.is_empty() {
            block.push_str(&format!("AllowedIPs = {}\n", self.allowed_ips));
        }
        block
    }
}

/// Extracts all peers from configuration text, in document order
///
/// A `[Peer]` section without a `PublicKey` is skipped entirely rather than
/// emitted as a partial record.  Sections without a comment are named
/// `peer_<n>`, where `<n>` counts only the sections that produced a record,
/// starting at 1.  Scan order is the listing order, which keeps fallback
/// names stable between runs.
pub fn parse_peers(content: &str) -> Vec<Peer> {
    let mut peers = Vec::new();

    for section in document::sections(content) {
        if section.kind != SectionKind::Peer {
            continue;
        }

        let public_key = match document::first_value(section.body, "PublicKey") {
            Some(key) => key.to_string(),
            None => {
                tracing::debug!("skipping peer section without a public key");
                continue;
            }
        };

        let name = match document::first_comment(section.body) {
            Some(comment) => comment.to_string(),
            None => format!("peer_{}", peers.len() + 1),
        };

        peers.push(Peer {
            name,
            public_key,
            preshared_key: document::first_value(section.body, "PresharedKey")
                .unwrap_or_default()
                .to_string(),
            allowed_ips: document::first_value(section.body, "AllowedIPs")
                .unwrap_or_default()
                .to_string(),
        });
    }

    peers
}

/// Appends a peer block to configuration text
///
/// The block is separated from the existing text by one blank line and the
/// result is newline-terminated.
pub fn append_peer(content: &str, peer: &Peer) -> String {
    let base = content.trim_end();
    if base.is_empty() {
        peer.render()
    } else {
        format!("{}\n\n{}", base, peer.render())
    }
}

/// Removes the first `[Peer]` section whose comment matches `name`
///
/// Returns the edited text, or `None` when no section carries that name.
pub fn remove_by_name(content: &str, name: &str) -> Option<String> {
    let sections = document::sections(content);
    let target = sections
        .iter()
        .filter(|s| s.kind == SectionKind::Peer)
        .find(|s| document::first_comment(s.body) == Some(name))?;
    Some(splice_out(content, target))
}

/// Removes the first `[Peer]` section with a matching `PublicKey`
///
/// Returns the edited text, or `None` when no section carries that key.
pub fn remove_by_public_key(content: &str, public_key: &str) -> Option<String> {
    let sections = document::sections(content);
    let target = sections
        .iter()
        .filter(|s| s.kind == SectionKind::Peer)
        .find(|s| document::first_value(s.body, "PublicKey") == Some(public_key))?;
    Some(splice_out(content, target))
}

/// Removes `peer` from configuration text
///
/// Tries the name-comment match first and falls back to the public key, so
/// a peer whose name was a positional fallback is still found.  Returns
/// `None` when neither strategy matches.
pub fn remove_peer(content: &str, peer: &Peer) -> Option<String> {
    if let Some(updated) = remove_by_name(content, &peer.name) {
        return Some(updated);
    }
    tracing::debug!("no comment matches '{}', removing by public key", peer.name);
    remove_by_public_key(content, &peer.public_key)
}

/// Cuts a section span out of the text, leaving everything else intact
///
/// Only trailing whitespace is normalized: the result ends with a single
/// newline, or is empty when nothing remains.
fn splice_out(content: &str, section: &Section<'_>) -> String {
    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..section.start]);
    out.push_str(&content[section.end..]);

    out.truncate(out.trim_end().len());
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
