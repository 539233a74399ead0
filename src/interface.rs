//! Interface section parsing and rendering

use crate::alloc::first_ipv4_octet;
use crate::document::{self, SectionKind};
use crate::{keys, Error};
use std::collections::HashSet;

/// Default WireGuard listen port when the config does not name one
pub const DEFAULT_LISTEN_PORT: u16 = 51820;

/// Server-side identity and settings read from an `[Interface]` section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base64-encoded X25519 private key, empty when the config has none
    pub private_key: String,

    /// Public key derived from `private_key`, empty when underivable
    pub public_key: String,

    /// Interface address in CIDR form, e.g. `10.0.0.1/24`
    pub address: String,

    /// UDP listen port
    pub port: u16,

    pub post_up: String,
    pub post_down: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            private_key: String::new(),
            public_key: String::new(),
            address: String::new(),
            port: DEFAULT_LISTEN_PORT,
            post_up: String::new(),
            post_down: String::new(),
        }
    }
}

impl ServerConfig {
    /// Returns the private key, or fails when the config had none
    ///
    /// An absent private key is a representable state, but any operation
    /// that needs the server identity must treat it as fatal before it
    /// produces output.
    ///
    /// # Errors
    /// * `Error::MissingPrivateKey` - the parsed config had no private key
    pub fn require_private_key(&self) -> Result<&str, Error> {
        if self.private_key.is_empty() {
            return Err(Error::MissingPrivateKey);
        }
        Ok(&self.private_key)
    }

    /// Renders this config as an `[Interface]` block, newline-terminated
    ///
    /// `PostUp`/`PostDown` lines are omitted when empty; the derived public
    /// key is never written, it lives only in memory.
    pub fn render(&self) -> String {
        let mut block = String::from("[Interface]\n");
        block.push_str(&format!("PrivateKey = {}\n", self.private_key));
        block.push_str(&format!("Address = {}\n", self.address));
        block.push_str(&format!("ListenPort = {}\n", self.port));
        if !self.post_up.is_empty() {
            block.push_str(&format!("PostUp = {}\n", self.post_up));
        }
        if !self.post_down.is_empty() {
            block.push_str(&format!("PostDown = {}\n", self.post_down));
        }
        block
    }
}

/// Parses configuration text into the server record and the set of host
/// octets already claimed on its segment
///
/// Only the first `[Interface]` section is read, first assignment per key
/// wins, and missing or malformed fields fall back silently to their
/// defaults (`ListenPort` to 51820, everything else to empty).  The used
/// set collects the host octet of the interface's first IPv4 address and
/// of every peer's first IPv4 `AllowedIPs` entry; entries that are not
/// IPv4 are skipped without comment.
pub fn parse_config(content: &str) -> (ServerConfig, HashSet<u8>) {
    let mut server = ServerConfig::default();
    let mut used = HashSet::new();

    let sections = document::sections(content);

    if let Some(section) = sections.iter().find(|s| s.kind == SectionKind::Interface) {
        if let Some(key) = document::first_value(section.body, "PrivateKey") {
            server.private_key = key.to_string();
            server.public_key = keys::public_key_for(key).unwrap_or_default();
        }

        if let Some(address) = document::first_value(section.body, "Address") {
            server.address = address.to_string();
            if let Some(octet) = first_ipv4_octet(address) {
                used.insert(octet);
            }
        }

        if let Some(port) = document::first_value(section.body, "ListenPort") {
            server.port = port.parse().unwrap_or(DEFAULT_LISTEN_PORT);
        }

        if let Some(up) = document::first_value(section.body, "PostUp") {
            server.post_up = up.to_string();
        }

        if let Some(down) = document::first_value(section.body, "PostDown") {
            server.post_down = down.to_string();
        }
    }

    for section in sections.iter().filter(|s| s.kind == SectionKind::Peer) {
        if let Some(allowed) = document::first_value(section.body, "AllowedIPs") {
            if let Some(octet) = first_ipv4_octet(allowed) {
                used.insert(octet);
            }
        }
    }

    (server, used)
}

/// Extracts interface names from a one-per-line listing of `*.conf` paths
///
/// The input is the listing of a configuration directory:
/// `/etc/wireguard/wg0.conf` becomes `wg0`.  Lines that do not name a
/// `.conf` file are skipped.
pub fn conf_names(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| {
            let file = line.trim().rsplit('/').next()?;
            file.strip_suffix(".conf")
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .collect()
}
