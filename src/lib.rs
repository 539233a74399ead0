//! WireGuard Endpoint Configuration Library
//!
//! Models the INI-style configuration text of a WireGuard endpoint: the
//! `[Interface]` section describing the server, the `[Peer]` sections
//! describing clients, and the address bookkeeping between them.  Callers
//! that manage a remote endpoint fetch the text, run these pure functions
//! over it, and write the result back; nothing in this crate performs I/O.

mod alloc;
mod document;
mod host;
mod interface;
mod keys;
mod peer;
mod profile;


pub use alloc::{allocate, network};
pub use host::HostSpec;
pub use interface::{conf_names, parse_config, ServerConfig, DEFAULT_LISTEN_PORT};
pub use keys::{decode_key, public_key_for};
pub use peer::{append_peer, parse_peers, remove_by_name, remove_by_public_key, remove_peer, Peer};
pub use profile::{ClientProfile, DEFAULT_KEEPALIVE};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The interface section carried no usable private key
    #[error("no private key set in interface section")]
    MissingPrivateKey,

    /// Every host octet on the segment is already claimed
    #[error("address pool exhausted on {0}")]
    PoolExhausted(String),

    /// The interface address could not be parsed as an IPv4 network
    #[error("invalid interface address: {0}")]
    InvalidAddress(String),
}
