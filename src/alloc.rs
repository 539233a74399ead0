//! Free address selection on the server's segment

use crate::Error;
use ipnetwork::Ipv4Network;
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// First host octet handed to peers; `.1` stays with the server
const FIRST_PEER_OCTET: u8 = 2;

/// Last usable host octet; `.255` is broadcast
const LAST_PEER_OCTET: u8 = 254;

/// Picks the lowest free address on the server's segment
///
/// The pool is always the /24 containing `server_address`, whatever prefix
/// length the address declares; 253 peer addresses is the hard ceiling per
/// segment.  Host octets run from 2 through 254 and the lowest one absent
/// from `used` wins.
///
/// # Arguments
/// * `server_address` - Interface address in CIDR form, e.g. `10.0.0.1/24`
/// * `used` - Host octets already claimed on the segment
///
/// # Errors
/// * `Error::InvalidAddress` - `server_address` does not parse
/// * `Error::PoolExhausted` - no octet in 2..=254 is free
pub fn allocate(server_address: &str, used: &HashSet<u8>) -> Result<String, Error> {
    let network = parse_address(server_address)?;
    let [a, b, c, _] = network.ip().octets();

    for octet in FIRST_PEER_OCTET..=LAST_PEER_OCTET {
        if !used.contains(&octet) {
            return Ok(format!("{}.{}.{}.{}/32", a, b, c, octet));
        }
    }

    tracing::warn!("no more addresses available on {}.{}.{}.0/24", a, b, c);
    Err(Error::PoolExhausted(format!("{}.{}.{}.0/24", a, b, c)))
}

/// The /24 network a server address sits on, e.g. `10.0.0.0/24`
///
/// Used as the default range a new client routes through the tunnel.
///
/// # Errors
/// * `Error::InvalidAddress` - `server_address` does not parse
pub fn network(server_address: &str) -> Result<String, Error> {
    let network = parse_address(server_address)?;
    let [a, b, c, _] = network.ip().octets();
    Ok(format!("{}.{}.{}.0/24", a, b, c))
}

fn parse_address(address: &str) -> Result<Ipv4Network, Error> {
    address
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(address.to_string()))
}

/// Host octet of the first IPv4 entry in a comma-separated address list
///
/// Entries that are IPv6 or do not parse are skipped, so only IPv4
/// allowances claim an octet.
pub(crate) fn first_ipv4_octet(value: &str) -> Option<u8> {
    value.split(',').find_map(|entry| {
        let ip: Ipv4Addr = entry.trim().split('/').next()?.trim().parse().ok()?;
        Some(ip.octets()[3])
    })
}
