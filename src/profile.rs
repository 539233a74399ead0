//! Client-side configuration rendering

/// Default `PersistentKeepalive` interval in seconds
pub const DEFAULT_KEEPALIVE: u16 = 25;

/// Everything needed to render a new client's configuration file
///
/// Assembled by the caller once a peer has been added server-side: the
/// caller holds the freshly issued client keys and knows the server's
/// public endpoint.  The rendered text is shown to the operator exactly
/// once; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientProfile {
    /// Client tunnel address in CIDR form, e.g. `10.0.0.2/24`
    pub address: String,

    /// Client private key (base64)
    pub private_key: String,

    /// DNS server for the tunnel; empty omits the `DNS` line
    pub dns: String,

    /// Server public key (base64)
    pub server_public_key: String,

    /// Preshared key shared with the server; empty omits the line
    pub preshared_key: String,

    /// Ranges the client routes through the tunnel
    pub allowed_ips: String,

    /// Server endpoint as `host:port`
    pub endpoint: String,

    /// `PersistentKeepalive` interval in seconds
    pub keepalive: u16,
}

impl Default for ClientProfile {
    fn default() -> Self {
        ClientProfile {
            address: String::new(),
            private_key: String::new(),
            dns: String::new(),
            server_public_key: String::new(),
            preshared_key: String::new(),
            allowed_ips: String::new(),
            endpoint: String::new(),
            keepalive: DEFAULT_KEEPALIVE,
        }
    }
}

impl ClientProfile {
    /// Renders the full client configuration file, newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::from("[Interface]\n");
        out.push_str(&format!("Address = {}\n", self.address));
        out.push_str(&format!("PrivateKey = {}\n", self.private_key));
        if !self.dns.is_empty() {
            out.push_str(&format!("DNS = {}\n", self.dns));
        }

        out.push_str("\n[Peer]\n");
        out.push_str(&format!("PublicKey = {}\n", self.server_public_key));
        if !self.preshared_key.is_empty() {
            out.push_str(&format!("PresharedKey = {}\n", self.preshared_key));
        }
        out.push_str(&format!("AllowedIPs = {}\n", self.allowed_ips));
        out.push_str(&format!("Endpoint = {}\n", self.endpoint));
        out.push_str(&format!("PersistentKeepalive = {}\n", self.keepalive));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_config, parse_peers};

    fn profile() -> ClientProfile {
        ClientProfile {
            address: "10.0.0.4/24".into(),
            private_key: "QUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVphYmNkZWY=".into(),
            dns: "1.1.1.1".into(),
            server_public_key: "j0DFrbaPJWJK5bIU6nZ6bslNgp09e14a0bpvPiE4KF8=".into(),
            preshared_key: "VVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVVU=".into(),
            allowed_ips: "10.0.0.0/24".into(),
            endpoint: "203.0.113.7:51820".into(),
            ..ClientProfile::default()
        }
    }

    #[test]
    fn renders_both_sections() {
        let text = profile().render();
        assert!(text.starts_with("[Interface]\n"));
        assert!(text.contains("\n[Peer]\n"));
        assert!(text.contains("DNS = 1.1.1.1\n"));
        assert!(text.contains("Endpoint = 203.0.113.7:51820\n"));
        assert!(text.contains("PersistentKeepalive = 25\n"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let mut profile = profile();
        profile.dns = String::new();
        profile.preshared_key = String::new();

        let text = profile.render();
        assert!(!text.contains("DNS"));
        assert!(!text.contains("PresharedKey"));
    }

    #[test]
    fn rendered_profile_parses_with_this_crate() {
        // the profile is itself WireGuard config text; our own parser must
        // read it back
        let text = profile().render();

        let (client, _) = parse_config(&text);
        assert_eq!(client.address, "10.0.0.4/24");
        assert_eq!(client.private_key, "QUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVphYmNkZWY=");

        let peers = parse_peers(&text);
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].public_key, "j0DFrbaPJWJK5bIU6nZ6bslNgp09e14a0bpvPiE4KF8=");
        assert_eq!(peers[0].allowed_ips, "10.0.0.0/24");
    }
}
