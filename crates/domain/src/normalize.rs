//! Address canonicalization shared by every table variant.
//!
//! All functions are total: malformed input comes back best-effort
//! transformed, never as an error.

/// Rewrites `-` separators to `:`. No case folding or octet padding.
pub fn normalize_mac(mac: &str) -> String {
    mac.chars()
        .map(|c| if c == '-' { ':' } else { c })
        .collect()
}

/// Strips one wrapping `(` `)` pair, as printed by `arp -a` on Unix.
pub fn normalize_ip(ip: &str) -> &str {
    if ip.len() >= 2 && ip.starts_with('(') && ip.ends_with(')') {
        &ip[1..ip.len() - 1]
    } else {
        ip
    }
}

/// Left-pads single-digit octets: BSD `arp` prints `0:19:9:50:3a:3`.
pub fn pad_mac_octets(mac: &str) -> String {
    mac.split(':')
        .map(|octet| {
            if octet.len() == 1 {
                format!("0{}", octet)
            } else {
                octet.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}
