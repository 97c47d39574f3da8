//! Field validation and normalization
//!
//! Identifying fields are checked before any command leaves the process and
//! rewritten into the canonical text the control agent should always see.

use std::net::IpAddr;

use crate::error::ValidationError;

/// Octet counts accepted for hardware addresses (EUI-48, EUI-64, IPoIB)
const MAC_LENGTHS: [usize; 3] = [6, 8, 20];

/// Parse an IPv4 or IPv6 literal
pub fn parse_ip(input: &str) -> Result<IpAddr, ValidationError> {
    input
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| ValidationError::InvalidAddress(input.to_string()))
}

/// Parse an IP literal and return its canonical text
pub fn normalize_ip(input: &str) -> Result<String, ValidationError> {
    parse_ip(input).map(|ip| ip.to_string())
}

/// Parse a hardware address into its octets
///
/// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabb.ccdd.eeff`
/// layouts, in any letter case, for 6, 8 or 20 octet addresses.
pub fn parse_mac(input: &str) -> Result<Vec<u8>, ValidationError> {
    let invalid = || ValidationError::InvalidHardwareAddress(input.to_string());
    let s = input.trim().as_bytes();

    let octets = if s.len() > 2 && (s[2] == b':' || s[2] == b'-') {
        if (s.len() + 1) % 3 != 0 {
            return Err(invalid());
        }
        let sep = s[2];
        let mut octets = Vec::with_capacity((s.len() + 1) / 3);
        for chunk in s.chunks(3) {
            if chunk.len() == 3 && chunk[2] != sep {
                return Err(invalid());
            }
            octets.push(hex_byte(chunk[0], chunk[1]).ok_or_else(invalid)?);
        }
        octets
    } else if s.len() > 4 && s[4] == b'.' {
        if (s.len() + 1) % 5 != 0 {
            return Err(invalid());
        }
        let mut octets = Vec::with_capacity(2 * (s.len() + 1) / 5);
        for chunk in s.chunks(5) {
            if chunk.len() == 5 && chunk[4] != b'.' {
                return Err(invalid());
            }
            octets.push(hex_byte(chunk[0], chunk[1]).ok_or_else(invalid)?);
            octets.push(hex_byte(chunk[2], chunk[3]).ok_or_else(invalid)?);
        }
        octets
    } else {
        return Err(invalid());
    };

    if !MAC_LENGTHS.contains(&octets.len()) {
        return Err(invalid());
    }
    Ok(octets)
}

/// Parse a hardware address and return the canonical lowercase colon form
pub fn normalize_mac(input: &str) -> Result<String, ValidationError> {
    let octets = parse_mac(input)?;
    Ok(octets
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":"))
}

/// Reject the zero subnet id where an operation needs a concrete subnet
pub fn require_subnet_id(id: u32) -> Result<u32, ValidationError> {
    if id == 0 {
        return Err(ValidationError::InvalidIdentifier(
            "subnet id must be non-zero".to_string(),
        ));
    }
    Ok(id)
}

/// Parse `address/len` and return the canonical text
pub fn normalize_prefix(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidPrefix(input.to_string());

    let (addr, len) = input.trim().split_once('/').ok_or_else(invalid)?;
    let addr = addr.parse::<IpAddr>().map_err(|_| invalid())?;
    let len = len.parse::<u8>().map_err(|_| invalid())?;

    let max = if addr.is_ipv4() { 32 } else { 128 };
    if len > max {
        return Err(invalid());
    }
    Ok(format!("{}/{}", addr, len))
}

/// Validate a pool given as a prefix or as a `first-last` address range
pub fn normalize_pool(input: &str) -> Result<String, ValidationError> {
    if input.contains('/') {
        return normalize_prefix(input);
    }

    let invalid = || ValidationError::InvalidPrefix(input.to_string());
    let (first, last) = input.split_once('-').ok_or_else(invalid)?;
    let first = first.trim().parse::<IpAddr>().map_err(|_| invalid())?;
    let last = last.trim().parse::<IpAddr>().map_err(|_| invalid())?;

    if first.is_ipv4() != last.is_ipv4() || first > last {
        return Err(invalid());
    }
    Ok(format!("{}-{}", first, last))
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
