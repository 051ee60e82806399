use anyhow::{anyhow, Result};

pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Turns a user supplied seed into 32 bytes.
///
/// A 64 character hex string is decoded as-is, anything else is hashed so
/// that short phrases such as `"42"` are valid seeds too.
pub fn seed_from_str(input: &str) -> Result<[u8; 32]> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Seed must not be empty"));
    }
    if trimmed.len() == 64 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut seed = [0u8; 32];
        hex::decode_to_slice(trimmed, &mut seed)
            .map_err(|e| anyhow!("Invalid hex seed '{}': {}", trimmed, e))?;
        return Ok(seed);
    }
    Ok(u8s_from_str(trimmed))
}

pub fn seed_to_hex(seed: &[u8; 32]) -> String {
    hex::encode(seed)
}
