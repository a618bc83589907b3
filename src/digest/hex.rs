//! Lowercase hex encoding of raw digest bytes.

/// Encode `bytes` as a lowercase hexadecimal string, two characters per byte.
pub(crate) fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
