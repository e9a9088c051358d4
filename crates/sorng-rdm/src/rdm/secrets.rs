//! Protected secrets (`SafePassword`, `GatewaySafePassword`).
//!
//! RDM stores these as Base64 blobs sealed with Windows DPAPI for the
//! exporting machine. They cannot be opened anywhere else, so import keeps
//! the decryption path switched off and always yields an empty secret.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use log::debug;

/// Resolve a protected secret field. Always returns an empty string.
pub fn protected_secret(field: &str, ciphertext: Option<&str>) -> String {
    match ciphertext.map(str::trim) {
        None | Some("") => {}
        Some(blob) => match B64.decode(blob) {
            Ok(bytes) => debug!("Skipping {} ({} protected bytes, decryption disabled)", field, bytes.len()),
            Err(e) => debug!("Skipping {}: not a protected blob ({})", field, e),
        },
    }
    String::new()
}
