//! ID prefixes and generation.
//!
//! IDs look like `wks-a3f8b2c1`: a three-letter prefix, a dash, and 8
//! lowercase hex characters drawn from the OS random source.

use anyhow::anyhow;

use crate::errors::CoreError;

pub const PREFIX_WORKSHEET: &str = "wks";
pub const PREFIX_SENTENCE: &str = "snt";
pub const PREFIX_TURNAROUND: &str = "trn";

/// Generate a prefixed random ID.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| anyhow!("failed to generate {prefix} id: {e}"))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
