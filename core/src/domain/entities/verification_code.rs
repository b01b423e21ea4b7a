//! Verification code generation for SMS-based phone confirmation.

use rand::rngs::OsRng;
use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Generates a cryptographically secure random 6-digit code
///
/// The code is uniform over `000000..=999999`; leading zeros are kept,
/// so `"004217"` is a possible output.
///
/// # Returns
///
/// A string containing a 6-digit verification code
pub fn generate() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format_code(code)
}

fn format_code(code: u32) -> String {
    format!("{:0width$}", code, width = CODE_LENGTH)
}
