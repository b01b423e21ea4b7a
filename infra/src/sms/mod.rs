//! SMS Service Module
//!
//! SMS gateway implementations for sending verification codes. Both
//! implement the `SmsServiceTrait` defined in `smil_core`:
//!
//! - **SENS**: the NCP SENS HTTP gateway, with HMAC-SHA256 signed requests
//! - **Mock**: logs messages instead of sending them, for development and
//!   tests

pub mod mock_sms;

#[cfg(feature = "sens-sms")]
pub mod sens;

#[cfg(test)]
mod tests;

pub use mock_sms::MockSmsService;

#[cfg(feature = "sens-sms")]
pub use sens::SensSmsService;
