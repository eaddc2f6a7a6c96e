//! # Device Audit Metadata
//!
//! The signer's device/browser context, captured by the host at signing
//! time and attached to the submission payload for audit purposes. The
//! engine records it verbatim; it performs no fingerprinting of its own.

use serde::{Deserialize, Serialize};

/// Device/browser metadata supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// The signer's IP address as observed by the host.
    pub ip_address: String,
    /// Raw user-agent string.
    pub browser_signature: String,
    /// Parsed browser name, if the host extracted one.
    pub browser_name: String,
    /// Whether the signer is on a mobile device.
    pub is_mobile: bool,
    /// Device form factor (e.g. "desktop", "tablet").
    pub device_type: String,
    /// Operating system name.
    pub device_os: String,
}
