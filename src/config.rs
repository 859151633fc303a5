//! Configuration for interpolation.
//!
//! Defines which backend evaluates interpolations and which share index holds the secret.

use core::fmt;
use core::str::FromStr;

use crate::sss::{BitslicedInterpolator, DirectInterpolator, Interpolator};

/// Share index SLIP-39 reserves for the shared secret.
pub const SLIP39_SECRET_INDEX: u8 = 255;

/// Share index SLIP-39 reserves for the secret digest.
pub const SLIP39_DIGEST_INDEX: u8 = 254;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Backend name is not one of `direct` / `bitsliced`.
    UnknownBackend(alloc::string::String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownBackend(name) => write!(f, "Unknown interpolation backend: {}", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Interpolation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// Scalar arithmetic, any vector length.
    #[default]
    Direct,
    /// 32-byte bitsliced blocks; vectors longer than 32 bytes are rejected.
    Bitsliced,
}

impl Backend {
    /// The interpolator implementing this strategy.
    pub fn interpolator(self) -> &'static dyn Interpolator {
        match self {
            Backend::Direct => &DirectInterpolator,
            Backend::Bitsliced => &BitslicedInterpolator,
        }
    }

    pub fn name(self) -> &'static str {
        self.interpolator().name()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case(DirectInterpolator::NAME) => Ok(Backend::Direct),
            s if s.eq_ignore_ascii_case(BitslicedInterpolator::NAME) => Ok(Backend::Bitsliced),
            other => Err(ConfigError::UnknownBackend(other.into())),
        }
    }
}

/// Main configuration structure.
///
/// Populated by the host application (share manager, CLI) and passed to
/// [`Recovery`](crate::sss::reconstruct::Recovery).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterpolationConfig {
    /// Which interpolator evaluates the polynomial.
    pub backend: Backend,

    /// Share index at which the secret is stored (255 for SLIP-39, 0 for textbook Shamir).
    pub secret_index: u8,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Direct,
            secret_index: SLIP39_SECRET_INDEX,
        }
    }
}

impl InterpolationConfig {
    pub fn interpolator(&self) -> &'static dyn Interpolator {
        self.backend.interpolator()
    }
}
