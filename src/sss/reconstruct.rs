//! Secret reconstruction and share extension.
//!
//! Both evaluate the polynomial through a set of share points: at the secret index to
//! recover the secret, or at an unused index to mint a new share of the same secret.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::config::InterpolationConfig;
use crate::sss::share::{coordinates, share_len, SharePoint};
use crate::sss::{InterpolationError, Interpolator};

/// Evaluates the polynomial through `points` at `x`.
///
/// # Errors
/// * `NoPoints` / `LengthMismatch` if the points are empty or of unequal length.
/// * `DuplicateCoordinate` if two points share an x-coordinate.
pub fn interpolate_points(
    interp: &dyn Interpolator,
    points: &[SharePoint],
    x: u8,
) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
    let yl = share_len(points)?;
    let (xi, yij) = coordinates(points);
    interp.interpolate(&xi, yl, &yij, x)
}

/// Recovers the secret stored at `secret_index` from `points`.
pub fn reconstruct_secret(
    interp: &dyn Interpolator,
    points: &[SharePoint],
    secret_index: u8,
) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
    log::debug!(
        "Reconstructing secret at index {} from {} shares ({})",
        secret_index,
        points.len(),
        interp.name()
    );
    interpolate_points(interp, points, secret_index)
}

/// Mints a share at `new_x` consistent with `points`.
///
/// # Errors
/// * `CoordinateInUse` if `new_x` is the secret index or already belongs to one of `points`.
/// * Anything [`interpolate_points`] returns.
pub fn extend_shares(
    interp: &dyn Interpolator,
    points: &[SharePoint],
    new_x: u8,
    secret_index: u8,
) -> Result<SharePoint, InterpolationError> {
    if new_x == secret_index || points.iter().any(|p| p.x == new_x) {
        return Err(InterpolationError::CoordinateInUse { x: new_x });
    }
    log::debug!("Extending {} shares with index {} ({})", points.len(), new_x, interp.name());

    let mut y = interpolate_points(interp, points, new_x)?;
    Ok(SharePoint::new(new_x, core::mem::take(&mut *y)))
}

/// Reconstruction and extension bound to an [`InterpolationConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Recovery {
    config: InterpolationConfig,
}

impl Default for Recovery {
    fn default() -> Self {
        Self::new(InterpolationConfig::default())
    }
}

impl Recovery {
    pub fn new(config: InterpolationConfig) -> Self {
        log::debug!(
            "Interpolation backend: {}, secret index {}",
            config.backend,
            config.secret_index
        );
        Self { config }
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    pub fn reconstruct(&self, points: &[SharePoint]) -> Result<Zeroizing<Vec<u8>>, InterpolationError> {
        reconstruct_secret(self.config.interpolator(), points, self.config.secret_index)
    }

    pub fn extend(&self, points: &[SharePoint], new_x: u8) -> Result<SharePoint, InterpolationError> {
        extend_shares(self.config.interpolator(), points, new_x, self.config.secret_index)
    }
}
