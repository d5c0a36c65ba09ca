//! Chapman and Flather open-boundary conditions for the barotropic mode.
//!
//! The Chapman condition radiates free-surface elevation with the shallow
//! water wave speed c = √(gD), discretized implicitly:
//!
//! ```text
//! Ce     = dt · c / dx
//! ζ_b    = (ζ_b_old + Ce · ζ_int) / (1 + Ce)
//! ```
//!
//! The Flather condition couples the depth-averaged normal velocity to the
//! elevation anomaly at the boundary:
//!
//! ```text
//! u_b = u_ext + s · √(g/D) · (ζ - ζ_ext)       s = +1 east/north, -1 west/south
//! ```
//!
//! so that an elevation excess radiates outward as a transport.
//!
//! # References
//!
//! Chapman, D.C. (1985): "Numerical treatment of cross-shelf open boundaries
//! in a barotropic coastal ocean model", Journal of Physical Oceanography.
//!
//! Flather, R.A. (1976): "A tidal model of the north-west European
//! continental shelf", Mémoires de la Société Royale des Sciences de Liège.

use super::OpenBoundaryParams;
use crate::types::Face;

/// Chapman radiation of free-surface elevation.
#[derive(Clone, Copy, Debug)]
pub struct ChapmanRadiation {
    /// Gravitational acceleration
    pub g: f64,
    /// Minimum depth
    pub h_min: f64,
}

impl ChapmanRadiation {
    /// Create with explicit gravity and depth floor.
    pub fn new(g: f64, h_min: f64) -> Self {
        Self { g, h_min }
    }

    /// Create from open-boundary parameters.
    pub fn from_params(params: &OpenBoundaryParams) -> Self {
        Self::new(params.gravity, params.min_depth)
    }

    /// Implicit Courant number `dt · √(g D) / dx`.
    #[inline]
    pub fn coefficient(&self, dt: f64, dx_inv: f64, depth: f64) -> f64 {
        dt * dx_inv * (self.g * depth.max(self.h_min)).sqrt()
    }

    /// New boundary elevation from the old boundary value and the current
    /// adjacent interior value.
    #[inline]
    pub fn boundary_value(
        &self,
        old_boundary: f64,
        new_interior: f64,
        dt: f64,
        dx_inv: f64,
        depth: f64,
    ) -> f64 {
        let ce = self.coefficient(dt, dx_inv, depth);
        (old_boundary + ce * new_interior) / (1.0 + ce)
    }
}

/// Flather radiation of depth-averaged normal velocity.
#[derive(Clone, Copy, Debug)]
pub struct FlatherRadiation {
    /// Gravitational acceleration
    pub g: f64,
    /// Minimum depth
    pub h_min: f64,
}

impl FlatherRadiation {
    /// Create with explicit gravity and depth floor.
    pub fn new(g: f64, h_min: f64) -> Self {
        Self { g, h_min }
    }

    /// Create from open-boundary parameters.
    pub fn from_params(params: &OpenBoundaryParams) -> Self {
        Self::new(params.gravity, params.min_depth)
    }

    /// Boundary normal velocity.
    ///
    /// `depth` is the total water depth `h + ζ` at the interior cell next to
    /// the face; it is floored at `h_min`.
    #[inline]
    pub fn boundary_velocity(
        &self,
        face: Face,
        u_ref: f64,
        zeta: f64,
        zeta_ref: f64,
        depth: f64,
    ) -> f64 {
        let d = depth.max(self.h_min);
        u_ref + face.outward_sign() * (self.g / d).sqrt() * (zeta - zeta_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const G: f64 = 9.81;
    const TOL: f64 = 1e-12;

    #[test]
    fn test_chapman_limits() {
        let chapman = ChapmanRadiation::new(G, 1e-6);
        // dt = 0: boundary unchanged
        assert!((chapman.boundary_value(0.3, 1.0, 0.0, 1e-3, 10.0) - 0.3).abs() < TOL);
        // Very large Courant number: boundary tends to the interior value
        let v = chapman.boundary_value(0.3, 1.0, 1e9, 1.0, 10.0);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_chapman_coefficient() {
        let chapman = ChapmanRadiation::new(G, 1e-6);
        let ce = chapman.coefficient(10.0, 1.0 / 1000.0, 100.0);
        assert!((ce - 10.0 * (G * 100.0).sqrt() / 1000.0).abs() < TOL);
        // Dry cell uses the depth floor
        assert!(chapman.coefficient(10.0, 1.0, -5.0) > 0.0);
    }

    #[test]
    fn test_flather_sign_per_face() {
        let flather = FlatherRadiation::new(G, 1e-6);
        let c = (G / 10.0).sqrt();
        let east = flather.boundary_velocity(Face::East, 0.1, 0.5, 0.0, 10.0);
        let west = flather.boundary_velocity(Face::West, 0.1, 0.5, 0.0, 10.0);
        assert!((east - (0.1 + 0.5 * c)).abs() < TOL);
        assert!((west - (0.1 - 0.5 * c)).abs() < TOL);
    }

    #[test]
    fn test_flather_transport_form() {
        let flather = FlatherRadiation::new(G, 1e-6);
        let d = 25.0;
        let (u_ref, zeta, zeta_ref) = (0.2, 0.4, 0.1);
        let u_b = flather.boundary_velocity(Face::North, u_ref, zeta, zeta_ref, d);
        // D·u_b = D·u_ref + √(gD)·(ζ - ζ_ref)
        let lhs = d * u_b;
        let rhs = d * u_ref + (G * d).sqrt() * (zeta - zeta_ref);
        assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
    }

    #[test]
    fn test_flather_matching_elevation_returns_reference() {
        let flather = FlatherRadiation::from_params(&OpenBoundaryParams::default());
        let u_b = flather.boundary_velocity(Face::South, -0.3, 0.25, 0.25, 0.0);
        assert_eq!(u_b, -0.3);
    }
}
