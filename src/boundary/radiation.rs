//! Orlanski radiation for open boundaries.
//!
//! The phase speed of a disturbance at the boundary is estimated from the
//! interior tendency and gradient (Orlanski 1976, in the form used by ROMS):
//!
//! ```text
//! dT/dt = T_old(a) - T_new(a)          a  = first interior point
//! dT/dx = T_new(a) - T_new(a')         a' = second interior point
//! Cx    = dT/dt * dT/dx
//! Ce    = dT/dt * dT/de                dT/de: upstream tangential gradient
//! c     = Cx / max(dT/dx² + dT/de², eps)
//! ```
//!
//! `c > 0` means the disturbance leaves the domain: the boundary value is
//! advanced implicitly,
//!
//! ```text
//! T_b = (T_b_old + c T_new(a) - max(ce,0) g_lo - min(ce,0) g_hi) / (1 + c)
//! ```
//!
//! `c < 0` means it enters: the boundary takes the reference value, or is
//! relaxed toward it when nudging is enabled.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning parameters shared by all open-boundary kinds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenBoundaryParams {
    /// Floor of the Orlanski denominator
    pub eps: f64,
    /// Bound on the normalized phase speed (|c| <= max_courant)
    pub max_courant: f64,
    /// Nudging fraction per fill for incoming information
    pub nudge_in: f64,
    /// Nudging fraction per fill for outgoing information
    pub nudge_out: f64,
    /// Branch taken when the estimated phase speed is exactly zero
    pub zero_speed: RadiationBranch,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Floor of the water depth used by Chapman and Flather (m)
    pub min_depth: f64,
    /// Value written at land points
    pub land_value: f64,
}

impl Default for OpenBoundaryParams {
    fn default() -> Self {
        Self {
            eps: 1e-20,
            max_courant: 1.0,
            nudge_in: 0.1,
            nudge_out: 0.01,
            zero_speed: RadiationBranch::Outgoing,
            gravity: 9.81,
            min_depth: 1e-6,
            land_value: 0.0,
        }
    }
}

impl OpenBoundaryParams {
    /// Check that every parameter is in its admissible range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name: &'static str, value: f64, reason: &'static str| {
            Err::<(), _>(ConfigError::InvalidParameter {
                name,
                value,
                reason,
            })
        };
        if !(self.eps > 0.0) {
            return invalid("eps", self.eps, "must be positive");
        }
        if !(self.max_courant > 0.0) {
            return invalid("max_courant", self.max_courant, "must be positive");
        }
        if !(0.0..=1.0).contains(&self.nudge_in) {
            return invalid("nudge_in", self.nudge_in, "must lie in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.nudge_out) {
            return invalid("nudge_out", self.nudge_out, "must lie in [0, 1]");
        }
        if !(self.gravity > 0.0) {
            return invalid("gravity", self.gravity, "must be positive");
        }
        if !(self.min_depth > 0.0) {
            return invalid("min_depth", self.min_depth, "must be positive");
        }
        if !self.land_value.is_finite() {
            return invalid("land_value", self.land_value, "must be finite");
        }
        Ok(())
    }
}

/// Direction of information flow selected by the phase speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiationBranch {
    /// Disturbance leaves the domain; interior information radiates out
    Outgoing,
    /// Disturbance enters the domain; exterior (reference) data is imposed
    Incoming,
}

/// Values around one boundary point needed by the radiation estimate.
///
/// "Old" values come from the previous time level, "new" from the field
/// being filled. Tangential gradients are `[T(t) - T(t-1), T(t+1) - T(t)]`,
/// already multiplied by the cross-velocity mask.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadiationInput {
    /// Previous value at the boundary point being computed
    pub old_boundary: f64,
    /// Previous value at the first interior point
    pub old_interior: f64,
    /// Current value at the first interior point
    pub new_interior: f64,
    /// Current value at the second interior point
    pub new_interior_next: f64,
    /// Previous tangential gradients at the first interior point
    pub interior_grad: [f64; 2],
    /// Previous tangential gradients at the boundary point
    pub boundary_grad: [f64; 2],
    /// External reference value at the boundary point
    pub reference: f64,
}

/// Result of one radiation evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiationOutcome {
    /// Selected branch
    pub branch: RadiationBranch,
    /// New boundary value
    pub value: f64,
    /// Normalized, clipped phase speed
    pub courant: f64,
}

/// Orlanski radiation, optionally nudged toward reference data.
#[derive(Clone, Copy, Debug)]
pub struct OrlanskiRadiation {
    params: OpenBoundaryParams,
    nudge: bool,
}

impl OrlanskiRadiation {
    /// Plain radiation.
    pub fn new(params: OpenBoundaryParams) -> Self {
        Self {
            params,
            nudge: false,
        }
    }

    /// Radiation with nudging toward the reference state.
    pub fn with_nudging(params: OpenBoundaryParams) -> Self {
        Self {
            params,
            nudge: true,
        }
    }

    /// True if nudging is enabled.
    #[inline]
    pub fn nudges(&self) -> bool {
        self.nudge
    }

    /// Normalized normal and tangential phase speeds, both clipped to
    /// `[-max_courant, max_courant]`.
    pub fn phase_speed(&self, input: &RadiationInput) -> (f64, f64) {
        let p = &self.params;
        let dtdt = input.old_interior - input.new_interior;
        let dtdx = input.new_interior - input.new_interior_next;
        let [g_lo, g_hi] = input.interior_grad;
        let dtde = if dtdt * (g_lo + g_hi) > 0.0 { g_lo } else { g_hi };

        let cff = (dtdx * dtdx + dtde * dtde).max(p.eps);
        let cx = (dtdt * dtdx / cff).clamp(-p.max_courant, p.max_courant);
        let ce = (dtdt * dtde / cff).clamp(-p.max_courant, p.max_courant);
        (cx, ce)
    }

    /// Branch for a normalized phase speed.
    #[inline]
    pub fn branch(&self, courant: f64) -> RadiationBranch {
        if courant > 0.0 {
            RadiationBranch::Outgoing
        } else if courant < 0.0 {
            RadiationBranch::Incoming
        } else {
            self.params.zero_speed
        }
    }

    /// New boundary value.
    pub fn evaluate(&self, input: &RadiationInput) -> RadiationOutcome {
        let (cx, ce) = self.phase_speed(input);
        let branch = self.branch(cx);

        let value = match branch {
            RadiationBranch::Outgoing => {
                // cx is 0 here only on the designated zero-speed branch
                let c = cx.max(0.0);
                let [g_lo, g_hi] = input.boundary_grad;
                let radiated = (input.old_boundary + c * input.new_interior
                    - ce.max(0.0) * g_lo
                    - ce.min(0.0) * g_hi)
                    / (1.0 + c);
                if self.nudge {
                    radiated + self.params.nudge_out * (input.reference - input.old_boundary)
                } else {
                    radiated
                }
            }
            RadiationBranch::Incoming => {
                if self.nudge {
                    input.old_boundary + self.params.nudge_in * (input.reference - input.old_boundary)
                } else {
                    input.reference
                }
            }
        };

        RadiationOutcome {
            branch,
            value,
            courant: cx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn outgoing_input() -> RadiationInput {
        // Interior rising toward a boundary that was lower: wave moving out
        RadiationInput {
            old_boundary: 1.0,
            old_interior: 1.0,
            new_interior: 1.2,
            new_interior_next: 1.4,
            interior_grad: [0.0, 0.0],
            boundary_grad: [0.0, 0.0],
            reference: 5.0,
        }
    }

    #[test]
    fn test_default_params_are_valid() {
        let p = OpenBoundaryParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.zero_speed, RadiationBranch::Outgoing);
        assert_eq!(p.eps, 1e-20);
    }

    #[test]
    fn test_invalid_params() {
        let p = OpenBoundaryParams {
            nudge_in: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidParameter { name: "nudge_in", .. })
        ));
        let p = OpenBoundaryParams {
            eps: f64::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_outgoing_branch() {
        let rad = OrlanskiRadiation::new(OpenBoundaryParams::default());
        let input = RadiationInput {
            new_interior_next: 1.2,
            ..outgoing_input()
        };
        // dT/dt = -0.2, dT/dx = 0 -> zero speed, designated outgoing: hold old
        let out = rad.evaluate(&input);
        assert_eq!(out.branch, RadiationBranch::Outgoing);
        assert!((out.value - 1.0).abs() < TOL);

        let input = RadiationInput {
            new_interior_next: 1.0,
            ..outgoing_input()
        };
        // dT/dt = -0.2, dT/dx = 0.2 -> Cx < 0 -> incoming
        let out = rad.evaluate(&input);
        assert_eq!(out.branch, RadiationBranch::Incoming);
        assert!((out.value - 5.0).abs() < TOL);
    }

    #[test]
    fn test_courant_is_clipped() {
        let rad = OrlanskiRadiation::new(OpenBoundaryParams::default());
        let input = RadiationInput {
            old_boundary: 0.0,
            old_interior: 2.0,
            new_interior: 1.0,
            new_interior_next: 0.0,
            ..Default::default()
        };
        // dT/dt = 1, dT/dx = 1 -> c = 1, at the bound
        let out = rad.evaluate(&input);
        assert_eq!(out.branch, RadiationBranch::Outgoing);
        assert!((out.courant - 1.0).abs() < TOL);
        assert!((out.value - 0.5).abs() < TOL);

        let input = RadiationInput {
            new_interior_next: 0.9,
            ..input
        };
        // dT/dt = 1, dT/dx = 0.1 -> c = 10, clipped to 1
        let out = rad.evaluate(&input);
        assert!((out.courant - 1.0).abs() < TOL);
    }

    #[test]
    fn test_nudging() {
        let params = OpenBoundaryParams::default();
        let rad = OrlanskiRadiation::with_nudging(params);
        assert!(rad.nudges());

        let incoming = RadiationInput {
            old_boundary: 1.0,
            old_interior: 1.0,
            new_interior: 1.2,
            new_interior_next: 1.0,
            reference: 2.0,
            ..Default::default()
        };
        let out = rad.evaluate(&incoming);
        assert_eq!(out.branch, RadiationBranch::Incoming);
        assert!((out.value - (1.0 + params.nudge_in * 1.0)).abs() < TOL);

        let outgoing = RadiationInput {
            old_boundary: 0.0,
            old_interior: 2.0,
            new_interior: 1.0,
            new_interior_next: 0.0,
            reference: 1.0,
            ..Default::default()
        };
        let out = rad.evaluate(&outgoing);
        assert_eq!(out.branch, RadiationBranch::Outgoing);
        assert!((out.value - (0.5 + params.nudge_out * 1.0)).abs() < TOL);
    }

    #[test]
    fn test_zero_speed_branch_is_configurable() {
        let params = OpenBoundaryParams {
            zero_speed: RadiationBranch::Incoming,
            ..Default::default()
        };
        let rad = OrlanskiRadiation::new(params);
        let still = RadiationInput {
            old_boundary: 1.0,
            old_interior: 1.0,
            new_interior: 1.0,
            new_interior_next: 1.0,
            reference: 3.0,
            ..Default::default()
        };
        let out = rad.evaluate(&still);
        assert_eq!(out.branch, RadiationBranch::Incoming);
        assert_eq!(out.value, 3.0);
    }

    #[test]
    fn test_tangential_gradient_upstream_selection() {
        let rad = OrlanskiRadiation::new(OpenBoundaryParams::default());
        let input = RadiationInput {
            old_interior: 2.0,
            new_interior: 1.0,
            new_interior_next: 0.0,
            interior_grad: [1.0, -3.0],
            ..Default::default()
        };
        // dT/dt (1) * (1 - 3) < 0 -> dT/de = g_hi = -3
        let (cx, ce) = rad.phase_speed(&input);
        assert!((cx - 0.1).abs() < TOL);
        assert!((ce + 0.3).abs() < TOL);
    }
}
