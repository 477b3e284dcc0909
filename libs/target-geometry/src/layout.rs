//! Axial layout of the stack inside the chamber.
//!
//! The five volumes (target, helium gap, nickel foil, steel foil, beam cap)
//! form one contiguous stack centred in the chamber. The target sits at the
//! downstream (+X) end; each following volume is placed directly upstream of
//! the previous one:
//!
//! ```text
//!  -S                                                             +S
//!   | beam cap | steel | nickel |   helium gap   |     target     |
//!   ------------------------------------------------------------------> beam (+X)
//! ```
//!
//! With `S` the sum of the five half-lengths, the target centre is at
//! `S - Lt`, which does not depend on `Lt`. Every upstream offset moves by
//! exactly the change in `Lt`.

use config::constants::DesignConstants;

/// Offsets along X of each stacked volume, relative to the chamber centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialLayout {
    /// Half-length of the whole stack.
    pub stack_half_length: f64,
    /// Target centre.
    pub target: f64,
    /// Helium gap centre.
    pub helium_gap: f64,
    /// Nickel foil centre.
    pub nickel_foil: f64,
    /// Steel foil centre.
    pub steel_foil: f64,
    /// Beam cap centre.
    pub beam_cap: f64,
}

impl AxialLayout {
    /// Derives every offset from the target half-length and the constants.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::constants::DesignConstants;
    /// use target_geometry::AxialLayout;
    ///
    /// let c = DesignConstants::default();
    /// let short = AxialLayout::compute(1.0, &c);
    /// let long = AxialLayout::compute(1.5, &c);
    /// assert!((short.helium_gap - long.helium_gap - 0.5).abs() < 1e-12);
    /// assert!((short.target - long.target).abs() < 1e-12);
    /// ```
    pub fn compute(target_half_length: f64, constants: &DesignConstants) -> Self {
        let stack_half_length = target_half_length + constants.fixed_stack_half_length();
        let target = stack_half_length - target_half_length;
        let helium_gap = target - target_half_length - constants.helium_gap_half_length;
        let nickel_foil = helium_gap
            - constants.helium_gap_half_length
            - constants.nickel_foil_half_length;
        let steel_foil = nickel_foil
            - constants.nickel_foil_half_length
            - constants.steel_foil_half_length;
        let beam_cap =
            steel_foil - constants.steel_foil_half_length - constants.beam_cap_half_length;
        Self {
            stack_half_length,
            target,
            helium_gap,
            nickel_foil,
            steel_foil,
            beam_cap,
        }
    }

    /// Upstream face of the stack.
    pub fn upstream_face(&self) -> f64 {
        -self.stack_half_length
    }
}
