//! Soft non-convergence counters.

/// Counters for non-fatal solver trouble.
///
/// Each update call adds to these; nothing here aborts a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Equilibrium solves that hit the pass cap before the tolerance
    pub equilibrium_not_converged: u64,
    /// Equilibrium solves that drifted off the seeded element totals even
    /// after restarting from the reactants
    pub element_imbalance: u64,
    /// Temperature searches that hit the step cap
    pub search_cap_reached: u64,
    /// Temperature searches abandoned at the temperature floor
    pub temperature_floor_hits: u64,
    /// Steps taken by the most recent temperature search
    pub last_search_iterations: usize,
}

impl Diagnostics {
    /// Total number of soft failures recorded.
    pub fn soft_failures(&self) -> u64 {
        self.equilibrium_not_converged
            + self.element_imbalance
            + self.search_cap_reached
            + self.temperature_floor_hits
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_failures_sum() {
        let mut d = Diagnostics {
            equilibrium_not_converged: 2,
            element_imbalance: 3,
            search_cap_reached: 1,
            temperature_floor_hits: 1,
            last_search_iterations: 12,
        };
        assert_eq!(d.soft_failures(), 7);
        d.clear();
        assert_eq!(d, Diagnostics::default());
    }
}
