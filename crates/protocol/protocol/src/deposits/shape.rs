//! Fork-dependent shape of system deposits.

/// The gas limit of a system deposit before Regolith.
pub const SYSTEM_TX_GAS: u64 = 150_000_000;

/// The system transaction gas limit post-Regolith
pub const REGOLITH_SYSTEM_TX_GAS: u64 = 1_000_000;

/// The gas limit and system flag of a system deposit.
///
/// With the regolith hardfork, system transactions were deprecated, and a constant amount of gas
/// is allocated to every system deposit instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositShape {
    /// The deposit gas limit.
    pub gas_limit: u64,
    /// Whether the deposit is a system transaction.
    pub is_system_transaction: bool,
}

impl DepositShape {
    /// The shape of system deposits before Regolith.
    pub const PRE_REGOLITH: Self = Self { gas_limit: SYSTEM_TX_GAS, is_system_transaction: true };

    /// The shape of system deposits from Regolith on.
    pub const REGOLITH: Self =
        Self { gas_limit: REGOLITH_SYSTEM_TX_GAS, is_system_transaction: false };

    /// Selects the deposit shape for the given Regolith activation state.
    pub const fn resolve(regolith: bool) -> Self {
        if regolith { Self::REGOLITH } else { Self::PRE_REGOLITH }
    }
}

/// The activation schedule of the forks that change the deposit shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForkSchedule {
    /// The L2 timestamp Regolith activates at, if scheduled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regolith_time: Option<u64>,
}

impl ForkSchedule {
    /// Returns `true` if Regolith is active at the given L2 timestamp.
    pub fn is_regolith_active(&self, timestamp: u64) -> bool {
        self.regolith_time.is_some_and(|t| timestamp >= t)
    }

    /// Returns the deposit shape at the given L2 timestamp.
    pub fn shape_at(&self, timestamp: u64) -> DepositShape {
        DepositShape::resolve(self.is_regolith_active(timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_resolve() {
        assert_eq!(
            DepositShape::resolve(false),
            DepositShape { gas_limit: 150_000_000, is_system_transaction: true }
        );
        assert_eq!(
            DepositShape::resolve(true),
            DepositShape { gas_limit: 1_000_000, is_system_transaction: false }
        );
    }

    #[rstest]
    #[case::unscheduled(None, 100, false)]
    #[case::before(Some(10), 9, false)]
    #[case::at(Some(10), 10, true)]
    #[case::after(Some(10), 11, true)]
    #[case::genesis(Some(0), 0, true)]
    fn test_regolith_activation(
        #[case] regolith_time: Option<u64>,
        #[case] timestamp: u64,
        #[case] active: bool,
    ) {
        let schedule = ForkSchedule { regolith_time };
        assert_eq!(schedule.is_regolith_active(timestamp), active);
        assert_eq!(schedule.shape_at(timestamp), DepositShape::resolve(active));
    }
}
