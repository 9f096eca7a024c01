use crate::Phase;

/// What the notifier did with a freshly computed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Published,
    Unchanged,
}

impl Phase {
    /// Advances the startup state machine after a pass. Returns whether another pass must be
    /// requested.
    ///
    /// While stabilizing every pass is followed by another one. The first unchanged window
    /// flips to [`Phase::Steady`] and still asks for one final pass, so sizes that only became
    /// accurate after the previous render are picked up with full event emission.
    pub(crate) fn advance(&mut self, outcome: Outcome) -> bool {
        match (*self, outcome) {
            (Self::Stabilizing, Outcome::Published) => true,
            (Self::Stabilizing, Outcome::Unchanged) => {
                vdebug!("window stabilized");
                *self = Self::Steady;
                true
            }
            (Self::Steady, _) => false,
        }
    }

    pub fn is_stabilizing(self) -> bool {
        self == Self::Stabilizing
    }
}
