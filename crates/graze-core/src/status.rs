//! The tri-state cell status.

use crate::AgentId;

/// Ownership state of one graph node. Exactly one variant holds at
/// any time.
///
/// `Trail` carries the owner that walked it. `Territory` is permanent:
/// the engine never reverts it to `Unclaimed` on its own (re-stepping
/// onto territory is governed by the engine's recapture policy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// Not yet walked or captured.
    #[default]
    Unclaimed,
    /// Recently walked by the tagged agent; candidate boundary of a
    /// future captured region.
    Trail(AgentId),
    /// Permanently captured.
    Territory,
}

impl CellStatus {
    /// Returns `true` for [`CellStatus::Unclaimed`].
    pub fn is_unclaimed(self) -> bool {
        matches!(self, Self::Unclaimed)
    }

    /// Returns `true` for any [`CellStatus::Trail`] owner.
    pub fn is_trail(self) -> bool {
        matches!(self, Self::Trail(_))
    }

    /// Returns `true` for [`CellStatus::Territory`].
    pub fn is_territory(self) -> bool {
        matches!(self, Self::Territory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unclaimed() {
        assert_eq!(CellStatus::default(), CellStatus::Unclaimed);
    }

    #[test]
    fn predicates_are_disjoint() {
        let all = [
            CellStatus::Unclaimed,
            CellStatus::Trail(AgentId(0)),
            CellStatus::Territory,
        ];
        for s in all {
            let hits = usize::from(s.is_unclaimed())
                + usize::from(s.is_trail())
                + usize::from(s.is_territory());
            assert_eq!(hits, 1, "{s:?}");
        }
    }

    #[test]
    fn trail_owners_are_distinct() {
        assert_ne!(
            CellStatus::Trail(AgentId(0)),
            CellStatus::Trail(AgentId(1))
        );
    }
}
