// ── Port selection ──
//
// An explicit value, not ambient UI state: the bulk-edit engine takes a
// `Selection` as an argument so it stays testable without a UI harness.
// A selection is scoped to one `PortSet` and is transient — callers drop
// it when the active switch changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{PortId, PortSet};

/// Set of selected port ids within one switch's port set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<PortId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of one id. Ids the port set does not contain are a
    /// silent no-op — the UI never offers them, the engine never trusts that.
    pub fn toggle(&mut self, set: &PortSet, id: PortId) {
        if !set.contains(id) {
            tracing::debug!(port = %id, "ignoring toggle for unknown port id");
            return;
        }
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Combined select-all/clear affordance: selecting all when everything
    /// is already selected clears instead.
    pub fn toggle_all(&mut self, set: &PortSet) {
        if self.ids.len() == set.len() && !set.is_empty() {
            self.clear();
        } else {
            self.ids = set.ids().collect();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: PortId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PortId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<PortId> for Selection {
    fn from_iter<I: IntoIterator<Item = PortId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let set = PortSet::new(4, 0);
        let mut sel = Selection::new();

        sel.toggle(&set, PortId(2));
        assert!(sel.contains(PortId(2)));

        sel.toggle(&set, PortId(2));
        assert!(!sel.contains(PortId(2)));
    }

    #[test]
    fn toggle_of_unknown_id_is_a_noop() {
        let set = PortSet::new(4, 0);
        let mut sel = Selection::new();

        sel.toggle(&set, PortId(99));
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_obeys_the_toggle_law() {
        let set = PortSet::new(3, 1);
        let mut sel = Selection::new();

        // empty -> full
        sel.toggle_all(&set);
        assert_eq!(sel.len(), 4);

        // full -> empty
        sel.toggle_all(&set);
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_from_partial_selects_everything() {
        let set = PortSet::new(3, 1);
        let mut sel = Selection::new();
        sel.toggle(&set, PortId(1));

        sel.toggle_all(&set);
        assert_eq!(sel.len(), 4);
    }

    #[test]
    fn iteration_is_id_ordered() {
        let set = PortSet::new(5, 0);
        let mut sel = Selection::new();
        for id in [4, 1, 3] {
            sel.toggle(&set, PortId(id));
        }
        let ids: Vec<u32> = sel.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
