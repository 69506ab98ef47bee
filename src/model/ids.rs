// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dagsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dagsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stable node identifier.
///
/// Ids come from a monotonically increasing counter owned by the editor and are never reused,
/// even after the node they named is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n:{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    /// Accepts both the display form (`n:7`) and a bare integer (`7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("n:").unwrap_or(s);
        digits.parse::<u64>().map(Self)
    }
}

/// Allocator for [`NodeId`]s.
///
/// The counter only moves forward on allocation. `reseed` exists for hosts that bulk-load nodes
/// with externally assigned ids and need new nodes to continue past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn reseed(&mut self, next: u64) {
        self.next = next;
    }

    /// Hands out the next id for which `is_taken` is false.
    pub fn allocate(&mut self, mut is_taken: impl FnMut(NodeId) -> bool) -> NodeId {
        let mut candidate = NodeId(self.next);
        while is_taken(candidate) {
            candidate = NodeId(candidate.0.saturating_add(1));
        }
        self.next = candidate.0.saturating_add(1);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::{IdCounter, NodeId};

    #[test]
    fn node_id_parses_display_and_bare_forms() {
        assert_eq!("n:12".parse::<NodeId>(), Ok(NodeId::new(12)));
        assert_eq!("12".parse::<NodeId>(), Ok(NodeId::new(12)));
        assert!("n:".parse::<NodeId>().is_err());
        assert_eq!(NodeId::new(3).to_string(), "n:3");
    }

    #[test]
    fn counter_never_hands_out_an_id_twice() {
        let mut counter = IdCounter::default();
        let a = counter.allocate(|_| false);
        let b = counter.allocate(|_| false);
        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(counter.peek(), 2);
    }

    #[test]
    fn counter_skips_occupied_ids_after_reseed() {
        let mut counter = IdCounter::starting_at(10);
        counter.reseed(2);
        let taken = [NodeId::new(2), NodeId::new(3)];
        let id = counter.allocate(|candidate| taken.contains(&candidate));
        assert_eq!(id, NodeId::new(4));
        assert_eq!(counter.peek(), 5);
    }
}
