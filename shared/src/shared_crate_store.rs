use serde::{Serialize, Deserialize};

use crate::reel::ReelItem;

/// A purchasable crate as listed by the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CrateInfo {
    pub guid: String,
    pub name: String,
    pub price: String,
    pub item_count: usize,
}

/// Phases of one crate-opening flow. The reel starts spinning as soon
/// as the player clicks, before the reward is known; the opening only
/// commits to a landing once the reward arrives.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OpeningPhase {
    Idle,
    Spinning,
    Stopping,
}

/// Tracks one crate-opening from click to revealed reward.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrateOpening {
    pub phase: OpeningPhase,
    pub pending_reward: Option<ReelItem>,
    pub last_reward: Option<ReelItem>,
}

impl CrateOpening {
    pub fn new() -> Self {
        Self {
            phase: OpeningPhase::Idle,
            pending_reward: None,
            last_reward: None,
        }
    }

    /// Returns false if an opening is already in flight.
    pub fn start(&mut self) -> bool {
        if self.phase != OpeningPhase::Idle {
            return false;
        }
        self.phase = OpeningPhase::Spinning;
        self.pending_reward = None;
        self.last_reward = None;
        true
    }

    /// Records the reward chosen by the server and moves into the
    /// stopping phase. Ignored unless currently spinning.
    pub fn deliver_reward(&mut self, reward: ReelItem) -> bool {
        if self.phase != OpeningPhase::Spinning {
            return false;
        }
        self.pending_reward = Some(reward);
        self.phase = OpeningPhase::Stopping;
        true
    }

    /// Called once the reel has landed on the reward.
    pub fn complete(&mut self) {
        self.last_reward = self.pending_reward.take();
        self.phase = OpeningPhase::Idle;
    }

    /// Abandon the opening, e.g. when the view unmounts mid-spin.
    pub fn reset(&mut self) {
        self.phase = OpeningPhase::Idle;
        self.pending_reward = None;
    }
}

impl Default for CrateOpening {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a server-chosen reward only when its id matches one of the
/// displayed items. The reel cannot land on an item it is not showing,
/// so a mismatched reward is treated like a missing one.
pub fn resolve_reward(items: &[ReelItem], reward: Option<ReelItem>) -> Option<ReelItem> {
    reward.filter(|r| items.iter().any(|item| item.id == r.id))
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OwnedCratesResponse {
    pub crates: Vec<CrateInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrateContentResponse {
    pub crate_guid: String,
    pub items: Vec<ReelItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenCrateRequest {
    pub crate_guid: String,
    pub timestamp: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenCrateResponse {
    pub success: bool,
    pub reward: Option<ReelItem>,
    pub new_balance: Option<i32>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward() -> ReelItem {
        ReelItem {
            id: "x20_alpha_cursed".to_string(),
            label: "Cursed".to_string(),
            rarity: 2,
            item_type: "Assault Rifle".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_opening_happy_path() {
        let mut opening = CrateOpening::new();
        assert!(opening.start());
        assert_eq!(opening.phase, OpeningPhase::Spinning);
        assert!(opening.deliver_reward(reward()));
        assert_eq!(opening.phase, OpeningPhase::Stopping);
        opening.complete();
        assert_eq!(opening.phase, OpeningPhase::Idle);
        assert_eq!(opening.last_reward.unwrap().id, "x20_alpha_cursed");
        assert!(opening.pending_reward.is_none());
    }

    #[test]
    fn test_opening_start_guard() {
        let mut opening = CrateOpening::new();
        assert!(opening.start());
        assert!(!opening.start());
        opening.deliver_reward(reward());
        assert!(!opening.start());
    }

    #[test]
    fn test_reward_ignored_unless_spinning() {
        let mut opening = CrateOpening::new();
        assert!(!opening.deliver_reward(reward()));
        assert_eq!(opening.phase, OpeningPhase::Idle);
    }

    #[test]
    fn test_resolve_reward_accepts_known_id() {
        let items = vec![reward()];
        let resolved = resolve_reward(&items, Some(reward()));
        assert_eq!(resolved.unwrap().id, "x20_alpha_cursed");
    }

    #[test]
    fn test_resolve_reward_drops_unknown_id() {
        let items = vec![reward()];
        let stranger = ReelItem {
            id: "not_in_this_crate".to_string(),
            ..reward()
        };
        assert!(resolve_reward(&items, Some(stranger)).is_none());
        assert!(resolve_reward(&items, None).is_none());
    }

    #[test]
    fn test_reset_discards_pending_reward() {
        let mut opening = CrateOpening::new();
        opening.start();
        opening.deliver_reward(reward());
        opening.reset();
        assert_eq!(opening.phase, OpeningPhase::Idle);
        assert!(opening.pending_reward.is_none());
        assert!(opening.last_reward.is_none());
    }
}
