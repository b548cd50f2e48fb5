//! Card instance identification.
//!
//! Every physical card copy in a match has a unique `InstanceId`. Two copies
//! of "Pikachu" share a `CardId` but never an `InstanceId`.
//!
//! ## ID Layout
//!
//! - `owner`: the side whose deck the copy was built into
//! - `serial`: position in the deck list as built (`0..deck_size`)
//!
//! ```
//! use rust_tcg::core::{InstanceId, Side};
//!
//! let first = InstanceId::new(Side::Player, 0);
//! let theirs = InstanceId::new(Side::Opponent, 0);
//!
//! assert_ne!(first, theirs);
//! assert_eq!(first.owner, Side::Player);
//! ```

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Unique identifier for one card copy in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId {
    /// Side that owns the copy.
    pub owner: Side,
    /// Serial within the owner's deck.
    pub serial: u16,
}

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(owner: Side, serial: u16) -> Self {
        Self { owner, serial }
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.owner, self.serial)
    }
}
