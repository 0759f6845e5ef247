//! Instance storage behind the registry.
//!
//! Two strategies implement one trait, chosen at build time through the
//! registry's store type parameter: a fixed slot array ([`SlotStore`]) and a
//! linked node chain ([`ChainStore`]). The scan engine and registry are
//! written once against [`InstanceStore`].

mod chain;
mod slots;

pub use chain::ChainStore;
pub use slots::SlotStore;

use crate::keypad::config::KeypadConfig;
use crate::keypad::error::KeypadError;
use crate::keypad::instance::Keypad;
use crate::keypad::types::{ActiveLevel, KeypadId};

/// Tracks the set of live keypad instances.
///
/// A configuration identifies at most one live instance at a time; identity is
/// reference identity, and the registry enforces uniqueness before inserting.
pub trait InstanceStore<'a, P: 'a, K: 'a, H> {
    /// Places a new live instance, returning its handle.
    ///
    /// # Errors
    /// [`KeypadError::CapacityExhausted`] if no free slot or node is left.
    fn insert(
        &mut self,
        config: &'a KeypadConfig<'a, P, K>,
        handler: H,
        active_level: ActiveLevel,
    ) -> Result<KeypadId, KeypadError>;

    /// Detaches an instance and clears it in place.
    ///
    /// # Errors
    /// [`KeypadError::NotFound`] if the id does not name a live instance;
    /// storage is unchanged in that case, so removal is idempotent.
    fn remove(&mut self, id: KeypadId) -> Result<(), KeypadError>;

    /// Looks up the live instance bound to a configuration, by reference
    /// identity.
    fn find(&self, config: &KeypadConfig<'a, P, K>) -> Option<KeypadId>;

    fn get(&self, id: KeypadId) -> Option<&Keypad<'a, P, K, H>>;

    fn get_mut(&mut self, id: KeypadId) -> Option<&mut Keypad<'a, P, K, H>>;

    /// Visits every live instance.
    fn for_each_mut(&mut self, f: impl FnMut(&mut Keypad<'a, P, K, H>));

    /// Number of live instances.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
