use crate::keypad::config::KeypadConfig;
use crate::keypad::error::KeypadError;
use crate::keypad::instance::Keypad;
use crate::keypad::store::InstanceStore;
use crate::keypad::types::{ActiveLevel, KeypadId};

/// Fixed-capacity storage: `N` pre-allocated slots.
///
/// `insert` takes the first vacant slot, `remove` clears a slot in place, and
/// iteration visits slots in array order, skipping vacant ones. Lookup is a
/// linear scan over all `N` slots.
#[derive(Debug)]
pub struct SlotStore<'a, P, K, H, const N: usize> {
    slots: [Keypad<'a, P, K, H>; N],
}

impl<'a, P, K, H, const N: usize> Default for SlotStore<'a, P, K, H, N> {
    fn default() -> Self {
        Self {
            slots: core::array::from_fn(|_| Keypad::vacant()),
        }
    }
}

impl<'a, P: 'a, K: 'a, H, const N: usize> InstanceStore<'a, P, K, H>
    for SlotStore<'a, P, K, H, N>
{
    fn insert(
        &mut self,
        config: &'a KeypadConfig<'a, P, K>,
        handler: H,
        active_level: ActiveLevel,
    ) -> Result<KeypadId, KeypadError> {
        let index = self
            .slots
            .iter()
            .position(|keypad| !keypad.is_configured())
            .ok_or(KeypadError::CapacityExhausted)?;
        self.slots[index].bind(config, handler, active_level);
        Ok(KeypadId(index))
    }

    fn remove(&mut self, id: KeypadId) -> Result<(), KeypadError> {
        match self.slots.get_mut(id.0) {
            Some(keypad) if keypad.is_configured() => {
                keypad.clear();
                Ok(())
            }
            _ => Err(KeypadError::NotFound),
        }
    }

    fn find(&self, config: &KeypadConfig<'a, P, K>) -> Option<KeypadId> {
        self.slots
            .iter()
            .position(|keypad| match keypad.config {
                Some(bound) => core::ptr::eq(bound, config),
                None => false,
            })
            .map(KeypadId)
    }

    fn get(&self, id: KeypadId) -> Option<&Keypad<'a, P, K, H>> {
        self.slots.get(id.0).filter(|keypad| keypad.is_configured())
    }

    fn get_mut(&mut self, id: KeypadId) -> Option<&mut Keypad<'a, P, K, H>> {
        self.slots
            .get_mut(id.0)
            .filter(|keypad| keypad.is_configured())
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(&mut Keypad<'a, P, K, H>)) {
        for keypad in self.slots.iter_mut() {
            if keypad.is_configured() {
                f(keypad);
            }
        }
    }

    fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|keypad| keypad.is_configured())
            .count()
    }
}
