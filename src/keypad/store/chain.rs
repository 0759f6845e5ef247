use crate::keypad::config::KeypadConfig;
use crate::keypad::error::KeypadError;
use crate::keypad::instance::Keypad;
use crate::keypad::store::InstanceStore;
use crate::keypad::types::{ActiveLevel, KeypadId};

#[derive(Debug)]
struct Node<'a, P, K, H> {
    keypad: Keypad<'a, P, K, H>,
    /// Previously registered instance; `None` ends the chain.
    prev: Option<usize>,
}

/// Chain storage: a singly-linked chain threaded through a node pool.
///
/// `insert` links the new instance at the head, so insertion is O(1) once a
/// free node is found and iteration visits instances in reverse registration
/// order. `remove` walks the chain to splice out an arbitrary node; lookup is
/// a linear walk.
///
/// The pool size `N` is the only bound; the chain itself carries no capacity
/// notion beyond it.
#[derive(Debug)]
pub struct ChainStore<'a, P, K, H, const N: usize> {
    nodes: [Node<'a, P, K, H>; N],
    head: Option<usize>,
}

impl<'a, P, K, H, const N: usize> Default for ChainStore<'a, P, K, H, N> {
    fn default() -> Self {
        Self {
            nodes: core::array::from_fn(|_| Node {
                keypad: Keypad::vacant(),
                prev: None,
            }),
            head: None,
        }
    }
}

impl<'a, P: 'a, K: 'a, H, const N: usize> InstanceStore<'a, P, K, H>
    for ChainStore<'a, P, K, H, N>
{
    fn insert(
        &mut self,
        config: &'a KeypadConfig<'a, P, K>,
        handler: H,
        active_level: ActiveLevel,
    ) -> Result<KeypadId, KeypadError> {
        let index = self
            .nodes
            .iter()
            .position(|node| !node.keypad.is_configured())
            .ok_or(KeypadError::CapacityExhausted)?;
        self.nodes[index].keypad.bind(config, handler, active_level);
        self.nodes[index].prev = self.head;
        self.head = Some(index);
        Ok(KeypadId(index))
    }

    fn remove(&mut self, id: KeypadId) -> Result<(), KeypadError> {
        let index = id.0;
        if index >= N || !self.nodes[index].keypad.is_configured() {
            return Err(KeypadError::NotFound);
        }

        if self.head == Some(index) {
            self.head = self.nodes[index].prev;
        } else {
            // Walk to the node whose back-link points at the victim.
            let mut cursor = self.head;
            loop {
                let Some(current) = cursor else {
                    return Err(KeypadError::NotFound);
                };
                if self.nodes[current].prev == Some(index) {
                    self.nodes[current].prev = self.nodes[index].prev;
                    break;
                }
                cursor = self.nodes[current].prev;
            }
        }

        self.nodes[index].prev = None;
        self.nodes[index].keypad.clear();
        Ok(())
    }

    fn find(&self, config: &KeypadConfig<'a, P, K>) -> Option<KeypadId> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if let Some(bound) = node.keypad.config {
                if core::ptr::eq(bound, config) {
                    return Some(KeypadId(index));
                }
            }
            cursor = node.prev;
        }
        None
    }

    fn get(&self, id: KeypadId) -> Option<&Keypad<'a, P, K, H>> {
        self.nodes
            .get(id.0)
            .map(|node| &node.keypad)
            .filter(|keypad| keypad.is_configured())
    }

    fn get_mut(&mut self, id: KeypadId) -> Option<&mut Keypad<'a, P, K, H>> {
        self.nodes
            .get_mut(id.0)
            .map(|node| &mut node.keypad)
            .filter(|keypad| keypad.is_configured())
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(&mut Keypad<'a, P, K, H>)) {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = &mut self.nodes[index];
            cursor = node.prev;
            f(&mut node.keypad);
        }
    }

    fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            count += 1;
            cursor = self.nodes[index].prev;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static KEYMAP: [u8; 1] = [42];
    static COLUMNS: [u8; 1] = [0];
    static ROWS: [u8; 1] = [1];

    fn config() -> KeypadConfig<'static, u8, u8> {
        KeypadConfig::new(&KEYMAP, &COLUMNS, &ROWS).unwrap()
    }

    fn insert<'a, const N: usize>(
        store: &mut ChainStore<'a, u8, u8, u8, N>,
        config: &'a KeypadConfig<'a, u8, u8>,
        tag: u8,
    ) -> KeypadId {
        store.insert(config, tag, ActiveLevel::Low).unwrap()
    }

    fn visit_order<const N: usize>(store: &mut ChainStore<'_, u8, u8, u8, N>) -> [Option<u8>; 4] {
        let mut order = [None; 4];
        let mut next = 0;
        store.for_each_mut(|keypad| {
            order[next] = keypad.handler().copied();
            next += 1;
        });
        order
    }

    #[test]
    fn iteration_is_reverse_registration_order() {
        let a = config();
        let b = config();
        let c = config();
        let mut store: ChainStore<'_, u8, u8, u8, 4> = ChainStore::default();

        insert(&mut store, &a, 1);
        insert(&mut store, &b, 2);
        insert(&mut store, &c, 3);

        assert_eq!(visit_order(&mut store), [Some(3), Some(2), Some(1), None]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_splices_the_head() {
        let a = config();
        let b = config();
        let mut store: ChainStore<'_, u8, u8, u8, 4> = ChainStore::default();

        insert(&mut store, &a, 1);
        let id_b = insert(&mut store, &b, 2);

        store.remove(id_b).unwrap();
        assert_eq!(visit_order(&mut store), [Some(1), None, None, None]);
    }

    #[test]
    fn remove_splices_a_middle_node() {
        let a = config();
        let b = config();
        let c = config();
        let mut store: ChainStore<'_, u8, u8, u8, 4> = ChainStore::default();

        insert(&mut store, &a, 1);
        let id_b = insert(&mut store, &b, 2);
        insert(&mut store, &c, 3);

        store.remove(id_b).unwrap();
        assert_eq!(visit_order(&mut store), [Some(3), Some(1), None, None]);
    }

    #[test]
    fn remove_splices_the_tail() {
        let a = config();
        let b = config();
        let mut store: ChainStore<'_, u8, u8, u8, 4> = ChainStore::default();

        let id_a = insert(&mut store, &a, 1);
        insert(&mut store, &b, 2);

        store.remove(id_a).unwrap();
        assert_eq!(visit_order(&mut store), [Some(2), None, None, None]);
    }

    #[test]
    fn remove_is_idempotent() {
        let a = config();
        let mut store: ChainStore<'_, u8, u8, u8, 2> = ChainStore::default();

        let id = insert(&mut store, &a, 1);
        store.remove(id).unwrap();
        assert_eq!(store.remove(id).unwrap_err(), KeypadError::NotFound);
        assert_eq!(
            store.remove(KeypadId(99)).unwrap_err(),
            KeypadError::NotFound
        );
    }

    #[test]
    fn freed_node_is_relinked_on_reuse() {
        let a = config();
        let b = config();
        let c = config();
        let mut store: ChainStore<'_, u8, u8, u8, 2> = ChainStore::default();

        let id_a = insert(&mut store, &a, 1);
        insert(&mut store, &b, 2);

        assert_eq!(
            store.insert(&c, 3, ActiveLevel::Low).unwrap_err(),
            KeypadError::CapacityExhausted
        );

        store.remove(id_a).unwrap();
        let id_c = store.insert(&c, 3, ActiveLevel::Low).unwrap();
        assert_eq!(id_c, id_a);
        assert_eq!(visit_order(&mut store), [Some(3), Some(2), None, None]);
        assert_eq!(store.find(&c), Some(id_c));
    }

    #[test]
    fn find_walks_the_chain() {
        let a = config();
        let b = config();
        let missing = config();
        let mut store: ChainStore<'_, u8, u8, u8, 4> = ChainStore::default();

        let id_a = insert(&mut store, &a, 1);
        let id_b = insert(&mut store, &b, 2);

        assert_eq!(store.find(&a), Some(id_a));
        assert_eq!(store.find(&b), Some(id_b));
        assert_eq!(store.find(&missing), None);
    }
}
