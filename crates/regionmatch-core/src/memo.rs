// crates/regionmatch-core/src/memo.rs
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A single-slot memoized derived value.
///
/// The key is the snapshot of every input the computation reads. A read with
/// the same key returns the cached value; a different key recomputes and
/// replaces it. Values are shared through `Rc` so readers never hold a borrow
/// of the slot.
pub struct Memo<K, V> {
    slot: RefCell<Option<(K, Rc<V>)>>,
    computations: Cell<u64>,
}

impl<K: PartialEq + fmt::Debug, V> Memo<K, V> {
    pub fn new() -> Self {
        Memo {
            slot: RefCell::new(None),
            computations: Cell::new(0),
        }
    }

    /// Returns the value for `key`, computing it only if the cached key differs.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> Rc<V> {
        if let Some((cached, value)) = &*self.slot.borrow() {
            if *cached == key {
                tracing::trace!(?key, "memo hit");
                return Rc::clone(value);
            }
        }

        tracing::debug!(?key, "recomputing");
        let value = Rc::new(compute(&key));
        self.computations.set(self.computations.get() + 1);
        *self.slot.borrow_mut() = Some((key, Rc::clone(&value)));
        value
    }

    /// How many times a value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }
}

impl<K: PartialEq + fmt::Debug, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("key", &self.slot.borrow().as_ref().map(|(k, _)| k))
            .field("computations", &self.computations.get())
            .finish()
    }
}
