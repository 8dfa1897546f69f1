//! Fixed-capacity slot pool.
//!
//! A vacant slot is an inactive entity; an occupied slot is active. Slots are
//! scanned in ascending index order everywhere, so allocation and iteration
//! are deterministic.

/// `N` slots of `T`, allocated first-fit by ascending index.
#[derive(Clone, Debug)]
pub struct SlotPool<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> Default for SlotPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> SlotPool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Place `item` in the lowest free slot and return its index.
    ///
    /// Returns `None` when every slot is occupied; the pool is left untouched
    /// and `item` is dropped.
    pub fn try_allocate(&mut self, item: T) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(item);
        Some(index)
    }

    /// Release a slot. Idempotent; out-of-range indices are ignored.
    pub fn deactivate(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.active_count() == N
    }

    /// Indices of active slots in ascending order. Restartable: each call
    /// starts a fresh pass.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(index, _)| index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|item| (index, item)))
    }

    /// Visit every active slot in ascending order; slots for which `keep`
    /// returns `false` are released once their visit has finished.
    ///
    /// Returns the number of released slots.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(usize, &mut T) -> bool,
    {
        let mut released = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let release = match slot.as_mut() {
                Some(item) => !keep(index, item),
                None => false,
            };
            if release {
                *slot = None;
                released += 1;
            }
        }
        released
    }
}
