use std::ops::{Index, IndexMut};

/// An element of a [Pool]. Inactive slots are free for reuse.
pub trait PoolSlot: Copy + Default {
    fn is_active(&self) -> bool;
}

/// A fixed array of slots. New items go into the first inactive slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pool<T, const N: usize> {
    slots: [T; N],
}

impl<T: PoolSlot, const N: usize> Pool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [T::default(); N],
        }
    }

    pub fn clear(&mut self) {
        self.slots = [T::default(); N];
    }

    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|x| !x.is_active())
    }

    /// Puts `item` into the first free slot. Returns `None`
    /// and drops the item when the pool is full.
    pub fn insert(&mut self, item: T) -> Option<usize> {
        let idx = self.free_slot()?;
        self.slots[idx] = item;

        Some(idx)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|x| x.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|x| x.is_active())
    }
}

impl<T: PoolSlot, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for Pool<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Pool<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Slot(Option<u32>);

    impl PoolSlot for Slot {
        fn is_active(&self) -> bool {
            self.0.is_some()
        }
    }

    #[test]
    fn test_insert_first_free() {
        let mut pool = Pool::<Slot, 3>::new();

        assert_eq!(pool.insert(Slot(Some(1))), Some(0));
        assert_eq!(pool.insert(Slot(Some(2))), Some(1));
        pool[0] = Slot(None);
        assert_eq!(pool.insert(Slot(Some(3))), Some(0));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_full_pool_drops() {
        let mut pool = Pool::<Slot, 2>::new();
        pool.insert(Slot(Some(1)));
        pool.insert(Slot(Some(2)));

        assert_eq!(pool.insert(Slot(Some(3))), None);
        assert_eq!(
            pool.iter_active().map(|x| x.0).collect::<Vec<_>>(),
            [Some(1), Some(2)]
        );

        pool.clear();
        assert_eq!(pool.active_count(), 0);
    }
}
