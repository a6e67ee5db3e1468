//! Fixed-capacity slot pools
//!
//! Each entity kind lives in a contiguous arena of slots. Allocation is a
//! linear scan for the first free slot; a full pool drops the request.
//! Slot indices are only stable while the entity in them is alive.

/// An entity that can occupy a pool slot
pub trait Slot: Clone + Default {
    /// Whether the slot currently holds a live entity
    fn is_active(&self) -> bool;
    /// Free the slot
    fn deactivate(&mut self);
}

/// Fixed-capacity storage that never grows
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Create a pool of `capacity` free slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first free slot, or `None` if the pool is full
    pub fn allocate(&self) -> Option<usize> {
        self.allocate_from(0)
    }

    /// Index of the first free slot scanning circularly from `start`
    pub fn allocate_from(&self, start: usize) -> Option<usize> {
        let cap = self.slots.len();
        if cap == 0 {
            return None;
        }
        (0..cap)
            .map(|i| (start + i) % cap)
            .find(|&i| !self.slots[i].is_active())
    }

    /// Place an entity into the first free slot
    pub fn spawn(&mut self, entity: T) -> Option<usize> {
        let index = self.allocate()?;
        self.slots[index] = entity;
        Some(index)
    }

    /// Place an entity into a specific slot (caller found it free)
    pub fn insert_at(&mut self, index: usize, entity: T) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = entity;
        }
    }

    pub fn deactivate(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.deactivate();
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).filter(|s| s.is_active())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).filter(|s| s.is_active())
    }

    /// Visit live entities in slot order
    pub fn for_each_active(&self, mut f: impl FnMut(usize, &T)) {
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.is_active() {
                f(i, slot);
            }
        }
    }

    /// Visit live entities mutably in slot order
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(usize, &mut T)) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_active() {
                f(i, slot);
            }
        }
    }

    /// Live entities with their slot index, in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_active())
    }
}
