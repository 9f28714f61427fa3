//! Slot arena backing the render tree.
//!
//! Every render object lives in a [`RenderArena`] slot and is addressed by a
//! [`RenderId`]. Relationships between objects are stored as ids, so the tree
//! needs no reference counting and no raw back-pointers.
//!
//! Freed slots go on a free list and are reused. Each reuse bumps the slot's
//! generation, so an id held across a `detach` stops resolving instead of
//! silently aliasing the new occupant.

use serde::Serialize;

/// A generational index into a [`RenderArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RenderId {
    index: u32,
    generation: u32,
}

impl RenderId {
    /// Slot position inside the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// How many times the slot had been reused when this id was handed out.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Arena allocator scoped to one render tree.
#[derive(Debug)]
pub struct RenderArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> Default for RenderArena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }
}

impl<T> RenderArena<T> {
    /// An empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, reusing a free slot when one exists.
    ///
    /// # Panics
    ///
    /// Panics if the arena would exceed `u32::MAX` slots.
    pub fn alloc(&mut self, value: T) -> RenderId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.value = Some(value);
            return RenderId {
                index,
                generation: slot.generation,
            };
        }

        let Ok(index) = u32::try_from(self.slots.len()) else {
            panic!("render arena exhausted");
        };
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        RenderId {
            index,
            generation: 0,
        }
    }

    /// Resolve `id`, or `None` if it was freed (or never came from here).
    #[must_use]
    pub fn get(&self, id: RenderId) -> Option<&T> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Mutable form of [`RenderArena::get`].
    pub fn get_mut(&mut self, id: RenderId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Whether `id` still resolves.
    #[must_use]
    pub fn contains(&self, id: RenderId) -> bool {
        self.get(id).is_some()
    }

    /// Release the slot behind `id` and hand back its value.
    ///
    /// Returns `None` for stale ids, so freeing twice is harmless.
    pub fn free(&mut self, id: RenderId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        let value = slot.value.take()?;
        self.free.push(id.index);
        self.live -= 1;
        Some(value)
    }

    /// Number of live values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Whether no values are live.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of released slots waiting for reuse.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Ids of every live value, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = RenderId> + '_ {
        self.slots.iter().zip(0_u32..).filter_map(|(slot, index)| {
            slot.value.as_ref().map(|_| RenderId {
                index,
                generation: slot.generation,
            })
        })
    }
}
