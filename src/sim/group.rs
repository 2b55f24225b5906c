//! Entity registry groups
//!
//! Rocks, missiles and explosions each live in their own `SpriteGroup`: an
//! unordered, id-keyed arena. Collision passes remove members mid-pass, so
//! mutating iteration always walks an id snapshot taken at pass start, and
//! removing an id that is already gone is a no-op rather than a fault.

use crate::sim::sprite::Sprite;

/// An unordered collection of sprites with exclusive ownership
#[derive(Debug, Default)]
pub struct SpriteGroup {
    entries: Vec<Sprite>,
    next_id: u32,
}

impl SpriteGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sprite, assigning it a fresh identity. Returns the id.
    pub fn insert(&mut self, mut sprite: Sprite) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        sprite.id = id;
        self.entries.push(sprite);
        id
    }

    /// Remove by id. `None` when the id is absent (already removed).
    pub fn remove(&mut self, id: u32) -> Option<Sprite> {
        let index = self.entries.iter().position(|s| s.id == id)?;
        Some(self.entries.swap_remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&Sprite> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Stable membership snapshot for passes that remove mid-iteration
    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|s| s.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advance every member one tick; members signalling expiry are swept in
    /// the same pass.
    pub fn update_all(&mut self, field_width: f32, field_height: f32) {
        self.entries
            .retain_mut(|sprite| !sprite.update(field_width, field_height));
    }
}
