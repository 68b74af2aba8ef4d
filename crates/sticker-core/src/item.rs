use glam::Vec2;
use rand::Rng;

use crate::color::StrokeColor;
use crate::constants::ITEM_SIZE;

pub type ItemId = u64;

/// One user-created sticker: a masked, colored square living on the board.
#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    /// Opaque encoded-image handle (the frontend stores a data URL here and
    /// uses it as a CSS mask).
    pub mask_url: String,
    pub color: StrokeColor,
    /// Top-left corner, CSS px in viewport space.
    pub pos: Vec2,
    pub dragging: bool,
    pub active_effect: Option<&'static str>,
}

impl Item {
    pub fn set_effect(&mut self, name: &'static str) {
        self.active_effect = Some(name);
    }

    /// Idempotent: clearing an effect that is not present is a no-op.
    pub fn clear_effect(&mut self) {
        self.active_effect = None;
    }
}

/// Append-only collection of all stickers created this session.
#[derive(Default)]
pub struct Board {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sticker at a random position that keeps the whole
    /// `ITEM_SIZE` footprint inside `container`. Always succeeds; the span
    /// collapses to zero when the container is smaller than an item.
    pub fn spawn(
        &mut self,
        container: Vec2,
        mask_url: String,
        color: StrokeColor,
        rng: &mut impl Rng,
    ) -> ItemId {
        let span = (container - Vec2::splat(ITEM_SIZE)).max(Vec2::ZERO);
        let pos = Vec2::new(sample_span(span.x, rng), sample_span(span.y, rng));
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("[board] spawn item {id} at {pos:?}");
        self.items.push(Item {
            id,
            mask_url,
            color,
            pos,
            dragging: false,
            active_effect: None,
        });
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|it| it.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Half-open placement sample: `[0, span)`, pinned to 0 when the span has
/// collapsed.
#[inline]
fn sample_span(span: f32, rng: &mut impl Rng) -> f32 {
    if span > 0.0 {
        rng.gen_range(0.0..span)
    } else {
        0.0
    }
}
