use glam::Vec2;

use crate::item::{Board, ItemId};

/// Transient state of one grab: which sticker, and where inside it the
/// pointer landed.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    pub item: ItemId,
    /// Pointer position minus the item's top-left corner at grab time.
    pub offset: Vec2,
}

/// Idle/Dragging state machine. Holding the session in an `Option` makes
/// "at most one sticker is being dragged" true by construction.
#[derive(Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.session.map(|s| s.item)
    }

    /// Start a session on `id`. Ignored (returns false) while another
    /// session is active or when the id is stale.
    pub fn begin(&mut self, board: &mut Board, id: ItemId, pointer: Vec2) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(item) = board.get_mut(id) else {
            return false;
        };
        item.dragging = true;
        self.session = Some(DragSession {
            item: id,
            offset: pointer - item.pos,
        });
        true
    }

    /// Move the held sticker to `pointer - offset`, clamped so it stays on
    /// screen. `viewport` is the live window size and `item_size` the live
    /// rendered size. Returns the new position, or `None` while idle.
    pub fn update(
        &mut self,
        board: &mut Board,
        pointer: Vec2,
        viewport: Vec2,
        item_size: f32,
    ) -> Option<Vec2> {
        let session = self.session?;
        let item = board.get_mut(session.item)?;
        let pos = clamp_to_viewport(pointer - session.offset, viewport, item_size);
        item.pos = pos;
        Some(pos)
    }

    /// End the session, clearing the dragging flag. Returns the released
    /// item so the caller can apply exactly one effect to it. `None` while
    /// idle (a release with nothing held does nothing).
    pub fn end(&mut self, board: &mut Board) -> Option<ItemId> {
        let session = self.session.take()?;
        if let Some(item) = board.get_mut(session.item) {
            item.dragging = false;
        }
        Some(session.item)
    }
}

/// Clamp a top-left position so an `item_size` square stays inside
/// `viewport`. The lower bound wins when the viewport is smaller than the
/// item.
#[inline]
pub fn clamp_to_viewport(pos: Vec2, viewport: Vec2, item_size: f32) -> Vec2 {
    let max = (viewport - Vec2::splat(item_size)).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}
