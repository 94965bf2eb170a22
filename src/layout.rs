//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::*;

pub(crate) const DEFAULT_SPACING: Real = 8.0;

// Cursor and offset snapshot; spacing is deliberately not part of it.
#[derive(Debug, Default, Clone, Copy)]
struct SavedLayout {
    cursor: Vec2f,
    offset: Vec2f,
}

/// Single-column flow cursor with the active window offset and one save slot.
///
/// Widgets place themselves at `cursor`, then advance it down by their own
/// height plus `spacing.y` and pull `cursor.x` back to the left margin.
/// `offset` shifts every draw and every layout-relative hit test while a
/// window region is open. The save slot holds exactly one outer layout, so
/// window regions do not nest.
#[derive(Debug, Clone)]
pub(crate) struct LayoutCursor {
    pub cursor: Vec2f,
    pub spacing: Vec2f,
    pub offset: Vec2f,
    saved: SavedLayout,
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self {
            cursor: Vec2f::default(),
            spacing: vec2f(DEFAULT_SPACING, DEFAULT_SPACING),
            offset: Vec2f::default(),
            saved: SavedLayout::default(),
        }
    }
}

impl LayoutCursor {
    /// Moves the cursor to a new origin at frame start.
    pub fn reset(&mut self, origin: Vec2f) { self.cursor = origin; }

    /// Advances past a widget of the given height.
    pub fn advance(&mut self, height: Real) {
        self.cursor.y += height + self.spacing.y;
        self.cursor.x = self.spacing.x;
    }

    /// Saves the current cursor and offset into the single slot.
    pub fn save(&mut self) {
        self.saved = SavedLayout { cursor: self.cursor, offset: self.offset };
    }

    /// Restores the cursor and offset saved by the matching `save`.
    pub fn restore(&mut self) {
        self.cursor = self.saved.cursor;
        self.offset = self.saved.offset;
    }

    /// Re-bases the flow into a region: new offset, cursor at the region origin.
    pub fn rebase(&mut self, offset: Vec2f) {
        self.offset = offset;
        self.cursor = Vec2f::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_down_and_back_to_margin() {
        let mut layout = LayoutCursor::default();
        layout.reset(vec2f(40.0, 10.0));
        layout.advance(24.0);
        assert_eq!((layout.cursor.x, layout.cursor.y), (8.0, 42.0));
    }

    #[test]
    fn save_restore_round_trip() {
        let mut layout = LayoutCursor::default();
        layout.reset(vec2f(5.0, 6.0));
        layout.save();
        layout.rebase(vec2f(100.0, 50.0));
        assert_eq!((layout.cursor.x, layout.cursor.y), (0.0, 0.0));
        assert_eq!((layout.offset.x, layout.offset.y), (100.0, 50.0));

        layout.restore();
        assert_eq!((layout.cursor.x, layout.cursor.y), (5.0, 6.0));
        assert_eq!((layout.offset.x, layout.offset.y), (0.0, 0.0));
    }
}
