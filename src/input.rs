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

/// Per-frame input snapshot fed by the host.
///
/// `mouse_down` is level state. The pressed/released and key flags are
/// edges: latched by the corresponding feed call, observed by the widgets
/// of the current frame, and cleared exactly once by [`Input::epilogue`]
/// at the frame boundary.
#[derive(Debug, Default, Clone)]
pub struct Input {
    /// Current pointer position in screen pixels.
    pub mouse_pos: Vec2i,
    /// Pointer button is currently held.
    pub mouse_down: bool,
    /// Pointer button went down since the last frame end.
    pub mouse_pressed: bool,
    /// Pointer button went up since the last frame end.
    pub mouse_released: bool,
    /// Backspace was typed since the last frame end.
    pub key_backspace: bool,
    /// Enter was typed since the last frame end.
    pub key_enter: bool,
}

impl Input {
    /// Creates an idle snapshot.
    pub fn new() -> Self { Self::default() }

    /// Feeds a pointer motion event.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Feeds a pointer press at the given position.
    pub fn mousedown(&mut self, x: i32, y: i32) {
        self.mouse_pos = vec2(x, y);
        self.mouse_down = true;
        self.mouse_pressed = true;
    }

    /// Feeds a pointer release at the given position.
    pub fn mouseup(&mut self, x: i32, y: i32) {
        self.mouse_pos = vec2(x, y);
        self.mouse_down = false;
        self.mouse_released = true;
    }

    /// Overwrites the press edge from a positionless button report, for
    /// hosts that deliver buttons and motion separately. Leaves the held
    /// level and the pointer position untouched.
    pub fn mousebutton(&mut self, pressed: bool) { self.mouse_pressed = pressed; }

    /// Latches the backspace edge for the current frame.
    pub fn backspace(&mut self) { self.key_backspace = true; }

    /// Latches the enter edge for the current frame.
    pub fn enter(&mut self) { self.key_enter = true; }

    /// Clears the edge flags at the frame boundary; level state persists.
    pub fn epilogue(&mut self) {
        self.mouse_pressed = false;
        self.mouse_released = false;
        self.key_backspace = false;
        self.key_enter = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_clear_at_epilogue_but_level_persists() {
        let mut input = Input::new();
        input.mousedown(10, 20);
        input.backspace();
        input.enter();
        assert!(input.mouse_pressed && input.mouse_down);
        assert!(input.key_backspace && input.key_enter);

        input.epilogue();
        assert!(!input.mouse_pressed && !input.mouse_released);
        assert!(!input.key_backspace && !input.key_enter);
        assert!(input.mouse_down);
        assert_eq!((input.mouse_pos.x, input.mouse_pos.y), (10, 20));
    }

    #[test]
    fn button_feed_sets_only_the_press_edge() {
        let mut input = Input::new();
        input.mousemove(7, 9);
        input.mousebutton(true);
        assert!(input.mouse_pressed);
        assert!(!input.mouse_down && !input.mouse_released);
        assert_eq!((input.mouse_pos.x, input.mouse_pos.y), (7, 9));

        input.mousebutton(false);
        assert!(!input.mouse_pressed);
    }
}
