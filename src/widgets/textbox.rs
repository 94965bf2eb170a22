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

const DEFAULT_BOX_WIDTH: Real = 240.0;

impl<R: Renderer> Context<R> {
    /// Single-line text box editing `buffer` in place. A press inside takes
    /// the keyboard focus, a press outside drops it. While focused, the
    /// backspace edge pops one character from the end and the enter edge
    /// submits and drops focus. `width` of zero selects the default box
    /// width; `capacity` is the host's declared buffer limit and must be
    /// non-zero.
    pub fn textbox(&mut self, buffer: &mut String, capacity: usize, width: Real) -> UiResult<ResourceState> {
        if capacity == 0 {
            return Err(Error::NullArgument("textbox capacity"));
        }
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidValue("textbox width"));
        }

        let id = self.next_id();
        let text_height = self.text_height("A");
        let box_width = if width > 0.0 { width } else { DEFAULT_BOX_WIDTH };
        let h = text_height + 8.0;
        let padding = 6.0;

        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, box_width, h);

        let state = self.update_text_control(id, rect);
        let color = self.control_color(state);
        self.draw_rect(rect, color);

        // Content and caret show the buffer as it stood before this
        // frame's key edges are applied.
        self.draw_text(buffer, vec2f(pos.x + padding, pos.y + 4.0));
        if state.focused {
            let caret_x = pos.x + padding + self.text_width(buffer);
            self.draw_text("|", vec2f(caret_x, pos.y + 2.0));
        }

        let mut res = ResourceState::NONE;
        if state.focused {
            if self.input.key_backspace && buffer.pop().is_some() {
                res |= ResourceState::CHANGE;
            }
            if self.input.key_enter {
                self.keyboard_focus_id = None;
                res |= ResourceState::SUBMIT;
            }
        }

        self.advance(h);
        if self.keyboard_focus_id == Some(id) {
            res |= ResourceState::ACTIVE;
        }
        Ok(res)
    }
}
