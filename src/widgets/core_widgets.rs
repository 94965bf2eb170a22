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

impl<R: Renderer> Context<R> {
    /// Push button sized from its label. Returns SUBMIT when a press that
    /// started on the button is released on it.
    pub fn button(&mut self, label: &str) -> UiResult<ResourceState> {
        let id = self.next_id();
        let text_width = self.text_width(label);
        let text_height = self.text_height(label);
        let padding = 10.0;

        let w = text_width + padding * 2.0;
        let h = text_height + 8.0;
        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, w, h);

        let state = self.update_control(id, rect);
        let color = self.control_color(state);
        self.draw_rect(rect, color);
        self.draw_text(label, vec2f(pos.x + padding, pos.y + 4.0));

        self.advance(h);
        if state.activated { Ok(ResourceState::SUBMIT) } else { Ok(ResourceState::NONE) }
    }

    /// Checkbox bound to `value`; the label is part of the hit area.
    /// Returns CHANGE when a qualifying release toggles the value.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> UiResult<ResourceState> {
        let id = self.next_id();
        let box_size = 18.0;
        let gap = 6.0;
        let text_width = self.text_width(label);
        let text_height = self.text_height(label);

        let total_width = box_size + gap + text_width;
        let h = box_size.max(text_height);
        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, total_width, h);

        let state = self.update_control(id, rect);
        let color = self.control_color(state);
        self.draw_rect(rectf(pos.x, pos.y, box_size, box_size), color);
        if *value {
            self.draw_text("X", vec2f(pos.x + 4.0, pos.y + 1.0));
        }
        self.draw_text(label, vec2f(pos.x + box_size + gap, pos.y + 1.0));

        self.advance(h);
        if state.activated {
            *value = !*value;
            Ok(ResourceState::CHANGE)
        } else {
            Ok(ResourceState::NONE)
        }
    }
}
