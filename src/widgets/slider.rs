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

const DEFAULT_TRACK_WIDTH: Real = 160.0;
const TRACK_HEIGHT: Real = 12.0;
const KNOB_WIDTH: Real = 10.0;

impl<R: Renderer> Context<R> {
    /// Horizontal slider binding `value` into `[min, max]`. The label sits
    /// left of the track and the formatted value right of it; dragging the
    /// track recomputes the value from the pointer fraction every frame.
    /// `width` of zero selects the default track width.
    pub fn slider(
        &mut self,
        label: &str,
        value: &mut Real,
        min: Real,
        max: Real,
        width: Real,
    ) -> UiResult<ResourceState> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::InvalidValue("slider range"));
        }
        if !value.is_finite() {
            return Err(Error::InvalidValue("slider value"));
        }
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidValue("slider width"));
        }

        let id = self.next_id();
        let label_width = self.text_width(label);
        let text_height = self.text_height(label);
        let track_width = if width > 0.0 { width } else { DEFAULT_TRACK_WIDTH };
        let gap = 12.0;

        let pos = self.layout.cursor;
        let track_x = pos.x + label_width + gap;
        let h = text_height + 8.0;

        let before = *value;
        *value = value.clamp(min, max);

        let state = self.update_control(id, rectf(track_x, pos.y, track_width, TRACK_HEIGHT));
        let color = self.control_color(state);

        self.draw_text(label, vec2f(pos.x, pos.y));
        self.draw_rect(rectf(track_x, pos.y + 2.0, track_width, TRACK_HEIGHT), color);

        // The knob is placed from the value as it stood before this frame's
        // drag; the value text below shows the updated one.
        let travel = track_width - KNOB_WIDTH;
        let t = ((*value - min) / (max - min)).clamp(0.0, 1.0);
        let knob_x = track_x + t * travel.max(0.0);

        // A track no wider than the knob has no travel; the drag has
        // nothing to recompute from and must not divide by it.
        if state.held && travel > 0.0 {
            let local_x = self.input.mouse_pos.x as Real - (track_x + self.layout.offset.x);
            let nt = (local_x / travel).clamp(0.0, 1.0);
            *value = min + nt * (max - min);
        }

        let knob_color = self.style.colors[ControlColor::BoxActive as usize];
        self.draw_rect(rectf(knob_x, pos.y, KNOB_WIDTH, TRACK_HEIGHT + 4.0), knob_color);
        self.draw_text(&format!("{:.2}", *value), vec2f(track_x + track_width + 8.0, pos.y));

        self.advance(h);

        let mut res = ResourceState::NONE;
        if state.held {
            res |= ResourceState::ACTIVE;
        }
        if *value != before {
            res |= ResourceState::CHANGE;
        }
        Ok(res)
    }
}
