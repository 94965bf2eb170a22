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

const IMAGE_PADDING: Real = 8.0;

impl<R: Renderer> Context<R> {
    /// Clickable image without a label. Size components that are not positive
    /// fall back per component: the button to the image dimension plus
    /// padding, the drawn image to its natural dimension.
    ///
    /// There is no text to degrade to, so an undrawable image is an error.
    pub fn image_button(
        &mut self,
        image: &Image,
        button_size: Vec2f,
        image_size: Vec2f,
    ) -> UiResult<ResourceState> {
        if !image.is_valid() {
            return Err(Error::NullArgument("image"));
        }
        let id = self.next_id();

        let width = if button_size.x > 0.0 {
            button_size.x
        } else {
            image.width as Real + IMAGE_PADDING * 2.0
        };
        let height = if button_size.y > 0.0 {
            button_size.y
        } else {
            image.height as Real + IMAGE_PADDING * 2.0
        };
        let image_width = if image_size.x > 0.0 { image_size.x } else { image.width as Real };
        let image_height = if image_size.y > 0.0 { image_size.y } else { image.height as Real };

        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, width, height);
        let state = self.update_control(id, rect);

        let centered = vec2f(
            pos.x + (width - image_width) * 0.5,
            pos.y + (height - image_height) * 0.5,
        );
        // The rest state shows the bare image; only hot and captured states
        // put a plate behind it.
        if state.active {
            let color = self.style.colors[ControlColor::BoxActive as usize];
            self.draw_rect(rect, color);
            self.draw_image(
                image,
                rectf(centered.x + 1.0, centered.y + 1.0, image_width, image_height),
            );
        } else if state.hovered {
            let color = self.style.colors[ControlColor::BoxHot as usize];
            self.draw_rect(rect, color);
            self.draw_image(image, rectf(centered.x, centered.y, image_width, image_height));
        } else {
            self.draw_image(image, rectf(centered.x, centered.y, image_width, image_height));
        }

        self.advance(height);
        if state.activated {
            Ok(ResourceState::SUBMIT)
        } else {
            Ok(ResourceState::NONE)
        }
    }

    /// Image followed by a label on one plate, both vertically centered.
    /// Degrades to [`Context::button`] when the image is undrawable, before
    /// any identity is taken.
    pub fn image_button_with_label(
        &mut self,
        image: &Image,
        label: &str,
        image_size: Vec2f,
    ) -> UiResult<ResourceState> {
        if !image.is_valid() {
            return self.button(label);
        }
        let id = self.next_id();

        let image_width = if image_size.x > 0.0 { image_size.x } else { image.width as Real };
        let image_height = if image_size.y > 0.0 { image_size.y } else { image.height as Real };
        let text_width = self.text_width(label);
        let text_height = self.text_height(label);

        let gap = 6.0;
        let total_width = image_width + gap + text_width + IMAGE_PADDING * 2.0;
        let total_height = image_height.max(text_height) + IMAGE_PADDING * 2.0;

        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, total_width, total_height);
        let state = self.update_control(id, rect);

        let color = self.control_color(state);
        self.draw_rect(rect, color);

        let mut image_pos =
            vec2f(pos.x + IMAGE_PADDING, pos.y + (total_height - image_height) * 0.5);
        let mut text_pos = vec2f(
            image_pos.x + image_width + gap,
            pos.y + (total_height - text_height) * 0.5,
        );
        if state.active {
            image_pos.x += 1.0;
            image_pos.y += 1.0;
            text_pos.x += 1.0;
            text_pos.y += 1.0;
        }
        self.draw_image(image, rectf(image_pos.x, image_pos.y, image_width, image_height));
        self.draw_text(label, text_pos);

        self.advance(total_height);
        if state.activated {
            Ok(ResourceState::SUBMIT)
        } else {
            Ok(ResourceState::NONE)
        }
    }

    /// Image stacked above a label, both horizontally centered on one plate.
    /// Degrades the same way as the horizontal variant.
    pub fn image_button_vertical(
        &mut self,
        image: &Image,
        label: &str,
        image_size: Vec2f,
    ) -> UiResult<ResourceState> {
        if !image.is_valid() {
            return self.button(label);
        }
        let id = self.next_id();

        let image_width = if image_size.x > 0.0 { image_size.x } else { image.width as Real };
        let image_height = if image_size.y > 0.0 { image_size.y } else { image.height as Real };
        let text_width = self.text_width(label);
        let text_height = self.text_height(label);

        let gap = 4.0;
        let total_width = image_width.max(text_width) + IMAGE_PADDING * 2.0;
        let total_height = image_height + gap + text_height + IMAGE_PADDING * 2.0;

        let pos = self.layout.cursor;
        let rect = rectf(pos.x, pos.y, total_width, total_height);
        let state = self.update_control(id, rect);

        let color = self.control_color(state);
        self.draw_rect(rect, color);

        let mut image_pos = vec2f(pos.x + (total_width - image_width) * 0.5, pos.y + IMAGE_PADDING);
        let mut text_pos = vec2f(
            pos.x + (total_width - text_width) * 0.5,
            image_pos.y + image_height + gap,
        );
        if state.active {
            image_pos.x += 1.0;
            image_pos.y += 1.0;
            text_pos.x += 1.0;
            text_pos.y += 1.0;
        }
        self.draw_image(image, rectf(image_pos.x, image_pos.y, image_width, image_height));
        self.draw_text(label, text_pos);

        self.advance(total_height);
        if state.activated {
            Ok(ResourceState::SUBMIT)
        } else {
            Ok(ResourceState::NONE)
        }
    }
}
