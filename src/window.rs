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
    /// Opens a draggable window region: draws its background, title bar and
    /// title, then re-bases the layout so widgets inside place themselves in
    /// window-local coordinates. `pos` is caller-owned and is moved by
    /// dragging the title bar. Must be balanced by [`Context::end_window`];
    /// window regions do not nest.
    pub fn begin_window(&mut self, title: Option<&str>, size: Vec2f, pos: &mut Vec2f) -> UiResult<()> {
        if !size.x.is_finite() || !size.y.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::InvalidValue("window size"));
        }

        let window_id = self.next_id();
        let title_height = self.text_height(title.unwrap_or("Window")) + 8.0;

        // Only an idle pointer, or this window's own drag, may take the
        // title bar; a widget holding the capture keeps it.
        if self.active_id.is_none() || self.active_id == Some(window_id) {
            let title_bar = rectf(pos.x, pos.y, size.x - 4.0, title_height);
            if self.hit_test_absolute(title_bar) {
                self.hot_id = Some(window_id);
                if self.input.mouse_pressed {
                    self.active_id = Some(window_id);
                    self.drag_offset = vec2f(
                        self.input.mouse_pos.x as Real - pos.x,
                        self.input.mouse_pos.y as Real - pos.y,
                    );
                }
            }
        }

        if self.active_id == Some(window_id) && self.input.mouse_down {
            pos.x = self.input.mouse_pos.x as Real - self.drag_offset.x;
            pos.y = self.input.mouse_pos.y as Real - self.drag_offset.y;
        }

        let background = self.style.colors[ControlColor::WindowBG as usize];
        let bar = self.style.colors[ControlColor::TitleBG as usize];
        self.draw_rect(rectf(pos.x, pos.y, size.x, size.y), background);
        self.draw_rect(rectf(pos.x, pos.y, size.x, title_height), bar);
        if let Some(title) = title {
            self.draw_text(title, vec2f(pos.x + 8.0, pos.y + 4.0));
        }

        if self.input.mouse_released && self.active_id == Some(window_id) {
            self.active_id = None;
        }

        self.layout.save();
        self.layout.rebase(vec2f(pos.x + 10.0, pos.y + title_height + 10.0));
        Ok(())
    }

    /// Closes the window region, restoring the outer layout.
    pub fn end_window(&mut self) { self.layout.restore() }

    /// Runs `f` inside a window region bracketed by
    /// [`Context::begin_window`] and [`Context::end_window`].
    pub fn window<F: FnOnce(&mut Self)>(
        &mut self,
        title: Option<&str>,
        size: Vec2f,
        pos: &mut Vec2f,
        f: F,
    ) -> UiResult<()> {
        self.begin_window(title, size, pos)?;
        f(self);
        self.end_window();
        Ok(())
    }

    /// Opens the popup overlay; subsequent [`Context::popup`] calls run
    /// their body until [`Context::close_popup`].
    pub fn open_popup(&mut self) { self.popup_open = true; }

    /// Closes the popup overlay.
    pub fn close_popup(&mut self) { self.popup_open = false; }

    /// Returns whether the popup overlay is open.
    pub fn popup_is_open(&self) -> bool { self.popup_open }

    /// Runs `f` inside a popup box of the given size, centered on the
    /// display extent, when the overlay is open. Returns `Ok(true)` when
    /// the body ran. The layout is re-based into the box and restored from
    /// locals rather than the window slot, so a popup composes with one
    /// open window region.
    pub fn popup<F: FnOnce(&mut Self)>(&mut self, size: Vec2f, f: F) -> UiResult<bool> {
        if !size.x.is_finite() || !size.y.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::InvalidValue("popup size"));
        }
        if !self.popup_open {
            return Ok(false);
        }

        let x = (self.dim.width as Real - size.x) * 0.5;
        let y = (self.dim.height as Real - size.y) * 0.5;
        // The centered position is already in screen space; bypass the
        // offset-adding helper so an enclosing window cannot shift it.
        let backdrop = self.style.colors[ControlColor::Box as usize];
        self.renderer_mut().draw_rect(rectf(x, y, size.x, size.y), backdrop);

        let outer_cursor = self.layout.cursor;
        let outer_offset = self.layout.offset;
        self.layout.rebase(vec2f(x + 10.0, y + 10.0));
        f(self);
        self.layout.cursor = outer_cursor;
        self.layout.offset = outer_offset;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx() -> Context<NullRenderer> {
        Context::new(NullRenderer, Dimensioni::new(800, 600))
    }

    #[derive(Default)]
    struct RecordingRenderer {
        rects: Vec<(Rectf, Color)>,
        texts: Vec<(String, Vec2f)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_rect(&mut self, rect: Rectf, color: Color) { self.rects.push((rect, color)); }

        fn draw_text(&mut self, text: &str, pos: Vec2f, _color: Color, _font: &FontParams) {
            self.texts.push((text.into(), pos));
        }
    }

    #[test]
    fn begin_window_rejects_bad_sizes() {
        let mut ctx = make_ctx();
        let mut pos = vec2f(0.0, 0.0);
        ctx.begin(0.0, 0.0).unwrap();
        assert!(ctx.begin_window(None, vec2f(0.0, 50.0), &mut pos).is_err());
        assert!(ctx.begin_window(None, vec2f(100.0, -1.0), &mut pos).is_err());
        assert!(ctx.begin_window(None, vec2f(Real::NAN, 50.0), &mut pos).is_err());
    }

    #[test]
    fn drag_follows_the_pointer_exactly() {
        let mut ctx = make_ctx();
        let size = vec2f(200.0, 150.0);
        let mut pos = vec2f(40.0, 30.0);

        ctx.begin(0.0, 0.0).unwrap();
        ctx.mouse_down(50, 40);
        ctx.window(Some("win"), size, &mut pos, |_| {}).unwrap();
        ctx.end();
        assert_eq!((pos.x, pos.y), (40.0, 30.0));

        ctx.begin(0.0, 0.0).unwrap();
        ctx.mouse_move(75, 68);
        ctx.window(Some("win"), size, &mut pos, |_| {}).unwrap();
        ctx.end();
        assert_eq!((pos.x, pos.y), (65.0, 58.0));

        ctx.begin(0.0, 0.0).unwrap();
        ctx.mouse_up(75, 68);
        ctx.window(Some("win"), size, &mut pos, |_| {}).unwrap();
        ctx.end();
        assert_eq!((pos.x, pos.y), (65.0, 58.0));
        assert_eq!(ctx.active_id, None);
    }

    #[test]
    fn title_bar_yields_while_another_widget_is_active() {
        let mut ctx = make_ctx();
        let mut pos = vec2f(0.0, 0.0);
        ctx.begin(0.0, 0.0).unwrap();
        let other = ctx.next_id();
        ctx.active_id = Some(other);
        ctx.mouse_down(10, 10);
        ctx.window(Some("win"), vec2f(100.0, 80.0), &mut pos, |_| {}).unwrap();
        assert_eq!(ctx.hot_id, None);
        assert_eq!(ctx.active_id, Some(other));
        assert_eq!((pos.x, pos.y), (0.0, 0.0));
    }

    #[test]
    fn window_rebases_and_restores_the_layout() {
        let mut ctx = make_ctx();
        let mut pos = vec2f(100.0, 50.0);
        ctx.begin(20.0, 20.0).unwrap();
        ctx.advance(10.0);
        let outer = ctx.cursor();

        ctx.begin_window(Some("Tools"), vec2f(200.0, 150.0), &mut pos).unwrap();
        assert_eq!((ctx.layout_offset().x, ctx.layout_offset().y), (110.0, 84.0));
        assert_eq!((ctx.cursor().x, ctx.cursor().y), (0.0, 0.0));
        ctx.end_window();

        assert_eq!((ctx.layout_offset().x, ctx.layout_offset().y), (0.0, 0.0));
        assert_eq!((ctx.cursor().x, ctx.cursor().y), (outer.x, outer.y));
    }

    #[test]
    fn window_draws_background_title_bar_and_text() {
        let mut ctx = Context::new(RecordingRenderer::default(), Dimensioni::new(800, 600));
        let mut pos = vec2f(10.0, 20.0);
        ctx.begin(0.0, 0.0).unwrap();
        ctx.window(Some("Log"), vec2f(300.0, 200.0), &mut pos, |_| {}).unwrap();
        ctx.end();

        let r = ctx.renderer();
        assert_eq!(r.rects.len(), 2);
        let (bg, bg_color) = r.rects[0];
        assert_eq!((bg.x, bg.y, bg.width, bg.height), (10.0, 20.0, 300.0, 200.0));
        assert_eq!(bg_color, ctx.style.colors[ControlColor::WindowBG as usize]);
        let (bar, bar_color) = r.rects[1];
        assert_eq!((bar.x, bar.y, bar.width, bar.height), (10.0, 20.0, 300.0, 24.0));
        assert_eq!(bar_color, ctx.style.colors[ControlColor::TitleBG as usize]);
        let (text, text_pos) = &r.texts[0];
        assert_eq!(text.as_str(), "Log");
        assert_eq!((text_pos.x, text_pos.y), (18.0, 24.0));
    }

    #[test]
    fn untitled_windows_draw_no_text() {
        let mut ctx = Context::new(RecordingRenderer::default(), Dimensioni::new(800, 600));
        let mut pos = vec2f(0.0, 0.0);
        ctx.begin(0.0, 0.0).unwrap();
        ctx.window(None, vec2f(120.0, 90.0), &mut pos, |_| {}).unwrap();
        ctx.end();

        let r = ctx.renderer();
        assert!(r.texts.is_empty());
        let (bar, _) = r.rects[1];
        assert_eq!(bar.height, 24.0);
    }

    #[test]
    fn popup_runs_centered_only_while_open() {
        let mut ctx = Context::new(RecordingRenderer::default(), Dimensioni::new(800, 600));
        ctx.begin(0.0, 0.0).unwrap();
        assert!(ctx.popup(vec2f(-1.0, 10.0), |_| {}).is_err());
        assert!(!ctx.popup(vec2f(300.0, 100.0), |_| {}).unwrap());
        assert!(ctx.renderer().rects.is_empty());

        ctx.open_popup();
        assert!(ctx.popup_is_open());
        let mut inner_offset = Vec2f::default();
        let ran = ctx
            .popup(vec2f(300.0, 100.0), |ui| {
                inner_offset = ui.layout_offset();
            })
            .unwrap();
        assert!(ran);
        assert_eq!((inner_offset.x, inner_offset.y), (260.0, 260.0));
        let (backdrop, _) = ctx.renderer().rects[0];
        assert_eq!((backdrop.x, backdrop.y, backdrop.width, backdrop.height), (250.0, 250.0, 300.0, 100.0));
        assert_eq!((ctx.layout_offset().x, ctx.layout_offset().y), (0.0, 0.0));

        ctx.close_popup();
        assert!(!ctx.popup_is_open());
    }

    #[test]
    fn popup_inside_a_window_stays_display_centered() {
        let mut ctx = Context::new(RecordingRenderer::default(), Dimensioni::new(800, 600));
        let mut pos = vec2f(100.0, 50.0);
        ctx.begin(0.0, 0.0).unwrap();
        ctx.open_popup();
        ctx.window(Some("Mixer"), vec2f(320.0, 240.0), &mut pos, |ui| {
            ui.popup(vec2f(300.0, 100.0), |_| {}).unwrap();
            // The window's own layout comes back after the popup body.
            assert_eq!((ui.layout_offset().x, ui.layout_offset().y), (110.0, 84.0));
        })
        .unwrap();
        ctx.end();

        // Window background + title bar, then the popup backdrop.
        let (backdrop, _) = ctx.renderer().rects[2];
        assert_eq!(
            (backdrop.x, backdrop.y, backdrop.width, backdrop.height),
            (250.0, 250.0, 300.0, 100.0)
        );
    }
}
