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
use crate::layout::LayoutCursor;
use crate::*;

/// Per-frame interaction state of one widget, produced by
/// [`Context::update_control`] or [`Context::update_text_control`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ControlState {
    /// The pointer is over the widget's rectangle this frame.
    pub hovered: bool,
    /// The widget owns the press capture this frame.
    pub active: bool,
    /// The widget owns the press capture and the button is still down.
    pub held: bool,
    /// A release landed inside the widget this frame.
    pub activated: bool,
    /// The widget owns the keyboard focus.
    pub focused: bool,
}

/// The retained core of the UI: input snapshot, interaction identities,
/// layout cursor, style and the renderer.
///
/// The host owns exactly one `Context`, feeds input events into it, then
/// declares widgets between [`Context::begin`] and [`Context::end`] every
/// frame. Widgets keep no memory of their own across frames; anything
/// persistent lives here or in caller-owned bound values.
pub struct Context<R: Renderer> {
    renderer: R,
    pub(crate) dim: Dimensioni,
    pub(crate) ids: IdGenerator,
    pub(crate) input: Input,
    pub(crate) active_id: Option<Id>,
    pub(crate) hot_id: Option<Id>,
    pub(crate) keyboard_focus_id: Option<Id>,
    /// Colors and font parameters, read fresh at every draw.
    pub style: Style,
    pub(crate) layout: LayoutCursor,
    pub(crate) drag_offset: Vec2f,
    pub(crate) popup_open: bool,
}

impl<R: Renderer> Context<R> {
    /// Creates a context that owns `renderer`, starting from the default
    /// style with no hot, active or focused widget.
    pub fn new(renderer: R, dim: Dimensioni) -> Self {
        Self {
            renderer,
            dim,
            ids: IdGenerator::new(),
            input: Input::new(),
            active_id: None,
            hot_id: None,
            keyboard_focus_id: None,
            style: Style::default(),
            layout: LayoutCursor::default(),
            drag_offset: Vec2f::default(),
            popup_open: false,
        }
    }

    /// Updates the display extent used for popup centering.
    pub fn resize(&mut self, dim: Dimensioni) { self.dim = dim; }

    /// Returns the display extent.
    pub fn dim(&self) -> Dimensioni { self.dim }

    /// Borrows the renderer.
    pub fn renderer(&self) -> &R { &self.renderer }

    /// Mutably borrows the renderer.
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    /// Consumes the context and hands the renderer back.
    pub fn into_renderer(self) -> R { self.renderer }

    /// Feeds a pointer press at the given position.
    pub fn mouse_down(&mut self, x: i32, y: i32) { self.input.mousedown(x, y) }

    /// Feeds a pointer release at the given position.
    pub fn mouse_up(&mut self, x: i32, y: i32) { self.input.mouseup(x, y) }

    /// Feeds pointer motion.
    pub fn mouse_move(&mut self, x: i32, y: i32) { self.input.mousemove(x, y) }

    /// Feeds a positionless button report; see [`Input::mousebutton`].
    pub fn feed_mouse_button(&mut self, pressed: bool) { self.input.mousebutton(pressed) }

    /// Latches the backspace edge for this frame.
    pub fn feed_key_backspace(&mut self) { self.input.backspace() }

    /// Latches the enter edge for this frame.
    pub fn feed_key_enter(&mut self) { self.input.enter() }

    /// Returns the current input snapshot.
    pub fn input(&self) -> &Input { &self.input }

    /// Starts a frame with the layout cursor at `(x, y)`. Resets the id
    /// sequence and the hot widget; the press and focus captures persist.
    pub fn begin(&mut self, x: Real, y: Real) -> UiResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidValue("frame origin"));
        }
        self.ids.reset();
        self.hot_id = None;
        self.layout.reset(vec2f(x, y));
        Ok(())
    }

    /// Ends the frame, clearing the edge-triggered input flags.
    pub fn end(&mut self) { self.input.epilogue() }

    /// Runs `f` bracketed by [`Context::begin`] and [`Context::end`].
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, x: Real, y: Real, f: F) -> UiResult<()> {
        self.begin(x, y)?;
        f(self);
        self.end();
        Ok(())
    }

    /// Issues the next widget identity. Identity is positional: it is
    /// stable across frames only while the declaration order is stable.
    pub fn next_id(&mut self) -> Id { self.ids.next_id() }

    /// Tests `rect`, shifted by the layout offset, against the pointer.
    /// Bounds are inclusive on all four edges.
    pub fn hit_test(&self, rect: Rectf) -> bool {
        let mx = self.input.mouse_pos.x as Real;
        let my = self.input.mouse_pos.y as Real;
        let x = rect.x + self.layout.offset.x;
        let y = rect.y + self.layout.offset.y;
        mx >= x && mx <= x + rect.width && my >= y && my <= y + rect.height
    }

    /// Tests `rect` in screen coordinates, ignoring the layout offset.
    pub fn hit_test_absolute(&self, rect: Rectf) -> bool {
        let mx = self.input.mouse_pos.x as Real;
        let my = self.input.mouse_pos.y as Real;
        mx >= rect.x && mx <= rect.x + rect.width && my >= rect.y && my <= rect.y + rect.height
    }

    /// Runs the shared pointer protocol for one widget: hover and press
    /// arbitration against `rect`, then release resolution. A later widget
    /// that also hits overwrites the hot widget, so declaration order is
    /// z-order.
    pub fn update_control(&mut self, id: Id, rect: Rectf) -> ControlState {
        let hit = self.hit_test(rect);
        if hit {
            self.hot_id = Some(id);
            if self.input.mouse_pressed {
                self.active_id = Some(id);
            }
        }

        // Ownership is sampled before the release resolution clears it,
        // keeping the release frame drawn as captured.
        let active = self.active_id == Some(id);
        let mut activated = false;
        if self.input.mouse_released && active {
            activated = hit;
            self.active_id = None;
        }

        ControlState {
            hovered: self.hot_id == Some(id),
            active,
            held: active && self.input.mouse_down,
            activated,
            focused: false,
        }
    }

    /// Runs the keyboard-focus protocol for one widget: a press inside
    /// grants focus, a press outside while focused clears it on the same
    /// call.
    pub fn update_text_control(&mut self, id: Id, rect: Rectf) -> ControlState {
        let hit = self.hit_test(rect);
        if hit {
            self.hot_id = Some(id);
            if self.input.mouse_pressed {
                self.keyboard_focus_id = Some(id);
            }
        } else if self.input.mouse_pressed && self.keyboard_focus_id == Some(id) {
            self.keyboard_focus_id = None;
        }

        ControlState {
            hovered: self.hot_id == Some(id),
            focused: self.keyboard_focus_id == Some(id),
            ..Default::default()
        }
    }

    /// Resolves the fill color for `state` from the palette: captured or
    /// focused beats hot beats rest.
    pub fn control_color(&self, state: ControlState) -> Color {
        let mut role = ControlColor::Box;
        if state.active || state.focused {
            role.focus();
        } else if state.hovered {
            role.hover();
        }
        self.style.colors[role as usize]
    }

    /// Fills a rectangle given in layout-relative coordinates.
    pub fn draw_rect(&mut self, rect: Rectf, color: Color) {
        let o = self.layout.offset;
        self.renderer.draw_rect(rectf(rect.x + o.x, rect.y + o.y, rect.width, rect.height), color);
    }

    /// Draws text at a layout-relative position with the palette text color
    /// and the current font.
    pub fn draw_text(&mut self, text: &str, pos: Vec2f) {
        let o = self.layout.offset;
        let color = self.style.colors[ControlColor::Text as usize];
        self.renderer.draw_text(text, vec2f(pos.x + o.x, pos.y + o.y), color, &self.style.font);
    }

    /// Draws an image into a layout-relative rectangle.
    pub fn draw_image(&mut self, image: &Image, rect: Rectf) {
        let o = self.layout.offset;
        self.renderer.draw_image(image, rectf(rect.x + o.x, rect.y + o.y, rect.width, rect.height));
    }

    /// Measures `text` with the current font.
    pub fn text_width(&self, text: &str) -> Real { self.renderer.text_width(text, &self.style.font) }

    /// Returns the line height of `text` with the current font.
    pub fn text_height(&self, text: &str) -> Real { self.renderer.text_height(text, &self.style.font) }

    /// Replaces one palette entry.
    pub fn set_color(&mut self, role: ControlColor, color: Color) -> UiResult<()> {
        if role == ControlColor::Max {
            return Err(Error::InvalidValue("color role"));
        }
        self.style.colors[role as usize] = color;
        Ok(())
    }

    /// Reads one palette entry.
    pub fn get_color(&self, role: ControlColor) -> UiResult<Color> {
        if role == ControlColor::Max {
            return Err(Error::InvalidValue("color role"));
        }
        Ok(self.style.colors[role as usize])
    }

    /// Sets the font handle and metrics forwarded to the renderer.
    pub fn set_font(&mut self, font: Option<FontId>, size: Real, spacing: Real) -> UiResult<()> {
        if !size.is_finite() || size < 0.0 || !spacing.is_finite() || spacing < 0.0 {
            return Err(Error::InvalidValue("font metrics"));
        }
        self.style.font = FontParams { font, size, spacing };
        Ok(())
    }

    /// Returns the layout cursor, the next widget's top-left corner in
    /// layout-relative coordinates.
    pub fn cursor(&self) -> Vec2f { self.layout.cursor }

    /// Moves the layout cursor, for manual placement between widgets.
    pub fn set_cursor(&mut self, pos: Vec2f) { self.layout.cursor = pos; }

    /// Returns the spacing inserted after every widget.
    pub fn spacing(&self) -> Vec2f { self.layout.spacing }

    /// Replaces the spacing inserted after every widget.
    pub fn set_spacing(&mut self, spacing: Vec2f) { self.layout.spacing = spacing; }

    /// Returns the offset currently added to layout-relative coordinates.
    pub fn layout_offset(&self) -> Vec2f { self.layout.offset }

    /// Advances the layout cursor past a widget `height` tall.
    pub fn advance(&mut self, height: Real) { self.layout.advance(height) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ctx() -> Context<NullRenderer> {
        Context::new(NullRenderer, Dimensioni::new(800, 600))
    }

    #[test]
    fn begin_rejects_non_finite_origins() {
        let mut ctx = make_ctx();
        assert!(ctx.begin(Real::NAN, 0.0).is_err());
        assert!(ctx.begin(0.0, Real::INFINITY).is_err());
        ctx.begin(20.0, 20.0).unwrap();
        assert_eq!((ctx.cursor().x, ctx.cursor().y), (20.0, 20.0));
    }

    #[test]
    fn begin_restarts_ids_and_clears_the_hover() {
        let mut ctx = make_ctx();
        ctx.begin(0.0, 0.0).unwrap();
        let first = ctx.next_id();
        ctx.mouse_move(5, 5);
        let state = ctx.update_control(first, rectf(0.0, 0.0, 10.0, 10.0));
        assert!(state.hovered);
        ctx.end();

        ctx.begin(0.0, 0.0).unwrap();
        assert_eq!(ctx.next_id(), first);
        assert_eq!(ctx.hot_id, None);
    }

    #[test]
    fn hit_test_bounds_are_inclusive_and_offset_aware() {
        let mut ctx = make_ctx();
        ctx.mouse_move(10, 20);
        assert!(ctx.hit_test(rectf(10.0, 20.0, 5.0, 5.0)));
        assert!(ctx.hit_test(rectf(5.0, 15.0, 5.0, 5.0)));
        assert!(!ctx.hit_test(rectf(10.1, 20.0, 5.0, 5.0)));

        ctx.layout.offset = vec2f(100.0, 0.0);
        assert!(!ctx.hit_test(rectf(10.0, 20.0, 5.0, 5.0)));
        assert!(ctx.hit_test(rectf(-90.0, 20.0, 5.0, 5.0)));
        assert!(ctx.hit_test_absolute(rectf(10.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn release_inside_activates_and_clears_capture() {
        let mut ctx = make_ctx();
        let rect = rectf(0.0, 0.0, 30.0, 30.0);
        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_down(10, 10);
        let state = ctx.update_control(id, rect);
        assert!(state.active && state.held && !state.activated);
        ctx.end();

        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_up(12, 12);
        let state = ctx.update_control(id, rect);
        assert!(state.activated);
        assert!(state.active && !state.held);
        assert_eq!(ctx.active_id, None);
    }

    #[test]
    fn release_outside_clears_capture_without_activation() {
        let mut ctx = make_ctx();
        let rect = rectf(0.0, 0.0, 30.0, 30.0);
        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_down(10, 10);
        ctx.update_control(id, rect);
        ctx.end();

        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_up(200, 200);
        let state = ctx.update_control(id, rect);
        assert!(!state.activated);
        assert_eq!(ctx.active_id, None);
    }

    #[test]
    fn cycle_outside_leaves_identities_untouched() {
        let mut ctx = make_ctx();
        let rect = rectf(0.0, 0.0, 30.0, 30.0);
        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_down(100, 100);
        let state = ctx.update_control(id, rect);
        assert_eq!(state, ControlState::default());
        assert_eq!(ctx.active_id, None);
        assert_eq!(ctx.keyboard_focus_id, None);
    }

    #[test]
    fn later_declaration_takes_the_hover() {
        let mut ctx = make_ctx();
        ctx.begin(0.0, 0.0).unwrap();
        ctx.mouse_move(10, 10);
        let below = ctx.next_id();
        ctx.update_control(below, rectf(0.0, 0.0, 40.0, 40.0));
        let above = ctx.next_id();
        ctx.update_control(above, rectf(5.0, 5.0, 40.0, 40.0));
        assert_eq!(ctx.hot_id, Some(above));
    }

    #[test]
    fn text_control_focus_follows_presses() {
        let mut ctx = make_ctx();
        let rect = rectf(0.0, 0.0, 50.0, 20.0);
        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_down(10, 10);
        let state = ctx.update_text_control(id, rect);
        assert!(state.focused);
        ctx.end();

        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.mouse_down(300, 300);
        let state = ctx.update_text_control(id, rect);
        assert!(!state.focused);
        assert_eq!(ctx.keyboard_focus_id, None);
    }

    #[test]
    fn pointer_protocol_ignores_the_focus_channel() {
        let mut ctx = make_ctx();
        ctx.begin(0.0, 0.0).unwrap();
        let id = ctx.next_id();
        ctx.keyboard_focus_id = Some(id);
        ctx.mouse_move(5, 5);
        let state = ctx.update_control(id, rectf(0.0, 0.0, 10.0, 10.0));
        assert!(!state.focused);
        assert_eq!(ctx.control_color(state), ctx.style.colors[ControlColor::BoxHot as usize]);
    }

    #[test]
    fn control_color_promotes_by_state() {
        let ctx = make_ctx();
        let hot = ControlState { hovered: true, ..Default::default() };
        let held = ControlState { hovered: true, active: true, ..Default::default() };
        let focused = ControlState { focused: true, ..Default::default() };
        assert_eq!(ctx.control_color(ControlState::default()), ctx.style.colors[ControlColor::Box as usize]);
        assert_eq!(ctx.control_color(hot), ctx.style.colors[ControlColor::BoxHot as usize]);
        assert_eq!(ctx.control_color(held), ctx.style.colors[ControlColor::BoxActive as usize]);
        assert_eq!(ctx.control_color(focused), ctx.style.colors[ControlColor::BoxActive as usize]);
    }

    #[test]
    fn palette_roles_validate_against_the_sentinel() {
        let mut ctx = make_ctx();
        let red = color(255, 0, 0, 255);
        ctx.set_color(ControlColor::Box, red).unwrap();
        assert_eq!(ctx.get_color(ControlColor::Box).unwrap(), red);
        assert!(ctx.set_color(ControlColor::Max, red).is_err());
        assert!(ctx.get_color(ControlColor::Max).is_err());
    }

    #[test]
    fn set_font_rejects_bad_metrics() {
        let mut ctx = make_ctx();
        assert!(ctx.set_font(None, -1.0, 0.0).is_err());
        assert!(ctx.set_font(None, 14.0, Real::NAN).is_err());
        ctx.set_font(Some(FontId::new(3)), 14.0, 1.5).unwrap();
        assert_eq!(ctx.style.font.font, Some(FontId::new(3)));
        assert_eq!(ctx.style.font.size, 14.0);
    }

    #[test]
    fn fallback_metrics_measure_without_a_backend() {
        let ctx = make_ctx();
        assert_eq!(ctx.text_width("OK"), 16.0);
        assert_eq!(ctx.text_height("OK"), 16.0);
    }

    #[test]
    fn frame_brackets_begin_and_end() {
        let mut ctx = make_ctx();
        ctx.mouse_down(5, 5);
        ctx.frame(0.0, 0.0, |ui| {
            assert!(ui.input().mouse_pressed);
        })
        .unwrap();
        assert!(!ctx.input.mouse_pressed);
        assert!(ctx.input.mouse_down);
    }
}
