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
#![deny(missing_docs)]
//! `quickui-redux` is a small immediate-mode GUI core: per-frame widget
//! declarations plus raw input events become hit-tested, styled, interactive
//! controls without any retained widget objects. The crate exposes the
//! context, the widget catalog, and a renderer trait for embedding inside
//! custom backends while remaining allocator- and platform-agnostic.

mod context;
mod idmngr;
mod image;
mod input;
mod layout;
mod widgets;
mod window;

pub use context::*;
pub use idmngr::*;
pub use image::*;
pub use input::*;
pub use rs_math3d::*;

use bitflags::*;
use thiserror::Error;

/// Geometry scalar used for all widget coordinates and metrics.
pub type Real = f32;

/// Rectangle with [`Real`] coordinates, used for all widget geometry.
pub type Rectf = Rect<f32>;

/// Per-character advance used when the renderer does not measure text.
pub const FALLBACK_CHAR_WIDTH: Real = 8.0;

/// Line height used when the renderer does not measure text.
pub const FALLBACK_TEXT_HEIGHT: Real = 16.0;

/// Errors reported by validating entry points.
///
/// The payload names the argument that failed validation; the context is
/// never modified by a call that returns an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required buffer or payload argument was missing or empty.
    #[error("null or empty argument: {0}")]
    NullArgument(&'static str),
    /// A numeric argument was non-finite or outside its allowed range.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    /// The operation is not legal in the current context state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Result alias for fallible UI operations.
pub type UiResult<T> = Result<T, Error>;

bitflags! {
    /// Bit set a widget returns to describe what happened to it this frame.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct ResourceState : u32 {
        /// Indicates that the bound value changed this frame.
        const CHANGE = 4;
        /// Indicates that the widget was submitted (e.g. button released inside).
        const SUBMIT = 2;
        /// Indicates that the widget holds the press or keyboard capture.
        const ACTIVE = 1;
        /// Indicates no interaction.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns true when the widget's bound value changed.
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }

    /// Returns true when the widget was submitted.
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }

    /// Returns true when the widget holds a capture.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }

    /// Returns true when no interaction was reported.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u32)]
/// Semantic palette roles consulted when drawing controls.
pub enum ControlColor {
    /// Number of palette entries.
    Max = 7,
    /// Window title bar fill.
    TitleBG = 6,
    /// Window body fill.
    WindowBG = 5,
    /// Label and value text.
    Text = 4,
    /// Control fill while it owns a capture.
    BoxActive = 3,
    /// Control fill while hot.
    BoxHot = 2,
    /// Control fill at rest.
    Box = 1,
    /// Fill behind all controls.
    Background = 0,
}

impl ControlColor {
    /// Promotes the enum to the hot variant when relevant.
    pub fn hover(&mut self) {
        *self = match self {
            Self::Box => Self::BoxHot,
            _ => *self,
        }
    }

    /// Promotes the enum to the captured variant when relevant.
    pub fn focus(&mut self) {
        *self = match self {
            Self::Box | Self::BoxHot => Self::BoxActive,
            _ => *self,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// RGBA color with 8-bit channels.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Creates a color from the 4 RGBA components.
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Creates a 2D integer vector.
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Creates a 2D float vector.
pub fn vec2f(x: Real, y: Real) -> Vec2f { Vec2f { x, y } }

/// Creates a float rectangle from position and size.
pub fn rectf(x: Real, y: Real, w: Real, h: Real) -> Rectf { Rectf { x, y, width: w, height: h } }

/// Opaque font handle interpreted solely by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u32);

impl FontId {
    /// Wraps a raw host-assigned font token.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw token.
    pub fn raw(self) -> u32 { self.0 }
}

/// Font selection passed through to renderer text calls.
///
/// The core forwards these values verbatim; only the renderer assigns
/// meaning to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontParams {
    /// Host font handle; `None` selects the renderer default.
    pub font: Option<FontId>,
    /// Point size forwarded to the renderer.
    pub size: Real,
    /// Extra per-character spacing forwarded to the renderer.
    pub spacing: Real,
}

impl Default for FontParams {
    fn default() -> Self { Self { font: None, size: 0.0, spacing: 0.0 } }
}

#[derive(Clone)]
/// Visual configuration, read fresh on every draw.
pub struct Style {
    /// Font forwarded to renderer text calls.
    pub font: FontParams,
    /// Palette table indexed by [`ControlColor`].
    pub colors: [Color; ControlColor::Max as usize],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: FontParams::default(),
            colors: [
                Color { r: 32, g: 32, b: 32, a: 255 },
                Color { r: 56, g: 56, b: 56, a: 255 },
                Color { r: 80, g: 80, b: 80, a: 255 },
                Color { r: 100, g: 100, b: 100, a: 255 },
                Color { r: 255, g: 255, b: 255, a: 255 },
                Color { r: 48, g: 48, b: 48, a: 255 },
                Color { r: 64, g: 64, b: 64, a: 255 },
            ],
        }
    }
}

/// Rendering and text-measurement capabilities supplied by the host.
///
/// Every method has a default body: the draw calls are no-ops and the
/// measurement calls fall back to fixed metrics, so a partial backend still
/// measures and lays out consistently. All coordinates arrive offset-adjusted
/// (window-local already converted to screen space).
pub trait Renderer {
    /// Fills a rectangle.
    fn draw_rect(&mut self, _rect: Rectf, _color: Color) {}

    /// Draws one line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, _text: &str, _pos: Vec2f, _color: Color, _font: &FontParams) {}

    /// Draws an image scaled into `rect`.
    fn draw_image(&mut self, _image: &Image, _rect: Rectf) {}

    /// Measures the advance width of `text`.
    fn text_width(&self, text: &str, _font: &FontParams) -> Real {
        text.chars().count() as Real * FALLBACK_CHAR_WIDTH
    }

    /// Measures the line height used for `text`.
    fn text_height(&self, _text: &str, _font: &FontParams) -> Real { FALLBACK_TEXT_HEIGHT }
}

/// Null-object renderer: draws nothing, measures with the fallback metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
