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
#[cfg(feature = "png_source")]
use std::io::Cursor;

#[cfg(feature = "png_source")]
use png::{BitDepth, ColorType, Decoder};

/// Pixel payload displayed by the image-button widgets.
///
/// The core validates the dimensions and forwards the image to the renderer
/// untouched; only the renderer interprets `pixels` and `channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Channels per pixel (4 for RGBA).
    pub channels: i32,
    /// Raw pixel bytes, row-major.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Wraps raw pixel bytes.
    pub fn new(width: i32, height: i32, channels: i32, pixels: Vec<u8>) -> Self {
        Self { width, height, channels, pixels }
    }

    /// A drawable image has positive dimensions and a non-empty payload.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && !self.pixels.is_empty()
    }

    /// Decodes an 8-bit PNG byte stream into an RGBA image. Available when
    /// the `png_source` feature is enabled.
    #[cfg(feature = "png_source")]
    pub fn from_png(bytes: &[u8]) -> Result<Self, String> {
        let decoder = Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().map_err(|e| e.to_string())?;
        let len = reader
            .output_buffer_size()
            .ok_or_else(|| String::from("PNG output size unknown"))?;
        let mut raw = vec![0_u8; len];
        let frame = reader.next_frame(&mut raw).map_err(|e| e.to_string())?;
        raw.truncate(frame.buffer_size());

        if frame.bit_depth != BitDepth::Eight {
            return Err(format!("unsupported PNG bit depth {:?}", frame.bit_depth));
        }

        let pixels = match frame.color_type {
            ColorType::Rgba => raw,
            ColorType::Rgb => {
                let mut out = Vec::with_capacity(raw.len() / 3 * 4);
                for px in raw.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 0xFF]);
                }
                out
            }
            ColorType::Grayscale => {
                let mut out = Vec::with_capacity(raw.len() * 4);
                for &v in &raw {
                    out.extend_from_slice(&[v, v, v, 0xFF]);
                }
                out
            }
            ColorType::GrayscaleAlpha => {
                let mut out = Vec::with_capacity(raw.len() * 2);
                for px in raw.chunks_exact(2) {
                    out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
                }
                out
            }
            other => return Err(format!("unsupported PNG color type {other:?}")),
        };

        Ok(Self {
            width: frame.width as i32,
            height: frame.height as i32,
            channels: 4,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_requires_positive_dims_and_pixels() {
        assert!(Image::new(2, 2, 4, vec![0; 16]).is_valid());
        assert!(!Image::new(0, 2, 4, vec![0; 16]).is_valid());
        assert!(!Image::new(2, -1, 4, vec![0; 16]).is_valid());
        assert!(!Image::new(2, 2, 4, Vec::new()).is_valid());
    }
}
