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
// Headless tour of the widget catalog: a scripted pointer session drives a
// few frames and every draw command lands on stdout. Swap `PrintRenderer`
// for a real backend to put the same UI on screen.
use quickui_redux::*;

struct PrintRenderer;

impl Renderer for PrintRenderer {
    fn draw_rect(&mut self, rect: Rectf, color: Color) {
        println!(
            "  rect  ({:6.1},{:6.1}) {:5.1} x {:5.1}  #{:02x}{:02x}{:02x}",
            rect.x, rect.y, rect.width, rect.height, color.r, color.g, color.b
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2f, _color: Color, _font: &FontParams) {
        println!("  text  ({:6.1},{:6.1}) {:?}", pos.x, pos.y, text);
    }

    fn draw_image(&mut self, image: &Image, rect: Rectf) {
        println!(
            "  image ({:6.1},{:6.1}) {:5.1} x {:5.1}  {}x{} px",
            rect.x, rect.y, rect.width, rect.height, image.width, image.height
        );
    }
}

enum Ev {
    Idle,
    Move(i32, i32),
    Press(i32, i32),
    Release(i32, i32),
    Backspace,
    Enter,
}

fn main() {
    let mut ctx = Context::new(PrintRenderer, Dimensioni::new(800, 600));

    let mut window_pos = vec2f(60.0, 40.0);
    let mut volume = 0.35;
    let mut muted = false;
    let mut name = String::from("neo");
    let icon = Image::new(12, 12, 4, vec![0xFF; 12 * 12 * 4]);

    let script = [
        Ev::Idle,
        Ev::Move(100, 80),
        Ev::Press(100, 80),
        Ev::Release(100, 80),
        Ev::Press(100, 115),
        Ev::Release(100, 115),
        Ev::Press(194, 138),
        Ev::Move(274, 138),
        Ev::Release(274, 138),
        Ev::Press(100, 170),
        Ev::Release(100, 170),
        Ev::Backspace,
        Ev::Enter,
        Ev::Press(100, 210),
        Ev::Release(100, 210),
        Ev::Press(280, 270),
        Ev::Release(280, 270),
        Ev::Press(200, 50),
        Ev::Move(240, 80),
        Ev::Release(240, 80),
    ];

    for (frame, ev) in script.iter().enumerate() {
        match *ev {
            Ev::Idle => {}
            Ev::Move(x, y) => ctx.mouse_move(x, y),
            Ev::Press(x, y) => ctx.mouse_down(x, y),
            Ev::Release(x, y) => ctx.mouse_up(x, y),
            Ev::Backspace => ctx.feed_key_backspace(),
            Ev::Enter => ctx.feed_key_enter(),
        }

        println!("-- frame {frame} --");
        ctx.frame(0.0, 0.0, |ui| {
            ui.window(Some("Mixer"), vec2f(320.0, 240.0), &mut window_pos, |ui| {
                if ui.button("Play").unwrap().is_submitted() {
                    println!(">> play");
                }
                if ui.checkbox("Mute", &mut muted).unwrap().is_changed() {
                    println!(">> muted: {muted}");
                }
                if ui.slider("Vol", &mut volume, 0.0, 1.0, 0.0).unwrap().is_changed() {
                    println!(">> volume: {volume:.2}");
                }
                if ui.textbox(&mut name, 32, 0.0).unwrap().is_submitted() {
                    println!(">> hello, {name}");
                }
                if ui.image_button_with_label(&icon, "Save", vec2f(0.0, 0.0)).unwrap().is_submitted() {
                    ui.open_popup();
                }
            })
            .unwrap();

            ui.popup(vec2f(300.0, 100.0), |ui| {
                ui.draw_text("Saved.", vec2f(0.0, 40.0));
                if ui.button("Close").unwrap().is_submitted() {
                    ui.close_popup();
                }
            })
            .unwrap();
        })
        .unwrap();
    }

    println!("window ended up at ({:.0},{:.0})", window_pos.x, window_pos.y);
}
