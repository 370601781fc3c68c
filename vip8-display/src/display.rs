use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::FrameBuffer;

/// # Display
/// Renders the machine's 64x32 monochrome framebuffer into an SDL2 window.
/// Each framebuffer cell becomes a `scale`-sized square of white (on) or
/// black (off).
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Opens a window sized to the framebuffer at the given pixel scale.
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "vip8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Renders one frame.
    ///
    /// The framebuffer is expanded to an RGB24 texture, one triplet per
    /// cell, and stretched over the whole canvas.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

/// Triplicates each cell into an RGB pixel, 255 for on and 0 for off.
fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|&cell| std::iter::repeat(cell * 255).take(3))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture_expands_cells_to_rgb() {
        let mut frame: FrameBuffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        frame[1] = 1;
        frame[DISPLAY_WIDTH] = 1;
        let texture = frame_to_texture(&frame);

        assert_eq!(texture.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);
        assert_eq!(texture[0..6], [0, 0, 0, 255, 255, 255]);
        let row1 = DISPLAY_WIDTH * 3;
        assert_eq!(texture[row1..row1 + 6], [255, 255, 255, 0, 0, 0]);
    }
}
