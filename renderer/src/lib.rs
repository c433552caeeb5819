//! **renderer**
//!
//! Software triangle list renderer drawing into an RGBA frame buffer.
#![deny(
    trivial_casts,
    unsafe_code,
    unused_import_braces
)]


// Crates ---------------------------------------------------------------------
#[macro_use]
extern crate log;
extern crate clock_ticks;
extern crate image;


// STD Dependencies -----------------------------------------------------------
use std::path::Path;


// External Dependencies ------------------------------------------------------
use image::{ImageResult, Rgba, RgbaImage};


// Modules --------------------------------------------------------------------
mod raster;
mod shape;
pub use self::shape::*;


// Statics --------------------------------------------------------------------
const POS_COMPONENTS: usize = 2;
const TRIANGLE_COMPONENTS: usize = POS_COMPONENTS * 3;


// Renderer -------------------------------------------------------------------
pub struct Renderer {
    width: u32,
    height: u32,
    color: [f32; 4],
    buffer: RgbaImage,

    t: u64,
    dt: f32,
    frames: u64,
    triangles: usize
}

impl Renderer {

    pub fn new(width: u32, height: u32) -> Renderer {
        Renderer {
            width: width,
            height: height,
            color: [1.0; 4],
            buffer: RgbaImage::new(width, height),

            t: clock_ticks::precise_time_ms(),
            dt: 0.0,
            frames: 0,
            triangles: 0
        }
    }


    // Rendering --------------------------------------------------------------
    pub fn begin(&mut self) {
        let t = clock_ticks::precise_time_ms();
        self.dt = (t - self.t) as f32;
        self.t = t;
        self.triangles = 0;
    }

    /// Milliseconds between the last two calls to `begin`.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn end(&mut self) {
        self.frames += 1;
        trace!("[Renderer] Frame #{} rasterized {} triangles.", self.frames, self.triangles);
    }


    // Rendering Operations ---------------------------------------------------
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    pub fn clear_color(&mut self, color: [f32; 4]) {
        let pixel = Rgba(raster::to_rgba8(color));
        for p in self.buffer.pixels_mut() {
            *p = pixel;
        }
    }


    // Direct Shape Drawing ---------------------------------------------------
    pub fn line(&mut self, p: &[f32; 4], width: f32) {
        self.draw_triangle_list(&[0.0, 0.0], &line_vertices(p, width));
    }

    /// Draws every complete triangle in `vertices` translated by `offset`.
    pub fn draw_triangle_list(&mut self, offset: &[f32; 2], vertices: &[f32]) {
        let color = self.color;
        for t in vertices.chunks(TRIANGLE_COMPONENTS) {
            if t.len() == TRIANGLE_COMPONENTS {
                raster::fill_triangle(
                    &mut self.buffer,
                    [t[0] + offset[0], t[1] + offset[1]],
                    [t[2] + offset[0], t[3] + offset[1]],
                    [t[4] + offset[0], t[5] + offset[1]],
                    color
                );
                self.triangles += 1;
            }
        }
    }


    // Output -----------------------------------------------------------------
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        debug!("[Renderer] Saving frame to {}.", path.as_ref().display());
        self.buffer.save(path)
    }

}

