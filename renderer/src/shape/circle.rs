// STD Dependencies -----------------------------------------------------------
use std::f32::consts;


// Internal Dependencies ------------------------------------------------------
use ::Renderer;


// Filled Circle --------------------------------------------------------------
/// Triangle fan around the origin, translated when rendered.
#[derive(Debug)]
pub struct Circle {
    radius: f32,
    vertices: Vec<f32>
}

impl Circle {

    pub fn new(segments: usize, radius: f32) -> Circle {
        let ring = unit_ring(segments);
        let mut vertices = Vec::with_capacity(ring.len() * 6);
        for (a, b) in ring.iter().zip(ring.iter().cycle().skip(1)) {
            vertices.extend_from_slice(&[
                0.0, 0.0,
                a[0] * radius, a[1] * radius,
                b[0] * radius, b[1] * radius
            ]);
        }
        Circle {
            radius: radius,
            vertices: vertices
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn render(&self, renderer: &mut Renderer, x: f32, y: f32) {
        renderer.draw_triangle_list(&[x, y], &self.vertices);
    }

}

/// `segments` points on the unit circle, at least three.
pub fn unit_ring(segments: usize) -> Vec<[f32; 2]> {
    let segments = segments.max(3);
    let step = consts::PI * 2.0 / segments as f32;
    (0..segments).map(|i| {
        let r = i as f32 * step;
        [r.cos(), r.sin()]

    }).collect()
}

