// Internal Dependencies ------------------------------------------------------
use ::Renderer;
use super::circle::unit_ring;


// Circle Outline -------------------------------------------------------------
/// Ring of `width` centered on the circle's radius.
#[derive(Debug)]
pub struct CircleOutline {
    vertices: Vec<f32>
}

impl CircleOutline {

    pub fn new(segments: usize, r: f32, width: f32) -> CircleOutline {

        let (inner, outer) = ((r - width * 0.5).max(0.0), r + width * 0.5);
        let ring = unit_ring(segments);
        let mut vertices = Vec::with_capacity(ring.len() * 12);
        for (a, b) in ring.iter().zip(ring.iter().cycle().skip(1)) {

            // Inner and outer points of both segment edges
            let (ai, ao) = ([a[0] * inner, a[1] * inner], [a[0] * outer, a[1] * outer]);
            let (bi, bo) = ([b[0] * inner, b[1] * inner], [b[0] * outer, b[1] * outer]);

            vertices.extend_from_slice(&[
                ai[0], ai[1], ao[0], ao[1], bo[0], bo[1],
                ai[0], ai[1], bo[0], bo[1], bi[0], bi[1]
            ]);

        }

        CircleOutline {
            vertices: vertices
        }

    }

    pub fn render(&self, renderer: &mut Renderer, x: f32, y: f32) {
        renderer.draw_triangle_list(&[x, y], &self.vertices);
    }

}

