// External Dependencies ------------------------------------------------------
use image::RgbaImage;


// Triangle Rasterization -----------------------------------------------------
/// Fills all pixels whose center lies within the triangle, blending `color`
/// over the existing contents. Accepts either winding.
///
/// Walks the covered rows and fills the span between the triangle's edges on
/// each row, so the cost follows the covered area rather than the bounding box.
pub fn fill_triangle(
    buffer: &mut RgbaImage,
    a: [f32; 2],
    b: [f32; 2],
    c: [f32; 2],
    color: [f32; 4]
) {

    let area = edge(a, b, c);
    if area == 0.0 || !area.is_finite() || color[3] <= 0.0 {
        return;
    }

    let (w, h) = (buffer.width() as f32, buffer.height() as f32);
    let min_y = a[1].min(b[1]).min(c[1]).floor().max(0.0);
    let max_y = a[1].max(b[1]).max(c[1]).ceil().min(h);
    if min_y >= max_y {
        return;
    }

    let edges = [(a, b), (b, c), (c, a)];
    for y in min_y as u32..max_y as u32 {

        let cy = y as f32 + 0.5;
        let span = edges.iter().fold(None, |span, &(p, q)| {
            merge_span(span, edge_span(p, q, cy))
        });

        if let Some((left, right)) = span {

            // Pixels whose center lies within [left, right]
            let x0 = (left - 0.5).ceil().max(0.0);
            let x1 = ((right - 0.5).floor() + 1.0).min(w);
            if x0 >= x1 {
                continue;
            }

            for x in x0 as u32..x1 as u32 {
                let pixel = buffer.get_pixel_mut(x, y);
                pixel.0 = blend(pixel.0, color);
            }

        }

    }

}

/// Source over blending of a straight alpha color.
pub fn blend(dst: [u8; 4], color: [f32; 4]) -> [u8; 4] {

    let a = clamp(color[3]);
    if a >= 1.0 {
        return to_rgba8(color);
    }

    let da = dst[3] as f32 / 255.0;
    let oa = a + da * (1.0 - a);
    if oa <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let d = dst[i] as f32 / 255.0;
        let v = (clamp(color[i]) * a + d * da * (1.0 - a)) / oa;
        out[i] = (v * 255.0).round() as u8;
    }
    out[3] = (oa * 255.0).round() as u8;
    out

}

pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    [
        (clamp(color[0]) * 255.0).round() as u8,
        (clamp(color[1]) * 255.0).round() as u8,
        (clamp(color[2]) * 255.0).round() as u8,
        (clamp(color[3]) * 255.0).round() as u8
    ]
}


// Helpers --------------------------------------------------------------------
// Horizontal extent of the edge p-q on the row at height y
fn edge_span(p: [f32; 2], q: [f32; 2], y: f32) -> Option<(f32, f32)> {
    if (y < p[1] && y < q[1]) || (y > p[1] && y > q[1]) {
        None

    } else if p[1] == q[1] {
        Some((p[0].min(q[0]), p[0].max(q[0])))

    } else {
        let x = p[0] + (y - p[1]) * (q[0] - p[0]) / (q[1] - p[1]);
        Some((x, x))
    }
}

fn merge_span(a: Option<(f32, f32)>, b: Option<(f32, f32)>) -> Option<(f32, f32)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
        (a, None) => a,
        (None, b) => b
    }
}

#[inline]
fn edge(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

#[inline]
fn clamp(v: f32) -> f32 {
    v.max(0.0).min(1.0)
}

