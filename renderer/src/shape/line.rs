// Line Segments --------------------------------------------------------------
/// Quad of two triangles covering the segment `[x1, y1, x2, y2]` with a total
/// thickness of `width`. Degenerate segments produce an empty quad.
pub fn line_vertices(p: &[f32; 4], width: f32) -> [f32; 12] {

    let (dx, dy) = (p[2] - p[0], p[3] - p[1]);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if len > 0.0 {
        (-dy / len * width * 0.5, dx / len * width * 0.5)

    } else {
        (0.0, 0.0)
    };

    [
        p[0] + nx, p[1] + ny,
        p[0] - nx, p[1] - ny,
        p[2] + nx, p[3] + ny,

        p[0] - nx, p[1] - ny,
        p[2] - nx, p[3] - ny,
        p[2] + nx, p[3] + ny
    ]

}

