extern crate renderer;
extern crate image;

use std::env;
use std::fs;

use renderer::{line_vertices, Circle, CircleOutline, Renderer};


// Mocks ----------------------------------------------------------------------
fn canvas() -> Renderer {
    let mut renderer = Renderer::new(100, 100);
    renderer.clear_color([0.0, 0.0, 0.0, 1.0]);
    renderer.set_color([1.0, 1.0, 1.0, 1.0]);
    renderer
}


// Pixel center test against all three edges, `None` when too close to call
fn center_inside(t: &[f32; 6], p: [f32; 2]) -> Option<bool> {
    let (a, b, c) = ([t[0], t[1]], [t[2], t[3]], [t[4], t[5]]);
    let edge = |u: [f32; 2], v: [f32; 2]| {
        let len = ((v[0] - u[0]).powi(2) + (v[1] - u[1]).powi(2)).sqrt();
        ((v[0] - u[0]) * (p[1] - u[1]) - (v[1] - u[1]) * (p[0] - u[0])) / len
    };
    let sign = if edge_area(a, b, c) > 0.0 { 1.0 } else { -1.0 };
    let d = [edge(b, c) * sign, edge(c, a) * sign, edge(a, b) * sign];
    if d.iter().any(|d| d.abs() < 0.01) {
        None

    } else {
        Some(d.iter().all(|d| *d > 0.0))
    }
}

fn edge_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}


// Tests ----------------------------------------------------------------------
#[test]
fn test_clear() {

    let mut renderer = Renderer::new(8, 4);
    assert_eq!(renderer.width(), 8);
    assert_eq!(renderer.height(), 4);
    assert_eq!(renderer.pixel(0, 0), [0, 0, 0, 0], "should start out transparent");

    renderer.clear_color([1.0, 0.5, 0.0, 1.0]);
    assert_eq!(renderer.pixel(7, 3), [255, 128, 0, 255], "should fill the whole buffer");

}

#[test]
fn test_line() {

    let mut renderer = canvas();
    renderer.line(&[10.0, 50.0, 90.0, 50.0], 4.0);

    assert_eq!(renderer.pixel(50, 50), [255, 255, 255, 255], "should cover the segment");
    assert_eq!(renderer.pixel(12, 49), [255, 255, 255, 255]);
    assert_eq!(renderer.pixel(50, 55), [0, 0, 0, 255], "should not extend past the width");
    assert_eq!(renderer.pixel(95, 50), [0, 0, 0, 255], "should not extend past the end");

}

#[test]
fn test_line_vertices() {

    let v = line_vertices(&[0.0, 0.0, 10.0, 0.0], 2.0);
    assert_eq!(&v[0..6], &[0.0, 1.0, 0.0, -1.0, 10.0, 1.0], "should offset by half the width");
    assert_eq!(&v[6..12], &[0.0, -1.0, 10.0, -1.0, 10.0, 1.0]);

    let mut renderer = canvas();
    renderer.line(&[20.0, 20.0, 20.0, 20.0], 3.0);
    assert_eq!(renderer.pixel(20, 20), [0, 0, 0, 255], "should skip degenerate segments");

}

#[test]
fn test_diagonal_line() {

    let mut renderer = canvas();
    renderer.line(&[0.0, 0.0, 100.0, 100.0], 3.0);

    for i in 0..100 {
        assert_eq!(renderer.pixel(i, i), [255, 255, 255, 255], "should cover the diagonal");
    }
    assert_eq!(renderer.pixel(90, 10), [0, 0, 0, 255]);
    assert_eq!(renderer.pixel(10, 90), [0, 0, 0, 255]);

}

#[test]
fn test_circle() {

    let mut renderer = canvas();
    let circle = Circle::new(32, 20.0);
    assert_eq!(circle.radius(), 20.0);
    circle.render(&mut renderer, 50.0, 50.0);

    assert_eq!(renderer.pixel(50, 50), [255, 255, 255, 255], "should fill the center");
    assert_eq!(renderer.pixel(60, 45), [255, 255, 255, 255], "should fill the inside");
    assert_eq!(renderer.pixel(50, 75), [0, 0, 0, 255], "should not draw outside the radius");
    assert_eq!(renderer.pixel(10, 10), [0, 0, 0, 255]);

}

#[test]
fn test_circle_outline() {

    let mut renderer = canvas();
    CircleOutline::new(64, 20.0, 4.0).render(&mut renderer, 50.0, 50.0);

    assert_eq!(renderer.pixel(50, 50), [0, 0, 0, 255], "should leave the inside empty");
    assert_eq!(renderer.pixel(70, 50), [255, 255, 255, 255], "should draw the ring");
    assert_eq!(renderer.pixel(50, 29), [255, 255, 255, 255], "should draw the ring");
    assert_eq!(renderer.pixel(80, 50), [0, 0, 0, 255]);

}

#[test]
fn test_alpha_blending() {

    let mut renderer = Renderer::new(40, 40);
    renderer.clear_color([1.0, 1.0, 1.0, 1.0]);
    renderer.set_color([0.0, 0.0, 0.0, 0.5]);
    Circle::new(32, 10.0).render(&mut renderer, 20.0, 20.0);

    assert_eq!(renderer.pixel(20, 20), [128, 128, 128, 255], "should blend over the background");
    assert_eq!(renderer.pixel(2, 2), [255, 255, 255, 255], "should only touch covered pixels");

    renderer.set_color([0.0, 0.0, 0.0, 0.0]);
    renderer.line(&[0.0, 2.0, 40.0, 2.0], 4.0);
    assert_eq!(renderer.pixel(2, 2), [255, 255, 255, 255], "should ignore fully transparent colors");

}

#[test]
fn test_clipping() {

    let mut renderer = canvas();
    Circle::new(32, 30.0).render(&mut renderer, 0.0, 0.0);
    renderer.line(&[50.0, 50.0, 5000.0, 50.0], 2.0);
    renderer.line(&[-500.0, -500.0, -400.0, -400.0], 2.0);
    renderer.line(&[50.0, -1000.0, 50.0, 1000.0], 2.0);

    assert_eq!(renderer.pixel(0, 0), [255, 255, 255, 255], "should draw partially visible shapes");
    assert_eq!(renderer.pixel(99, 50), [255, 255, 255, 255], "should clip long lines at the edge");
    assert_eq!(renderer.pixel(50, 0), [255, 255, 255, 255]);
    assert_eq!(renderer.pixel(50, 99), [255, 255, 255, 255]);
    assert_eq!(renderer.pixel(40, 40), [0, 0, 0, 255]);

}

#[test]
fn test_triangle_coverage() {

    let triangles: [[f32; 6]; 4] = [
        [10.3, 5.7, 80.2, 20.1, 35.6, 90.4],
        [90.1, 90.3, 5.2, 60.7, 70.4, 3.9],
        [-20.3, 40.2, 120.7, 45.6, 50.1, 47.3],
        [33.3, 33.3, 33.8, 95.1, 34.4, 12.2]
    ];

    for t in &triangles {

        let mut renderer = canvas();
        renderer.draw_triangle_list(&[0.0, 0.0], t);

        for y in 0..100 {
            for x in 0..100 {
                let p = [x as f32 + 0.5, y as f32 + 0.5];
                match center_inside(t, p) {
                    Some(inside) => {
                        let expected = if inside { 255 } else { 0 };
                        assert_eq!(renderer.pixel(x, y)[0], expected, "pixel ({}, {}) of {:?}", x, y, t);
                    },
                    None => {}
                }
            }
        }

    }

}

#[test]
fn test_frames() {

    let mut renderer = canvas();
    renderer.begin();
    renderer.end();
    renderer.begin();
    renderer.end();
    assert_eq!(renderer.frames(), 2);
    assert!(renderer.dt() >= 0.0);

}

#[test]
fn test_save() {

    let dir = env::temp_dir().join(format!("renderer-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("frame.png");

    let mut renderer = canvas();
    renderer.set_color([1.0, 0.0, 0.0, 1.0]);
    Circle::new(16, 10.0).render(&mut renderer, 50.0, 50.0);
    renderer.save(&path).expect("should write a png");

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (100, 100));
    assert_eq!(image.get_pixel(50, 50).0, [255, 0, 0, 255], "should round trip the frame");
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);

    fs::remove_dir_all(&dir).unwrap();

}

