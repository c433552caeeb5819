// External Dependencies ------------------------------------------------------
use clock_ticks;


// Internal Dependencies ------------------------------------------------------
use engine::color::{Color, ColorName};
use engine::{Frame, PointerState, Scene};
use renderer::{Circle, CircleOutline, Renderer};


// Statics --------------------------------------------------------------------
pub const RAY_WIDTH: f32 = 3.0;
pub const NORMAL_LENGTH: f32 = 24.0;
const CIRCLE_SEGMENTS: usize = 64;
const HIT_MARKER_RADIUS: f32 = 3.0;


// Client Implementation ------------------------------------------------------
pub struct Client {

    scene: Scene,
    frame: Frame,
    debug_draw: bool,

    // Rendering
    emitter_circle: Circle,
    obstacle_circle: Circle,
    obstacle_outline: CircleOutline,
    hit_marker: Circle,

    // Colors
    background_color: [f32; 4],
    ray_color: [f32; 4],
    circle_color: [f32; 4],
    outline_color: [f32; 4],
    normal_color: [f32; 4],

    // Stats
    last_update_ms: u64

}

impl Client {

    pub fn new(scene: Scene, debug_draw: bool) -> Client {

        let frame = scene.evaluate();
        let emitter_radius = scene.emitter().radius();
        let obstacle_radius = scene.obstacle().radius();

        Client {

            scene: scene,
            frame: frame,
            debug_draw: debug_draw,

            // Rendering
            emitter_circle: Circle::new(CIRCLE_SEGMENTS, emitter_radius),
            obstacle_circle: Circle::new(CIRCLE_SEGMENTS, obstacle_radius),
            obstacle_outline: CircleOutline::new(CIRCLE_SEGMENTS, obstacle_radius, 2.0),
            hit_marker: Circle::new(8, HIT_MARKER_RADIUS),

            // Colors
            background_color: Color::from_name(ColorName::Black).into_f32(),
            ray_color: Color::from_name(ColorName::Yellow).with_alpha(0x60).into_f32(),
            circle_color: Color::from_name(ColorName::White).into_f32(),
            outline_color: Color::from_name(ColorName::Grey).into_f32(),
            normal_color: Color::from_name(ColorName::Red).into_f32(),

            // Stats
            last_update_ms: 0

        }

    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    pub fn update(&mut self, pointer: &PointerState) {
        let t = clock_ticks::precise_time_ms();
        self.frame = self.scene.tick(pointer);
        self.last_update_ms = clock_ticks::precise_time_ms() - t;
    }

    pub fn render(&self, renderer: &mut Renderer) {

        renderer.clear_color(self.background_color);

        // Rays, clipped at the obstacle
        renderer.set_color(self.ray_color);
        for segment in &self.frame.segments {
            renderer.line(&[
                segment.start.x, segment.start.y,
                segment.end.x, segment.end.y

            ], RAY_WIDTH);
        }

        // Circles
        let (emitter, obstacle) = (&self.frame.emitter, &self.frame.obstacle);
        renderer.set_color(self.circle_color);
        self.obstacle_circle.render(renderer, obstacle.x, obstacle.y);
        self.emitter_circle.render(renderer, emitter.x, emitter.y);

        renderer.set_color(self.outline_color);
        self.obstacle_outline.render(renderer, obstacle.x, obstacle.y);

        // Shaded hit points on top of the obstacle
        for hit in self.frame.hits() {
            renderer.set_color(Color::from_intensity(ColorName::Orange, hit.intensity).into_f32());
            self.hit_marker.render(renderer, hit.point.x, hit.point.y);

            if self.debug_draw {
                let end = hit.point + hit.normal * NORMAL_LENGTH;
                renderer.set_color(self.normal_color);
                renderer.line(&[hit.point.x, hit.point.y, end.x, end.y], 1.0);
            }
        }

    }

}

