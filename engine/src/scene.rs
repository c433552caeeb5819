// Internal Dependencies ------------------------------------------------------
use ::collision::{ray_intersect_circle_within, HitResult};
use ::config::{ConfigError, SceneConfig};
use ::field::RayField;
use ::geometry::{Circle, Ray};
use ::input::PointerState;
use ::shading::{self, LightDirection};
use ::vector::Vec2;


// Drag Handling --------------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Handle {
    Emitter,
    Obstacle
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragState {
    Idle,
    Dragging
}

/// Inclusive on the circle boundary.
pub fn pick(circle: &Circle, cursor: Vec2) -> bool {
    circle.contains(cursor)
}

#[derive(Debug, Clone)]
struct Draggable {
    circle: Circle,
    state: DragState
}

impl Draggable {

    fn new(circle: Circle) -> Draggable {
        Draggable {
            circle: circle,
            state: DragState::Idle
        }
    }

    // Returns whether the center moved
    fn follow(&mut self, cursor: Vec2) -> bool {
        if self.state == DragState::Dragging && self.circle.center() != cursor {
            self.circle.set_center(cursor);
            true

        } else {
            false
        }
    }

}


// Frame Output ---------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
    pub brightness: f32,
    pub intensity: u8
}

/// The visible part of a single ray for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaySegment {
    pub start: Vec2,
    pub end: Vec2,
    pub length: f32,
    pub hit: Option<SurfaceHit>
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub emitter: Circle,
    pub obstacle: Circle,
    pub segments: Vec<RaySegment>
}

impl Frame {

    pub fn hits<'a>(&'a self) -> Box<dyn Iterator<Item = &'a SurfaceHit> + 'a> {
        Box::new(self.segments.iter().filter_map(|s| s.hit.as_ref()))
    }

    pub fn hit_count(&self) -> usize {
        self.segments.iter().filter(|s| s.hit.is_some()).count()
    }

}


// Scene Controller -----------------------------------------------------------
/// Owns the emitter, the obstacle and the ray field cast by the emitter.
#[derive(Debug, Clone)]
pub struct Scene {
    emitter: Draggable,
    obstacle: Draggable,
    field: RayField,
    light: LightDirection,
    ray_count: usize,
    max_ray_length: f32,
    pointer_down: bool,
    regenerations: usize
}

impl Scene {

    pub fn new(config: &SceneConfig) -> Result<Scene, ConfigError> {
        config.validate()?;
        let light = config.light_direction().unwrap_or_default();
        Ok(Scene::from_parts(
            config.emitter,
            config.obstacle,
            config.ray_count,
            config.max_ray_length,
            light
        ))
    }

    /// Builds a scene without validating its parts.
    pub fn from_parts(
        emitter: Circle,
        obstacle: Circle,
        ray_count: usize,
        max_ray_length: f32,
        light: LightDirection

    ) -> Scene {
        Scene {
            field: RayField::generate(&emitter, ray_count),
            emitter: Draggable::new(emitter),
            obstacle: Draggable::new(obstacle),
            light: light,
            ray_count: ray_count,
            max_ray_length: max_ray_length,
            pointer_down: false,
            regenerations: 0
        }
    }

    pub fn emitter(&self) -> &Circle {
        &self.emitter.circle
    }

    pub fn obstacle(&self) -> &Circle {
        &self.obstacle.circle
    }

    pub fn field(&self) -> &RayField {
        &self.field
    }

    pub fn light(&self) -> &LightDirection {
        &self.light
    }

    pub fn max_ray_length(&self) -> f32 {
        self.max_ray_length
    }

    /// Number of times the field was rebuilt after startup.
    pub fn regenerations(&self) -> usize {
        self.regenerations
    }

    pub fn drag_state(&self, handle: Handle) -> DragState {
        match handle {
            Handle::Emitter => self.emitter.state,
            Handle::Obstacle => self.obstacle.state
        }
    }

    pub fn dragging(&self) -> Option<Handle> {
        if self.emitter.state == DragState::Dragging {
            Some(Handle::Emitter)

        } else if self.obstacle.state == DragState::Dragging {
            Some(Handle::Obstacle)

        } else {
            None
        }
    }

    pub fn move_emitter(&mut self, p: Vec2) {
        self.emitter.circle.set_center(p);
        self.regenerate();
    }

    pub fn move_obstacle(&mut self, p: Vec2) {
        self.obstacle.circle.set_center(p);
    }

    /// Applies one frame of pointer input to the drag state machines.
    ///
    /// A press only starts a drag when it lands on a circle, the emitter
    /// taking precedence when both are under the pointer. A release always
    /// ends any drag.
    pub fn input(&mut self, pointer: &PointerState) {

        let pressed = pointer.primary_down && !self.pointer_down;
        self.pointer_down = pointer.primary_down;

        if !pointer.primary_down {
            if let Some(handle) = self.dragging() {
                debug!("[Scene] Released {:?}.", handle);
            }
            self.emitter.state = DragState::Idle;
            self.obstacle.state = DragState::Idle;
            return;
        }

        if pressed {
            if pick(&self.emitter.circle, pointer.position) {
                self.emitter.state = DragState::Dragging;

            } else if pick(&self.obstacle.circle, pointer.position) {
                self.obstacle.state = DragState::Dragging;
            }

            if let Some(handle) = self.dragging() {
                debug!("[Scene] Picked {:?} at ({}, {}).", handle, pointer.position.x, pointer.position.y);
            }
        }

        if self.emitter.follow(pointer.position) {
            self.regenerate();
        }

        self.obstacle.follow(pointer.position);

    }

    /// Casts every ray of the current field against the obstacle.
    pub fn evaluate(&self) -> Frame {
        Frame {
            emitter: self.emitter.circle,
            obstacle: self.obstacle.circle,
            segments: self.field.iter().map(|ray| self.trace(ray)).collect()
        }
    }

    pub fn tick(&mut self, pointer: &PointerState) -> Frame {
        self.input(pointer);
        self.evaluate()
    }

    fn trace(&self, ray: &Ray) -> RaySegment {
        match ray_intersect_circle_within(ray, &self.obstacle.circle, self.max_ray_length) {
            Some(hit) => RaySegment {
                start: ray.origin(),
                end: hit.point,
                length: hit.distance,
                hit: Some(self.surface(&hit))
            },
            None => RaySegment {
                start: ray.origin(),
                end: ray.at(self.max_ray_length),
                length: self.max_ray_length,
                hit: None
            }
        }
    }

    fn surface(&self, hit: &HitResult) -> SurfaceHit {
        let brightness = shading::brightness(hit.normal, &self.light);
        SurfaceHit {
            point: hit.point,
            normal: hit.normal,
            distance: hit.distance,
            brightness: brightness,
            intensity: shading::intensity(brightness)
        }
    }

    fn regenerate(&mut self) {
        self.field = RayField::generate(&self.emitter.circle, self.ray_count);
        self.regenerations += 1;
    }

}

