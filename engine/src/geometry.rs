// Internal Dependencies ------------------------------------------------------
use ::vector::Vec2;


// Circle ---------------------------------------------------------------------
/// A positioned circle, used for both the emitter and the obstacle.
///
/// The radius is fixed at construction; only the center moves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    r: f32
}

impl Circle {

    pub fn new(x: f32, y: f32, r: f32) -> Circle {
        Circle {
            x: x,
            y: y,
            r: r
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_center(&mut self, p: Vec2) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Inclusive on the boundary.
    pub fn contains(&self, p: Vec2) -> bool {
        let (dx, dy) = (p.x - self.x, p.y - self.y);
        dx * dx + dy * dy <= self.r * self.r
    }

}


// Ray ------------------------------------------------------------------------
/// A half line `origin + direction * t` for `t >= 0`.
///
/// The direction is normalized on construction and never changes afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec2,
    direction: Vec2
}

impl Ray {

    pub fn new(origin: Vec2, direction: Vec2) -> Ray {
        Ray {
            origin: origin,
            direction: direction.normalize()
        }
    }

    pub fn from_angle(origin: Vec2, r: f32) -> Ray {
        Ray::new(origin, Vec2::from_angle(r))
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    pub fn angle(&self) -> f32 {
        self.direction.angle()
    }

}

