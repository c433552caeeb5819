// STD Dependencies -----------------------------------------------------------
use std::ops::{Add, Sub, Mul, Neg};


// 2D Vector ------------------------------------------------------------------
/// Used both as a point and as a direction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32
}

impl Vec2 {

    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 {
            x: x,
            y: y
        }
    }

    /// Unit vector for the given angle in radians.
    pub fn from_angle(r: f32) -> Vec2 {
        Vec2::new(r.cos(), r.sin())
    }

    #[inline]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the zero vector unchanged.
    pub fn normalize(&self) -> Vec2 {
        let l = self.length();
        if l == 0.0 {
            Vec2::ZERO

        } else {
            Vec2::new(self.x / l, self.y / l)
        }
    }

    /// Rotated by 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

}


// Operators ------------------------------------------------------------------
impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(p: [f32; 2]) -> Vec2 {
        Vec2::new(p[0], p[1])
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from(p: (f32, f32)) -> Vec2 {
        Vec2::new(p.0, p.1)
    }
}


// Conversion Utilities -------------------------------------------------------
pub fn lerp(a: Vec2, b: Vec2, u: f32) -> Vec2 {
    a + (b - a) * u
}

