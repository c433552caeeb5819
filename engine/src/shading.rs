// Internal Dependencies ------------------------------------------------------
use ::vector::Vec2;


// Light Direction ------------------------------------------------------------
/// Unit vector pointing from a lit surface towards the light.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightDirection(Vec2);

impl LightDirection {

    /// Returns `None` for a zero or non-finite direction.
    pub fn new(x: f32, y: f32) -> Option<LightDirection> {
        let v = Vec2::new(x, y);
        if v.is_finite() && v.length_squared() > 0.0 {
            Some(LightDirection(v.normalize()))

        } else {
            None
        }
    }

    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.0
    }

}

impl Default for LightDirection {
    /// Up and to the left, with +y pointing down the screen.
    fn default() -> LightDirection {
        LightDirection(Vec2::new(-1.0, -1.0).normalize())
    }
}


// Lambertian Shading ---------------------------------------------------------
/// Cosine between the normal and the light, clamped to `[0, 1]`.
pub fn brightness(normal: Vec2, light: &LightDirection) -> f32 {
    normal.dot(light.vector()).max(0.0).min(1.0)
}

pub fn intensity(brightness: f32) -> u8 {
    (brightness.max(0.0).min(1.0) * 255.0).round() as u8
}

pub fn shade(normal: Vec2, light: &LightDirection) -> u8 {
    intensity(brightness(normal, light))
}

