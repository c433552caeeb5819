// STD Dependencies -----------------------------------------------------------
use std::f32::consts;
use std::slice;


// Internal Dependencies ------------------------------------------------------
use ::geometry::{Circle, Ray};
use ::vector::Vec2;


// Ray Field ------------------------------------------------------------------
/// A fan of rays evenly spaced around a single origin.
///
/// Ray `i` points at angle `2π·i/N`. A field is never updated in place,
/// moving the origin means generating a new one.
#[derive(Debug, Clone)]
pub struct RayField {
    origin: Vec2,
    rays: Vec<Ray>
}

impl RayField {

    pub fn generate(emitter: &Circle, count: usize) -> RayField {

        let origin = emitter.center();
        let step = consts::PI * 2.0 / count as f32;

        let mut rays = Vec::with_capacity(count);
        for i in 0..count {
            let angle = i as f32 * step;
            trace!("[RayField] Ray #{} angle {}", i, angle);
            rays.push(Ray::from_angle(origin, angle));
        }

        debug!("[RayField] Generated {} rays from ({}, {}).", count, origin.x, origin.y);

        RayField {
            origin: origin,
            rays: rays
        }

    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ray> {
        self.rays.get(index)
    }

    /// The nominal angle of ray `index`, in `[0, 2π)`.
    pub fn angle(&self, index: usize) -> f32 {
        index as f32 * consts::PI * 2.0 / self.rays.len() as f32
    }

    pub fn iter(&self) -> slice::Iter<Ray> {
        self.rays.iter()
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays[..]
    }

}

impl<'a> IntoIterator for &'a RayField {
    type Item = &'a Ray;
    type IntoIter = slice::Iter<'a, Ray>;
    fn into_iter(self) -> slice::Iter<'a, Ray> {
        self.rays.iter()
    }
}

