//! **engine**
//!
//! Casts a fan of rays from a movable emitter circle against a movable
//! obstacle circle and shades the hit points. The engine never draws, it
//! hands a `Frame` of ray segments to whatever renders it.
#![deny(
    trivial_casts,
    unsafe_code,
    unused_import_braces
)]


// Crates ---------------------------------------------------------------------
#[macro_use]
extern crate log;
extern crate toml;


// Modules --------------------------------------------------------------------
pub mod vector;
pub mod geometry;
pub mod field;
pub mod collision;
pub mod shading;
pub mod color;
pub mod config;
pub mod input;
pub mod scene;


// Re-Exports -----------------------------------------------------------------
pub use self::vector::Vec2;
pub use self::geometry::{Circle, Ray};
pub use self::field::RayField;
pub use self::collision::{ray_intersect_circle, ray_intersect_circle_within, HitResult};
pub use self::shading::{brightness, shade, LightDirection};
pub use self::config::{ConfigError, SceneConfig};
pub use self::input::{InputSource, PointerState};
pub use self::scene::{pick, DragState, Frame, Handle, RaySegment, Scene, SurfaceHit};

