// Internal Dependencies ------------------------------------------------------
use ::vector::Vec2;


// Pointer Input --------------------------------------------------------------
/// The pointer as sampled once at the start of a frame.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub primary_down: bool
}

impl PointerState {

    pub fn new(x: f32, y: f32, primary_down: bool) -> PointerState {
        PointerState {
            position: Vec2::new(x, y),
            primary_down: primary_down
        }
    }

    pub fn up(x: f32, y: f32) -> PointerState {
        PointerState::new(x, y, false)
    }

    pub fn down(x: f32, y: f32) -> PointerState {
        PointerState::new(x, y, true)
    }

}


// Traits ---------------------------------------------------------------------
pub trait InputSource {
    /// Pointer state for the next frame, `None` once the session is over.
    fn poll(&mut self) -> Option<PointerState>;
}

impl<'a, I: InputSource + ?Sized> InputSource for &'a mut I {
    fn poll(&mut self) -> Option<PointerState> {
        (**self).poll()
    }
}

