// Modules --------------------------------------------------------------------
mod line;
mod circle;
mod circle_outline;


// Re-Exports -----------------------------------------------------------------
pub use self::line::line_vertices;
pub use self::circle::Circle;
pub use self::circle_outline::CircleOutline;
