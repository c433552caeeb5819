// STD Dependencies -----------------------------------------------------------
use std::error::Error;
use std::fmt;


// External Dependencies ------------------------------------------------------
use toml;


// Internal Dependencies ------------------------------------------------------
use ::geometry::Circle;
use ::shading::LightDirection;


// Statics --------------------------------------------------------------------
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_RAY_COUNT: usize = 1000;
pub const DEFAULT_MAX_RAY_LENGTH: f32 = 1000.0;

pub const MAX_RAY_COUNT: usize = 100_000;
pub const MAX_CANVAS_SIZE: u32 = 16_384;


// Errors ---------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// TOML syntax error at `line:column` (both 1-based).
    Parse(usize, usize, String),
    /// A key holding a value of the wrong type.
    InvalidValue(String, &'static str),
    /// A well formed value outside its allowed range.
    Invalid(String)
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::Parse(line, col, ref desc) => {
                write!(f, "syntax error at {}:{}: {}", line, col, desc)
            },
            ConfigError::InvalidValue(ref key, expected) => {
                write!(f, "invalid value for \"{}\", expected {}", key, expected)
            },
            ConfigError::Invalid(ref reason) => write!(f, "{}", reason)
        }
    }
}

impl Error for ConfigError {}


// Scene Configuration --------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub ray_count: usize,
    pub max_ray_length: f32,
    pub emitter: Circle,
    pub obstacle: Circle,
    pub light: [f32; 2]
}

impl Default for SceneConfig {
    fn default() -> SceneConfig {
        SceneConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            ray_count: DEFAULT_RAY_COUNT,
            max_ray_length: DEFAULT_MAX_RAY_LENGTH,
            emitter: Circle::new(200.0, 200.0, 80.0),
            obstacle: Circle::new(650.0, 300.0, 140.0),
            light: [-1.0, -1.0]
        }
    }
}

impl SceneConfig {

    /// Missing keys keep their default values. The result is not validated.
    pub fn from_toml(string: &str) -> Result<SceneConfig, ConfigError> {

        let value = parse_table(string)?;
        let mut config = SceneConfig::default();

        if let Some(width) = get_integer(&value, "width")? {
            config.width = to_u32("width", width)?;
        }

        if let Some(height) = get_integer(&value, "height")? {
            config.height = to_u32("height", height)?;
        }

        if let Some(fps) = get_integer(&value, "fps")? {
            config.fps = to_u32("fps", fps)?;
        }

        if let Some(rays) = get_integer(&value, "rays")? {
            if rays < 0 || rays > MAX_RAY_COUNT as i64 {
                return Err(ConfigError::InvalidValue("rays".to_string(), "an integer between 1 and 100000"));
            }
            config.ray_count = rays as usize;
        }

        if let Some(length) = get_float(&value, "max_ray_length")? {
            config.max_ray_length = length;
        }

        if let Some(light) = get_point(&value, "light")? {
            config.light = light;
        }

        if let Some(circle) = get_circle(&value, "emitter", &config.emitter)? {
            config.emitter = circle;
        }

        if let Some(circle) = get_circle(&value, "obstacle", &config.obstacle)? {
            config.obstacle = circle;
        }

        Ok(config)

    }

    /// Checked once at startup, frames assume a valid configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {

        if self.width == 0 || self.height == 0 {
            Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}", self.width, self.height
            )))

        } else if self.width > MAX_CANVAS_SIZE || self.height > MAX_CANVAS_SIZE {
            Err(ConfigError::Invalid(format!(
                "canvas size must not exceed {}x{}, got {}x{}",
                MAX_CANVAS_SIZE, MAX_CANVAS_SIZE, self.width, self.height
            )))

        } else if self.fps == 0 {
            Err(ConfigError::Invalid("fps must be positive".to_string()))

        } else if self.ray_count == 0 {
            Err(ConfigError::Invalid("ray count must be at least 1".to_string()))

        } else if self.ray_count > MAX_RAY_COUNT {
            Err(ConfigError::Invalid(format!(
                "ray count must not exceed {}, got {}", MAX_RAY_COUNT, self.ray_count
            )))

        } else if !(self.max_ray_length.is_finite() && self.max_ray_length > 0.0) {
            Err(ConfigError::Invalid(format!(
                "max ray length must be positive, got {}", self.max_ray_length
            )))

        } else if !valid_radius(&self.emitter) {
            Err(ConfigError::Invalid(format!(
                "emitter radius must be positive, got {}", self.emitter.radius()
            )))

        } else if !valid_radius(&self.obstacle) {
            Err(ConfigError::Invalid(format!(
                "obstacle radius must be positive, got {}", self.obstacle.radius()
            )))

        } else if self.light_direction().is_none() {
            Err(ConfigError::Invalid("light direction must not be zero".to_string()))

        } else {
            Ok(())
        }

    }

    pub fn light_direction(&self) -> Option<LightDirection> {
        LightDirection::new(self.light[0], self.light[1])
    }

}


// TOML Helpers ---------------------------------------------------------------
pub fn parse_table(string: &str) -> Result<toml::Table, ConfigError> {
    let mut parser = toml::Parser::new(string);
    match parser.parse() {
        Some(table) => Ok(table),
        None => {
            let (lo, desc) = match parser.errors.first() {
                Some(err) => (err.lo, err.desc.clone()),
                None => (0, "unknown error".to_string())
            };
            let (line, col) = parser.to_linecol(lo);
            Err(ConfigError::Parse(line + 1, col + 1, desc))
        }
    }
}

pub fn get_integer(table: &toml::Table, key: &str) -> Result<Option<i64>, ConfigError> {
    match table.get(key) {
        Some(value) => match value.as_integer() {
            Some(i) => Ok(Some(i)),
            None => Err(ConfigError::InvalidValue(key.to_string(), "an integer"))
        },
        None => Ok(None)
    }
}

pub fn get_float(table: &toml::Table, key: &str) -> Result<Option<f32>, ConfigError> {
    match table.get(key) {
        Some(value) => match as_number(value) {
            Some(f) => Ok(Some(f)),
            None => Err(ConfigError::InvalidValue(key.to_string(), "a number"))
        },
        None => Ok(None)
    }
}

/// A `[x, y]` pair of numbers.
pub fn get_point(table: &toml::Table, key: &str) -> Result<Option<[f32; 2]>, ConfigError> {
    match table.get(key) {
        Some(&toml::Value::Array(ref values)) if values.len() == 2 => {
            match (as_number(&values[0]), as_number(&values[1])) {
                (Some(x), Some(y)) => Ok(Some([x, y])),
                _ => Err(ConfigError::InvalidValue(key.to_string(), "a pair of numbers"))
            }
        },
        Some(_) => Err(ConfigError::InvalidValue(key.to_string(), "a pair of numbers")),
        None => Ok(None)
    }
}

fn get_circle(
    table: &toml::Table,
    key: &str,
    fallback: &Circle

) -> Result<Option<Circle>, ConfigError> {
    match table.get(key) {
        Some(&toml::Value::Table(ref properties)) => {
            let x = get_float(properties, "x")?.unwrap_or(fallback.x);
            let y = get_float(properties, "y")?.unwrap_or(fallback.y);
            let r = get_float(properties, "radius")?.unwrap_or(fallback.radius());
            Ok(Some(Circle::new(x, y, r)))
        },
        Some(_) => Err(ConfigError::InvalidValue(key.to_string(), "a table")),
        None => Ok(None)
    }
}

fn as_number(value: &toml::Value) -> Option<f32> {
    match *value {
        toml::Value::Float(f) => Some(f as f32),
        toml::Value::Integer(i) => Some(i as f32),
        _ => None
    }
}

fn to_u32(key: &str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 || value > i64::from(u32::max_value()) {
        Err(ConfigError::InvalidValue(key.to_string(), "a positive integer"))

    } else {
        Ok(value as u32)
    }
}

fn valid_radius(circle: &Circle) -> bool {
    circle.radius().is_finite() && circle.radius() > 0.0
}

