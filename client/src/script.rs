// External Dependencies ------------------------------------------------------
use toml;


// Internal Dependencies ------------------------------------------------------
use engine::config::{get_integer, get_point, parse_table, ConfigError, SceneConfig};
use engine::vector::lerp;
use engine::{InputSource, PointerState, Vec2};


// Statics --------------------------------------------------------------------
pub const DEFAULT_STROKE_FRAMES: u32 = 30;
pub const MAX_STROKE_FRAMES: u32 = 100_000;


// Drag Strokes ---------------------------------------------------------------
/// A single press, move and release gesture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragStroke {
    pub from: Vec2,
    pub to: Vec2,
    pub frames: u32
}

impl DragStroke {

    /// Frame counts above `MAX_STROKE_FRAMES` are clamped.
    pub fn new(from: Vec2, to: Vec2, frames: u32) -> DragStroke {
        DragStroke {
            from: from,
            to: to,
            frames: frames.min(MAX_STROKE_FRAMES)
        }
    }

    // Press at `from`, `frames` held steps towards `to`, release at `to`
    fn states(&self) -> Vec<PointerState> {

        let mut states = Vec::with_capacity(self.frames as usize + 2);
        states.push(PointerState::down(self.from.x, self.from.y));

        for i in 1..=self.frames {
            let p = lerp(self.from, self.to, i as f32 / self.frames as f32);
            states.push(PointerState::down(p.x, p.y));
        }

        states.push(PointerState::up(self.to.x, self.to.y));
        states

    }

}


// Scripted Input -------------------------------------------------------------
/// Replays a list of drag strokes, one pointer state per frame.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    states: Vec<PointerState>,
    index: usize
}

impl ScriptedInput {

    pub fn new(strokes: &[DragStroke], idle: u32) -> ScriptedInput {

        let mut states: Vec<PointerState> = Vec::new();
        for stroke in strokes {
            states.extend(stroke.states());
        }

        let last = states.last().map(|s| s.position).unwrap_or_default();
        for _ in 0..idle {
            states.push(PointerState::up(last.x, last.y));
        }

        ScriptedInput {
            states: states,
            index: 0
        }

    }

    /// Drags the emitter across the canvas, then swings the obstacle around.
    pub fn demo(config: &SceneConfig) -> ScriptedInput {
        let (w, h) = (config.width as f32, config.height as f32);
        let emitter = config.emitter.center();
        let obstacle = config.obstacle.center();
        ScriptedInput::new(&[
            DragStroke::new(emitter, Vec2::new(w * 0.3, h * 0.7), 60),
            DragStroke::new(obstacle, Vec2::new(w * 0.7, h * 0.35), 60),
            DragStroke::new(Vec2::new(w * 0.3, h * 0.7), emitter, 60)

        ], 30)
    }

    pub fn from_toml(string: &str) -> Result<ScriptedInput, ConfigError> {

        let value = parse_table(string)?;

        let mut strokes = Vec::new();
        match value.get("drag") {
            Some(&toml::Value::Array(ref drags)) => {
                for drag in drags {
                    if let toml::Value::Table(ref properties) = *drag {
                        strokes.push(parse_stroke(properties)?);

                    } else {
                        return Err(ConfigError::InvalidValue("drag".to_string(), "an array of tables"));
                    }
                }
            },
            Some(_) => return Err(ConfigError::InvalidValue("drag".to_string(), "an array of tables")),
            None => {}
        }

        let idle = match get_integer(&value, "idle")? {
            Some(i) => to_frames("idle", i)?,
            None => 0
        };

        Ok(ScriptedInput::new(&strokes, idle))

    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.states.len() - self.index
    }

}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<PointerState> {
        let state = self.states.get(self.index).cloned();
        if state.is_some() {
            self.index += 1;
        }
        state
    }
}


// Helpers --------------------------------------------------------------------
fn parse_stroke(properties: &toml::Table) -> Result<DragStroke, ConfigError> {

    let from = get_point(properties, "from")?.ok_or_else(|| {
        ConfigError::InvalidValue("drag.from".to_string(), "a pair of numbers")
    })?;

    let to = get_point(properties, "to")?.ok_or_else(|| {
        ConfigError::InvalidValue("drag.to".to_string(), "a pair of numbers")
    })?;

    let frames = match get_integer(properties, "frames")? {
        Some(i) => to_frames("drag.frames", i)?,
        None => DEFAULT_STROKE_FRAMES
    };

    Ok(DragStroke::new(Vec2::from(from), Vec2::from(to), frames))

}

fn to_frames(key: &str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 || value > i64::from(MAX_STROKE_FRAMES) {
        Err(ConfigError::InvalidValue(key.to_string(), "an integer between 0 and 100000"))

    } else {
        Ok(value as u32)
    }
}

