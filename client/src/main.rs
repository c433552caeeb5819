// Crates ---------------------------------------------------------------------
#[macro_use]
extern crate log;
extern crate anyhow;
extern crate client;
extern crate engine;
extern crate clap;


// STD Dependencies -----------------------------------------------------------
use std::path::{Path, PathBuf};
use std::process;


// External Dependencies ------------------------------------------------------
use anyhow::{Context, Result};
use clap::{Arg, App, ArgMatches};


// Internal Dependencies ------------------------------------------------------
use client::{Options, ScriptedInput, LOG_LEVELS};
use engine::SceneConfig;


// Main Loop ------------------------------------------------------------------
fn main() {

    let matches = App::new("Raycast Client")
        .version("0.1")
        .author("Ivo Wetzel <ivo.wetzel@googlemail.com>")
        .about("Casts a fan of rays against a draggable obstacle and renders the shaded hits")
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("Loads the scene configuration from a TOML file.")
            .takes_value(true)
        )
        .arg(Arg::with_name("script")
            .short("s")
            .long("script")
            .value_name("FILE")
            .help("Replays the drag strokes from a TOML file instead of the demo script.")
            .takes_value(true)
        )
        .arg(Arg::with_name("frames")
            .short("f")
            .long("frames")
            .value_name("N")
            .help("Stops after the specified number of frames.")
            .takes_value(true)
        )
        .arg(Arg::with_name("output")
            .short("o")
            .long("output")
            .value_name("DIR")
            .help("Writes rendered frames as PNG files into the directory.")
            .takes_value(true)
        )
        .arg(Arg::with_name("every")
            .short("e")
            .long("every")
            .value_name("K")
            .help("Only writes every K-th frame, the last frame is always written.")
            .takes_value(true)
            .default_value("1")
        )
        .arg(Arg::with_name("normals")
            .short("n")
            .long("normals")
            .help("Draws the surface normal at each hit point.")
        )
        .arg(Arg::with_name("realtime")
            .short("r")
            .long("realtime")
            .help("Paces the frames at the configured frame rate.")
        )
        .arg(Arg::with_name("log-level")
            .short("l")
            .long("log-level")
            .value_name("LEVEL")
            .help("Sets the log level.")
            .takes_value(true)
            .possible_values(&LOG_LEVELS)
            .default_value("info")
        )
        .get_matches();

    client::init_logger(client::parse_level(matches.value_of("log-level").unwrap_or("info")));

    if let Err(err) = start(&matches) {
        error!("{:#}", err);
        process::exit(1);
    }

}

fn start(matches: &ArgMatches) -> Result<()> {

    let config = match matches.value_of("config") {
        Some(path) => client::load_config(Path::new(path))?,
        None => SceneConfig::default()
    };

    let input = match matches.value_of("script") {
        Some(path) => client::load_script(Path::new(path))?,
        None => ScriptedInput::demo(&config)
    };

    let options = Options {
        output: matches.value_of("output").map(PathBuf::from),
        every: parse_number(matches, "every")?.unwrap_or(1),
        max_frames: parse_number(matches, "frames")?,
        normals: matches.is_present("normals"),
        realtime: matches.is_present("realtime")
    };

    client::run(&config, input, &options).map(|_| ())

}

fn parse_number(matches: &ArgMatches, name: &str) -> Result<Option<u64>> {
    match matches.value_of(name) {
        Some(value) => {
            let n = value.parse::<u64>().with_context(|| {
                format!("--{} expects a positive integer, got \"{}\"", name, value)
            })?;
            Ok(Some(n))
        },
        None => Ok(None)
    }
}

