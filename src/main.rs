//! Headless fly-through runner.
//!
//! Steps the scene for a fixed number of frames, optionally feeding a
//! scripted key sequence and dumping every frame as a JSON line.
//!
//! ```text
//! flythrough [OPTIONS.toml] [--frames N] [--press FRAME:KEY]...
//!            [--release FRAME:KEY]... [--dump] [--realtime] [--schema]
//! ```

use std::io::{self, BufWriter, Write};
use std::path::Path;

use flythrough::engine::{LoopControl, SceneComposer};
use flythrough::error::FlightError;
use flythrough::input::{InputEvent, InputProcessor};
use flythrough::options::Options;
use flythrough::util::FrameTiming;

/// One scripted key transition.
struct ScriptedKey {
    frame: u64,
    key: String,
    pressed: bool,
}

struct Args {
    options_path: Option<String>,
    frames: u64,
    script: Vec<ScriptedKey>,
    dump: bool,
    realtime: bool,
    schema: bool,
}

fn parse_scripted(spec: &str, pressed: bool) -> Result<ScriptedKey, FlightError> {
    let (frame, key) = spec.split_once(':').ok_or_else(|| {
        FlightError::InvalidOptions(format!("expected FRAME:KEY, got {spec:?}"))
    })?;
    let frame = frame.parse().map_err(|_| {
        FlightError::InvalidOptions(format!("bad frame number in {spec:?}"))
    })?;
    Ok(ScriptedKey {
        frame,
        key: key.to_owned(),
        pressed,
    })
}

fn parse_args() -> Result<Args, FlightError> {
    let mut args = Args {
        options_path: None,
        frames: 720,
        script: Vec::new(),
        dump: false,
        realtime: false,
        schema: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| {
            it.next().ok_or_else(|| {
                FlightError::InvalidOptions(format!("{flag} needs a value"))
            })
        };
        match arg.as_str() {
            "--frames" => {
                let n = value("--frames")?;
                args.frames = n.parse().map_err(|_| {
                    FlightError::InvalidOptions(format!("bad frame count {n:?}"))
                })?;
            }
            "--press" => args.script.push(parse_scripted(&value("--press")?, true)?),
            "--release" => {
                args.script.push(parse_scripted(&value("--release")?, false)?);
            }
            "--dump" => args.dump = true,
            "--realtime" => args.realtime = true,
            "--schema" => args.schema = true,
            flag if flag.starts_with("--") => {
                return Err(FlightError::InvalidOptions(format!(
                    "unknown flag {flag}"
                )));
            }
            path => args.options_path = Some(path.to_owned()),
        }
    }

    args.script.sort_by_key(|k| k.frame);
    Ok(args)
}

fn run(args: Args) -> Result<(), FlightError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.schema {
        serde_json::to_writer_pretty(&mut out, &Options::json_schema())
            .map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    let options = match &args.options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let fps = options.scene.fps;

    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut composer = SceneComposer::new(options);
    let mut timing = FrameTiming::new(if args.realtime { fps } else { 0 });
    let mut script = args.script.into_iter().peekable();

    'frames: for frame in 0..args.frames {
        while let Some(scripted) = script.next_if(|k| k.frame == frame) {
            let event = InputEvent::Key {
                key: scripted.key,
                pressed: scripted.pressed,
            };
            for command in input.handle_event(&event) {
                match composer.execute(command) {
                    LoopControl::Continue => {}
                    LoopControl::Help(text) => log::info!("{text}"),
                    LoopControl::Exit => break 'frames,
                }
            }
        }

        if args.realtime {
            std::thread::sleep(timing.time_until_next());
        }

        let output = composer.step();
        if args.dump {
            serde_json::to_writer(&mut out, &output).map_err(io::Error::from)?;
            writeln!(out)?;
        }
        timing.end_frame();
    }

    out.flush()?;
    let camera = composer.camera();
    log::info!(
        "stopped after {} frames (clock frame {}, tick {}), camera at {:?} heading {:.1}",
        timing.frames(),
        composer.clock().frame(),
        composer.clock().tick(),
        camera.position,
        camera.heading
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let result = parse_args().and_then(run);
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
