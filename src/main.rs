//! Replays cursor observations through the trail animator as JSON lines.

use std::path::Path;

use cursor_trail::error::TrailError;
use cursor_trail::replay::{self, ReplayScript};

fn run(script_path: Option<&str>) -> Result<(), TrailError> {
    let script = match script_path {
        Some(path) => {
            log::info!("Replaying cursor script '{path}'");
            ReplayScript::load(Path::new(path))?
        }
        None => {
            log::info!("No script given, replaying built-in demo path");
            ReplayScript::demo()
        }
    };

    let frames = replay::run(&script);
    let visible = frames.iter().filter(|f| f.needs_render).count();
    log::debug!("{} frames, {visible} with a visible trail", frames.len());

    let stdout = std::io::stdout();
    replay::write_json_lines(&mut stdout.lock(), &frames)
}

fn main() {
    env_logger::init();

    let script_path = std::env::args().nth(1);
    if let Err(e) = run(script_path.as_deref()) {
        log::error!("Usage: cursor-trail [replay-script.toml]");
        log::error!("{e}");
        std::process::exit(1);
    }
}
