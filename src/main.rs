//! Headless driver: runs a scripted tour of the camera modes on a real
//! tick clock and logs the poses a renderer would draw.
//!
//! Usage: `lakeview [options.toml] [props.cfg]`

use std::path::Path;

use lakeview::engine::SceneEngine;
use lakeview::options::{Options, PropTable};
use lakeview::util::FrameClock;
use lakeview::InputEvent;

/// Ticks to run before exiting.
const TICKS: u32 = 240;

/// Input fed to the engine at a given tick.
fn script(tick: u32) -> Vec<InputEvent> {
    match tick {
        10 => vec![InputEvent::press("KeyP")],
        50 => vec![InputEvent::press("KeyC")],
        80 => vec![InputEvent::press("ArrowUp"), InputEvent::press("ArrowLeft")],
        100 => vec![InputEvent::release("ArrowLeft")],
        120 => vec![
            InputEvent::release("ArrowUp"),
            InputEvent::PointerMotion { dx: 0.0, dy: 12.0 },
            InputEvent::press("Space"),
        ],
        140 => vec![InputEvent::press("KeyE"), InputEvent::press("KeyO")],
        160 => vec![InputEvent::press("KeyM")],
        200 => vec![InputEvent::press("KeyM")],
        220 => vec![InputEvent::press("KeyR")],
        _ => Vec::new(),
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = args
        .next()
        .map_or_else(Options::default, |p| Options::load_or_default(Path::new(&p)));
    let placements = args
        .next()
        .map_or_else(PropTable::default, |p| PropTable::load(Path::new(&p)));
    if !placements.issues().is_empty() {
        log::warn!(
            "prop config: {} problem(s), see above",
            placements.issues().len()
        );
    }

    let mut engine = SceneEngine::new(options, placements);
    let mut clock = FrameClock::default();

    for tick in 0..TICKS {
        std::thread::sleep(clock.until_next_tick());
        let dt = clock.tick();

        for event in script(tick) {
            let _ = engine.handle_input(event);
        }
        let report = engine.update(dt);

        if report.camera.teleport_arrived {
            log::info!("tick {tick}: arrived at {}", engine.mode());
        }
        if report.camera.collided {
            log::info!("tick {tick}: blocked by an obstacle");
        }
        if tick % 20 == 0 {
            let pose = engine.camera_pose();
            log::info!(
                "tick {tick} [{}] eye {:.2} target {:.2} daylight {:.2} lamp {:.1} ({:.1} ticks/s)",
                engine.mode(),
                pose.eye,
                pose.target,
                engine.daylight(),
                engine.point_light(),
                clock.rate()
            );
            for (name, pose) in engine.objects().poses() {
                log::debug!("  {name}: {:.2} facing {:.2}", pose.position, pose.forward);
            }
        }
    }
}
