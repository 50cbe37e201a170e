//! Invaders headless entry point
//!
//! Runs the simulation against a fixed-step clock with the autopilot at the
//! controls, logging HUD lines and printing a JSON summary.

use std::io::Write;
use std::path::Path;

use invaders::Settings;
use invaders::demo::Autopilot;
use invaders::platform::Clock;
use invaders::session::Session;
use invaders::view::{Scene, project};

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Invaders (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    log::info!("Game initialized with seed: {}", settings.seed);

    let mut session = Session::new(settings.seed);
    let mut pilot = settings
        .autopilot
        .then(|| Autopilot::new(settings.autopilot_seed, settings.auto_restart));
    let mut scene = Scene::new();
    scene.apply(&project(session.state()));

    // Tick 0 is the initial state
    for tick in Clock::new().skip(1).take(settings.ticks as usize) {
        session.apply(tick);
        scene.apply(&project(session.state()));

        if let Some(pilot) = pilot.as_mut() {
            for command in pilot.decide(session.state()) {
                session.apply(command);
                scene.apply(&project(session.state()));
            }
        }

        let now = session.state().tick;
        if settings.report_every > 0 && now % settings.report_every == 0 {
            let frame = project(session.state());
            log::info!("{} | {} drawn", frame.status_line(), scene.len());
        }
    }

    let summary = session.summary();
    for game in session.history().games() {
        log::debug!(
            "Game {}: score {}, level {}, ended at tick {}",
            game.game,
            game.score,
            game.level,
            game.ended_at
        );
    }
    match session.history().best() {
        Some(best) => log::info!(
            "Finished: {} games, best score {} (game {})",
            summary.games_finished,
            best.score,
            best.game
        ),
        None => log::info!("Finished: no completed games, score {}", summary.score),
    }

    if settings.summary_json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", json)?;
    }

    Ok(())
}
