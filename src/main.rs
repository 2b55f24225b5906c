//! Headless demo session
//!
//! Drives the simulation core with a scripted pilot at a fixed 60 Hz and logs
//! the outcome. A real host would render between ticks and map the drained
//! audio events to playback; this binary stands in for one.

use astro_drift::FieldConfig;
use astro_drift::sim::{AudioEvent, GameState, tick};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("cannot read config {path}: {e}");
                std::process::exit(1);
            });
            FieldConfig::from_json(&json).unwrap_or_else(|e| {
                eprintln!("bad config {path}: {e}");
                std::process::exit(1);
            })
        }
        None => FieldConfig::default(),
    };

    let seed = 0xA57E_2026;
    let mut state = GameState::new(seed, config);
    log::info!("astro-drift headless demo, seed {seed:#x}");
    state.start_game();

    for t in 0..36_000u32 {
        // Crude pilot: sweep the heading, pulse the engine, spray missiles
        match t % 120 {
            0 => state.turn_left(),
            60 => state.stop_turn(),
            _ => {}
        }
        match t % 240 {
            0 => state.thrust_on(),
            40 => state.thrust_off(),
            _ => {}
        }
        if t % 15 == 0 {
            state.fire();
        }

        tick(&mut state);

        for event in state.drain_events() {
            if event == AudioEvent::Explosion {
                log::debug!("tick {t}: explosion");
            }
        }

        if !state.started {
            log::info!("session ended at tick {t}");
            break;
        }
    }

    log::info!(
        "demo finished: score {}, lives {}, rocks on field {}",
        state.score,
        state.lives,
        state.rocks.len()
    );
}
