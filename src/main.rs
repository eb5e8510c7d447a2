//! Ocean Escape entry point
//!
//! Windowing, rendering, and input dispatch are host collaborators, so
//! the binary runs a bounded headless session through the real
//! simulation: menu, a scripted swim, and whatever the sharks make of
//! it.

use std::time::{SystemTime, UNIX_EPOCH};

use ocean_escape::audio::{AudioDirector, NullAudio};
use ocean_escape::settings::Settings;
use ocean_escape::sim::{Direction, GamePhase, GameState, TickInput, tick};
use ocean_escape::tuning::Tuning;
use ocean_escape::view;

/// Frame cadence of the headless demo.
const FRAME_DT: f32 = 1.0 / 60.0;
/// Demo session length, seconds.
const DEMO_SECONDS: f32 = 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Ocean Escape starting (seed {seed})");

    let settings = Settings::load();
    let mut state = GameState::new(seed, Tuning::load());
    let mut audio = AudioDirector::new(NullAudio::default(), &settings);

    // Straight from the menu into a scripted square swim.
    let route = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };
    let mut frame = 0u32;

    while state.elapsed < DEMO_SECONDS {
        tick(&mut state, &input, FRAME_DT);
        for event in state.drain_events() {
            log::debug!("event: {event:?}");
            audio.handle(event);
        }
        audio.update(FRAME_DT, state.phase);

        if state.phase == GamePhase::GameOver {
            break;
        }

        input = TickInput::default();
        frame += 1;
        // Turn every two seconds.
        if frame % 120 == 0 {
            input.direction = Some(route[(frame / 120) as usize % route.len()]);
        }
    }

    let hud = view::hud(&state);
    log::debug!("{} sprites in the final frame", view::draw_list(&state).len());
    match state.phase {
        GamePhase::GameOver => log::info!(
            "Caught after {:.1}s with {} sharks on the prowl",
            state.elapsed,
            hud.sharks
        ),
        _ => log::info!(
            "Survived {:.1}s at {} health ({} sharks, {} bubbles)",
            state.elapsed,
            hud.health,
            hud.sharks,
            hud.bubbles
        ),
    }
}
