//! Fox Dive entry point
//!
//! Runs a headless session: the autopilot plays, a simulated clock drives the
//! frame loop, and every round's outcome is logged.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use fox_dive::Settings;
    use fox_dive::platform::Clock;
    use fox_dive::sim::{GameEvent, Round, advance, autopilot, hud};

    env_logger::init();

    let settings = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();
    let seed = settings.resolve_seed();
    log::info!("Fox Dive (headless) starting with seed {}", seed);

    let mut round = Round::new(seed);
    let mut clock = Clock::new();
    let frame_dt = settings.frame_dt();

    let mut wins = 0u32;
    let mut losses = 0u32;
    for frame in 0..settings.max_frames {
        let dt = clock.tick(frame as f64 * frame_dt);
        let intent = autopilot(&round);

        for event in advance(&mut round, &intent, dt) {
            match event {
                GameEvent::Won => wins += 1,
                GameEvent::Lost(_) => losses += 1,
                GameEvent::Restarted { seed } => log::debug!("New round seed {}", seed),
                _ => {}
            }
        }

        if round.is_terminal() {
            let text = hud::hud_text(&round);
            if let Some(overlay) = text.overlay {
                log::info!(
                    "Round {}: {} ({}) at {:.1}s",
                    wins + losses,
                    overlay.title,
                    text.fish,
                    round.elapsed
                );
            }
            if wins + losses >= settings.max_rounds {
                break;
            }
        }
    }

    println!(
        "{} rounds in {:.1}s simulated ({} frames): {} won, {} lost",
        wins + losses,
        clock.elapsed(),
        clock.frames(),
        wins,
        losses
    );

    if settings.print_snapshot {
        match serde_json::to_string_pretty(&round) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize round: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; hosts drive `sim::advance` directly
}
