//! Walkthrough demo application
//!
//! Replays a scripted first-person walk through a furnished room. Every
//! frame's movement request goes through the collision resolver, and the
//! corrected velocity is applied to the player.
//!
//! Usage: `walkthrough [config.toml|config.ron]`

mod config;
mod player;
mod room;

use collision_engine::config::Config;
use collision_engine::foundation::logging;
use collision_engine::physics::CollisionResolver;

use config::WalkthroughConfig;
use player::Player;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting walkthrough demo");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            WalkthroughConfig::load_from_file(&path)?
        }
        None => WalkthroughConfig::default(),
    };
    config.validate()?;

    let mut resolver = CollisionResolver::new(config.resolver.clone());
    for source in room::build_house(config.model_scale)? {
        resolver.track(source);
    }
    log::info!(
        "Resolver ready: {} sources, {} triangles",
        resolver.tracked_count(),
        resolver.triangle_count()
    );

    let mut player = Player::from_config(&config);
    log::info!("Player starts at {:?}", player.position);

    for (index, step) in config.script.iter().enumerate() {
        player.turn(step.turn_degrees);

        let mut requested = 0.0;
        let mut travelled = 0.0;
        for _ in 0..step.frames {
            requested += player.requested_velocity(step.movement, config.frame_step).magnitude();
            let corrected = player.process_movement(&resolver, step.movement, config.frame_step);
            travelled += corrected.magnitude();
            log::debug!("{:?} -> {:?} at {:?}", step.movement, corrected, player.position);
        }

        log::info!(
            "Step {}: {:?} for {} frames (yaw {:.1}), travelled {:.2} of {:.2} -> {:?}",
            index,
            step.movement,
            step.frames,
            player.yaw_degrees,
            travelled,
            requested,
            player.position
        );
    }

    log::info!("Walkthrough complete at {:?}", player.position);
    Ok(())
}
