//! Collider demo application
//!
//! Headless walk through a collider scene: a probe shape follows a cursor
//! path, reports what it touches, and picks up the first thing it hits and
//! carries it for a few steps.
//!
//! Usage: `collider_demo [scene.toml|scene.ron]`

use std::path::PathBuf;

use sdn_physics::foundation::logging;
use sdn_physics::prelude::*;
use thiserror::Error;

/// Cursor steps a picked-up collider is carried before it is released
const CARRY_STEPS: usize = 3;

/// Demo errors
#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to load scene '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Results gathered while walking the cursor path
#[derive(Debug, Default)]
struct Summary {
    steps: usize,
    hits: Vec<(String, usize)>,
    carried: Vec<String>,
    overlapping: Vec<(String, String)>,
}

struct ColliderDemo {
    config: SceneConfig,
    colliders: ColliderSet,
    probe: Collider,
    carry_left: usize,
}

impl ColliderDemo {
    fn new(config: SceneConfig) -> Result<Self, DemoError> {
        let colliders = ColliderSet::from_config(&config)?;
        let probe = config.build_probe()?;
        log::info!(
            "Scene ready: {} colliders, {:?} probe, {} cursor steps",
            colliders.len(),
            probe.kind(),
            config.cursor_path.len()
        );

        Ok(Self {
            config,
            colliders,
            probe,
            carry_left: 0,
        })
    }

    fn run(&mut self) -> Summary {
        let mut summary = Summary {
            hits: self
                .colliders
                .iter()
                .map(|(_, name, _)| (name.to_owned(), 0))
                .collect(),
            ..Summary::default()
        };

        let path = self.config.cursor_path.clone();
        for (step, cursor) in path.into_iter().enumerate() {
            self.step(step, cursor, &mut summary);
        }

        if self.carry_left > 0 {
            self.colliders.end_drag();
            self.carry_left = 0;
        }

        summary.overlapping = self
            .colliders
            .overlapping_pairs()
            .into_iter()
            .filter_map(|pair| {
                let a = self.colliders.name(pair.a)?;
                let b = self.colliders.name(pair.b)?;
                Some((a.to_owned(), b.to_owned()))
            })
            .collect();
        summary
    }

    fn step(&mut self, step: usize, cursor: Vec2, summary: &mut Summary) {
        self.probe.set_position(cursor);
        self.colliders.drag_to(cursor);
        summary.steps += 1;

        let hits = self.colliders.hits(&self.probe);
        let names: Vec<&str> = hits.iter().filter_map(|&key| self.colliders.name(key)).collect();
        if names.is_empty() {
            log::debug!("Step {step} at ({}, {}): no hits", cursor.x, cursor.y);
        } else {
            log::info!(
                "Step {step} at ({}, {}): probe touches {}",
                cursor.x,
                cursor.y,
                names.join(", ")
            );
        }

        for name in &names {
            if let Some(entry) = summary.hits.iter_mut().find(|(existing, _)| existing == name) {
                entry.1 += 1;
            }
        }

        if self.carry_left > 0 {
            self.carry_left -= 1;
            if self.carry_left == 0 {
                let released = self.colliders.end_drag();
                log::info!("Released {released} colliders at step {step}");
            }
        } else if !hits.is_empty() && summary.carried.is_empty() {
            let picked = self.colliders.begin_drag(&self.probe, cursor);
            summary.carried = self
                .colliders
                .dragged()
                .into_iter()
                .filter_map(|key| self.colliders.name(key).map(str::to_owned))
                .collect();
            self.carry_left = CARRY_STEPS;
            log::info!("Picked up {picked} colliders at step {step}");
        }
    }
}

fn print_summary(summary: &Summary) {
    println!("Cursor steps: {}", summary.steps);
    for (name, count) in &summary.hits {
        println!("  {name:<12} hit on {count} steps");
    }

    if summary.carried.is_empty() {
        println!("Nothing was picked up");
    } else {
        println!("Carried: {}", summary.carried.join(", "));
    }

    if summary.overlapping.is_empty() {
        println!("No overlapping colliders at the end");
    } else {
        for (a, b) in &summary.overlapping {
            println!("Overlapping at the end: {a} / {b}");
        }
    }
}

fn load_scene() -> Result<SceneConfig, DemoError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading scene from {}", path.display());
            SceneConfig::load_from_file(&path).map_err(|source| DemoError::Load { path, source })
        }
        None => {
            log::info!("No scene file given, using the built-in scene");
            Ok(SceneConfig::default())
        }
    }
}

fn main() -> Result<(), DemoError> {
    logging::init();

    log::info!("Starting collider demo");

    let result = load_scene().and_then(ColliderDemo::new).map(|mut demo| demo.run());
    match result {
        Ok(summary) => {
            print_summary(&summary);
            log::info!("Collider demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Collider demo failed: {e}");
            Err(e)
        }
    }
}
