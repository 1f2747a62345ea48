//! Scenario loading — parses and validates JSON scenario files.
//!
//! A scenario file is a single JSON object. The `"simulation settings"`
//! section is matched by exact key and must be present. Entity sections
//! are matched by key *containment*, so `"west bullet defence"` and
//! `"east bullet defence"` both configure bullet batteries. Sections
//! matching nothing are ignored.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use skyfence_core::config::{
    BallisticGeneratorConfig, BoostGeneratorConfig, BulletDefenceConfig, SeekerDefenceConfig,
    SimulationSettings,
};

/// Exact key of the settings section.
pub const SETTINGS_SECTION: &str = "simulation settings";
/// Substring matching bullet battery sections.
pub const BULLET_DEFENCE_SECTION: &str = "bullet defence";
/// Substring matching seeker battery sections.
pub const SEEKER_DEFENCE_SECTION: &str = "seeker defence";
/// Substring matching ballistic generator sections.
pub const BALLISTIC_GENERATOR_SECTION: &str = "default missile";
/// Substring matching boost generator sections.
pub const BOOST_GENERATOR_SECTION: &str = "boost missile";

/// Errors raised while loading or validating a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("scenario is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scenario has no \"{0}\" section")]
    MissingSection(&'static str),
    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },
}

/// A parsed and validated scenario, ready to hand to the engine.
///
/// Sections of each kind keep the order the JSON parser yields them
/// in, so a given file always produces the same battery and generator
/// ordering (and therefore the same random-draw sequence).
#[derive(Debug, Clone)]
pub struct Scenario {
    pub settings: SimulationSettings,
    pub bullet_defences: Vec<BulletDefenceConfig>,
    pub seeker_defences: Vec<SeekerDefenceConfig>,
    pub ballistic_generators: Vec<BallisticGeneratorConfig>,
    pub boost_generators: Vec<BoostGeneratorConfig>,
}

impl Scenario {
    /// Load and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate scenario JSON.
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let root: Value = serde_json::from_str(text)?;

        let settings_value = root
            .get(SETTINGS_SECTION)
            .ok_or(ScenarioError::MissingSection(SETTINGS_SECTION))?;
        let settings: SimulationSettings = serde_json::from_value(settings_value.clone())?;

        let mut scenario = Scenario {
            settings,
            bullet_defences: Vec::new(),
            seeker_defences: Vec::new(),
            ballistic_generators: Vec::new(),
            boost_generators: Vec::new(),
        };

        if let Value::Object(sections) = &root {
            for (key, value) in sections {
                if key == SETTINGS_SECTION {
                    continue;
                }
                if key.contains(BULLET_DEFENCE_SECTION) {
                    scenario
                        .bullet_defences
                        .push(serde_json::from_value(value.clone())?);
                } else if key.contains(SEEKER_DEFENCE_SECTION) {
                    scenario
                        .seeker_defences
                        .push(serde_json::from_value(value.clone())?);
                } else if key.contains(BALLISTIC_GENERATOR_SECTION) {
                    scenario
                        .ballistic_generators
                        .push(serde_json::from_value(value.clone())?);
                } else if key.contains(BOOST_GENERATOR_SECTION) {
                    scenario
                        .boost_generators
                        .push(serde_json::from_value(value.clone())?);
                }
            }
        }

        scenario.validate()?;
        Ok(scenario)
    }

    /// Reject configurations the simulation cannot run.
    ///
    /// Called by the loaders; call again after mutating a loaded
    /// scenario (seed or duration overrides).
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let s = &self.settings;
        require(
            s.simulation_time.is_finite() && s.simulation_time >= 0.0,
            "simulation time",
            "must be a non-negative number of seconds",
        )?;
        require(
            s.frame_rate.is_finite() && s.frame_rate > 0.0,
            "frame rate",
            "must be a positive number of frames per second",
        )?;
        require(
            s.target_radius.is_finite() && s.target_radius >= 0.0,
            "target radius",
            "must be non-negative",
        )?;
        require(
            s.missile_spawn_radius.is_finite() && s.missile_spawn_radius > 0.0,
            "missile spawn radius",
            "must be positive",
        )?;
        require(
            (0.0..=90.0).contains(&s.minimum_incoming_angle_deg),
            "minimum incoming missile angle",
            "must be between 0 and 90 degrees",
        )?;

        for cfg in &self.bullet_defences {
            validate_battery(cfg.reload_time, cfg.projectile_speed, cfg.range)?;
            // rand's Bernoulli rejects probabilities outside [0, 1]
            require(
                (0.0..=1.0).contains(&cfg.accuracy),
                "accuracy",
                "must be a probability between 0 and 1",
            )?;
        }
        for cfg in &self.seeker_defences {
            validate_battery(cfg.reload_time, cfg.projectile_speed, cfg.range)?;
            require(
                cfg.explosion_radius.is_finite() && cfg.explosion_radius >= 0.0,
                "explosion radius",
                "must be non-negative",
            )?;
        }

        for cfg in &self.ballistic_generators {
            validate_generator(cfg.frequency, cfg.speed)?;
        }
        for cfg in &self.boost_generators {
            validate_generator(cfg.frequency, cfg.speed)?;
            require(
                cfg.boost.is_finite() && cfg.boost >= 0.0,
                "boost",
                "must be non-negative",
            )?;
            require(
                cfg.boost_timer.is_finite(),
                "boost timer",
                "must be a number of seconds",
            )?;
        }

        Ok(())
    }
}

fn validate_battery(
    reload_time: f64,
    projectile_speed: f64,
    range: f64,
) -> Result<(), ScenarioError> {
    require(
        reload_time.is_finite() && reload_time >= 0.0,
        "reload time",
        "must be non-negative",
    )?;
    require(
        projectile_speed.is_finite() && projectile_speed > 0.0,
        "projectile speed",
        "must be positive",
    )?;
    require(
        range.is_finite() && range >= 0.0,
        "range",
        "must be non-negative",
    )
}

fn validate_generator(frequency: f64, speed: f64) -> Result<(), ScenarioError> {
    require(
        frequency.is_finite() && frequency >= 0.0,
        "frequency",
        "must be non-negative",
    )?;
    require(
        speed.is_finite() && speed > 0.0,
        "speed",
        "must be positive",
    )
}

fn require(ok: bool, field: &str, message: &str) -> Result<(), ScenarioError> {
    if ok {
        Ok(())
    } else {
        Err(ScenarioError::Invalid {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}
