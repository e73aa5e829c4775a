//! Loader for the RON movement tuning file.

use avian2d::prelude::*;
use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// A tuning value outside the range the controller and physics host accept.
#[derive(Debug)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field as f64;
        if !(value.is_finite() && value > 0.0) {
            $errors.push(TuningError {
                field: stringify!($field),
                value,
                expected: "finite and positive",
            });
        }
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field as f64;
        if !(value.is_finite() && value >= 0.0) {
            $errors.push(TuningError {
                field: stringify!($field),
                value,
                expected: "finite and not negative",
            });
        }
    };
}

macro_rules! check_finite {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field as f64;
        if !value.is_finite() {
            $errors.push(TuningError {
                field: stringify!($field),
                value,
                expected: "finite",
            });
        }
    };
}

/// Check every tuning value. Returns an empty list if all are usable.
pub fn validate_movement_tuning(tuning: &MovementTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check_positive!(errors, tuning, move_speed);
    check_positive!(errors, tuning, fixed_hz);
    check_positive!(errors, tuning, sprite_width);
    check_positive!(errors, tuning, sprite_height);

    check_non_negative!(errors, tuning, jump_cooldown_secs);
    check_non_negative!(errors, tuning, double_jump_window_secs);
    check_non_negative!(errors, tuning, penetration_slop);
    check_non_negative!(errors, tuning, chamfer_radius);
    check_non_negative!(errors, tuning, friction);
    check_non_negative!(errors, tuning, static_friction);
    check_non_negative!(errors, tuning, air_friction);

    check_finite!(errors, tuning, jump_velocity);
    check_finite!(errors, tuning, gravity);

    errors
}

/// Parse tuning from RON text. Missing fields keep their defaults; values
/// that would break the tick or the physics host are rejected.
pub fn parse_movement_tuning(file: &str, contents: &str) -> Result<MovementTuning, ConfigLoadError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let errors = validate_movement_tuning(&tuning);
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigLoadError {
            file: file.to_string(),
            message: format!("Invalid tuning: {}", message),
        });
    }

    Ok(tuning)
}

pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_tuning(&file_name, &contents)
}

/// Load tuning at startup, then apply the parts the physics host owns.
pub(crate) fn setup_movement_tuning(
    mut tuning: ResMut<MovementTuning>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut gravity: ResMut<Gravity>,
) {
    match load_movement_tuning(Path::new(MOVEMENT_CONFIG_PATH)) {
        Ok(loaded) => {
            info!("Loaded movement tuning from {}", MOVEMENT_CONFIG_PATH);
            *tuning = loaded;
        }
        Err(e) => warn!("{}; using default movement tuning", e),
    }

    fixed_time.set_timestep_hz(tuning.fixed_hz);
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
}
