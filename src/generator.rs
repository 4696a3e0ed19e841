//! Random field generation, with a retry loop that only hands out boards
//! whose hat can actually be reached from the start.

use log::{debug, log_enabled, warn, Level};
use rand::Rng;

use crate::error::{ConfigError, GenerateError};
use crate::field::{Field, Pos, Tile};
use crate::reach::{hat_distance, is_reachable, reachable_count};

pub const DEFAULT_WIDTH: usize = 15;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_HOLE_PERCENTAGE: u8 = 25;
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Where the hat may be dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HatRegion {
    /// Anywhere on the field, the start cell included.
    Anywhere,
    /// The bottom-right quadrant, split with floor division.
    #[default]
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub hole_percentage: u8,
    pub max_attempts: usize,
    pub hat_region: HatRegion,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            hole_percentage: DEFAULT_HOLE_PERCENTAGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hat_region: HatRegion::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.hole_percentage > 100 {
            return Err(ConfigError::HolePercentage {
                percentage: self.hole_percentage,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// One random board. Nothing here guarantees the hat is reachable.
pub fn generate_field(rng: &mut impl Rng, config: &FieldConfig) -> Result<Field, ConfigError> {
    config.validate()?;
    let mut field = Field::filled(config.width, config.height, Tile::Empty)?;

    for y in 0..config.height {
        for x in 0..config.width {
            if rng.gen_range(0..100u8) < config.hole_percentage {
                if let Some(tile) = field.get_mut(Pos { x, y }) {
                    *tile = Tile::Hole;
                }
            }
        }
    }

    if let Some(tile) = field.get_mut(Pos::START) {
        *tile = Tile::Current;
    }

    let hat = pick_hat(rng, config);
    if let Some(tile) = field.get_mut(hat) {
        *tile = Tile::Hat;
    }
    Ok(field)
}

fn pick_hat(rng: &mut impl Rng, config: &FieldConfig) -> Pos {
    let (x0, y0) = match config.hat_region {
        HatRegion::Anywhere => (0, 0),
        HatRegion::BottomRight => (config.width / 2, config.height / 2),
    };
    Pos {
        x: rng.gen_range(x0..config.width),
        y: rng.gen_range(y0..config.height),
    }
}

/// Keeps generating until the hat is reachable from the start cell, giving up
/// after `config.max_attempts` boards.
pub fn generate_solvable(rng: &mut impl Rng, config: &FieldConfig) -> Result<Field, GenerateError> {
    config.validate()?;
    for attempt in 1..=config.max_attempts {
        let field = generate_field(rng, config)?;
        if is_reachable(&field, Pos::START) {
            if log_enabled!(Level::Debug) {
                debug!(
                    "Accepted field on attempt {attempt}, hat {} steps away, {} of {} cells reachable:\n{field}",
                    hat_distance(&field, Pos::START).unwrap_or_default(),
                    reachable_count(&field, Pos::START),
                    field.width() * field.height()
                );
            }
            return Ok(field);
        }
        debug!("Attempt {attempt}: hat unreachable, regenerating");
    }
    warn!(
        "Gave up after {} attempts ({}x{}, {}% holes)",
        config.max_attempts, config.width, config.height, config.hole_percentage
    );
    Err(GenerateError::Unsolvable {
        attempts: config.max_attempts,
    })
}
