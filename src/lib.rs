pub mod error;
pub mod field;
pub mod game;
pub mod generator;
pub mod input;
pub mod reach;
pub mod render;
pub mod session;

pub use error::{ConfigError, GameError, GenerateError, SessionError};
pub use field::{Dir, Field, Pos, Tile};
pub use game::Game;
pub use generator::{generate_field, generate_solvable, FieldConfig, HatRegion};
pub use reach::{flood, hat_distance, is_reachable, reachable_count};
pub use render::Renderer;
pub use session::{Outcome, Session};
