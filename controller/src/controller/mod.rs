mod error;
mod game_state;
mod segment;
mod settings;

pub use error::{ConfigurationError, UnexpectedEventError};
pub use game_state::Controller;
pub use segment::Segment;
pub use settings::ControllerConfig;
