pub mod config;
pub mod controller;
pub mod events;
pub mod logger;
pub mod ports;

pub use controller::{ConfigurationError, Controller, ControllerConfig, Segment, UnexpectedEventError};
pub use events::{Axis, CellValue, Direction, Event, MapDimension, Position};
pub use ports::{OutputChannel, Port, RecordingPort};
