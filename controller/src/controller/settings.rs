use std::fmt;
use std::str::SplitWhitespace;

use crate::events::{Direction, MapDimension, Position};
use super::error::ConfigurationError;
use super::segment::Segment;

/// Initial controller state read from an initialization string:
///
/// `W <width> <height> F <food x> <food y> S <U|D|L|R> <length> (<x> <y>){length}`
///
/// Coordinate pairs are kept in reading order. The first pair is the head and gets
/// `ttl = length`, each following pair one less, so the last pair is vacated first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    pub map_dimension: MapDimension,
    pub food_position: Position,
    pub direction: Direction,
    pub segments: Vec<Segment>,
}

impl ControllerConfig {
    pub fn parse(config: &str) -> Result<Self, ConfigurationError> {
        let mut tokens = Tokens::new(config);

        tokens.expect_marker("W")?;
        let width = tokens.next_int("map width")?;
        let height = tokens.next_int("map height")?;

        tokens.expect_marker("F")?;
        let food_x = tokens.next_int("food x")?;
        let food_y = tokens.next_int("food y")?;

        tokens.expect_marker("S")?;
        let direction = tokens.next_direction()?;
        let length = tokens.next_int("snake length")?;
        if length <= 0 {
            return Err(ConfigurationError::EmptyBody);
        }

        let mut segments = Vec::new();
        for ttl in (1..=length).rev() {
            let x = tokens.next_int("segment x")?;
            let y = tokens.next_int("segment y")?;
            segments.push(Segment::new(x, y, ttl));
        }

        Ok(Self {
            map_dimension: MapDimension::new(width, height),
            food_position: Position::new(food_x, food_y),
            direction,
            segments,
        })
    }
}

impl fmt::Display for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W {} {} F {} {} S {} {}",
            self.map_dimension.width,
            self.map_dimension.height,
            self.food_position.x,
            self.food_position.y,
            self.direction.letter(),
            self.segments.len()
        )?;
        for segment in &self.segments {
            write!(f, " {} {}", segment.x, segment.y)?;
        }
        Ok(())
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            inner: source.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, ConfigurationError> {
        self.inner
            .next()
            .ok_or(ConfigurationError::MissingToken { expected })
    }

    fn expect_marker(&mut self, marker: &'static str) -> Result<(), ConfigurationError> {
        let token = self.next_token(marker)?;
        if token != marker {
            return Err(ConfigurationError::UnexpectedMarker {
                expected: marker,
                found: token.to_string(),
            });
        }
        Ok(())
    }

    fn next_int(&mut self, field: &'static str) -> Result<i32, ConfigurationError> {
        let token = self.next_token(field)?;
        token.parse().map_err(|_| ConfigurationError::InvalidInteger {
            field,
            value: token.to_string(),
        })
    }

    fn next_direction(&mut self) -> Result<Direction, ConfigurationError> {
        let token = self.next_token("direction")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Direction::from_letter(letter)
                .ok_or_else(|| ConfigurationError::InvalidDirection(token.to_string())),
            _ => Err(ConfigurationError::InvalidDirection(token.to_string())),
        }
    }
}
