use std::collections::VecDeque;

use crate::events::{CellValue, Direction, Event, MapDimension, Position};
use crate::ports::Port;
use crate::{log, log_debug};
use super::error::{ConfigurationError, UnexpectedEventError};
use super::segment::Segment;
use super::settings::ControllerConfig;

/// Owns the snake body and the known food position, and reacts to one event at a time.
///
/// Display deltas go to `display_port`, food requests to `food_port`, score and loss
/// indications to `score_port`, each in the order they are produced.
pub struct Controller<P: Port> {
    display_port: P,
    food_port: P,
    score_port: P,
    map_dimension: MapDimension,
    food_position: Position,
    direction: Direction,
    segments: VecDeque<Segment>,
}

impl<P: Port> Controller<P> {
    pub fn new(
        display_port: P,
        food_port: P,
        score_port: P,
        config: &str,
    ) -> Result<Self, ConfigurationError> {
        let config = ControllerConfig::parse(config)?;
        Self::from_config(display_port, food_port, score_port, config)
    }

    pub fn from_config(
        display_port: P,
        food_port: P,
        score_port: P,
        config: ControllerConfig,
    ) -> Result<Self, ConfigurationError> {
        if config.segments.is_empty() || config.segments.iter().any(|s| s.ttl <= 0) {
            return Err(ConfigurationError::EmptyBody);
        }

        log_debug!("Controller configured: {}", config);

        Ok(Self {
            display_port,
            food_port,
            score_port,
            map_dimension: config.map_dimension,
            food_position: config.food_position,
            direction: config.direction,
            segments: config.segments.into_iter().collect(),
        })
    }

    /// Single entry point. Fails without touching any state when `event` is not one of
    /// `Tick`, `DirectionChange`, `FoodAnnounce` or `FoodResponse`.
    pub fn receive(&mut self, event: Event) -> Result<(), UnexpectedEventError> {
        match event {
            Event::Tick => self.handle_tick(),
            Event::DirectionChange { direction } => self.handle_direction_change(direction),
            Event::FoodAnnounce { x, y } => self.handle_food_announce(Position::new(x, y)),
            Event::FoodResponse { x, y } => self.handle_food_response(Position::new(x, y)),
            other => return Err(UnexpectedEventError::new(other.name())),
        }
        Ok(())
    }

    pub fn segments(&self) -> &VecDeque<Segment> {
        &self.segments
    }

    pub fn head(&self) -> Segment {
        *self.segments.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food_position(&self) -> Position {
        self.food_position
    }

    pub fn map_dimension(&self) -> MapDimension {
        self.map_dimension
    }

    fn handle_tick(&mut self) {
        let Some(new_head) = self.candidate_head() else {
            log!("Snake left the coordinate range at {}", self.head().position());
            self.score_port.send(Event::LossIndication);
            return;
        };
        let target = new_head.position();

        // The tail cell counts as occupied even though it may be vacated this tick.
        if self.collides_with_body(target) {
            log!("Snake bit itself at {}", target);
            self.score_port.send(Event::LossIndication);
            return;
        }

        if target == self.food_position {
            self.grow(new_head);
            return;
        }

        if !self.map_dimension.contains(target.x, target.y) {
            log!(
                "Snake left the {}x{} map at {}",
                self.map_dimension.width,
                self.map_dimension.height,
                target
            );
            self.score_port.send(Event::LossIndication);
            return;
        }

        self.advance(new_head);
    }

    /// `None` when the step does not fit in the coordinate type, which is off any map.
    fn candidate_head(&self) -> Option<Segment> {
        let head = self.head();
        let (dx, dy) = self.direction.delta();
        Some(Segment::new(
            head.x.checked_add(dx)?,
            head.y.checked_add(dy)?,
            head.ttl,
        ))
    }

    /// Growth path: nothing decays this tick, so the body ends up one segment longer.
    fn grow(&mut self, new_head: Segment) {
        log!("Snake ate food at {}. Length: {}", new_head.position(), self.segments.len() + 1);
        self.score_port.send(Event::ScoreIncrement);
        self.food_port.send(Event::FoodRequest);
        self.place_head(new_head);
    }

    /// Normal path: every segment ages by one tick before the head moves.
    fn advance(&mut self, new_head: Segment) {
        for segment in self.segments.iter_mut() {
            segment.ttl -= 1;
            if segment.ttl == 0 {
                self.display_port
                    .send(Event::cell(segment.x, segment.y, CellValue::Free));
            }
        }
        self.place_head(new_head);
    }

    fn place_head(&mut self, new_head: Segment) {
        self.segments.push_front(new_head);
        self.display_port
            .send(Event::cell(new_head.x, new_head.y, CellValue::Snake));
        self.segments.retain(|segment| segment.ttl > 0);
    }

    fn handle_direction_change(&mut self, direction: Direction) {
        if direction.shares_axis_with(&self.direction) {
            log_debug!(
                "Ignored direction change {:?} while moving {:?}",
                direction,
                self.direction
            );
            return;
        }
        self.direction = direction;
    }

    fn handle_food_announce(&mut self, position: Position) {
        if self.collides_with_body(position) {
            log_debug!("Announced food at {} overlaps the snake, requesting another", position);
            self.food_port.send(Event::FoodRequest);
        } else {
            self.display_port.send(Event::cell(
                self.food_position.x,
                self.food_position.y,
                CellValue::Free,
            ));
            self.display_port
                .send(Event::cell(position.x, position.y, CellValue::Food));
        }
        self.food_position = position;
    }

    fn handle_food_response(&mut self, position: Position) {
        if self.collides_with_body(position) {
            log_debug!("Requested food at {} overlaps the snake, requesting another", position);
            self.food_port.send(Event::FoodRequest);
        } else {
            self.display_port
                .send(Event::cell(position.x, position.y, CellValue::Food));
        }
        self.food_position = position;
    }

    fn collides_with_body(&self, position: Position) -> bool {
        self.segments.iter().any(|segment| segment.is_at(position))
    }
}
