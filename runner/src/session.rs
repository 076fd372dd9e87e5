use std::collections::VecDeque;
use std::time::Duration;

use snake_controller::{
    log, log_debug, CellValue, Controller, Event, OutputChannel, UnexpectedEventError,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::board::Board;
use crate::channel_port::{ChannelPort, OutputMessage};
use crate::food_placer::FoodPlacer;
use crate::runner_config::RunnerConfig;

/// Food re-requests answered in a row before the session gives up on placing food.
const MAX_FOOD_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub ticks: u64,
    pub score: u32,
    pub length: usize,
    pub lost: bool,
}

/// Plays every collaborator around one controller: tick source, direction input,
/// food placement, display board and score keeping.
pub struct SnakeSession {
    controller: Controller<ChannelPort>,
    output: UnboundedReceiver<OutputMessage>,
    pending: VecDeque<Event>,
    board: Board,
    placer: FoodPlacer,
    score: u32,
    lost: bool,
    food_attempts: u32,
}

impl SnakeSession {
    pub fn create(config: &RunnerConfig, placer: FoodPlacer) -> Result<Self, Box<dyn std::error::Error>> {
        let (sender, output) = mpsc::unbounded_channel();
        let controller = Controller::new(
            ChannelPort::new(OutputChannel::Display, sender.clone()),
            ChannelPort::new(OutputChannel::Food, sender.clone()),
            ChannelPort::new(OutputChannel::Score, sender),
            &config.initial_state,
        )?;

        let mut board = Board::new(controller.map_dimension())?;
        for segment in controller.segments() {
            board.apply(segment.x, segment.y, CellValue::Snake);
        }
        let food = controller.food_position();
        board.apply(food.x, food.y, CellValue::Food);

        Ok(Self {
            controller,
            output,
            pending: VecDeque::new(),
            board,
            placer,
            score: 0,
            lost: false,
            food_attempts: 0,
        })
    }

    pub async fn run(
        mut self,
        config: &RunnerConfig,
        max_ticks: u64,
        render: bool,
    ) -> Result<(SessionOutcome, Board), UnexpectedEventError> {
        let mut interval = tokio::time::interval(Duration::from_millis(config.tick_interval_ms));
        let map = self.controller.map_dimension();
        let mut ticks = 0;

        while ticks < max_ticks && !self.lost {
            interval.tick().await;

            if self.placer.roll(config.turn_probability) {
                let direction = self.placer.random_direction();
                self.deliver(Event::DirectionChange { direction })?;
            }
            if self.placer.roll(config.announce_probability) {
                let cell = self.placer.random_cell(map);
                log_debug!("Announcing food at {}", cell);
                self.deliver(Event::FoodAnnounce { x: cell.x, y: cell.y })?;
            }

            self.deliver(Event::Tick)?;
            ticks += 1;

            if render {
                println!("{}", self.board.render());
            }
        }

        let outcome = SessionOutcome {
            ticks,
            score: self.score,
            length: self.controller.len(),
            lost: self.lost,
        };
        Ok((outcome, self.board))
    }

    /// Hands `event` to the controller and reacts to its output, including any food
    /// responses that output triggers, before returning.
    fn deliver(&mut self, event: Event) -> Result<(), UnexpectedEventError> {
        self.pending.push_back(event);

        while let Some(event) = self.pending.pop_front() {
            self.controller.receive(event)?;

            while let Ok((channel, output)) = self.output.try_recv() {
                self.react(channel, output);
            }
        }
        Ok(())
    }

    fn react(&mut self, channel: OutputChannel, event: Event) {
        match event {
            Event::CellUpdate { x, y, value } => {
                self.board.apply(x, y, value);
                if value == CellValue::Food {
                    self.food_attempts = 0;
                }
            }
            Event::FoodRequest => self.answer_food_request(),
            Event::ScoreIncrement => {
                self.score += 1;
                log!("Score: {}", self.score);
            }
            Event::LossIndication => {
                self.lost = true;
                log!("Game over with score {}", self.score);
            }
            other => log!("Ignoring {} on {:?} channel", other.name(), channel),
        }
    }

    fn answer_food_request(&mut self) {
        self.food_attempts += 1;
        if self.food_attempts > MAX_FOOD_ATTEMPTS {
            log!("Giving up on food placement after {} attempts", MAX_FOOD_ATTEMPTS);
            return;
        }

        match self.placer.free_cell(&self.board) {
            Some(cell) => self.pending.push_back(Event::FoodResponse { x: cell.x, y: cell.y }),
            None => log!("No free cell left for food"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(initial_state: &str) -> RunnerConfig {
        RunnerConfig {
            initial_state: initial_state.to_string(),
            tick_interval_ms: 1,
            max_ticks: 50,
            turn_probability: 0.0,
            announce_probability: 0.0,
            seed: Some(1),
        }
    }

    #[tokio::test]
    async fn test_session_ends_at_wall() {
        let config = config("W 5 1 F 9 9 S R 1 0 0");
        let session = SnakeSession::create(&config, FoodPlacer::new(1)).unwrap();
        let (outcome, board) = session.run(&config, config.max_ticks, false).await.unwrap();

        assert!(outcome.lost);
        assert_eq!(outcome.ticks, 5);
        assert_eq!(outcome.score, 0);
        assert_eq!(board.render(), "....o\n");
    }

    #[tokio::test]
    async fn test_session_stops_at_tick_limit() {
        let config = config("W 10 1 F 9 9 S R 1 0 0");
        let session = SnakeSession::create(&config, FoodPlacer::new(1)).unwrap();
        let (outcome, _board) = session.run(&config, 3, false).await.unwrap();

        assert!(!outcome.lost);
        assert_eq!(outcome.ticks, 3);
        assert_eq!(outcome.length, 1);
    }

    #[tokio::test]
    async fn test_eaten_food_is_replaced() {
        let config = config("W 6 1 F 2 0 S R 1 0 0");
        let session = SnakeSession::create(&config, FoodPlacer::new(5)).unwrap();
        let (outcome, board) = session.run(&config, 2, false).await.unwrap();

        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.length, 2);
        assert_eq!(board.count(CellValue::Food), 1);
        assert_eq!(board.count(CellValue::Snake), 2);
    }

    #[test]
    fn test_oversized_map_fails_creation() {
        let config = config("W 50000 50000 F 2 2 S R 1 0 0");
        assert!(SnakeSession::create(&config, FoodPlacer::new(1)).is_err());
    }

    #[test]
    fn test_bad_initial_state_fails_creation() {
        let config = config("W 5 5 F 2 2 S R 0");
        assert!(SnakeSession::create(&config, FoodPlacer::new(1)).is_err());
    }
}
