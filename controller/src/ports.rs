use std::cell::RefCell;
use std::rc::Rc;

use crate::events::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputChannel {
    Display,
    Food,
    Score,
}

/// Outbound side of the controller. One port per output channel.
pub trait Port {
    fn send(&self, event: Event);
}

pub type Journal = Rc<RefCell<Vec<(OutputChannel, Event)>>>;

/// Appends everything it is given to a journal that may be shared with other ports.
#[derive(Clone)]
pub struct RecordingPort {
    channel: OutputChannel,
    journal: Journal,
}

impl RecordingPort {
    pub fn new(channel: OutputChannel, journal: Journal) -> Self {
        Self { channel, journal }
    }

    /// Display, food and score ports writing into one fresh journal.
    pub fn triple() -> (Self, Self, Self, Journal) {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        (
            Self::new(OutputChannel::Display, journal.clone()),
            Self::new(OutputChannel::Food, journal.clone()),
            Self::new(OutputChannel::Score, journal.clone()),
            journal,
        )
    }

    pub fn channel(&self) -> OutputChannel {
        self.channel
    }
}

impl Port for RecordingPort {
    fn send(&self, event: Event) {
        self.journal.borrow_mut().push((self.channel, event));
    }
}
