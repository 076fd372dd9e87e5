use snake_controller::{log, Event, OutputChannel, Port};
use tokio::sync::mpsc::UnboundedSender;

pub type OutputMessage = (OutputChannel, Event);

/// Forwards controller output into the session's queue, tagged with its channel.
#[derive(Clone)]
pub struct ChannelPort {
    channel: OutputChannel,
    sender: UnboundedSender<OutputMessage>,
}

impl ChannelPort {
    pub fn new(channel: OutputChannel, sender: UnboundedSender<OutputMessage>) -> Self {
        Self { channel, sender }
    }
}

impl Port for ChannelPort {
    fn send(&self, event: Event) {
        if self.sender.send((self.channel, event)).is_err() {
            log!("Dropped {} on {:?} port: receiver closed", event.name(), self.channel);
        }
    }
}
