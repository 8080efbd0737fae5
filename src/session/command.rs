use std::sync::mpsc::{self, Receiver, Sender};

use crate::board::Direction;

/// The only two ways any input source may change a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    Restart,
}

/// Cloneable producer half of a [`CommandQueue`].
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<GameCommand>,
}

impl CommandSender {
    /// Enqueue a command. Returns false once the queue has been dropped.
    pub fn send(&self, command: GameCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Single-consumer FIFO that serializes commands from every input source
/// before they reach the session.
pub struct CommandQueue {
    tx: Sender<GameCommand>,
    rx: Receiver<GameCommand>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    pub fn push(&self, command: GameCommand) {
        // The queue owns a receiver, so the channel cannot be disconnected here.
        let _ = self.tx.send(command);
    }

    /// Next pending command, if any, without blocking.
    pub fn try_next(&self) -> Option<GameCommand> {
        self.rx.try_recv().ok()
    }

    /// Take every pending command in arrival order.
    pub fn drain(&self) -> Vec<GameCommand> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_from_all_senders_arrive_in_order() {
        let queue = CommandQueue::new();
        let keyboard = queue.sender();
        let remote = queue.sender();

        assert!(keyboard.send(GameCommand::Move(Direction::Left)));
        assert!(remote.send(GameCommand::Restart));
        queue.push(GameCommand::Move(Direction::Up));

        assert_eq!(
            queue.drain(),
            vec![
                GameCommand::Move(Direction::Left),
                GameCommand::Restart,
                GameCommand::Move(Direction::Up),
            ]
        );
        assert_eq!(queue.try_next(), None);
    }

    #[test]
    fn send_fails_after_queue_dropped() {
        let queue = CommandQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.send(GameCommand::Restart));
    }
}
