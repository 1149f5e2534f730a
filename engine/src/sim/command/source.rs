use crossbeam::channel::{Receiver, Sender, unbounded};
use crossbeam::queue::SegQueue;

use crate::error::AcquireError;

/// Produces a single command value per call.
///
/// Implementations may block indefinitely (waiting on a terminal, a socket, a file). Each call
/// runs on a dedicated thread spawned by the [`CommandChannel`](super::CommandChannel), so
/// blocking never reaches the tick loop. Returning [`AcquireError::Closed`] tells the channel
/// that no further values will ever come; any other error is reported and replaced with the
/// configured fallback value.
pub trait CommandSource: Send + Sync + 'static {
    fn acquire(&self) -> Result<i64, AcquireError>;
}

impl<F> CommandSource for F
where
    F: Fn() -> Result<i64, AcquireError> + Send + Sync + 'static,
{
    fn acquire(&self) -> Result<i64, AcquireError> {
        self()
    }
}

/// Delivers a fixed sequence of values, one per request, then reports itself closed.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: SegQueue<i64>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let queue = SegQueue::new();
        for value in values {
            queue.push(value);
        }
        Self { queue }
    }

    /// Number of values not yet delivered.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedSource {
    fn acquire(&self) -> Result<i64, AcquireError> {
        self.queue.pop().ok_or(AcquireError::Closed)
    }
}

/// Delivers values pushed through its paired sender, blocking until one arrives. Closed once
/// every sender has been dropped.
#[derive(Debug)]
pub struct GatedSource {
    receiver: Receiver<i64>,
}

impl GatedSource {
    /// Create a source together with the sender that feeds it.
    pub fn new() -> (Sender<i64>, Self) {
        let (sender, receiver) = unbounded();
        (sender, Self { receiver })
    }
}

impl CommandSource for GatedSource {
    fn acquire(&self) -> Result<i64, AcquireError> {
        self.receiver.recv().map_err(|_| AcquireError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandSource, GatedSource, ScriptedSource};
    use crate::error::AcquireError;

    #[test]
    fn scripted_source_delivers_in_order_then_closes() {
        // Given
        let source = ScriptedSource::new([3, 1, 0]);

        // When
        let values: Vec<_> = (0..4).map(|_| source.acquire()).collect();

        // Then
        assert_eq!(values, vec![Ok(3), Ok(1), Ok(0), Err(AcquireError::Closed)]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn gated_source_closes_when_sender_drops() {
        // Given
        let (sender, source) = GatedSource::new();
        sender.send(12).unwrap();

        // When
        drop(sender);

        // Then
        assert_eq!(source.acquire(), Ok(12));
        assert_eq!(source.acquire(), Err(AcquireError::Closed));
    }

    #[test]
    fn closures_are_sources() {
        let source = || -> Result<i64, AcquireError> { Err(AcquireError::Interrupted) };
        assert_eq!(source.acquire(), Err(AcquireError::Interrupted));
    }
}
