use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam::channel::{Receiver, Sender, bounded};
use log::{debug, error, info, warn};

use super::{Command, CommandSource};
use crate::error::AcquireError;

/// Single-slot, non-blocking handoff of commands from a [`CommandSource`] to the tick loop. The
/// armed acquisition task is the only producer and the scheduler the only consumer.
///
/// At most one acquisition task is in flight at any time. [`arm`](Self::arm) starts one only when
/// none is pending, and a pending request completes only when its value has been taken out of the
/// slot by [`poll`](Self::poll). A task still blocked on its source when the channel is dropped is
/// abandoned; it never touches anything but the channel.
pub struct CommandChannel {
    source: Arc<dyn CommandSource>,
    sender: Sender<Command>,
    receiver: Receiver<Command>,
    fallback: i64,
    pending: bool,
    closed: Arc<AtomicBool>,
    spawned: u64,
}

impl CommandChannel {
    /// Create a channel that requests values from `source`. Failed acquisitions deliver
    /// `fallback` instead.
    pub fn new(source: Arc<dyn CommandSource>, fallback: i64) -> Self {
        let (sender, receiver) = bounded(1);
        Self {
            source,
            sender,
            receiver,
            fallback,
            pending: false,
            closed: Arc::new(AtomicBool::new(false)),
            spawned: 0,
        }
    }

    /// Start an acquisition task unless one is already pending or the source has closed.
    /// Returns whether a task was started.
    pub fn arm(&mut self) -> bool {
        if self.pending || self.is_closed() {
            return false;
        }

        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let closed = Arc::clone(&self.closed);
        let fallback = self.fallback;
        let spawned = thread::Builder::new()
            .name("command-source".into())
            .spawn(move || {
                let value = match source.acquire() {
                    Ok(value) => value,
                    Err(AcquireError::Closed) => {
                        info!("Command source closed, no further commands");
                        closed.store(true, Ordering::Release);
                        return;
                    }
                    Err(err) => {
                        warn!("Command acquisition failed: {}, delivering {}", err, fallback);
                        fallback
                    }
                };
                // The receiving side may already be gone if the run has ended.
                let _ = sender.send(Command::new(value));
            });

        match spawned {
            Ok(_) => {
                self.pending = true;
                self.spawned += 1;
                debug!("Armed command request #{}", self.spawned);
                true
            }
            Err(err) => {
                error!("Unable to spawn command task: {}", err);
                false
            }
        }
    }

    /// Take the command waiting in the slot, if any. Never blocks.
    pub fn poll(&mut self) -> Option<Command> {
        let command = self.receiver.try_recv().ok()?;
        self.pending = false;
        Some(command)
    }

    /// Whether an acquisition task is in flight.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the source has reported that it will never produce another value.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Number of acquisition tasks started over the channel's lifetime.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    use super::CommandChannel;
    use crate::error::AcquireError;
    use crate::sim::command::{Command, GatedSource, ScriptedSource};

    /// Poll until a command arrives or a generous deadline passes.
    fn poll_until(channel: &mut CommandChannel) -> Option<Command> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(command) = channel.poll() {
                return Some(command);
            }
            thread::sleep(Duration::from_millis(1));
        }
        None
    }

    #[test]
    fn only_one_request_in_flight() {
        // Given
        let (_sender, source) = GatedSource::new();
        let mut channel = CommandChannel::new(Arc::new(source), -1);

        // When
        let first = channel.arm();
        let second = channel.arm();

        // Then
        assert!(first);
        assert!(!second);
        assert!(channel.is_pending());
        assert_eq!(channel.spawned(), 1);
    }

    #[test]
    fn poll_never_blocks_when_empty() {
        let (_sender, source) = GatedSource::new();
        let mut channel = CommandChannel::new(Arc::new(source), -1);
        channel.arm();

        let start = Instant::now();
        assert_eq!(channel.poll(), None);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn consumed_value_allows_rearm() {
        // Given
        let (sender, source) = GatedSource::new();
        let mut channel = CommandChannel::new(Arc::new(source), -1);
        channel.arm();

        // When
        sender.send(7).unwrap();
        let command = poll_until(&mut channel);

        // Then
        assert_eq!(command, Some(Command::new(7)));
        assert!(!channel.is_pending());
        assert!(channel.arm());
        assert_eq!(channel.spawned(), 2);
    }

    #[test]
    fn failed_acquisition_delivers_fallback() {
        // Given
        let source = || -> Result<i64, AcquireError> { Err(AcquireError::Interrupted) };
        let mut channel = CommandChannel::new(Arc::new(source), -1);

        // When
        channel.arm();

        // Then
        assert_eq!(poll_until(&mut channel), Some(Command::new(-1)));
    }

    #[test]
    fn closed_source_is_not_rearmed() {
        // Given
        let calls = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&calls);
        let source = move || -> Result<i64, AcquireError> {
            counted.fetch_add(1, Ordering::SeqCst);
            Err(AcquireError::Closed)
        };
        let mut channel = CommandChannel::new(Arc::new(source), -1);

        // When
        channel.arm();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !channel.is_closed() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }

        // Then
        assert!(channel.is_closed());
        assert_eq!(channel.poll(), None);
        assert!(!channel.arm());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn scripted_values_arrive_in_order() {
        let mut channel = CommandChannel::new(Arc::new(ScriptedSource::new([5, 6])), -1);

        channel.arm();
        assert_eq!(poll_until(&mut channel), Some(Command::new(5)));
        channel.arm();
        assert_eq!(poll_until(&mut channel), Some(Command::new(6)));
    }
}
