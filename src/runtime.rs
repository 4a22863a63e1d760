//! Terminal input plumbing. The app only reacts to input, so the loop blocks
//! on the next event and reports when the input side goes quiet or away.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::debug;

/// What the event loop gets back from one [`Runner::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Nothing arrived within the poll window.
    Idle,
    /// The input source hung up; no further events will come.
    Closed,
}

/// A channel-backed stream of input events.
pub trait EventSource: Send + 'static {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Reads crossterm events on a background thread.
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                // Windows reports releases too
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => tx.send(AppEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    debug!(error = %err, "terminal input stopped");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Events fed by hand, for driving the app without a terminal.
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub struct Runner<E: EventSource> {
    source: E,
    poll: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E, poll: Duration) -> Self {
        Self { source, poll }
    }

    /// Waits up to the poll window for the next event.
    pub fn step(&self) -> AppEvent {
        match self.source.recv_timeout(self.poll) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => AppEvent::Idle,
            Err(RecvTimeoutError::Disconnected) => AppEvent::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn runner() -> (mpsc::Sender<AppEvent>, Runner<TestEventSource>) {
        let (tx, rx) = mpsc::channel();
        (tx, Runner::new(TestEventSource::new(rx), Duration::from_millis(1)))
    }

    #[test]
    fn quiet_source_is_idle() {
        let (_tx, runner) = runner();
        assert_eq!(runner.step(), AppEvent::Idle);
    }

    #[test]
    fn events_pass_through_in_order() {
        let (tx, runner) = runner();
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        tx.send(AppEvent::Key(key)).unwrap();
        tx.send(AppEvent::Resize).unwrap();

        assert_eq!(runner.step(), AppEvent::Key(key));
        assert_eq!(runner.step(), AppEvent::Resize);
        assert_eq!(runner.step(), AppEvent::Idle);
    }

    #[test]
    fn hung_up_source_is_closed_after_draining() {
        let (tx, runner) = runner();
        tx.send(AppEvent::Resize).unwrap();
        drop(tx);

        assert_eq!(runner.step(), AppEvent::Resize);
        assert_eq!(runner.step(), AppEvent::Closed);
    }
}
