use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::workflow::WorkflowIntent;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Outcome of a side effect, fed back into the workflow.
    Workflow(WorkflowIntent),
    /// Terminal input was lost or a termination signal arrived.
    Shutdown,
}

/// Where terminal events come from.
pub trait TerminalSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, read through crossterm.
pub struct CrosstermSource;

impl TerminalSource for CrosstermSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Single ordered queue for terminal input, ticks and effect outcomes.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, CrosstermSource)
    }

    pub fn with_source(tick_rate: Duration, mut source: impl TerminalSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                    let ready = source.poll(timeout).and_then(|ready| {
                        if ready {
                            source.read().map(Some)
                        } else {
                            Ok(None)
                        }
                    });
                    let sent = match ready {
                        Ok(Some(Event::Key(key))) => event_tx.send(AppEvent::Key(key)),
                        Ok(Some(Event::Paste(text))) => event_tx.send(AppEvent::Paste(text)),
                        Ok(Some(Event::Resize(cols, rows))) => {
                            event_tx.send(AppEvent::Resize(cols, rows))
                        }
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal input failed, shutting down");
                            let _ = event_tx.send(AppEvent::Shutdown);
                            break;
                        }
                    };
                    if sent.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
            .map(|_| ())
            .unwrap_or_else(|err| {
                tracing::error!(error = %err, "Failed to spawn terminal event thread");
                let _ = tx.send(AppEvent::Shutdown);
            });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
