//! Terminal driver for the dashboard.
//!
//! Implements the [`Driver`] trait using crossterm for input and ratatui for
//! output. Keyboard, resize and OS signals are read on a separate input task
//! and forwarded over a channel, so the runtime can wait on them next to the
//! redraw timer and the feed queue.

use std::{
    io::{self, Stdout, stdout},
    time::Instant,
};

use crossterm::{
    cursor::{Hide, Show},
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};
use zap_stats::{Dashboard, DashboardEvent, Driver, KeyInput};

use crate::ui::{self, BufferWriter, FrameContext, PanelOrder};

const INPUT_QUEUE: usize = 64;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Raw mode or the alternate screen could not be entered.
    #[error("cannot acquire terminal: {0}")]
    Init(#[source] io::Error),

    /// I/O error while drawing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal could not be put back into the mode it had before.
    #[error("cannot restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Holds the terminal in raw mode on the alternate screen from construction
/// until [`Driver::stop`] (or drop, as a backstop).
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    inputs: mpsc::Receiver<DashboardEvent>,
    input_task: JoinHandle<()>,
    order: PanelOrder,
    restored: bool,
}

impl TerminalDriver {
    /// Acquire the terminal and start the input task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(order: PanelOrder) -> Result<Self, TerminalError> {
        acquire(stdout(), &mut CrosstermRawMode)?;

        let terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                if let Err(rollback) = release() {
                    tracing::error!(error = %rollback, "failed to restore terminal after init error");
                }
                return Err(TerminalError::Init(e));
            },
        };

        let (tx, inputs) = mpsc::channel(INPUT_QUEUE);
        let input_task = tokio::spawn(forward_input(tx));
        tracing::debug!("terminal acquired");

        Ok(Self { terminal, inputs, input_task, order, restored: false })
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<DashboardEvent>, Self::Error> {
        Ok(self.inputs.recv().await)
    }

    fn render(&mut self, dashboard: &Dashboard) -> Result<(), Self::Error> {
        let now = chrono::Local::now().format(ui::CLOCK_FORMAT).to_string();
        let elapsed = dashboard.elapsed(Instant::now());
        let order = self.order;

        self.terminal.draw(|frame| {
            let context = FrameContext { now, elapsed, width: frame.area().width, order };
            ui::render(&mut BufferWriter::new(frame.buffer_mut()), dashboard, &context);
        })?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.input_task.abort();
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        tracing::debug!("releasing terminal");
        release().map_err(TerminalError::Restore)
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        if !self.restored {
            self.input_task.abort();
            if let Err(e) = release() {
                tracing::error!(error = %e, "failed to restore terminal on drop");
            }
        }
    }
}

/// Raw-mode switch, kept apart from the escape sequences so both halves of
/// acquiring and restoring can be driven without a TTY.
trait RawMode {
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }
}

/// Enter raw mode and the alternate screen, hiding the cursor. Puts raw mode
/// back on failure.
fn acquire(mut out: impl io::Write, raw: &mut impl RawMode) -> Result<(), TerminalError> {
    raw.enable().map_err(TerminalError::Init)?;
    if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
        if let Err(rollback) = raw.disable() {
            tracing::error!(error = %rollback, "failed to leave raw mode after init error");
        }
        return Err(TerminalError::Init(e));
    }
    Ok(())
}

/// Undo [`acquire`]. Attempts both steps even if the first one fails.
fn restore(mut out: impl io::Write, raw: &mut impl RawMode) -> io::Result<()> {
    let raw = raw.disable();
    let screen = execute!(out, Show, LeaveAlternateScreen);
    raw.and(screen)
}

/// Undo [`TerminalDriver::new`]. Safe to call more than once, which lets a
/// panic hook call it without knowing whether the driver got there first.
pub fn release() -> io::Result<()> {
    restore(stdout(), &mut CrosstermRawMode)
}

/// Map a crossterm event onto a dashboard event. `None` for everything the
/// dashboard does not react to.
pub fn translate(event: &Event) -> Option<DashboardEvent> {
    match event {
        Event::Key(key) => translate_key(key).map(DashboardEvent::Key),
        Event::Resize(cols, rows) => Some(DashboardEvent::Resize(*cols, *rows)),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Ctrl(c))
        },
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        _ => None,
    }
}

/// Input task body. Ends (closing the channel) when the terminal stream ends
/// or fails, after an interrupt signal, or when the runtime stops listening.
async fn forward_input(tx: mpsc::Sender<DashboardEvent>) {
    let mut events = EventStream::new();
    let signal = interrupt_signal();
    tokio::pin!(signal);

    loop {
        let event = tokio::select! {
            () = &mut signal => {
                tracing::info!("interrupt signal received");
                DashboardEvent::Interrupt
            },

            next = events.next() => match next {
                Some(Ok(event)) => match translate(&event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    return;
                },
                None => return,
            },
        };

        let interrupted = event == DashboardEvent::Interrupt;
        if tx.send(event).await.is_err() || interrupted {
            return;
        }
    }
}

/// Resolves on SIGINT, or SIGTERM on unix. Never resolves if no handler can
/// be installed.
async fn interrupt_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if result.is_err() {
                            std::future::pending::<()>().await;
                        }
                    },
                    _ = terminate.recv() => {},
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                if tokio::signal::ctrl_c().await.is_err() {
                    std::future::pending::<()>().await;
                }
            },
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
