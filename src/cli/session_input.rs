//! Window session input
//!
//! Input lines are read on a dedicated thread and shutdown signals are
//! watched by a task; both feed one channel that the session loop drains.
//! A pending stdin read never holds up the runtime on shutdown.

use std::io::{BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;

/// One thing that happened to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// A line of input, without its line ending
    Line(String),
    /// End of input
    Closed,
    /// Reading input failed
    Failed(String),
    /// SIGINT or SIGTERM
    Interrupted,
}

/// Receiver for session input
pub struct SessionInputs {
    receiver: mpsc::Receiver<SessionInput>,
}

impl SessionInputs {
    /// Read lines from stdin and listen for shutdown signals
    pub fn stdin() -> Result<Self, std::io::Error> {
        let (inputs, tx) = Self::from_reader(BufReader::new(std::io::stdin()))?;
        watch_signals(tx)?;
        Ok(inputs)
    }

    /// Read lines from any reader
    ///
    /// Returns the sender as well so other sources can feed the same loop.
    pub fn from_reader<R>(reader: R) -> Result<(Self, mpsc::Sender<SessionInput>), std::io::Error>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(16);

        let tx_lines = tx.clone();
        thread::Builder::new()
            .name("clipmaster-input".to_string())
            .spawn(move || read_lines(reader, tx_lines))?;

        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next input
    ///
    /// Every sender gone counts as end of input.
    pub async fn recv(&mut self) -> SessionInput {
        self.receiver.recv().await.unwrap_or(SessionInput::Closed)
    }
}

fn read_lines<R: BufRead>(reader: R, tx: mpsc::Sender<SessionInput>) {
    for line in reader.lines() {
        let (input, last) = match line {
            Ok(line) => (SessionInput::Line(line), false),
            Err(e) => (SessionInput::Failed(e.to_string()), true),
        };
        // Receiver dropped: the session is over
        if tx.blocking_send(input).is_err() || last {
            return;
        }
    }
    let _ = tx.blocking_send(SessionInput::Closed);
}

#[cfg(unix)]
fn watch_signals(tx: mpsc::Sender<SessionInput>) -> Result<(), std::io::Error> {
    use tokio::signal::unix::{signal, SignalKind};

    let tx_int = tx.clone();
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::spawn(async move {
        sigint.recv().await;
        let _ = tx_int.send(SessionInput::Interrupted).await;
    });

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        sigterm.recv().await;
        let _ = tx.send(SessionInput::Interrupted).await;
    });

    Ok(())
}

#[cfg(not(unix))]
fn watch_signals(tx: mpsc::Sender<SessionInput>) -> Result<(), std::io::Error> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(SessionInput::Interrupted).await;
        }
    });
    Ok(())
}
