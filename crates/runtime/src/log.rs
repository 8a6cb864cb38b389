//! JSONL event log.
//!
//! Producers push [`LogRecord`]s into an unbounded channel; one writer task
//! appends them to a file, one JSON object per line. A failing writer stops
//! quietly and never blocks or fails the game.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::types::{Command, CommandOutcome};

/// Which driver issued a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOrigin {
    Gravity,
    Input,
}

/// One processed command, as written to the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub seq: u64,
    /// Milliseconds since the log was created
    pub ts_ms: u64,
    pub source: CommandOrigin,
    pub command: &'static str,
    pub outcome: &'static str,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// Cloneable producer side of the event log. A disabled log drops everything.
#[derive(Debug, Clone)]
pub struct EventLog {
    tx: Option<mpsc::UnboundedSender<LogRecord>>,
    seq: Arc<AtomicU64>,
    started: Instant,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            tx: None,
            seq: Arc::new(AtomicU64::new(0)),
            started: Instant::now(),
        }
    }

    /// A log feeding the returned receiver.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LogRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let log = Self {
            tx: Some(tx),
            ..Self::disabled()
        };
        (log, rx)
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Record a processed command. `seq` is assigned here.
    pub fn record(
        &self,
        source: CommandOrigin,
        command: Command,
        outcome: CommandOutcome,
        score: u32,
        lines: u32,
        game_over: bool,
    ) {
        let Some(tx) = &self.tx else {
            return;
        };
        let record = LogRecord {
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            ts_ms: self.started.elapsed().as_millis() as u64,
            source,
            command: command.as_str(),
            outcome: outcome.as_str(),
            score,
            lines,
            game_over,
        };
        // The writer may have stopped; the game goes on regardless.
        let _ = tx.send(record);
    }
}

/// Start a writer task appending to `path`. Must be called inside a tokio
/// runtime. The task ends once every `EventLog` clone is dropped.
pub fn spawn_writer(path: impl Into<PathBuf>) -> (EventLog, JoinHandle<()>) {
    let (log, rx) = EventLog::channel();
    let handle = tokio::spawn(write_records(path.into(), rx));
    (log, handle)
}

/// Drain `rx` into `path` as JSON lines.
pub async fn write_records(path: PathBuf, mut rx: mpsc::UnboundedReceiver<LogRecord>) {
    use tokio::fs::OpenOptions;
    use tokio::io::AsyncWriteExt;

    let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
        Ok(f) => f,
        Err(_) => return,
    };

    let mut buf: Vec<u8> = Vec::with_capacity(256);
    while let Some(record) = rx.recv().await {
        buf.clear();
        if serde_json::to_writer(&mut buf, &record).is_err() {
            continue;
        }
        buf.push(b'\n');
        if file.write_all(&buf).await.is_err() {
            break;
        }
    }

    let _ = file.flush().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_drops_records() {
        let log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(
            CommandOrigin::Input,
            Command::Left,
            CommandOutcome::Moved,
            0,
            0,
            false,
        );
    }

    #[test]
    fn records_get_increasing_seq() {
        let (log, mut rx) = EventLog::channel();
        let clone = log.clone();
        log.record(CommandOrigin::Gravity, Command::Down, CommandOutcome::Moved, 0, 0, false);
        clone.record(CommandOrigin::Input, Command::Rotate, CommandOutcome::Rotated, 0, 0, false);

        let a = rx.try_recv().unwrap();
        let b = rx.try_recv().unwrap();
        assert_eq!((a.seq, b.seq), (0, 1));
        assert_eq!(a.source, CommandOrigin::Gravity);
        assert_eq!(b.command, "rotate");
    }

    #[test]
    fn record_serializes_snake_case() {
        let record = LogRecord {
            seq: 3,
            ts_ms: 1500,
            source: CommandOrigin::Gravity,
            command: "down",
            outcome: CommandOutcome::Locked { lines_cleared: 1 }.as_str(),
            score: 100,
            lines: 1,
            game_over: false,
        };
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["source"], "gravity");
        assert_eq!(v["outcome"], "locked");
        assert_eq!(v["score"], 100);
        assert_eq!(v["game_over"], false);
    }

    #[test]
    fn writer_appends_one_line_per_record() {
        let path = std::env::temp_dir().join(format!(
            "blockfall-log-test-{}.jsonl",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let (log, rx) = EventLog::channel();
        log.record(CommandOrigin::Input, Command::Left, CommandOutcome::Moved, 0, 0, false);
        log.record(
            CommandOrigin::Gravity,
            Command::Down,
            CommandOutcome::GameOver { lines_cleared: 0 },
            200,
            2,
            true,
        );
        drop(log);

        tokio_test::block_on(write_records(path.clone(), rx));

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["command"], "left");
        assert_eq!(lines[1]["outcome"], "game_over");
        assert_eq!(lines[1]["score"], 200);
        assert_eq!(lines[1]["game_over"], true);
    }
}
