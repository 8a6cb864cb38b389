//! Driver loop: the two command producers.
//!
//! The gravity ticker issues `Down` every interval; the input listener turns
//! polled commands into board commands. Both stop once the game is over.

use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::core::Board;
use crate::input::CommandSource;
use crate::log::{CommandOrigin, EventLog};
use crate::types::{Command, CommandOutcome};

/// Apply `command` and log the result, all under one board lock.
pub fn apply_logged(
    board: &Board,
    log: &EventLog,
    origin: CommandOrigin,
    command: Command,
) -> CommandOutcome {
    let (outcome, score, lines, game_over) = board.with_state(|state| {
        let outcome = state.apply(command);
        (outcome, state.score(), state.lines(), state.game_over())
    });
    log.record(origin, command, outcome, score, lines, game_over);
    outcome
}

/// Spawn the gravity ticker. The first `Down` comes one full interval after
/// the call.
pub fn spawn_gravity(board: Board, interval: Duration, log: EventLog) -> JoinHandle<()> {
    let interval = interval.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if board.is_over() {
                break;
            }
            if apply_logged(&board, &log, CommandOrigin::Gravity, Command::Down).ends_game() {
                break;
            }
        }
    })
}

/// Spawn the input listener on the blocking pool.
///
/// `source` is polled with `poll_timeout` so the listener notices a game that
/// ended elsewhere. A source error ends the listener and is returned.
pub fn spawn_input<S>(
    board: Board,
    mut source: S,
    poll_timeout: Duration,
    log: EventLog,
) -> JoinHandle<Result<()>>
where
    S: CommandSource + 'static,
{
    tokio::task::spawn_blocking(move || {
        while !board.is_over() {
            let Some(command) = source.poll_command(poll_timeout)? else {
                continue;
            };
            if apply_logged(&board, &log, CommandOrigin::Input, command).ends_game() {
                break;
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequenceShapes, ShapeCatalog};
    use crate::input::ScriptedCommands;

    const I: usize = 0;
    const O: usize = 1;

    fn board(width: u16, height: u16, shape: usize) -> Board {
        Board::new(width, height, ShapeCatalog::standard(), SequenceShapes::repeat(shape)).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn gravity_steps_once_per_interval() {
        let board = board(10, 20, I);
        let handle = spawn_gravity(board.clone(), Duration::from_millis(500), EventLog::disabled());

        time::sleep(Duration::from_millis(1_250)).await;
        assert_eq!(board.snapshot().active.unwrap().row, 2);

        board.apply_command(Command::Terminate);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn gravity_stops_at_game_over() {
        // O pieces on a 4x3 board: the second spawn is blocked.
        let board = board(4, 3, O);
        let (log, mut rx) = EventLog::channel();
        spawn_gravity(board.clone(), Duration::from_millis(100), log)
            .await
            .unwrap();

        assert!(board.is_over());
        let mut records = Vec::new();
        while let Ok(record) = rx.try_recv() {
            records.push(record);
        }
        let outcomes: Vec<&str> = records.iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, ["moved", "game_over"]);
        assert!(records.iter().all(|r| r.source == CommandOrigin::Gravity));
        assert!(records[1].game_over);
    }

    #[tokio::test]
    async fn input_listener_applies_script_and_stops_on_terminate() {
        let board = board(10, 20, I);
        let script = ScriptedCommands::new([
            Command::Left,
            Command::Left,
            Command::Down,
            Command::Terminate,
            Command::Right,
        ]);
        let (log, mut rx) = EventLog::channel();
        spawn_input(board.clone(), script, Duration::from_millis(5), log)
            .await
            .unwrap()
            .unwrap();

        let snap = board.snapshot();
        assert!(snap.game_over);
        let active = snap.active.unwrap();
        assert_eq!((active.row, active.col), (1, 1));

        let mut commands = Vec::new();
        while let Ok(record) = rx.try_recv() {
            commands.push(record.command);
        }
        assert_eq!(commands, ["left", "left", "down", "terminate"]);
    }

    #[tokio::test]
    async fn input_listener_exits_when_game_ends_elsewhere() {
        let board = board(10, 20, I);
        let handle = spawn_input(
            board.clone(),
            ScriptedCommands::default(),
            Duration::from_millis(5),
            EventLog::disabled(),
        );
        board.apply_command(Command::Terminate);
        handle.await.unwrap().unwrap();
    }
}
