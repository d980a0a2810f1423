//! Batch benchmark: drives the reference game server with one remote player
//! slot and replays its log output into a shadow board to tally outcomes.

mod game_log;
mod results;

pub use game_log::{apply_line, FinalScores};
pub use results::{render_bar, terminal_width, Tally};

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::ai::StrategyKind;
use crate::client::GameClient;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::game::{Board, Player};

/// Runs games between the configured strategy (in the remote slot) and the
/// server's built-in random player.
pub struct Arena {
    config: ArenaConfig,
    strategy: StrategyKind,
    rng: StdRng,
}

impl Arena {
    pub fn new(config: ArenaConfig, strategy: StrategyKind, rng: StdRng) -> Self {
        Arena {
            config,
            strategy,
            rng,
        }
    }

    /// Play the configured number of games, drawing the remote side for
    /// each game from the injected RNG, and tally the outcomes.
    pub fn run(&mut self) -> Result<Tally, ArenaError> {
        let mut scores = Vec::new();
        for game in 0..self.config.num_games {
            let side = if self.rng.random_range(0..2) == 0 {
                Player::One
            } else {
                Player::Two
            };
            info!(game, side = side.number(), "starting game");
            let (p1, p2) = self.run_one(side)?;
            debug!(game, p1, p2, "game finished");
            scores.push(match side {
                Player::One => (p1, p2),
                Player::Two => (p2, p1),
            });
        }
        Ok(Tally::from_scores(&scores))
    }

    /// Run a single game with the remote player on `side`.
    fn run_one(&mut self, side: Player) -> Result<FinalScores, ArenaError> {
        let mut child = self.spawn_server(side)?;

        // the server logs on both streams; merge them line-by-line
        let (tx, rx) = mpsc::channel::<String>();
        let stdout = child.stdout.take().expect("stdout is piped");
        let stderr = child.stderr.take().expect("stderr is piped");
        spawn_line_reader(stdout, tx.clone());
        spawn_line_reader(stderr, tx);

        let listener_marker = format!("port {}", self.config.player_port);
        let mut board = Board::new();
        let mut client_handle = None;
        let mut outcome: Result<Option<FinalScores>, ArenaError> = Ok(None);

        for line in rx {
            if line.contains("Listening for player") && line.contains(&listener_marker) {
                debug!(line = line.as_str(), "server ready for remote player");
                client_handle = Some(self.spawn_client());
            } else {
                match apply_line(&line, &mut board) {
                    Ok(None) => continue,
                    done => {
                        outcome = done;
                        let _ = child.kill();
                        break;
                    }
                }
            }
        }
        let _ = child.wait();
        if let Some(handle) = client_handle {
            let _ = handle.join();
        }
        outcome?.ok_or(ArenaError::MissingResult)
    }

    /// Connect the strategy under test to the server's remote slot. The
    /// client seed derives from the arena RNG, keeping whole runs
    /// reproducible from a single seed.
    fn spawn_client(&mut self) -> thread::JoinHandle<()> {
        let strategy = self.strategy;
        let port = self.config.player_port;
        let seed = self.rng.random::<u64>();
        thread::spawn(move || {
            // give the listener a moment to accept
            thread::sleep(Duration::from_millis(100));
            let rng = StdRng::seed_from_u64(seed);
            let mut client = GameClient::new(strategy.build(rng));
            if let Err(e) = client.play("localhost", port) {
                warn!(error = %e, "client exited with error");
            }
        })
    }

    fn spawn_server(&self, side: Player) -> Result<Child, ArenaError> {
        let player_port = self.config.player_port.to_string();
        let ui_port = self.config.ui_port.to_string();
        let min_turn_time = self.config.min_turn_time_ms.to_string();

        let mut command = Command::new("java");
        command.arg("-jar").arg(&self.config.jar_path);
        match side {
            Player::One => {
                command.args(["--p1-type", "remote", "--p1-port", &player_port]);
                command.args(["--p2-type", "random"]);
            }
            Player::Two => {
                command.args(["--p1-type", "random"]);
                command.args(["--p2-type", "remote", "--p2-port", &player_port]);
            }
        }
        command.args(["--min-turn-time", &min_turn_time, "--ui-port", &ui_port]);
        command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ArenaError::Spawn {
                jar: self.config.jar_path.clone(),
                source,
            })
    }
}

/// Forward lines from a child stream into the merged channel. The thread
/// ends when the stream closes or the receiver is dropped.
fn spawn_line_reader<R: Read + Send + 'static>(reader: R, tx: Sender<String>) {
    thread::spawn(move || {
        for line in BufReader::new(reader).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
}
