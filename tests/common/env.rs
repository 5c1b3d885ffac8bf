//! Process helpers for driving the `watchman` binary.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn watchman_bin() -> &'static str {
    env!("CARGO_BIN_EXE_watchman")
}

/// Run watchman to completion
pub fn run_watchman(args: &[&str]) -> Output {
    Command::new(watchman_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// Poll `condition` every 50ms until it holds or `timeout` passes
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    condition()
}

/// A running watcher with stdout collected line by line; killed on drop.
pub struct WatchProcess {
    child: Child,
    lines: Receiver<String>,
    seen: Vec<String>,
}

impl WatchProcess {
    pub fn spawn(args: &[&str]) -> Self {
        let mut child = Command::new(watchman_bin())
            .args(args)
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let stdout = child.stdout.take().unwrap();
        let (tx, lines) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Self {
            child,
            lines,
            seen: Vec::new(),
        }
    }

    /// Wait for a stdout line containing `needle`
    pub fn wait_for_line(&mut self, needle: &str) -> Option<String> {
        if let Some(line) = self.seen.iter().find(|line| line.contains(needle)) {
            return Some(line.clone());
        }

        let deadline = Instant::now() + TIMEOUT;
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match self.lines.recv_timeout(remaining) {
                Ok(line) => {
                    self.seen.push(line.clone());
                    if line.contains(needle) {
                        return Some(line);
                    }
                }
                Err(_) => return None,
            }
        }
        None
    }

    /// Every line received so far
    pub fn seen(&self) -> &[String] {
        &self.seen
    }
}

impl Drop for WatchProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Append a line to the watched file
pub fn append(path: &Path, text: &str) {
    use std::io::Write;

    let mut file = std::fs::OpenOptions::new().append(true).open(path).unwrap();
    writeln!(file, "{}", text).unwrap();
}
