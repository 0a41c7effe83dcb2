//! Process/timing logger.
//!
//! A [`Logger`] tracks one chain of work at a time: [`Logger::new_log`]
//! opens a chain under a fresh random session id, [`Logger::log`] appends to
//! it, and [`Logger::proc_time`] / [`Logger::exec_time`] report the wall
//! time between calls. Lines go to stdout in the shape
//!
//! ```text
//! [log • aGy5O]: GET => /hello | 10 Aug 2026 @ 2:46:19 am
//! [stats • aGy5O]: someFunction => 53ms
//! [exec • aGy5O]: 121ms
//! ```

use std::fmt;
use std::time::Instant;

use chrono::{Datelike, Local};
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::date::{parse_date, DateFormat};

/// Tag rendered at the front of each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Stats,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Log => "log",
            LogLevel::Stats => "stats",
            LogLevel::Error => "error",
        })
    }
}

/// Session-scoped process logger with per-step and whole-run timing.
#[derive(Debug)]
pub struct Logger {
    log_id: String,
    exec_mark: Option<Instant>,
    proc_mark: Option<Instant>,
    delta_ms: u128,
    cache: String,
    /// Length of the random session id. Defaults to 5.
    pub id_length: usize,
    /// Render the timestamp's date month-first.
    pub american_date: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            log_id: String::new(),
            exec_mark: None,
            proc_mark: None,
            delta_ms: 0,
            cache: String::new(),
            id_length: 5,
            american_date: false,
        }
    }

    fn gen_log_id(&mut self) {
        self.log_id = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.id_length)
            .map(char::from)
            .collect();
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let parts = parse_date(
            now.day() as i32,
            now.weekday().num_days_from_sunday() as i32,
            now.month0() as i32,
            now.year(),
        );
        format!(
            "{} @ {}",
            parts.format(DateFormat::Nsl, self.american_date),
            now.format("%-I:%M:%S %P")
        )
    }

    fn chain_line(&self, level: LogLevel, process: &str, message: &str) -> String {
        format!(
            "[{level} • {}]: {process} => {message} | {}",
            self.log_id,
            self.timestamp()
        )
    }

    /// Start a new log chain under a fresh session id and reset both timers.
    pub fn new_log(&mut self, level: LogLevel, process: &str, message: &str) {
        let now = Instant::now();
        self.gen_log_id();
        self.exec_mark = Some(now);
        self.proc_mark = Some(now);
        println!("{}", self.chain_line(level, process, message));
    }

    /// Append to the current chain, keeping the session id.
    ///
    /// Records the time since the previous step so a following
    /// [`proc_time`](Self::proc_time) can report it.
    pub fn log(&mut self, level: LogLevel, process: &str, message: &str) {
        let now = Instant::now();
        self.delta_ms = self
            .proc_mark
            .map(|mark| mark.elapsed().as_millis())
            .unwrap_or(0);
        self.proc_mark = Some(now);
        self.cache = process.to_string();
        println!("{}", self.chain_line(level, process, message));
    }

    /// Report the time between the last two chain steps.
    pub fn proc_time(&mut self) {
        println!(
            "[stats • {}]: {} => {}ms",
            self.log_id, self.cache, self.delta_ms
        );
        self.cache.clear();
    }

    /// Report the whole-chain time and reset the logger.
    pub fn exec_time(&mut self) {
        let total = self
            .exec_mark
            .map(|mark| mark.elapsed().as_millis())
            .unwrap_or(0);
        println!("[exec • {}]: {total}ms", self.log_id);
        self.log_id.clear();
        self.cache.clear();
        self.exec_mark = None;
        self.proc_mark = None;
        self.delta_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn new_log_assigns_an_id() {
        let mut logger = Logger::new();
        logger.new_log(LogLevel::Log, "GET", "/hello");
        assert_eq!(logger.log_id.len(), 5);
        assert!(logger.log_id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn id_length_is_configurable() {
        let mut logger = Logger::new();
        logger.id_length = 12;
        logger.new_log(LogLevel::Log, "GET", "/hello");
        assert_eq!(logger.log_id.len(), 12);
    }

    #[test]
    fn id_is_stable_across_a_chain() {
        let mut logger = Logger::new();
        logger.new_log(LogLevel::Log, "GET", "/hello");
        let id = logger.log_id.clone();
        logger.log(LogLevel::Log, "handler", "working");
        logger.log(LogLevel::Error, "handler", "oh no");
        assert_eq!(logger.log_id, id);
    }

    #[test]
    fn chain_line_shape() {
        let mut logger = Logger::new();
        logger.new_log(LogLevel::Log, "GET", "/hello");
        let line = logger.chain_line(LogLevel::Stats, "proc", "msg");
        let prefix = format!("[stats • {}]: proc => msg | ", logger.log_id);
        assert!(line.starts_with(&prefix), "got {line:?}");
    }

    #[test]
    fn log_records_the_step_delta() {
        let mut logger = Logger::new();
        logger.new_log(LogLevel::Log, "GET", "/hello");
        std::thread::sleep(Duration::from_millis(15));
        logger.log(LogLevel::Log, "step", "done");
        assert!(logger.delta_ms >= 10, "delta was {}ms", logger.delta_ms);
        assert_eq!(logger.cache, "step");
        logger.proc_time();
        assert!(logger.cache.is_empty());
    }

    #[test]
    fn exec_time_resets_state() {
        let mut logger = Logger::new();
        logger.new_log(LogLevel::Log, "GET", "/hello");
        logger.log(LogLevel::Log, "step", "done");
        logger.exec_time();
        assert!(logger.log_id.is_empty());
        assert!(logger.cache.is_empty());
        assert_eq!(logger.delta_ms, 0);
        assert!(logger.exec_mark.is_none());
        assert!(logger.proc_mark.is_none());
    }
}
