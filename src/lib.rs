//! Kalah rules engine and online session hosting.
//!
//! ## Modules
//!
//! - [`gameplay`]: Pure rule engine: sowing, capture, extra turn, game end
//! - [`gameroom`]: One online match: participants, lifecycle, rematch votes
//! - [`hosting`]: Session registry, stale sweeping, WebSocket dispatcher
//! - [`dto`]: Wire snapshots and client/server messages
//! - [`players`]: Local hot-seat play in the terminal
pub mod dto;
pub mod error;
pub mod gameplay;
pub mod gameroom;
pub mod hosting;
pub mod players;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stone count held by a single pit or store.
pub type Stones = u8;
/// Cell index on the board, 0..14.
pub type Pit = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
/// Sessions and participants share the representation but never the type.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Number of cells on the board, stores included.
pub const CELLS: usize = 14;
/// Playing pits per side.
pub const PITS_PER_SIDE: usize = 6;
/// Stones dealt into every playing pit at the start of a game.
pub const STONES_PER_PIT: Stones = 4;
/// Stones on the board for the whole game (4 × 12).
pub const STONES_TOTAL: usize = STONES_PER_PIT as usize * PITS_PER_SIDE * 2;

// ============================================================================
// SESSION HOSTING
// ============================================================================
/// Age after which a session still waiting for its second player is evicted.
pub const STALE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(600);
/// Period of the background stale-session sweep.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(any(feature = "server", feature = "cli"))]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Live sessions are in-memory only, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("install ctrl-c handler");
        println!();
        log::warn!("interrupt received, dropping all sessions");
        std::process::exit(0);
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
