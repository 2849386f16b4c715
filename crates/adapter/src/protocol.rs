//! Protocol module - JSON message types for the headless adapter
//!
//! Line-delimited JSON: one request per input line, one response per output line.
//! Every response carries `type` and a monotonically increasing `seq`.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameSession, RandomSource};
use crate::types::{MoveOutcome, Tile};

// ============== Client -> Game Messages ==============

/// A request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Slide tiles. `direction` stays a string so unknown names reach the core
    /// and come back as `invalid_direction` rather than a parse failure.
    Move { direction: String },
    Restart,
    State,
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileWire {
    pub value: u32,
    pub x: u8,
    pub y: u8,
}

impl From<Tile> for TileWire {
    fn from(t: Tile) -> Self {
        Self {
            value: t.value,
            x: t.x,
            y: t.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    pub seq: u64,
    pub moved: bool,
    pub score_delta: u32,
    pub score: u32,
    pub status: String,
    pub won: bool,
    pub lost: bool,
    pub size: u8,
    pub moves: u32,
    /// Row-major order.
    pub tiles: Vec<TileWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawned: Option<TileWire>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidDirection,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// A response line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    State(StateMessage),
    Error(ErrorMessage),
}

impl Response {
    pub fn seq(&self) -> u64 {
        match self {
            Response::State(m) => m.seq,
            Response::Error(m) => m.seq,
        }
    }
}

pub fn parse_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line)
}

/// Build a state response from the session and the outcome that produced it.
pub fn create_state<R: RandomSource>(
    seq: u64,
    session: &GameSession<R>,
    outcome: MoveOutcome,
) -> Response {
    let status = session.status();
    Response::State(StateMessage {
        seq,
        moved: outcome.moved,
        score_delta: outcome.score_delta,
        score: session.score(),
        status: status.as_str().to_string(),
        won: outcome.won || session.terminal().won,
        lost: outcome.lost || session.terminal().lost,
        size: session.size(),
        moves: session.moves(),
        tiles: session
            .grid()
            .sorted_tiles()
            .into_iter()
            .map(TileWire::from)
            .collect(),
        spawned: outcome.spawned.map(TileWire::from),
    })
}

pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> Response {
    Response::Error(ErrorMessage {
        seq,
        code,
        message: message.to_string(),
    })
}

impl From<&GameError> for ErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::InvalidDirection { .. } => ErrorCode::InvalidDirection,
            _ => ErrorCode::InvalidRequest,
        }
    }
}
