//! Line server for the headless adapter
//!
//! Reads one JSON request per line, applies it to the session and writes one
//! JSON response per line. Synchronous: each request is fully processed before
//! the next line is read.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::{GameSession, RandomSource};
use crate::protocol::*;
use crate::types::MoveOutcome;

/// Owns the session and the response sequence counter.
pub struct Server<R> {
    session: GameSession<R>,
    seq: u64,
}

impl<R: RandomSource> Server<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Self { session, seq: 0 }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Sequence number of the last response produced.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Handle one input line. Returns `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match parse_request(line) {
            Ok(request) => self.handle_request(request),
            Err(e) => {
                warn!(error = %e, "rejected malformed request");
                let seq = self.next_seq();
                create_error(seq, ErrorCode::InvalidRequest, &e.to_string())
            }
        };
        Some(response)
    }

    pub fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::Move { direction } => match self.session.apply_input(&direction) {
                Ok(outcome) => {
                    let seq = self.next_seq();
                    create_state(seq, &self.session, outcome)
                }
                Err(e) => {
                    warn!(%direction, error = %e, "rejected move request");
                    let seq = self.next_seq();
                    create_error(seq, ErrorCode::from(&e), &e.to_string())
                }
            },
            Request::Restart => {
                self.session.restart();
                let seq = self.next_seq();
                create_state(seq, &self.session, MoveOutcome::default())
            }
            Request::State => {
                let seq = self.next_seq();
                create_state(seq, &self.session, MoveOutcome::default())
            }
        }
    }

    /// Serve until `reader` reaches EOF.
    pub fn run<I: BufRead, O: Write>(&mut self, reader: I, mut writer: O) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            let Some(response) = self.handle_line(&line) else {
                continue;
            };
            write_response(&mut writer, &response)?;
        }
        debug!(responses = self.seq, "input closed");
        Ok(())
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

/// Serialize `response` as a single line and flush.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    serde_json::to_writer(&mut *writer, response)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Serve `session` over `reader`/`writer` until EOF.
pub fn run<R, I, O>(session: GameSession<R>, reader: I, writer: O) -> Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    Server::new(session).run(reader, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, SimpleRng};

    fn server_with(rows: [[u32; 4]; 4]) -> Server<SimpleRng> {
        let grid = Grid::from_rows(rows).unwrap();
        Server::new(GameSession::from_grid(grid, SimpleRng::new(7)).unwrap())
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut server = server_with([[0; 4]; 4]);
        assert!(server.handle_line("").is_none());
        assert!(server.handle_line("   ").is_none());
        assert_eq!(server.seq(), 0);
    }

    #[test]
    fn test_move_reports_merge() {
        let mut server = server_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let resp = server
            .handle_line(r#"{"type":"move","direction":"left"}"#)
            .unwrap();

        let Response::State(state) = resp else {
            panic!("expected state");
        };
        assert_eq!(state.seq, 1);
        assert!(state.moved);
        assert_eq!(state.score_delta, 4);
        assert_eq!(state.score, 4);
        assert!(state.tiles.contains(&TileWire { value: 4, x: 0, y: 0 }));
        assert!(state.spawned.is_some());
        assert_eq!(state.tiles.len(), 2);
    }

    #[test]
    fn test_bad_direction_keeps_serving() {
        let mut server = server_with([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let resp = server
            .handle_line(r#"{"type":"move","direction":"sideways"}"#)
            .unwrap();
        match resp {
            Response::Error(e) => {
                assert_eq!(e.code, ErrorCode::InvalidDirection);
                assert_eq!(e.seq, 1);
            }
            other => panic!("expected error, got {other:?}"),
        }

        let resp = server.handle_line(r#"{"type":"state"}"#).unwrap();
        assert_eq!(resp.seq(), 2);
        assert_eq!(server.session().score(), 0);
    }

    #[test]
    fn test_malformed_json_is_invalid_request() {
        let mut server = server_with([[0; 4]; 4]);
        let resp = server.handle_line("{oops").unwrap();
        match resp {
            Response::Error(e) => assert_eq!(e.code, ErrorCode::InvalidRequest),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_writes_one_line_per_response() {
        let mut server = server_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let input = b"{\"type\":\"state\"}\n\n{\"type\":\"move\",\"direction\":\"l\"}\n";
        let mut out = Vec::new();
        server.run(&input[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""seq":1"#));
        assert!(lines[1].contains(r#""seq":2"#));
        assert!(lines[1].contains(r#""moved":true"#));
    }
}
