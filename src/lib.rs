//! Draftboard State Library
//!
//! This crate provides state management for fantasy baseball draft board logic.
//!
//! # Overview
//!
//! The draft module provides:
//!
//! - **Turn Order** - Snake-draft turn calculation over the id-sorted team
//!   list: ascending in odd rounds, descending in even rounds.
//!
//! - **Drafted-Player Detection** - A seen-identity index over recorded picks
//!   that matches candidates by database id, stats API id, API lookup string,
//!   or full name, strongest key first.
//!
//! - **Roster Slots** - The fixed 18-slot catalog per team and the resolver
//!   that combines a player's eligible positions with the team's filled slots
//!   into the legally open options.
//!
//! - **Draft Board** - The per-session aggregate tying teams, picks, and the
//!   derived indexes together, rebuilt wholesale after every refresh.
//!
//! # Design Principles
//!
//! 1. **Advisory, not authoritative** - The store's atomic `draft_player`
//!    function owns true serialization of picks. Everything here computes
//!    display state and tolerates being momentarily stale.
//!
//! 2. **Snapshot in, snapshot out** - Callers fetch teams and picks, build a
//!    board, and rebuild it from scratch after each confirmed pick. No
//!    incremental updates, no caching.
//!
//! 3. **No networking** - This crate is pure state, no HTTP or database.
//!
//! 4. **Serialization-ready** - Domain types deserialize from the store's
//!    row shapes and the stats API's payloads; aggregates expose JSON
//!    snapshots for clients.
//!
//! # Example
//!
//! ```rust
//! use draftboard_state::draft::{DraftBoard, Pick, Player, PositionFlags, Team};
//!
//! let teams = vec![
//!     Team::new(1, "River Rats"),
//!     Team::new(2, "Harbor Hawks"),
//!     Team::new(3, "Mudville Nine"),
//! ];
//!
//! // Snapshot fetched from the draft results view.
//! let picks = vec![Pick {
//!     team_id: Some(1),
//!     player_id: Some(42),
//!     player_name: Some("Walter Johnson".to_string()),
//!     roster_position: "P 1".to_string(),
//!     ..Default::default()
//! }];
//!
//! let board = DraftBoard::new(teams, picks);
//! assert_eq!(board.team_on_clock().unwrap().team_name, "Harbor Hawks");
//!
//! // A shortstop candidate from the local player table.
//! let candidate = Player {
//!     player_id: Some(7),
//!     player_first_name: Some("Honus".to_string()),
//!     player_last_name: Some("Wagner".to_string()),
//!     flags: PositionFlags { bln_ss: true, ..Default::default() },
//!     ..Default::default()
//! };
//!
//! assert!(!board.is_drafted(&candidate));
//! let open = board.open_slots(2, &candidate).unwrap();
//! assert_eq!(open[0].label(), "SS");
//! ```

pub mod draft;

// Re-export everything from the draft module at crate root
pub use draft::*;
