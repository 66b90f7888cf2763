//! Intent resolution building blocks
//!
//! - [`candidate`]: `RouteCandidate` and `Arguments`
//! - [`rules`]: ordered keyword rules for deterministic matching
//! - [`parsing`]: JSON-contract parsing of model routing replies
//! - [`text`]: keyword/digit heuristics shared by both

pub mod candidate;
pub mod parsing;
pub mod rules;
pub mod text;

pub use candidate::{Arguments, Route, RouteCandidate};
pub use parsing::{RouteParseError, backfill_from_input, extract_json_span, parse_route_response};
pub use rules::match_keywords;
