//! Round-trip flight finder.
//!
//! Enumerates every valid round-trip itinerary through a graph of timed,
//! priced flights, streaming each one to a sink the moment it is found.

pub mod domain;
pub mod graph;
pub mod output;
pub mod search;
pub mod web;
