// Candidate–job matching engine.
// Field matchers → weighted aggregator → top-K ranker. Pure, synchronous, no I/O;
// the handlers are the only part that touches HTTP.

pub mod aggregator;
pub mod config;
pub mod handlers;
pub mod matchers;
pub mod ranker;
