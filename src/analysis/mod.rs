/// Motif search and roughness
pub mod matcher;
/// Motif stencils and the canonical sea monster
pub mod motif;

pub use matcher::{MatchReport, count_occurrences, roughness};
pub use motif::Motif;
