//! Epitaxial lattice matching library
//!
//! This library finds low-strain epitaxial matches between two 2D crystal
//! lattices (substrate and film) by enumerating integer supercell
//! transformations with commensurate areas and minimizing a relative
//! deformation metric over all matching combinations.

pub mod config;
pub mod error;
pub mod lattice;
pub mod matching;

pub use error::{MatchError, Result};
pub use lattice::Lattice2D;
pub use matching::{scan, MatchCandidate, ResultSink, ScanConfig, ScanResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
