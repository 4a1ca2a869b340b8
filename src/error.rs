use thiserror::Error;

/// Errors surfaced by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No integer (rs, rf) pair satisfies the area-ratio tolerance within
    /// the supercell area cap. Fatal to the whole scan; nothing is emitted.
    #[error(
        "no acceptable rs/rf pair found for area_s = {area_s}, area_f = {area_f}, \
         max_area = {max_area}, tol = {tol}; consider increasing tol"
    )]
    NoFeasibleRatio {
        area_s: f64,
        area_f: f64,
        max_area: f64,
        tol: f64,
    },

    /// A supplied lattice has (near-)zero cell area.
    #[error("degenerate {which} lattice: basis vectors are linearly dependent (area = {area})")]
    DegenerateLattice { which: &'static str, area: f64 },

    /// A scan parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// The result sink rejected a write.
    #[error("result sink failure: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, MatchError>;
