// Matching module: combinatorial search for low-strain epitaxial supercell matches
// Pipeline: area-ratio search -> transformation enumeration -> cross-product deformation scan

// ======================== MODULE DECLARATIONS ========================
pub mod deformation;
pub mod ratio;
pub mod scan;
pub mod sink;
pub mod transformations;

// Test modules
mod _tests_deformation;
mod _tests_ratio;
mod _tests_sink;

// ======================== AREA-RATIO SEARCH ========================
pub use ratio::{
    find_ratio_pairs, // fn(area_s, area_f, max_area, tol, verbose) -> Result<RatioSearch> - accepted (rs, rf) pairs + best fit
    RatioPair,        // struct - integer multiplicities (rs, rf) with rs·area_s ≈ rf·area_f
    RatioSearch,      // struct - all accepted pairs, best pair, approximation error
};

// ======================== TRANSFORMATION ENUMERATION ========================
pub use transformations::{
    enumerate_matrices,   // fn(target_det, radius) -> Vec<TransformationMatrix> - all integer matrices of given determinant
    group_by_determinant, // fn(targets, radius) -> HashMap<i32, Vec<TransformationMatrix>> - one grid pass, bucketed by determinant
    TransformationMatrix, // struct - integer 2x2 supercell transformation [[a1, a2], [b1, b2]]
};

// ======================== DEFORMATION METRIC ========================
pub use deformation::{
    relative_deformation, // fn(substrate, film) -> Deformation - edge/diagonal mismatch ratios
    Deformation,          // struct - (da, db, dab) with max() as the scalar metric
};

// ======================== RESULT SINK ========================
pub use sink::{
    MatchRecord,   // struct - one emitted sub-threshold combination
    MemorySink,    // struct - in-memory sink for tests and embedding
    ResultSink,    // trait - receiver for sub-threshold combinations
    TextSink,      // struct - space-separated text table over any Write
    RECORD_HEADER, // const - header line of the result table
};

// ======================== SCAN ORCHESTRATOR ========================
pub use scan::{
    scan,           // fn(substrate, film, config, sink) -> Result<ScanResult> - full matching pipeline
    MatchCandidate, // struct - evaluated combination (transforms, supercells, deformation)
    ScanConfig,     // struct - search radius, tolerance, deformation limit
    ScanResult,     // struct - ratio search output, best candidate, emitted count
};
