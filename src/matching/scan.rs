use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{MatchError, Result};
use crate::lattice::Lattice2D;
use crate::matching::deformation::{relative_deformation, Deformation};
use crate::matching::ratio::{find_ratio_pairs, RatioSearch};
use crate::matching::sink::{MatchRecord, ResultSink};
use crate::matching::transformations::{group_by_determinant, TransformationMatrix};

/// Parameters of a composite scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Bound on transformation-matrix entries; also caps the supercell
    /// area at `max(area_s, area_f) · radius²`.
    pub search_radius: i32,
    /// Fractional tolerance for the area-ratio acceptance window.
    pub tol: f64,
    /// Strict upper bound for a combination to be emitted to the sink.
    pub deformation_limit: f64,
    /// Report ratio-search details through the log facade.
    pub verbose: bool,
}

impl ScanConfig {
    pub fn new(search_radius: i32, tol: f64, deformation_limit: f64) -> Self {
        ScanConfig {
            search_radius,
            tol,
            deformation_limit,
            verbose: false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.search_radius < 1 {
            return Err(MatchError::InvalidParameter {
                name: "search_radius",
                reason: format!("must be a positive integer, got {}", self.search_radius),
            });
        }
        if !(self.tol > 0.0 && self.tol < 1.0) {
            return Err(MatchError::InvalidParameter {
                name: "tol",
                reason: format!("must lie in (0, 1), got {}", self.tol),
            });
        }
        if !(self.deformation_limit > 0.0) {
            return Err(MatchError::InvalidParameter {
                name: "deformation_limit",
                reason: format!("must be positive, got {}", self.deformation_limit),
            });
        }
        Ok(())
    }
}

/// A fully evaluated substrate/film combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub substrate_transform: TransformationMatrix,
    pub film_transform: TransformationMatrix,
    pub substrate_supercell: Lattice2D,
    pub film_supercell: Lattice2D,
    pub deformation: Deformation,
}

impl MatchCandidate {
    /// Scalar metric max(da, db, dab).
    pub fn metric(&self) -> f64 {
        self.deformation.max()
    }

    fn evaluate(
        substrate: &Lattice2D,
        film: &Lattice2D,
        substrate_transform: TransformationMatrix,
        film_transform: TransformationMatrix,
    ) -> Self {
        let substrate_supercell = substrate_transform.apply(substrate);
        let film_supercell = film_transform.apply(film);
        let deformation = relative_deformation(&substrate_supercell, &film_supercell);
        MatchCandidate {
            substrate_transform,
            film_transform,
            substrate_supercell,
            film_supercell,
            deformation,
        }
    }

    fn to_record(self) -> MatchRecord {
        MatchRecord {
            substrate_transform: self.substrate_transform,
            film_transform: self.film_transform,
            substrate_supercell: self.substrate_supercell,
            film_supercell: self.film_supercell,
            deformation: self.metric(),
        }
    }
}

/// Outcome of a composite scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The accepted ratio pairs and the best-approximating pair.
    pub ratio: RatioSearch,
    /// The minimum-deformation combination. `None` only when every
    /// accepted ratio pair maps to an empty transformation group at the
    /// given radius.
    pub best: Option<MatchCandidate>,
    /// Number of records handed to the sink.
    pub emitted: usize,
}

/// Evaluate one substrate transformation against a film group: the
/// running minimum (later equal metric wins) and the sub-threshold
/// records in film enumeration order.
fn evaluate_row(
    substrate: &Lattice2D,
    film: &Lattice2D,
    substrate_transform: TransformationMatrix,
    film_group: &[TransformationMatrix],
    deformation_limit: f64,
) -> (Option<MatchCandidate>, Vec<MatchRecord>) {
    let mut row_best: Option<MatchCandidate> = None;
    let mut records = Vec::new();
    for &film_transform in film_group {
        let candidate =
            MatchCandidate::evaluate(substrate, film, substrate_transform, film_transform);
        let metric = candidate.metric();
        if row_best.map_or(true, |b| metric <= b.metric()) {
            row_best = Some(candidate);
        }
        if metric < deformation_limit {
            records.push(candidate.to_record());
        }
    }
    (row_best, records)
}

/// Scan all commensurate supercell combinations of the two lattices and
/// report the minimum-deformation one, emitting every combination below
/// `deformation_limit` to the sink.
///
/// The sink's table is started fresh (`begin`) before any record. When
/// two combinations tie on the metric, the later one in enumeration order
/// wins the minimum; the parallel path preserves this through an
/// order-stable reduction.
///
/// # Errors
/// [`MatchError::NoFeasibleRatio`] when no (rs, rf) pair satisfies the
/// tolerance; nothing is emitted in that case. Invalid parameters and
/// degenerate lattices are rejected before any enumeration.
pub fn scan(
    substrate: &Lattice2D,
    film: &Lattice2D,
    config: &ScanConfig,
    sink: &mut dyn ResultSink,
) -> Result<ScanResult> {
    config.validate()?;
    substrate.validate_nondegenerate("substrate")?;
    film.validate_nondegenerate("film")?;

    let area_s = substrate.area();
    let area_f = film.area();
    let radius = config.search_radius;
    let max_area = area_s.max(area_f) * f64::from(radius).powi(2);

    let ratio = find_ratio_pairs(area_s, area_f, max_area, config.tol, config.verbose)?;
    debug!(
        "ratio search accepted {} pairs, best ({}, {})",
        ratio.pairs.len(),
        ratio.best.rs,
        ratio.best.rf
    );

    let substrate_groups = group_by_determinant(&ratio.distinct_rs(), radius);
    let film_groups = group_by_determinant(&ratio.distinct_rf(), radius);

    sink.begin()?;

    let mut best: Option<MatchCandidate> = None;
    let mut emitted = 0usize;
    for pair in &ratio.pairs {
        let substrate_group = &substrate_groups[&pair.rs];
        let film_group = &film_groups[&pair.rf];
        if substrate_group.is_empty() || film_group.is_empty() {
            debug!(
                "no transformations at radius {radius} for pair ({}, {}); skipping",
                pair.rs, pair.rf
            );
            continue;
        }

        #[cfg(feature = "parallel")]
        let rows: Vec<_> = substrate_group
            .par_iter()
            .map(|&t| evaluate_row(substrate, film, t, film_group, config.deformation_limit))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<_> = substrate_group
            .iter()
            .map(|&t| evaluate_row(substrate, film, t, film_group, config.deformation_limit))
            .collect();

        // Order-stable reduction: rows arrive in substrate enumeration
        // order regardless of how they were evaluated.
        for (row_best, records) in rows {
            if let Some(candidate) = row_best {
                if best.map_or(true, |b| candidate.metric() <= b.metric()) {
                    best = Some(candidate);
                }
            }
            for record in &records {
                sink.record(record)?;
                emitted += 1;
            }
        }
    }

    match &best {
        Some(candidate) => info!(
            "minimum deformation {} at substrate [{}], film [{}]; {} records below {}",
            candidate.metric(),
            candidate.substrate_transform,
            candidate.film_transform,
            emitted,
            config.deformation_limit
        ),
        None => info!("no combination realizable at radius {radius}"),
    }

    Ok(ScanResult {
        ratio,
        best,
        emitted,
    })
}
