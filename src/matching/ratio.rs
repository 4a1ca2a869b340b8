use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Integer area multiplicities (rs, rf) making `rs·area_s ≈ rf·area_f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioPair {
    /// Substrate multiplicity.
    pub rs: i32,
    /// Film multiplicity.
    pub rf: i32,
}

/// Output of the area-ratio search.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSearch {
    /// Every accepted (rs, rf) pair, in increasing-rs then increasing-rf order.
    pub pairs: Vec<RatioPair>,
    /// The pair minimizing |rs/rf - area_f/area_s|. Ties keep the first
    /// pair encountered.
    pub best: RatioPair,
    /// Approximation error of the best pair: |rs/rf - area_f/area_s|.
    pub approximation: f64,
}

impl RatioSearch {
    /// Distinct rs values in first-seen order.
    pub fn distinct_rs(&self) -> Vec<i32> {
        let mut seen = Vec::new();
        for pair in &self.pairs {
            if !seen.contains(&pair.rs) {
                seen.push(pair.rs);
            }
        }
        seen
    }

    /// Distinct rf values in first-seen order.
    pub fn distinct_rf(&self) -> Vec<i32> {
        let mut seen = Vec::new();
        for pair in &self.pairs {
            if !seen.contains(&pair.rf) {
                seen.push(pair.rf);
            }
        }
        seen
    }
}

/// Find all integer (rs, rf) pairs with `rs ≤ max_area/area_s`,
/// `rf ≤ max_area/area_f` whose area ratio `(rs·area_s)/(rf·area_f)` lies
/// strictly inside `(1 - tol, 1 + tol)`.
///
/// Inspired by ideas in: A. Zur and T. C. McGill, J. Appl. Phys., 1984,
/// 55, 378–386 (https://doi.org/10.1063/1.333084).
///
/// # Errors
/// Returns [`MatchError::NoFeasibleRatio`] when no pair is accepted; the
/// caller must not proceed with an empty pair set.
pub fn find_ratio_pairs(
    area_s: f64,
    area_f: f64,
    max_area: f64,
    tol: f64,
    verbose: bool,
) -> Result<RatioSearch> {
    let rmax1 = (max_area / area_s) as i32;
    let rmax2 = (max_area / area_f) as i32;
    let target = area_f / area_s;
    if verbose {
        info!("rmax1, rmax2: {rmax1} {rmax2}");
        info!("area_f/area_s = {target}");
    }

    let mut pairs = Vec::new();
    let mut best: Option<RatioPair> = None;
    let mut approximation = f64::INFINITY;
    for rs in 1..=rmax1 {
        for rf in 1..=rmax2 {
            let ratio = (f64::from(rs) * area_s) / (f64::from(rf) * area_f);
            if ratio > 1.0 - tol && ratio < 1.0 + tol {
                pairs.push(RatioPair { rs, rf });
                let distance = (f64::from(rs) / f64::from(rf) - target).abs();
                if distance < approximation {
                    best = Some(RatioPair { rs, rf });
                    approximation = distance;
                }
            }
        }
    }

    let best = best.ok_or(MatchError::NoFeasibleRatio {
        area_s,
        area_f,
        max_area,
        tol,
    })?;
    if verbose {
        info!(
            "the (rs, rf) pair that best approximates area_f/area_s is: {} {}",
            best.rs, best.rf
        );
        info!("accuracy of the best approximation: {approximation} = rs/rf - area_f/area_s");
    }
    Ok(RatioSearch {
        pairs,
        best,
        approximation,
    })
}
