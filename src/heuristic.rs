//! Distance estimates between cells for the informed solver.
//!
//! All metrics here are computed on `(row, col)` deltas. On a 4-connected grid with unit
//! step cost the true remaining cost is at least the Manhattan distance, so Manhattan,
//! Euclidean, Chebyshev and Minkowski with `p >= 1` are all admissible. Minkowski with
//! `p < 1` exceeds the Manhattan distance off-axis and may overestimate. Admissibility is
//! never checked at runtime: a caller choosing an inadmissible metric gives up the
//! shortest-path guarantee of [AstarSolver](crate::solver::astar::AstarSolver), nothing more.
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Result, SearchError};

/// The capability of estimating the distance between two cells.
pub trait DistanceMetric {
    /// Non-negative estimate of the distance from `a` to `b`.
    fn distance(&self, a: &Cell, b: &Cell) -> f64;

    /// Rejects parameters the metric cannot be evaluated with.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        (**self).distance(a, b)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// L1 distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        let (dr, dc) = a.abs_delta(b);
        (dr + dc) as f64
    }
}

/// L2 distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        let (dr, dc) = a.abs_delta(b);
        (dr as f64).hypot(dc as f64)
    }
}

/// L∞ distance, the limit of [Minkowski] as `p` grows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl DistanceMetric for Chebyshev {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        let (dr, dc) = a.abs_delta(b);
        dr.max(dc) as f64
    }
}

/// `(|Δrow|^p + |Δcol|^p)^(1/p)` for a positive, finite `p`.
#[derive(Clone, Copy, Debug)]
pub struct Minkowski {
    p: f64,
}

impl Minkowski {
    pub fn new(p: f64) -> Result<Minkowski> {
        if p.is_finite() && p > 0.0 {
            Ok(Minkowski { p })
        } else {
            Err(SearchError::InvalidInput(format!(
                "Minkowski order must be a positive finite number, got {p}"
            )))
        }
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DistanceMetric for Minkowski {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        let (dr, dc) = a.abs_delta(b);
        let m = dr.max(dc) as f64;
        if m == 0.0 {
            return 0.0;
        }
        // Scaled by the larger delta so that the powers stay within [0, 1]
        let sum = (dr as f64 / m).powf(self.p) + (dc as f64 / m).powf(self.p);
        (m * sum.powf(self.p.recip())).min(f64::MAX)
    }
}

/// Configuration-level selection of a metric.
///
/// Deserializes from `{"metric": "manhattan"}` or `{"metric": "minkowski", "p": 3.0}` and
/// parses from `manhattan`, `euclidean`, `chebyshev` or `minkowski:<p>`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "lowercase")]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Chebyshev,
    Minkowski { p: f64 },
}

impl Default for Heuristic {
    fn default() -> Heuristic {
        Heuristic::Manhattan
    }
}

impl DistanceMetric for Heuristic {
    fn distance(&self, a: &Cell, b: &Cell) -> f64 {
        match *self {
            Heuristic::Manhattan => Manhattan.distance(a, b),
            Heuristic::Euclidean => Euclidean.distance(a, b),
            Heuristic::Chebyshev => Chebyshev.distance(a, b),
            Heuristic::Minkowski { p } => Minkowski { p }.distance(a, b),
        }
    }

    /// Rejects a Minkowski order that is not a positive finite number.
    fn validate(&self) -> Result<()> {
        match *self {
            Heuristic::Minkowski { p } => Minkowski::new(p).map(|_| ()),
            _ => Ok(()),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Heuristic> {
        let s = s.trim().to_ascii_lowercase();
        let heuristic = match s.split_once(':') {
            None => match s.as_str() {
                "manhattan" => Heuristic::Manhattan,
                "euclidean" => Heuristic::Euclidean,
                "chebyshev" => Heuristic::Chebyshev,
                _ => {
                    return Err(SearchError::InvalidInput(format!(
                        "unknown heuristic {s:?}"
                    )))
                }
            },
            Some(("minkowski", p)) => {
                let p = p.trim().parse::<f64>().map_err(|e| {
                    SearchError::InvalidInput(format!("bad Minkowski order {p:?}: {e}"))
                })?;
                Heuristic::Minkowski { p }
            }
            Some(_) => {
                return Err(SearchError::InvalidInput(format!(
                    "unknown heuristic {s:?}"
                )))
            }
        };
        heuristic.validate()?;
        Ok(heuristic)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::Chebyshev => write!(f, "chebyshev"),
            Heuristic::Minkowski { p } => write!(f, "minkowski:{p}"),
        }
    }
}
