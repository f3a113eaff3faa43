//! Cross-position correlation estimation.
//!
//! A [`CorrelationMatrix`] has one row per position, labelled by the
//! position's contract id. Estimation strategies plug in behind the
//! [`CorrelationEstimator`] trait: [`HistoricalCorrelation`] computes
//! Pearson coefficients from per-underlying return series, while
//! [`ConstantCorrelation`] fills a flat placeholder value for books
//! without usable history.

use std::collections::BTreeMap;

use desk_core::math::stats::pearson;

use crate::position::Position;

/// Symmetric pairwise correlation matrix over a set of positions.
///
/// The diagonal is always 1. Off-diagonal entries are written in
/// mirrored pairs, so the matrix stays symmetric by construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Builds an identity matrix over the given labels.
    pub fn identity(labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut values = vec![vec![0.0; n]; n];
        for (i, row) in values.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { labels, values }
    }

    /// Writes a correlation into both symmetric slots.
    ///
    /// # Panics
    /// Panics if `i == j` (the diagonal is fixed at 1) or if either
    /// index is out of bounds.
    pub fn set_pair(&mut self, i: usize, j: usize, rho: f64) {
        assert_ne!(i, j, "diagonal entries are fixed at 1");
        self.values[i][j] = rho;
        self.values[j][i] = rho;
    }

    /// Number of positions covered by the matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix covers no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row/column labels, in matrix order.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Correlation between positions `i` and `j`, if both are in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i)?.get(j).copied()
    }
}

/// Strategy for estimating cross-position correlation.
///
/// Returns `None` when no meaningful estimate exists for the book,
/// e.g. fewer than two positions or missing price history.
pub trait CorrelationEstimator {
    /// Estimates the pairwise correlation matrix for the book.
    fn estimate(&self, positions: &[Position]) -> Option<CorrelationMatrix>;
}

/// Pearson correlation from historical return series.
///
/// Series are keyed by underlying; every position maps to the series of
/// its contract's underlying. Two positions on the same underlying
/// correlate at exactly 1.
#[derive(Debug, Clone, Default)]
pub struct HistoricalCorrelation {
    series: BTreeMap<String, Vec<f64>>,
}

impl HistoricalCorrelation {
    /// Creates an estimator with no series loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a return series for one underlying.
    #[must_use]
    pub fn with_series(mut self, underlying: impl Into<String>, returns: Vec<f64>) -> Self {
        self.series.insert(underlying.into(), returns);
        self
    }
}

impl CorrelationEstimator for HistoricalCorrelation {
    /// Pairwise Pearson coefficients over the registered series.
    ///
    /// Returns `None` for books of fewer than two positions, and for
    /// any pair whose series are missing, mismatched in length, or
    /// degenerate (fewer than two points or zero variance).
    fn estimate(&self, positions: &[Position]) -> Option<CorrelationMatrix> {
        if positions.len() < 2 {
            return None;
        }

        let labels: Vec<String> = positions
            .iter()
            .map(|p| p.contract.contract_id().to_string())
            .collect();
        let mut matrix = CorrelationMatrix::identity(labels);

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let x = self.series.get(positions[i].contract.underlying())?;
                let y = self.series.get(positions[j].contract.underlying())?;
                let rho = pearson(x, y)?;
                matrix.set_pair(i, j, rho);
            }
        }

        Some(matrix)
    }
}

/// Flat correlation placeholder for books without return history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCorrelation {
    /// Correlation assigned to every off-diagonal pair.
    pub rho: f64,
}

impl Default for ConstantCorrelation {
    /// Uses 0.5, a moderate co-movement assumption for crypto books.
    fn default() -> Self {
        Self { rho: 0.5 }
    }
}

impl CorrelationEstimator for ConstantCorrelation {
    fn estimate(&self, positions: &[Position]) -> Option<CorrelationMatrix> {
        if positions.len() < 2 {
            return None;
        }

        let labels: Vec<String> = positions
            .iter()
            .map(|p| p.contract.contract_id().to_string())
            .collect();
        let mut matrix = CorrelationMatrix::identity(labels);

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                matrix.set_pair(i, j, self.rho);
            }
        }

        Some(matrix)
    }
}
