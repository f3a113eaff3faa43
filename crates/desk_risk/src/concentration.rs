//! Book concentration reporting.
//!
//! Exposure is measured as a fraction of gross absolute market value,
//! so long and short legs both count towards concentration rather than
//! netting out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use desk_core::types::OptionKind;

use crate::position::Position;

/// Share of the book held in calls, puts, and each expiry date.
///
/// All figures are fractions of gross absolute market value and sum to
/// 1 for a non-empty book. A book with zero gross value reports zeros
/// and an empty expiry map.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcentrationReport {
    /// Fraction of gross value in call contracts.
    pub calls: f64,
    /// Fraction of gross value in put contracts.
    pub puts: f64,
    /// Fraction of gross value per expiry date.
    pub by_expiry: BTreeMap<NaiveDate, f64>,
}

impl ConcentrationReport {
    /// Computes concentration fractions over the book.
    pub fn from_positions(positions: &[Position]) -> Self {
        let gross: f64 = positions.iter().map(|p| p.market_value().abs()).sum();
        if gross == 0.0 {
            return Self::default();
        }

        let mut report = Self::default();
        for position in positions {
            let weight = position.market_value().abs() / gross;
            match position.contract.kind() {
                OptionKind::Call => report.calls += weight,
                OptionKind::Put => report.puts += weight,
            }
            *report
                .by_expiry
                .entry(position.contract.expiry().date_naive())
                .or_insert(0.0) += weight;
        }
        report
    }
}
