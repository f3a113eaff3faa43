//! Performance metrics over a completed run.

use desk_core::math::stats::{mean, sample_std};

use crate::trade::Trade;

/// Summary statistics for one backtest run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceMetrics {
    /// `(final equity - initial capital) / initial capital`.
    pub total_return: f64,
    /// Annualized mean-over-dispersion of per-bar equity returns. Zero
    /// when there are fewer than two equity points or no dispersion.
    pub sharpe_ratio: f64,
    /// Largest peak-to-trough equity decline, as a fraction of the peak.
    pub max_drawdown: f64,
    /// Fraction of trades with positive signed cash flow; zero with no
    /// trades.
    pub win_rate: f64,
}

impl PerformanceMetrics {
    /// Computes metrics from the equity curve and trade log.
    pub fn compute(
        equity_curve: &[f64],
        trades: &[Trade],
        initial_capital: f64,
        annualization_periods: usize,
    ) -> Self {
        let total_return = match equity_curve.last() {
            Some(&final_equity) => (final_equity - initial_capital) / initial_capital,
            None => 0.0,
        };

        let step_returns: Vec<f64> = equity_curve
            .windows(2)
            .map(|pair| pair[1] / pair[0] - 1.0)
            .collect();
        let sharpe_ratio = match (mean(&step_returns), sample_std(&step_returns)) {
            (Some(m), Some(s)) if s > 0.0 => m / s * (annualization_periods as f64).sqrt(),
            _ => 0.0,
        };

        let mut peak = f64::MIN;
        let mut max_drawdown = 0.0;
        for &equity in equity_curve {
            if equity > peak {
                peak = equity;
            }
            let drawdown = (peak - equity) / peak;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        let win_rate = if trades.is_empty() {
            0.0
        } else {
            let wins = trades.iter().filter(|t| t.cash_flow() > 0.0).count();
            wins as f64 / trades.len() as f64
        };

        Self {
            total_return,
            sharpe_ratio,
            max_drawdown,
            win_rate,
        }
    }
}
