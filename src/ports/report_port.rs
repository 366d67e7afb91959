//! Report emission port trait.

use crate::domain::error::SigtraderError;
use crate::domain::strategy::StrategyRun;
use crate::domain::summary::PerformanceSummary;

/// Consumes the read-only outputs of one strategy evaluation.
pub trait ReportPort {
    fn write(
        &self,
        name: &str,
        run: &StrategyRun,
        summary: &PerformanceSummary,
    ) -> Result<(), SigtraderError>;
}
