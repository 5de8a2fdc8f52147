//! Monthly, annual and three-year cost comparison.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pricing::PricingCatalog;
use crate::sizing::SizingRecommendation;
use crate::types::Money;
use crate::workload::WorkloadInput;

/// Months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Years covered by the total-cost-of-ownership horizon.
pub const TCO_YEARS: f64 = 3.0;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Monthly Azure cost split by component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub compute: Money,
    pub storage: Money,
    pub backup: Money,
}

/// Spend over the three reporting horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub monthly: Money,
    pub annual: Money,
    pub three_year: Money,
}

impl CostProjection {
    fn from_monthly(monthly: Money) -> Self {
        let annual = monthly * MONTHS_PER_YEAR;
        Self {
            monthly,
            annual,
            three_year: annual * TCO_YEARS,
        }
    }
}

/// Azure-equivalent spend with its component breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzureCost {
    #[serde(flatten)]
    pub projection: CostProjection,
    pub breakdown: CostBreakdown,
}

/// Difference between current and Azure spend. Negative values mean the
/// migration costs more than today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub monthly: Money,
    pub annual: Money,
    pub three_year: Money,
    /// Monthly savings as a percentage of current spend, one decimal place.
    /// Exactly `0.0` when no current cost was supplied.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub region_multiplier: f64,
    pub current: CostProjection,
    pub azure: AzureCost,
    pub savings: Savings,
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Price a recommendation in the workload's region and compare it against
/// the workload's current monthly spend.
///
/// Unknown regions are priced at the default multiplier.
pub fn estimate_cost(
    workload: &WorkloadInput,
    recommendation: &SizingRecommendation,
    catalog: &PricingCatalog,
) -> Result<CostReport, CoreError> {
    workload.ensure_valid()?;
    if recommendation.vcores == 0 {
        return Err(CoreError::InvalidInput(
            "recommendation vcores must be at least 1".to_string(),
        ));
    }

    let multiplier = catalog.region_multiplier(&workload.region);
    let pricing = catalog.tier_pricing(recommendation.tier);

    let breakdown = CostBreakdown {
        compute: pricing.vcore_price * f64::from(recommendation.vcores) * multiplier,
        storage: pricing.storage_price_per_gb * recommendation.storage_gb as f64 * multiplier,
        backup: pricing.backup_price_per_gb * recommendation.backup_gb as f64 * multiplier,
    };
    let azure_monthly = breakdown.compute + breakdown.storage + breakdown.backup;

    let current_monthly = workload.current_monthly_cost;
    let monthly_savings = current_monthly - azure_monthly;
    let annual_savings = monthly_savings * MONTHS_PER_YEAR;

    Ok(CostReport {
        region_multiplier: multiplier,
        current: CostProjection::from_monthly(current_monthly),
        azure: AzureCost {
            projection: CostProjection::from_monthly(azure_monthly),
            breakdown,
        },
        savings: Savings {
            monthly: monthly_savings,
            annual: annual_savings,
            three_year: annual_savings * TCO_YEARS,
            percentage: savings_percentage(monthly_savings, current_monthly),
        },
    })
}

/// `monthly_savings / current_monthly` as a percentage rounded to one decimal.
///
/// Returns `0.0` when `current_monthly` is not positive.
pub fn savings_percentage(monthly_savings: Money, current_monthly: Money) -> f64 {
    if current_monthly > 0.0 {
        round_to_tenth(monthly_savings / current_monthly * 100.0)
    } else {
        0.0
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
