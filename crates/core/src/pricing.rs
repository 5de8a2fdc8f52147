//! Service tiers and the static pricing catalog.
//!
//! The built-in catalog is a snapshot of Azure Database for PostgreSQL
//! flexible-server list prices (East US, per month). A replacement catalog
//! can be loaded from JSON at startup; it is read-only afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Money;
use crate::validation::{validate_non_negative, validate_positive};

// ---------------------------------------------------------------------------
// Built-in price snapshot
// ---------------------------------------------------------------------------

/// Burstable compute, per vCore per month.
pub const BURSTABLE_VCORE_PRICE: Money = 24.82;
/// General Purpose compute, per vCore per month.
pub const GENERAL_PURPOSE_VCORE_PRICE: Money = 73.73;
/// Memory Optimized compute, per vCore per month.
pub const MEMORY_OPTIMIZED_VCORE_PRICE: Money = 147.46;
/// Provisioned storage, per GB per month (all tiers).
pub const STORAGE_PRICE_PER_GB: Money = 0.115;
/// Backup storage, per GB per month (all tiers).
pub const BACKUP_PRICE_PER_GB: Money = 0.095;

/// Multiplier used for regions missing from the catalog.
pub const DEFAULT_REGION_MULTIPLIER: f64 = 1.0;

// ---------------------------------------------------------------------------
// Service tier
// ---------------------------------------------------------------------------

/// Sizing class of the managed PostgreSQL offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Burstable,
    GeneralPurpose,
    MemoryOptimized,
}

impl ServiceTier {
    /// GB of RAM provisioned per vCore.
    pub fn ram_per_vcore(self) -> u32 {
        match self {
            Self::Burstable => 2,
            Self::GeneralPurpose => 4,
            Self::MemoryOptimized => 8,
        }
    }

    /// Human-readable label for display in the report.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Burstable => "Burstable",
            Self::GeneralPurpose => "General Purpose",
            Self::MemoryOptimized => "Memory Optimized",
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

/// Monthly unit prices for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPricing {
    pub vcore_price: Money,
    pub storage_price_per_gb: Money,
    pub backup_price_per_gb: Money,
}

/// Unit prices for every tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPriceTable {
    pub burstable: TierPricing,
    pub general_purpose: TierPricing,
    pub memory_optimized: TierPricing,
}

/// A deployable region and its price multiplier relative to the base region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPricing {
    pub key: String,
    pub display_name: String,
    pub multiplier: f64,
}

/// Pricing and region tables consumed by the cost estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub tiers: TierPriceTable,
    pub regions: Vec<RegionPricing>,
}

const BUILTIN_REGIONS: &[(&str, &str, f64)] = &[
    ("eastus", "East US", 1.0),
    ("eastus2", "East US 2", 1.0),
    ("westus", "West US", 1.0),
    ("westus2", "West US 2", 1.0),
    ("centralus", "Central US", 1.0),
    ("northeurope", "North Europe", 1.02),
    ("westeurope", "West Europe", 1.02),
    ("southeastasia", "Southeast Asia", 1.08),
    ("eastasia", "East Asia", 1.08),
];

fn shared_storage_pricing(vcore_price: Money) -> TierPricing {
    TierPricing {
        vcore_price,
        storage_price_per_gb: STORAGE_PRICE_PER_GB,
        backup_price_per_gb: BACKUP_PRICE_PER_GB,
    }
}

impl PricingCatalog {
    /// The compiled-in price snapshot.
    pub fn builtin() -> Self {
        Self {
            tiers: TierPriceTable {
                burstable: shared_storage_pricing(BURSTABLE_VCORE_PRICE),
                general_purpose: shared_storage_pricing(GENERAL_PURPOSE_VCORE_PRICE),
                memory_optimized: shared_storage_pricing(MEMORY_OPTIMIZED_VCORE_PRICE),
            },
            regions: BUILTIN_REGIONS
                .iter()
                .map(|&(key, display_name, multiplier)| RegionPricing {
                    key: key.to_string(),
                    display_name: display_name.to_string(),
                    multiplier,
                })
                .collect(),
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let catalog: Self =
            serde_json::from_str(text).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject negative prices, non-positive multipliers and duplicate region keys.
    pub fn validate(&self) -> Result<(), CoreError> {
        for tier in [
            ServiceTier::Burstable,
            ServiceTier::GeneralPurpose,
            ServiceTier::MemoryOptimized,
        ] {
            let p = self.tier_pricing(tier);
            let name = tier.display_name();
            validate_non_negative(p.vcore_price, &format!("{name} vcore_price"))
                .and_then(|_| {
                    validate_non_negative(
                        p.storage_price_per_gb,
                        &format!("{name} storage_price_per_gb"),
                    )
                })
                .and_then(|_| {
                    validate_non_negative(
                        p.backup_price_per_gb,
                        &format!("{name} backup_price_per_gb"),
                    )
                })
                .map_err(into_catalog_error)?;
        }

        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(region.key.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate region key '{}'",
                    region.key
                )));
            }
            validate_positive(region.multiplier, &format!("region '{}' multiplier", region.key))
                .map_err(into_catalog_error)?;
        }
        Ok(())
    }

    pub fn tier_pricing(&self, tier: ServiceTier) -> &TierPricing {
        match tier {
            ServiceTier::Burstable => &self.tiers.burstable,
            ServiceTier::GeneralPurpose => &self.tiers.general_purpose,
            ServiceTier::MemoryOptimized => &self.tiers.memory_optimized,
        }
    }

    pub fn region(&self, key: &str) -> Option<&RegionPricing> {
        self.regions.iter().find(|r| r.key == key)
    }

    /// Price multiplier for a region, [`DEFAULT_REGION_MULTIPLIER`] when unknown.
    pub fn region_multiplier(&self, key: &str) -> f64 {
        self.region(key)
            .map_or(DEFAULT_REGION_MULTIPLIER, |r| r.multiplier)
    }

    /// Display name for a region, falling back to the raw key.
    pub fn region_display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.region(key).map_or(key, |r| r.display_name.as_str())
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn into_catalog_error(err: CoreError) -> CoreError {
    match err {
        CoreError::InvalidInput(msg) => CoreError::InvalidCatalog(msg),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
