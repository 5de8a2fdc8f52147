//! Tier selection and resource allocation.
//!
//! Picks a service tier from the workload's memory density (GB of RAM per
//! core) and rounds the allocation to whole vCores of that tier.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pricing::ServiceTier;
use crate::workload::WorkloadInput;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// RAM per core above which the workload goes to Memory Optimized.
pub const MEMORY_OPTIMIZED_RAM_PER_CORE: f64 = 8.0;
/// RAM per core above which the workload goes to General Purpose.
pub const GENERAL_PURPOSE_RAM_PER_CORE: f64 = 4.0;

/// Databases smaller than this (GB) may run on Burstable.
pub const BURSTABLE_MAX_DB_SIZE_GB: f64 = 100.0;
/// Workloads with at most this many cores may run on Burstable.
pub const BURSTABLE_MAX_CPU_CORES: u32 = 4;
/// Burstable allocations are capped at this many vCores.
pub const BURSTABLE_MAX_VCORES: u32 = 2;

/// Minimum vCores for General Purpose and Memory Optimized.
pub const MIN_STANDARD_VCORES: u32 = 2;

/// Provisioned storage headroom over the current database size.
pub const STORAGE_BUFFER_FACTOR: f64 = 1.2;
/// Backup storage as a fraction of the current database size.
pub const BACKUP_SIZE_FACTOR: f64 = 0.3;
/// Backup retention recommended for every tier.
pub const BACKUP_RETENTION_DAYS: u32 = 7;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Recommended target configuration for a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRecommendation {
    pub tier: ServiceTier,
    #[serde(default)]
    pub tier_name: String,
    pub vcores: u32,
    /// RAM the workload has today, as supplied by the caller.
    pub requested_ram_gb: f64,
    /// RAM the recommended tier provides (`vcores * ram_per_vcore`).
    pub allocated_ram_gb: u32,
    pub storage_gb: u64,
    pub backup_gb: u64,
    pub ha_enabled: bool,
    pub backup_retention_days: u32,
}

/// Recommend a tier and allocation for the workload.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. more than 8 GB RAM per core: Memory Optimized
/// 2. more than 4 GB RAM per core: General Purpose
/// 3. under 100 GB and at most 4 cores: Burstable (1 or 2 vCores)
/// 4. otherwise: General Purpose
pub fn recommend(workload: &WorkloadInput) -> Result<SizingRecommendation, CoreError> {
    workload.ensure_valid()?;

    let ram_gb = workload.ram_gb;
    let ram_per_core = ram_gb / f64::from(workload.cpu_cores);

    let (tier, vcores) = if ram_per_core > MEMORY_OPTIMIZED_RAM_PER_CORE {
        let tier = ServiceTier::MemoryOptimized;
        (tier, standard_vcores(ram_gb, tier)?)
    } else if ram_per_core > GENERAL_PURPOSE_RAM_PER_CORE {
        let tier = ServiceTier::GeneralPurpose;
        (tier, standard_vcores(ram_gb, tier)?)
    } else if workload.db_size_gb < BURSTABLE_MAX_DB_SIZE_GB
        && workload.cpu_cores <= BURSTABLE_MAX_CPU_CORES
    {
        let tier = ServiceTier::Burstable;
        let vcores = vcores_for_ram(ram_gb, tier)?.clamp(1, BURSTABLE_MAX_VCORES);
        (tier, vcores)
    } else {
        let tier = ServiceTier::GeneralPurpose;
        (tier, standard_vcores(ram_gb, tier)?)
    };

    Ok(SizingRecommendation {
        tier,
        tier_name: tier.display_name().to_string(),
        vcores,
        requested_ram_gb: ram_gb,
        allocated_ram_gb: vcores * tier.ram_per_vcore(),
        storage_gb: storage_gb(workload.db_size_gb)?,
        backup_gb: backup_gb(workload.db_size_gb)?,
        ha_enabled: true,
        backup_retention_days: BACKUP_RETENTION_DAYS,
    })
}

/// Provisioned storage for a database of the given size, with headroom.
pub fn storage_gb(db_size_gb: f64) -> Result<u64, CoreError> {
    whole_gb((db_size_gb * STORAGE_BUFFER_FACTOR).ceil(), "storage_gb")
}

/// Backup storage for a database of the given size.
pub fn backup_gb(db_size_gb: f64) -> Result<u64, CoreError> {
    whole_gb((db_size_gb * BACKUP_SIZE_FACTOR).ceil(), "backup_gb")
}

fn whole_gb(gb: f64, name: &str) -> Result<u64, CoreError> {
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows.
    if gb >= u64::MAX as f64 {
        return Err(CoreError::InvalidInput(format!(
            "{name} of {gb} GB exceeds the supported range"
        )));
    }
    Ok(gb as u64)
}

/// vCores needed to cover `ram_gb` at the tier's RAM ratio, rounded up.
///
/// Fails when the resulting allocation (`vcores * ratio`) would not fit in
/// a `u32`.
fn vcores_for_ram(ram_gb: f64, tier: ServiceTier) -> Result<u32, CoreError> {
    let ratio = tier.ram_per_vcore();
    let max_vcores = u32::MAX / ratio;
    let needed = (ram_gb / f64::from(ratio)).ceil();
    if needed > f64::from(max_vcores) {
        return Err(CoreError::InvalidInput(format!(
            "ram_gb of {ram_gb} needs more than {max_vcores} vCores of {}",
            tier.display_name()
        )));
    }
    Ok(needed as u32)
}

fn standard_vcores(ram_gb: f64, tier: ServiceTier) -> Result<u32, CoreError> {
    Ok(vcores_for_ram(ram_gb, tier)?.max(MIN_STANDARD_VCORES))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
