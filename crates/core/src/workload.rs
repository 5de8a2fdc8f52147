//! Caller-supplied workload description and its validation.
//!
//! [`WorkloadInput`] is the single input record shared by sizing, costing and
//! timeline estimation. It is never mutated; derived values live in the
//! output records.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::validation::validate_non_negative;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Region assumed when the caller does not name one.
pub const DEFAULT_REGION: &str = "eastus";

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Schedule compression factor for `accelerated` delivery.
pub const ACCELERATED_FACTOR: f64 = 0.7;
/// Schedule compression factor for `urgent` delivery.
pub const URGENT_FACTOR: f64 = 0.5;

/// How quickly the customer wants the migration delivered.
///
/// Anything other than `accelerated` or `urgent` (including an empty string
/// or `null`) schedules as [`Urgency::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Standard,
    Accelerated,
    Urgent,
}

impl Urgency {
    pub fn from_label(label: &str) -> Self {
        match label {
            "accelerated" => Self::Accelerated,
            "urgent" => Self::Urgent,
            _ => Self::Standard,
        }
    }

    /// Multiplier applied to every phase duration before rounding up.
    pub fn schedule_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Accelerated => ACCELERATED_FACTOR,
            Self::Urgent => URGENT_FACTOR,
        }
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map_or(Self::Standard, Self::from_label))
    }
}

// ---------------------------------------------------------------------------
// Storage type
// ---------------------------------------------------------------------------

/// Storage medium of the current deployment. Carried through to the report,
/// never used in calculations. Unlisted values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageType {
    #[default]
    Unspecified,
    Hdd,
    Ssd,
    PremiumSsd,
    Nvme,
    #[serde(untagged)]
    Other(String),
}

impl StorageType {
    /// Human-readable name for the report.
    pub fn label(&self) -> String {
        match self {
            Self::Unspecified => "Unspecified".to_string(),
            Self::Hdd => "HDD".to_string(),
            Self::Ssd => "SSD".to_string(),
            Self::PremiumSsd => "Premium SSD".to_string(),
            Self::Nvme => "NVMe".to_string(),
            Self::Other(raw) => raw.to_uppercase(),
        }
    }
}

// ---------------------------------------------------------------------------
// Workload input
// ---------------------------------------------------------------------------

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Current on-premises (or other-cloud) PostgreSQL workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkloadInput {
    /// Total size of all databases, in GB.
    pub db_size_gb: f64,
    /// Number of databases to migrate.
    #[validate(range(min = 1, message = "db_count must be at least 1"))]
    pub db_count: u32,
    /// CPU cores currently provisioned.
    #[validate(range(min = 1, message = "cpu_cores must be at least 1"))]
    pub cpu_cores: u32,
    /// RAM currently provisioned, in GB.
    pub ram_gb: f64,
    #[serde(default)]
    pub storage_type: StorageType,
    /// Average IOPS. Informational only.
    #[serde(default)]
    pub avg_iops: u32,
    /// Current monthly infrastructure spend. `0` means "not provided".
    #[serde(default)]
    pub current_monthly_cost: f64,
    /// Key into the region catalog. Unknown keys are priced at multiplier 1.0.
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub urgency: Urgency,
}

impl WorkloadInput {
    /// Reject inputs the calculators cannot price: zero cores or databases,
    /// and negative or non-finite sizes and costs.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        self.validate()?;
        validate_non_negative(self.db_size_gb, "db_size_gb")?;
        validate_non_negative(self.ram_gb, "ram_gb")?;
        validate_non_negative(self.current_monthly_cost, "current_monthly_cost")?;
        Ok(())
    }

    /// Whether the caller supplied a current monthly cost to compare against.
    pub fn has_current_cost(&self) -> bool {
        self.current_monthly_cost > 0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
