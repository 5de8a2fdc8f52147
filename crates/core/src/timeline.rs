//! Phased migration schedule (assessment through cutover).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::workload::WorkloadInput;

// ---------------------------------------------------------------------------
// Adjustment thresholds
// ---------------------------------------------------------------------------

/// Databases larger than this (GB) need longer data migration and testing.
pub const LARGE_DATABASE_GB: f64 = 1000.0;
/// More databases than this need longer schema and data migration.
pub const MANY_DATABASES: u32 = 10;

/// Weeks per reported month.
pub const WEEKS_PER_MONTH: u32 = 4;

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Migration phases in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationPhase {
    Assessment,
    Schema,
    Data,
    Testing,
    Cutover,
}

impl MigrationPhase {
    /// All phases, in the order they are scheduled.
    pub const ALL: [MigrationPhase; 5] = [
        Self::Assessment,
        Self::Schema,
        Self::Data,
        Self::Testing,
        Self::Cutover,
    ];

    /// Baseline duration before any adjustment.
    pub fn base_weeks(self) -> u32 {
        match self {
            Self::Assessment => 2,
            Self::Schema => 2,
            Self::Data => 4,
            Self::Testing => 3,
            Self::Cutover => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Assessment => "Assessment & Planning",
            Self::Schema => "Schema Migration",
            Self::Data => "Data Migration",
            Self::Testing => "Testing & Validation",
            Self::Cutover => "Cutover & Go-Live",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Assessment => {
                "Infrastructure assessment, dependency mapping, and migration planning"
            }
            Self::Schema => "Schema migration, stored procedures, and database objects conversion",
            Self::Data => "Data migration using Azure Database Migration Service",
            Self::Testing => "Performance testing, validation, and optimization",
            Self::Cutover => "Final sync, cutover execution, and go-live",
        }
    }

    /// Extra weeks this phase needs for the given workload shape.
    fn adjustment_weeks(self, db_size_gb: f64, db_count: u32) -> u32 {
        let large = db_size_gb > LARGE_DATABASE_GB;
        let many = db_count > MANY_DATABASES;
        match self {
            Self::Schema => u32::from(many),
            Self::Data => 2 * u32::from(large) + u32::from(many),
            Self::Testing => u32::from(large),
            Self::Assessment | Self::Cutover => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline types
// ---------------------------------------------------------------------------

/// One scheduled phase. Weeks are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: MigrationPhase,
    pub name: String,
    pub description: String,
    /// Duration after size/count adjustments, before urgency scaling.
    pub base_weeks: u32,
    pub weeks: u32,
    pub start_week: u32,
    pub end_week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationTimeline {
    pub phases: Vec<TimelinePhase>,
    pub total_weeks: u32,
    pub total_months: u32,
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Build the phased schedule for a workload.
///
/// Size and count adjustments are applied first, then every phase is scaled
/// by the urgency factor and rounded up to whole weeks.
pub fn estimate_timeline(workload: &WorkloadInput) -> Result<MigrationTimeline, CoreError> {
    workload.ensure_valid()?;

    let factor = workload.urgency.schedule_factor();
    let mut phases = Vec::with_capacity(MigrationPhase::ALL.len());
    let mut elapsed: u32 = 0;

    for phase in MigrationPhase::ALL {
        let base_weeks =
            phase.base_weeks() + phase.adjustment_weeks(workload.db_size_gb, workload.db_count);
        let weeks = scale_weeks(base_weeks, factor);
        let start_week = elapsed + 1;
        elapsed += weeks;

        phases.push(TimelinePhase {
            phase,
            name: phase.display_name().to_string(),
            description: phase.description().to_string(),
            base_weeks,
            weeks,
            start_week,
            end_week: elapsed,
        });
    }

    Ok(MigrationTimeline {
        phases,
        total_weeks: elapsed,
        total_months: elapsed.div_ceil(WEEKS_PER_MONTH),
    })
}

fn scale_weeks(weeks: u32, factor: f64) -> u32 {
    (f64::from(weeks) * factor).ceil() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
