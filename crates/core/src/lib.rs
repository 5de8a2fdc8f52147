//! Calculation core for PostgreSQL to Azure migration proposals.
//!
//! Three pure steps: [`sizing::recommend`] picks a service tier,
//! [`cost::estimate_cost`] prices it against current spend, and
//! [`timeline::estimate_timeline`] schedules the migration phases.
//! [`proposal::build_proposal`] runs all three and merges the results.
//!
//! No I/O and no logging happen here; the `api` crate owns both.

pub mod cost;
pub mod error;
pub mod pricing;
pub mod proposal;
pub mod sizing;
pub mod timeline;
pub mod types;
pub mod validation;
pub mod workload;
