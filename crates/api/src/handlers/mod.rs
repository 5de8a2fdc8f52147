pub mod pricing;
pub mod proposal;
