/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts in currency units per the pricing catalog (USD for the
/// built-in snapshot).
pub type Money = f64;
