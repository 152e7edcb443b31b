use chrono::Utc;
use rand::Rng;

/// Generates a human-readable order number.
///
/// Format: `ORDER` followed by the last eight digits of the current Unix
/// millisecond timestamp and a two-digit random suffix. The timestamp keeps
/// numbers roughly sortable; the suffix separates orders created in the same
/// millisecond. The column's unique constraint is the final arbiter.
///
/// # Returns
/// - `String` - 15-character order number, e.g. `ORDER8834021747`
pub fn generate_order_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let timestamp = millis.rem_euclid(100_000_000);
    let suffix = rand::rng().random_range(0..100);

    format!("ORDER{:08}{:02}", timestamp, suffix)
}
