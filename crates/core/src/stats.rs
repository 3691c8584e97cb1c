//! Shared statistics helpers.

/// Percentage of completed items, rounded to the nearest integer.
///
/// Defined as 0 when `total` is 0.
pub fn completion_rate(completed: i64, total: i64) -> i64 {
    if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_is_zero() {
        assert_eq!(completion_rate(0, 0), 0);
    }

    #[test]
    fn test_half_completed_is_fifty() {
        assert_eq!(completion_rate(1, 2), 50);
    }

    #[test]
    fn test_all_completed_is_hundred() {
        assert_eq!(completion_rate(1, 1), 100);
        assert_eq!(completion_rate(7, 7), 100);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 2/3 = 66.67 -> 67, 1/3 = 33.33 -> 33
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 3), 33);
    }
}
