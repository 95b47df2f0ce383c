//! Time utilities

use chrono::Duration;

/// Render a contest time limit as `days:hours:minutes`, each zero-padded to
/// two digits. Seconds are dropped; this repr is lossy on purpose. Days are
/// split off the whole-second count first, so hours stay below 24.
pub fn contest_duration_repr(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / 86400;
    let seconds = total % 86400;
    format!("{:02}:{:02}:{:02}", days, seconds / 3600, (seconds % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_field_to_two_digits() {
        let d = Duration::days(1) + Duration::hours(2) + Duration::minutes(30);
        assert_eq!(contest_duration_repr(d), "01:02:30");
    }

    #[test]
    fn twenty_five_hours_groups_into_a_day() {
        assert_eq!(contest_duration_repr(Duration::hours(25)), "01:01:00");
    }

    #[test]
    fn seconds_are_dropped_not_rounded() {
        assert_eq!(contest_duration_repr(Duration::seconds(119)), "00:00:01");
    }

    #[test]
    fn zero_and_negative_render_as_zero() {
        assert_eq!(contest_duration_repr(Duration::zero()), "00:00:00");
        assert_eq!(contest_duration_repr(Duration::seconds(-5)), "00:00:00");
    }

    #[test]
    fn long_contests_widen_the_day_field() {
        assert_eq!(contest_duration_repr(Duration::days(100)), "100:00:00");
    }
}
