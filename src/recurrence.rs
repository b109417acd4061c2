use crate::errors::HabitError;
use crate::models::RecurrenceRule;
use chrono::{Days, NaiveDate};

/// Longest custom interval accepted at creation, in days (ten years).
pub const MAX_CUSTOM_INTERVAL_DAYS: u32 = 3_650;

/// Compute the next due date for a rule given the day the cycle resets.
///
/// Daily, weekly and monthly habits come due again on the anchor day
/// itself; only custom rules push the due date forward by their interval.
/// An interval that would overflow the calendar clamps to the last
/// representable date rather than failing.
pub fn next_due_date(rule: RecurrenceRule, anchor: NaiveDate) -> NaiveDate {
    match rule {
        RecurrenceRule::Daily | RecurrenceRule::Weekly | RecurrenceRule::Monthly => anchor,
        RecurrenceRule::Custom(days) => anchor
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// Parse the raw form values for a recurrence selection. `custom_days` is
/// only consulted when `repeat` is "custom" and must be a whole number
/// between 1 and `MAX_CUSTOM_INTERVAL_DAYS`.
pub fn parse_rule(repeat: &str, custom_days: Option<&str>) -> Result<RecurrenceRule, HabitError> {
    match repeat {
        "daily" => Ok(RecurrenceRule::Daily),
        "weekly" => Ok(RecurrenceRule::Weekly),
        "monthly" => Ok(RecurrenceRule::Monthly),
        "custom" => {
            let raw = custom_days.unwrap_or("").trim();
            let days = raw
                .parse::<u32>()
                .map_err(|_| HabitError::InvalidRecurrence(raw.to_string()))?;
            if days == 0 || days > MAX_CUSTOM_INTERVAL_DAYS {
                return Err(HabitError::InvalidRecurrence(raw.to_string()));
            }
            Ok(RecurrenceRule::Custom(days))
        }
        other => Err(HabitError::InvalidRecurrence(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_weekly_monthly_reset_on_anchor_day() {
        let anchor = day(2026, 3, 14);
        assert_eq!(next_due_date(RecurrenceRule::Daily, anchor), anchor);
        assert_eq!(next_due_date(RecurrenceRule::Weekly, anchor), anchor);
        assert_eq!(next_due_date(RecurrenceRule::Monthly, anchor), anchor);
    }

    #[test]
    fn custom_adds_interval_days() {
        let anchor = day(2026, 3, 14);
        assert_eq!(
            next_due_date(RecurrenceRule::Custom(2), anchor),
            day(2026, 3, 16)
        );
        // crosses a month boundary
        assert_eq!(
            next_due_date(RecurrenceRule::Custom(30), anchor),
            day(2026, 4, 13)
        );
    }

    #[test]
    fn parse_accepts_known_kinds() {
        assert_eq!(parse_rule("daily", None).unwrap(), RecurrenceRule::Daily);
        assert_eq!(parse_rule("weekly", None).unwrap(), RecurrenceRule::Weekly);
        assert_eq!(
            parse_rule("monthly", None).unwrap(),
            RecurrenceRule::Monthly
        );
        assert_eq!(
            parse_rule("custom", Some("5")).unwrap(),
            RecurrenceRule::Custom(5)
        );
        assert_eq!(
            parse_rule("custom", Some(" 3 ")).unwrap(),
            RecurrenceRule::Custom(3)
        );
    }

    #[test]
    fn parse_rejects_bad_custom_intervals() {
        assert!(matches!(
            parse_rule("custom", Some("abc")),
            Err(HabitError::InvalidRecurrence(_))
        ));
        assert!(matches!(
            parse_rule("custom", Some("0")),
            Err(HabitError::InvalidRecurrence(_))
        ));
        assert!(matches!(
            parse_rule("custom", Some("-2")),
            Err(HabitError::InvalidRecurrence(_))
        ));
        assert!(matches!(
            parse_rule("custom", None),
            Err(HabitError::InvalidRecurrence(_))
        ));
    }

    #[test]
    fn parse_bounds_the_custom_interval() {
        assert_eq!(
            parse_rule("custom", Some("3650")).unwrap(),
            RecurrenceRule::Custom(MAX_CUSTOM_INTERVAL_DAYS)
        );
        assert!(matches!(
            parse_rule("custom", Some("3651")),
            Err(HabitError::InvalidRecurrence(_))
        ));
        assert!(matches!(
            parse_rule("custom", Some("4000000000")),
            Err(HabitError::InvalidRecurrence(_))
        ));
        assert!(matches!(
            parse_rule("custom", Some(&u32::MAX.to_string())),
            Err(HabitError::InvalidRecurrence(_))
        ));
    }

    #[test]
    fn oversized_stored_interval_clamps_instead_of_failing() {
        // a hand-edited data file can hold intervals parse_rule would reject
        let anchor = day(2026, 3, 14);
        assert_eq!(
            next_due_date(RecurrenceRule::Custom(u32::MAX), anchor),
            NaiveDate::MAX
        );
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert!(matches!(
            parse_rule("fortnightly", None),
            Err(HabitError::InvalidRecurrence(_))
        ));
    }
}
