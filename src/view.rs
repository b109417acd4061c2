use crate::models::{DueStatus, FilterMode, Habit};
use chrono::NaiveDate;

pub fn due_status(habit: &Habit, today: NaiveDate) -> DueStatus {
    if habit.is_completed {
        DueStatus::Completed
    } else if habit.next_due_date <= today {
        DueStatus::Due
    } else {
        DueStatus::Upcoming
    }
}

pub fn filter_habits(habits: &[Habit], mode: FilterMode, today: NaiveDate) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| match mode {
            FilterMode::All => true,
            FilterMode::Due => !habit.is_completed && habit.next_due_date <= today,
            FilterMode::Completed => habit.is_completed,
        })
        .cloned()
        .collect()
}

/// Display order: habits still in play first, ascending by due date, with
/// completed ones at the back.
pub fn sort_for_display(habits: &mut [Habit]) {
    habits.sort_by(|a, b| {
        a.is_completed
            .cmp(&b.is_completed)
            .then(a.next_due_date.cmp(&b.next_due_date))
    });
}
