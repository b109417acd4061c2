use crate::errors::HabitError;
use crate::models::{Habit, HistoryEntry, Outcome, RecurrenceRule};
use crate::recurrence::next_due_date;
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Create a habit and append it to the list. Validation happens before the
/// list is touched, so a rejected create leaves it unchanged. The caller
/// persists afterwards.
pub fn create(
    habits: &mut Vec<Habit>,
    name: &str,
    rule: RecurrenceRule,
    notes: &str,
    now: NaiveDateTime,
) -> Result<Habit, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }

    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        rule,
        notes: notes.trim().to_string(),
        created_at: now,
        next_due_date: next_due_date(rule, now.date()),
        history: Vec::new(),
        is_completed: false,
        last_completed_date: None,
    };
    habits.push(habit.clone());
    Ok(habit)
}

/// Mark a habit done for the current cycle: log the completion, remember
/// the date, and reschedule. The completed flag only marks the cycle that
/// just ended; rescheduling starts the next one immediately, so it goes
/// straight back to false and the habit reappears as upcoming.
pub fn complete(habits: &mut [Habit], id: &str, today: NaiveDate) -> Result<Habit, HabitError> {
    let habit = habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or_else(|| HabitError::NotFound(id.to_string()))?;

    habit.history.push(HistoryEntry {
        date: today,
        outcome: Outcome::Completed,
    });
    habit.last_completed_date = Some(today);
    habit.next_due_date = next_due_date(habit.rule, today);
    habit.is_completed = false;

    Ok(habit.clone())
}

/// Remove a habit by id. Missing ids are a no-op (the record may already
/// have been deleted from another tab).
pub fn delete(habits: &mut Vec<Habit>, id: &str) -> Option<Habit> {
    let index = habits.iter().position(|habit| habit.id == id)?;
    Some(habits.remove(index))
}

pub fn get<'a>(habits: &'a [Habit], id: &str) -> Option<&'a Habit> {
    habits.iter().find(|habit| habit.id == id)
}
