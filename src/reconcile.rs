use crate::errors::AppError;
use crate::models::{Habit, HistoryEntry, Outcome};
use crate::recurrence::next_due_date;
use crate::state::AppState;
use crate::storage::persist_data;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Scan every habit for an overdue cycle: a habit not flagged completed
/// whose due date is strictly before today gets a missed entry dated with
/// the due date it blew past, then a fresh due date computed from today.
/// Returns how many habits were flagged.
///
/// Running this twice on the same day is a no-op the second time: the
/// first pass already advanced every overdue date to today or later.
pub fn reconcile(habits: &mut [Habit], today: NaiveDate) -> usize {
    let mut missed = 0;
    for habit in habits.iter_mut() {
        if habit.is_completed || habit.next_due_date >= today {
            continue;
        }
        habit.history.push(HistoryEntry {
            date: habit.next_due_date,
            outcome: Outcome::Missed,
        });
        habit.next_due_date = next_due_date(habit.rule, today);
        missed += 1;
    }
    missed
}

/// Reconcile the shared state against the local calendar and persist once
/// if anything changed. The state lock is held for the whole scan, so runs
/// triggered by the timer, the API, and startup never interleave.
pub async fn run_reconcile(state: &AppState) -> Result<usize, AppError> {
    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    let missed = reconcile(&mut data.habits, today);
    if missed > 0 {
        persist_data(&state.data_path, &data).await?;
        info!("reconcile flagged {missed} missed habit(s)");
    }
    Ok(missed)
}
