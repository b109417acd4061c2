use crate::errors::AppError;
use crate::models::{
    CreateHabitRequest, FilterMode, Habit, HabitDetail, HabitListResponse, HabitSummary,
    ListQuery, ReconcileResponse, ThemeRequest, ThemeResponse,
};
use crate::reconcile::run_reconcile;
use crate::recurrence::parse_rule;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::store;
use crate::ui::{render_index, THEMES};
use crate::view;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.theme))
}

pub async fn list_habits(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<HabitListResponse>, AppError> {
    let mode = match query.filter.as_deref() {
        None => FilterMode::All,
        Some(raw) => FilterMode::parse(raw)
            .ok_or_else(|| AppError::bad_request("filter must be 'all', 'due' or 'completed'"))?,
    };

    let today = today();
    let data = state.data.lock().await;
    let mut habits = view::filter_habits(&data.habits, mode, today);
    view::sort_for_display(&mut habits);

    let warning = state.startup_warning.lock().await.take();

    Ok(Json(HabitListResponse {
        habits: habits
            .iter()
            .map(|habit| to_summary(habit, today))
            .collect(),
        warning,
    }))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitDetail>), AppError> {
    let rule = parse_rule(&payload.repeat, payload.custom_days.as_deref())?;
    let now = Local::now().naive_local();

    let mut data = state.data.lock().await;
    let habit = store::create(&mut data.habits, &payload.name, rule, &payload.notes, now)?;
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(to_detail(&habit, now.date()))))
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitDetail>, AppError> {
    let today = today();
    let data = state.data.lock().await;
    let habit = store::get(&data.habits, &id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    Ok(Json(to_detail(habit, today)))
}

pub async fn complete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitDetail>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let habit = store::complete(&mut data.habits, &id, today)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(to_detail(&habit, today)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if store::delete(&mut data.habits, &id).is_some() {
        persist_data(&state.data_path, &data).await?;
    }
    // deleting an id that is already gone is a no-op
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reconcile_now(
    State(state): State<AppState>,
) -> Result<Json<ReconcileResponse>, AppError> {
    let missed = run_reconcile(&state).await?;
    Ok(Json(ReconcileResponse { missed }))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let data = state.data.lock().await;
    Json(ThemeResponse {
        theme: data.theme.clone(),
    })
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = payload.theme.trim();
    if !THEMES.contains(&theme) {
        return Err(AppError::bad_request(format!("unknown theme '{theme}'")));
    }

    let mut data = state.data.lock().await;
    data.theme = theme.to_string();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ThemeResponse {
        theme: theme.to_string(),
    }))
}

fn to_summary(habit: &Habit, today: NaiveDate) -> HabitSummary {
    HabitSummary {
        id: habit.id.clone(),
        name: habit.name.clone(),
        repeat: habit.rule.label(),
        next_due_date: habit.next_due_date,
        status: view::due_status(habit, today),
        last_completed_date: habit.last_completed_date,
    }
}

fn to_detail(habit: &Habit, today: NaiveDate) -> HabitDetail {
    HabitDetail {
        id: habit.id.clone(),
        name: habit.name.clone(),
        repeat: habit.rule.label(),
        notes: habit.notes.clone(),
        created_at: habit.created_at,
        next_due_date: habit.next_due_date,
        status: view::due_status(habit, today),
        last_completed_date: habit.last_completed_date,
        history: habit.history.clone(),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
