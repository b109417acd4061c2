use chrono::{Duration, Local};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitSummary {
    id: String,
    name: String,
    repeat: String,
    next_due_date: String,
    status: String,
    last_completed_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HabitDetail {
    id: String,
    name: String,
    repeat: String,
    notes: String,
    next_due_date: String,
    status: String,
    last_completed_date: Option<String>,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntry {
    date: String,
    outcome: String,
}

#[derive(Debug, Deserialize)]
struct HabitListResponse {
    habits: Vec<HabitSummary>,
    warning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReconcileResponse {
    missed: usize,
}

#[derive(Debug, Deserialize)]
struct ThemeResponse {
    theme: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "habit_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + StdDuration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(StdDuration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        // keep the timer out of the way during tests
        .env("RECONCILE_INTERVAL_SECS", "3600")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_habit(
    client: &Client,
    base_url: &str,
    name: &str,
    repeat: &str,
    custom_days: Option<&str>,
) -> HabitDetail {
    let response = client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({
            "name": name,
            "repeat": repeat,
            "custom_days": custom_days,
            "notes": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    response.json().await.unwrap()
}

async fn list_habits(client: &Client, base_url: &str, filter: &str) -> HabitListResponse {
    client
        .get(format!("{base_url}/api/habits?filter={filter}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_then_list_shows_habit_due_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Journal", "daily", None).await;
    let today = Local::now().date_naive();
    assert_eq!(created.name, "Journal");
    assert_eq!(created.repeat, "daily");
    // daily habits are due the day they are created
    assert_eq!(created.status, "due");
    assert!(created.history.is_empty());
    assert_eq!(created.last_completed_date, None);

    let listed = list_habits(&client, &server.base_url, "all").await;
    let summary = listed
        .habits
        .iter()
        .find(|habit| habit.id == created.id)
        .expect("created habit missing from list");
    assert_eq!(summary.name, "Journal");
    assert_eq!(summary.repeat, "daily");
    assert_eq!(summary.status, "due");
    assert_eq!(summary.next_due_date, today.to_string());
    assert_eq!(summary.last_completed_date, None);
    // fresh data file, so no corrupt-storage warning
    assert!(listed.warning.is_none());

    let due = list_habits(&client, &server.base_url, "due").await;
    assert!(due.habits.iter().any(|habit| habit.id == created.id));
}

#[tokio::test]
async fn http_create_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for payload in [
        serde_json::json!({ "name": "   ", "repeat": "daily" }),
        serde_json::json!({ "name": "Stretch", "repeat": "custom", "custom_days": "abc" }),
        serde_json::json!({ "name": "Stretch", "repeat": "custom", "custom_days": "0" }),
        serde_json::json!({ "name": "Stretch", "repeat": "custom", "custom_days": "4000000000" }),
        serde_json::json!({ "name": "Stretch", "repeat": "yearly" }),
    ] {
        let response = client
            .post(format!("{}/api/habits", server.base_url))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "payload: {payload}");
    }

    let before = list_habits(&client, &server.base_url, "all").await;
    assert!(before.habits.iter().all(|habit| habit.name != "Stretch"));
}

#[tokio::test]
async fn http_complete_logs_history_and_reschedules() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Water plants", "custom", Some("2")).await;
    let today = Local::now().date_naive();
    assert_eq!(created.status, "upcoming");
    assert_eq!(created.next_due_date, (today + Duration::days(2)).to_string());

    let response = client
        .post(format!(
            "{}/api/habits/{}/complete",
            server.base_url, created.id
        ))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let completed: HabitDetail = response.json().await.unwrap();

    assert_eq!(completed.history.len(), 1);
    assert_eq!(completed.history[0].outcome, "completed");
    assert_eq!(completed.history[0].date, today.to_string());
    assert_eq!(completed.last_completed_date, Some(today.to_string()));
    assert_eq!(
        completed.next_due_date,
        (today + Duration::days(2)).to_string()
    );

    let detail: HabitDetail = client
        .get(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail.history.len(), 1);
    assert_eq!(detail.notes, "");
}

#[tokio::test]
async fn http_delete_removes_and_repeating_is_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "Floss", "weekly", None).await;

    let first = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 204);

    let listed = list_habits(&client, &server.base_url, "all").await;
    assert!(listed.habits.iter().all(|habit| habit.id != created.id));

    let second = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 204);
}

#[tokio::test]
async fn http_missing_habit_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let get = client
        .get(format!("{}/api/habits/does-not-exist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(get.status(), 404);

    let complete = client
        .post(format!(
            "{}/api/habits/does-not-exist/complete",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(complete.status(), 404);
}

#[tokio::test]
async fn http_list_rejects_unknown_filter() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/habits?filter=overdue", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_reconcile_is_idempotent_with_nothing_overdue() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    create_habit(&client, &server.base_url, "Read", "daily", None).await;

    // everything in this run was created today, so nothing is overdue
    for _ in 0..2 {
        let response = client
            .post(format!("{}/api/reconcile", server.base_url))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        let body: ReconcileResponse = response.json().await.unwrap();
        assert_eq!(body.missed, 0);
    }
}

#[tokio::test]
async fn http_theme_round_trips_and_validates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/theme", server.base_url))
        .json(&serde_json::json!({ "theme": "theme-dark" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let theme: ThemeResponse = client
        .get(format!("{}/api/theme", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(theme.theme, "theme-dark");

    let bad = client
        .put(format!("{}/api/theme", server.base_url))
        .json(&serde_json::json!({ "theme": "theme-neon" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), 400);
}
