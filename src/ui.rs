/// Theme ids the page offers; `PUT /api/theme` only accepts these.
pub const THEMES: &[&str] = &["theme-default", "theme-dark", "theme-nature", "theme-ocean"];

pub fn render_index(theme: &str) -> String {
    INDEX_HTML.replace("{{THEME}}", theme)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    body.theme-default {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.theme-dark {
      --bg-1: #191c22;
      --bg-2: #2c3340;
      --ink: #e8e6e1;
      --muted: #9aa0ab;
      --accent: #ff8d66;
      --accent-2: #6f9ebf;
      --card: rgba(34, 39, 48, 0.92);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    body.theme-nature {
      --bg-1: #eef4e4;
      --bg-2: #cfe3b8;
      --ink: #26321f;
      --muted: #5f6f54;
      --accent: #5a8f3d;
      --accent-2: #33572a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(51, 87, 42, 0.18);
    }

    body.theme-ocean {
      --bg-1: #e7f1f7;
      --bg-2: #bcd9ea;
      --ink: #15313f;
      --muted: #55707f;
      --accent: #1580b5;
      --accent-2: #0e4d6e;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(14, 77, 110, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2) 85%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 300ms ease, color 300ms ease;
    }

    .app {
      width: min(820px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.98rem;
    }

    .themes {
      display: flex;
      gap: 8px;
    }

    .theme-btn {
      width: 26px;
      height: 26px;
      border-radius: 50%;
      border: 2px solid transparent;
      cursor: pointer;
      padding: 0;
    }

    .theme-btn.active {
      border-color: var(--ink);
    }

    .swatch-default { background: linear-gradient(135deg, #f5d3a7, #ff6b4a); }
    .swatch-dark { background: linear-gradient(135deg, #2c3340, #191c22); }
    .swatch-nature { background: linear-gradient(135deg, #cfe3b8, #5a8f3d); }
    .swatch-ocean { background: linear-gradient(135deg, #bcd9ea, #1580b5); }

    .card {
      background: var(--bg-1);
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(0, 0, 0, 0.06);
      display: grid;
      gap: 14px;
    }

    form .row {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    input, select, textarea {
      font: inherit;
      color: var(--ink);
      background: var(--card);
      border: 1px solid rgba(0, 0, 0, 0.12);
      border-radius: 12px;
      padding: 10px 12px;
    }

    textarea {
      resize: vertical;
      min-height: 56px;
    }

    .hidden {
      display: none;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      justify-self: start;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(0, 0, 0, 0.07);
      border-radius: 999px;
      justify-self: start;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .tab.active {
      background: var(--card);
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(0, 0, 0, 0.12);
    }

    .habit {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
      background: var(--card);
      border: 1px solid rgba(0, 0, 0, 0.07);
      border-radius: 16px;
      padding: 14px 16px;
    }

    .habit-name {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .habit-meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .habit-status {
      font-size: 0.85rem;
      font-weight: 600;
    }

    .status-due { color: var(--accent); }
    .status-upcoming { color: var(--accent-2); }
    .status-completed { color: var(--muted); }

    .actions button {
      background: transparent;
      padding: 8px;
      font-size: 1rem;
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    .banner {
      background: #b3261e;
      color: white;
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 0.9rem;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.45);
      display: none;
      place-items: center;
      padding: 18px;
    }

    .modal-backdrop.open {
      display: grid;
    }

    .modal {
      width: min(480px, 100%);
      background: var(--card);
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 12px;
      max-height: 80vh;
      overflow: auto;
    }

    .modal h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .history-item {
      display: flex;
      justify-content: space-between;
      border-bottom: 1px dashed rgba(0, 0, 0, 0.12);
      padding: 6px 0;
      font-size: 0.9rem;
    }

    .history-completed { color: var(--accent-2); font-weight: 600; }
    .history-missed { color: #b3261e; font-weight: 600; }

    .toast {
      position: fixed;
      bottom: 20px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--accent-2);
      color: white;
      padding: 10px 20px;
      border-radius: 10px;
      box-shadow: 0 8px 20px rgba(0, 0, 0, 0.25);
      opacity: 0;
      transition: opacity 300ms ease;
      pointer-events: none;
    }

    .toast.show {
      opacity: 1;
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
      form .row {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body class="{{THEME}}">
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">Build recurring habits, tick them off, keep the streak honest.</p>
      </div>
      <div class="themes" role="group" aria-label="Theme">
        <button class="theme-btn swatch-default" data-theme="theme-default" title="Default"></button>
        <button class="theme-btn swatch-dark" data-theme="theme-dark" title="Dark"></button>
        <button class="theme-btn swatch-nature" data-theme="theme-nature" title="Nature"></button>
        <button class="theme-btn swatch-ocean" data-theme="theme-ocean" title="Ocean"></button>
      </div>
    </header>

    <div id="banner" class="banner hidden"></div>

    <section class="card">
      <form id="habit-form">
        <div class="row">
          <label>Habit name
            <input id="habit-name" type="text" placeholder="Drink water" required />
          </label>
          <label>Repeat
            <select id="repeat">
              <option value="daily">Daily</option>
              <option value="weekly">Weekly</option>
              <option value="monthly">Monthly</option>
              <option value="custom">Custom</option>
            </select>
          </label>
        </div>
        <div class="row">
          <label id="custom-days-label" class="hidden">Every N days
            <input id="custom-days" type="text" inputmode="numeric" placeholder="3" />
          </label>
        </div>
        <label>Notes (optional)
          <textarea id="notes" placeholder="Anything worth remembering"></textarea>
        </label>
        <button class="btn-primary" type="submit">Add habit</button>
      </form>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" data-filter="all" role="tab">All</button>
      <button class="tab" data-filter="due" role="tab">Due</button>
      <button class="tab" data-filter="completed" role="tab">Completed</button>
    </div>

    <section id="habits"></section>
  </main>

  <div id="modal-backdrop" class="modal-backdrop">
    <div class="modal">
      <h2 id="modal-name"></h2>
      <p class="habit-meta" id="modal-repeat"></p>
      <p id="modal-notes"></p>
      <h3>History</h3>
      <div id="modal-history"></div>
      <button id="modal-close" type="button">Close</button>
    </div>
  </div>

  <div id="toast" class="toast"></div>

  <script>
    const form = document.getElementById('habit-form');
    const nameInput = document.getElementById('habit-name');
    const repeatSelect = document.getElementById('repeat');
    const customDaysLabel = document.getElementById('custom-days-label');
    const customDaysInput = document.getElementById('custom-days');
    const notesInput = document.getElementById('notes');
    const habitsEl = document.getElementById('habits');
    const bannerEl = document.getElementById('banner');
    const toastEl = document.getElementById('toast');
    const backdrop = document.getElementById('modal-backdrop');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const themeButtons = Array.from(document.querySelectorAll('.theme-btn'));

    let activeFilter = 'all';
    let toastTimer = null;

    const esc = (text) => {
      const div = document.createElement('div');
      div.textContent = text == null ? '' : text;
      return div.innerHTML;
    };

    const toast = (message) => {
      toastEl.textContent = message;
      toastEl.classList.add('show');
      clearTimeout(toastTimer);
      toastTimer = setTimeout(() => toastEl.classList.remove('show'), 2600);
    };

    const statusLabel = (habit) => {
      if (habit.status === 'completed') {
        return 'Completed: ' + habit.last_completed_date;
      }
      if (habit.status === 'due') {
        return 'Due today!';
      }
      return 'Next: ' + habit.next_due_date;
    };

    const renderHabits = (habits) => {
      if (!habits.length) {
        habitsEl.innerHTML = '<p class="empty">No habits here yet. Add one above!</p>';
        return;
      }
      habitsEl.innerHTML = habits.map((habit) => `
        <div class="habit" data-id="${habit.id}">
          <div>
            <div class="habit-name">${esc(habit.name)}</div>
            <div class="habit-meta">Repeat: ${esc(habit.repeat)}</div>
            <div class="habit-status status-${habit.status}">${esc(statusLabel(habit))}</div>
          </div>
          <div class="actions">
            <button data-action="complete" title="Mark completed">&#10003;</button>
            <button data-action="details" title="Details">&#8505;</button>
            <button data-action="delete" title="Delete">&#10005;</button>
          </div>
        </div>
      `).join('');
    };

    const loadHabits = async () => {
      const res = await fetch('/api/habits?filter=' + activeFilter);
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load habits');
      }
      const body = await res.json();
      if (body.warning) {
        bannerEl.textContent = body.warning;
        bannerEl.classList.remove('hidden');
      }
      renderHabits(body.habits);
    };

    const createHabit = async () => {
      const payload = {
        name: nameInput.value,
        repeat: repeatSelect.value,
        custom_days: repeatSelect.value === 'custom' ? customDaysInput.value : null,
        notes: notesInput.value
      };
      const res = await fetch('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Could not add habit');
      }
      const habit = await res.json();
      form.reset();
      customDaysLabel.classList.add('hidden');
      toast('Habit "' + habit.name + '" added!');
      await loadHabits();
    };

    const completeHabit = async (id) => {
      const res = await fetch('/api/habits/' + id + '/complete', { method: 'POST' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Could not complete habit');
      }
      const habit = await res.json();
      toast('Great job! "' + habit.name + '" completed.');
      await loadHabits();
    };

    const deleteHabit = async (id) => {
      if (!confirm('Delete this habit? Its history goes with it.')) {
        return;
      }
      const res = await fetch('/api/habits/' + id, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Could not delete habit');
      }
      toast('Habit deleted.');
      await loadHabits();
    };

    const showDetails = async (id) => {
      const res = await fetch('/api/habits/' + id);
      if (!res.ok) {
        throw new Error(await res.text() || 'Could not load habit');
      }
      const habit = await res.json();
      document.getElementById('modal-name').textContent = habit.name;
      document.getElementById('modal-repeat').textContent = 'Repeat: ' + habit.repeat;
      document.getElementById('modal-notes').textContent = habit.notes || '';
      const historyEl = document.getElementById('modal-history');
      if (!habit.history.length) {
        historyEl.innerHTML = '<p class="habit-meta">No history yet.</p>';
      } else {
        historyEl.innerHTML = habit.history.slice().reverse().map((entry) => `
          <div class="history-item">
            <span>${esc(entry.date)}</span>
            <span class="history-${entry.outcome}">${esc(entry.outcome)}</span>
          </div>
        `).join('');
      }
      backdrop.classList.add('open');
    };

    const setFilter = (filter) => {
      activeFilter = filter;
      tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.filter === filter));
      loadHabits().catch((err) => toast(err.message));
    };

    const markActiveTheme = () => {
      themeButtons.forEach((btn) => {
        btn.classList.toggle('active', document.body.classList.contains(btn.dataset.theme));
      });
    };

    const setTheme = async (theme) => {
      const res = await fetch('/api/theme', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ theme })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Could not switch theme');
      }
      document.body.className = theme;
      markActiveTheme();
    };

    repeatSelect.addEventListener('change', () => {
      customDaysLabel.classList.toggle('hidden', repeatSelect.value !== 'custom');
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      createHabit().catch((err) => toast(err.message));
    });

    habitsEl.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const id = button.closest('.habit').dataset.id;
      const action = button.dataset.action;
      if (action === 'complete') {
        completeHabit(id).catch((err) => toast(err.message));
      } else if (action === 'details') {
        showDetails(id).catch((err) => toast(err.message));
      } else if (action === 'delete') {
        deleteHabit(id).catch((err) => toast(err.message));
      }
    });

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => setFilter(tab.dataset.filter));
    });

    themeButtons.forEach((btn) => {
      btn.addEventListener('click', () => setTheme(btn.dataset.theme).catch((err) => toast(err.message)));
    });

    document.getElementById('modal-close').addEventListener('click', () => {
      backdrop.classList.remove('open');
    });
    backdrop.addEventListener('click', (event) => {
      if (event.target === backdrop) {
        backdrop.classList.remove('open');
      }
    });

    markActiveTheme();
    loadHabits().catch((err) => toast(err.message));
  </script>
</body>
</html>
"#;
