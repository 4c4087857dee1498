pub fn render_index(window_days: i64) -> String {
    INDEX_HTML.replace("{{WINDOW_DAYS}}", &window_days.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Milk Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f2f6fb;
      --bg-2: #cfe3f7;
      --ink: #22303c;
      --accent: #3f7cac;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f1fa 60%, #f6f9fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5b6670;
      font-size: 1rem;
    }

    .headline {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .headline .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7c8792;
    }

    .headline .value {
      display: block;
      margin-top: 8px;
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart-card h2 {
      margin: 0 0 10px;
      font-size: 1.1rem;
    }

    .chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a828b;
      font-size: 11px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    th, td {
      text-align: left;
      padding: 10px 16px;
      font-size: 0.95rem;
    }

    th {
      background: rgba(63, 124, 172, 0.08);
      text-transform: uppercase;
      letter-spacing: 0.08em;
      font-size: 0.8rem;
      color: #5b6670;
    }

    tr + tr td {
      border-top: 1px solid rgba(47, 72, 88, 0.06);
    }

    .entry {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .entry h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    .field {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: #5b6670;
    }

    input[type="password"],
    input[type="date"],
    input[type="time"],
    input[type="number"] {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    .checkbox {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.95rem;
      color: var(--ink);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(63, 124, 172, 0.3);
      justify-self: start;
    }

    button:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.95rem;
      color: #6b7681;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty {
      text-align: center;
      color: #6b7681;
      padding: 24px;
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Milk Tracker 🥛</h1>
      <p class="subtitle">Consumption over the last {{WINDOW_DAYS}} days.</p>
    </header>

    <section class="headline">
      <span class="label">Time since last milk</span>
      <span class="value" id="recency">Loading…</span>
    </section>

    <div id="empty" class="empty hidden">No milks recorded in this window yet.</div>

    <section class="charts" id="charts">
      <div class="chart-card">
        <h2>Cumulative consumption (L)</h2>
        <svg id="volume-chart" class="chart" viewBox="0 0 440 240" role="img" aria-label="Cumulative volume chart"></svg>
      </div>
      <div class="chart-card">
        <h2>Cumulative milks</h2>
        <svg id="count-chart" class="chart" viewBox="0 0 440 240" role="img" aria-label="Cumulative count chart"></svg>
      </div>
    </section>

    <section id="table-area">
      <table>
        <thead>
          <tr><th>When</th><th>Carton finished</th></tr>
        </thead>
        <tbody id="rows"></tbody>
      </table>
    </section>

    <section class="entry">
      <h2>Log a milk</h2>
      <form id="entry-form">
        <div class="fields">
          <label class="field">Password
            <input type="password" id="password" autocomplete="current-password" />
          </label>
          <label class="field">Date
            <input type="date" id="date" required />
          </label>
          <label class="field">Time
            <input type="time" id="time" required />
          </label>
          <label class="field checkbox-field">
            <span class="checkbox">
              <input type="checkbox" id="finished" /> Carton finished?
            </span>
          </label>
          <label class="field hidden" id="volume-field">Amount in carton (mL)
            <input type="number" id="volume" value="1000" min="0" step="1" />
          </label>
        </div>
        <button type="submit">Submit</button>
      </form>
      <div class="status" id="status"></div>
    </section>
  </main>

  <script>
    const recencyEl = document.getElementById('recency');
    const emptyEl = document.getElementById('empty');
    const chartsEl = document.getElementById('charts');
    const tableAreaEl = document.getElementById('table-area');
    const rowsEl = document.getElementById('rows');
    const statusEl = document.getElementById('status');
    const volumeChartEl = document.getElementById('volume-chart');
    const countChartEl = document.getElementById('count-chart');
    const finishedEl = document.getElementById('finished');
    const volumeFieldEl = document.getElementById('volume-field');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const formatTick = (millis, spanMillis) => {
      const d = new Date(millis);
      const pad = (n) => String(n).padStart(2, '0');
      if (spanMillis < 2 * 86400000) {
        return `${pad(d.getHours())}:${pad(d.getMinutes())}`;
      }
      return `${pad(d.getMonth() + 1)}-${pad(d.getDate())}`;
    };

    // Step chart: cumulative values hold between events.
    const renderStepChart = (svg, points) => {
      const width = 440;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 18;

      const times = points.map((p) => p.t);
      const values = points.map((p) => p.value);
      const tMin = Math.min(...times);
      const tMax = Math.max(...times);
      const tSpan = tMax - tMin || 1;
      let max = Math.max(...values, 0);
      if (max === 0) {
        max = 1;
      }

      const x = (t) => paddingX + ((t - tMin) / tSpan) * (width - paddingX * 2);
      const y = (value) => height - paddingY - (value / max) * (height - top - paddingY);

      let path = '';
      points.forEach((point, index) => {
        if (index === 0) {
          path += `M ${x(point.t).toFixed(2)} ${y(point.value).toFixed(2)}`;
        } else {
          path += ` H ${x(point.t).toFixed(2)} V ${y(point.value).toFixed(2)}`;
        }
      });

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const xTicks = 4;
      let xLabels = '';
      for (let i = 0; i <= xTicks; i += 1) {
        const t = tMin + (tSpan * i) / xTicks;
        xLabels += `<text class="chart-label" x="${x(t)}" y="${height - paddingY + 18}" text-anchor="middle">${formatTick(t, tSpan)}</text>`;
      }

      const circles = points
        .slice(1)
        .map((point) => `<circle class="chart-point" cx="${x(point.t)}" cy="${y(point.value)}" r="3.5" />`)
        .join('');

      svg.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderDashboard = (data) => {
      if (!data.has_data) {
        recencyEl.textContent = 'No data';
        emptyEl.classList.remove('hidden');
        chartsEl.classList.add('hidden');
        tableAreaEl.classList.add('hidden');
        return;
      }

      emptyEl.classList.add('hidden');
      chartsEl.classList.remove('hidden');
      tableAreaEl.classList.remove('hidden');
      recencyEl.textContent = data.time_since_last;

      renderStepChart(
        volumeChartEl,
        data.volume_series.map((p) => ({ t: Date.parse(p.datetime), value: p.litres }))
      );
      renderStepChart(
        countChartEl,
        data.count_series.map((p) => ({ t: Date.parse(p.datetime), value: p.count }))
      );

      rowsEl.innerHTML = data.rows
        .map((row) => {
          const amount = row.amount === '' ? '—' : row.amount;
          return `<tr><td>${row.datetime}</td><td>${amount}</td></tr>`;
        })
        .join('');
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load dashboard');
      }
      renderDashboard(await res.json());
    };

    finishedEl.addEventListener('change', () => {
      volumeFieldEl.classList.toggle('hidden', !finishedEl.checked);
    });

    document.getElementById('entry-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        password: document.getElementById('password').value,
        date: document.getElementById('date').value,
        time: document.getElementById('time').value,
        carton_finished: finishedEl.checked,
        ml_in_carton: finishedEl.checked
          ? Number(document.getElementById('volume').value)
          : null
      };

      setStatus('Saving…', 'info');
      fetch('/api/events', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(async (res) => {
          if (!res.ok) {
            throw new Error((await res.text()) || 'Request failed');
          }
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1500);
          return loadDashboard();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    const now = new Date();
    const pad = (n) => String(n).padStart(2, '0');
    document.getElementById('date').value =
      `${now.getFullYear()}-${pad(now.getMonth() + 1)}-${pad(now.getDate())}`;
    document.getElementById('time').value = `${pad(now.getHours())}:${pad(now.getMinutes())}`;

    loadDashboard().catch((err) => {
      recencyEl.textContent = 'Unavailable';
      setStatus(err.message, 'error');
    });
  </script>
</body>
</html>
"##;
