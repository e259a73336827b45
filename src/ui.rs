use crate::models::SignatureCounts;

pub fn render_index(counts: &SignatureCounts) -> String {
    INDEX_HTML
        .replace("{{STUDENTS}}", &counts.students.to_string())
        .replace("{{ALUMNI}}", &counts.alumni.to_string())
        .replace("{{PUBLIC}}", &counts.general.to_string())
        .replace("{{TOTAL}}", &counts.total.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Save Our College</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #c63b2b;
      --accent-2: #2f4858;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), #ffe9d4 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 30px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.9rem, 4vw, 2.6rem);
      color: var(--accent);
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
    }

    .badges {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    .badge {
      padding: 8px 16px;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: #f6f8fa;
      font-size: 0.9rem;
      font-weight: 600;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: #fbfaf7;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.1);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--accent-2);
    }

    .stat .value.total {
      color: var(--accent);
    }

    form {
      display: grid;
      gap: 12px;
    }

    input, select, textarea {
      width: 100%;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled {
      opacity: 0.6;
      cursor: not-allowed;
    }

    button.ghost {
      background: #f6f8fa;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button.ghost.active {
      background: var(--accent-2);
      color: white;
    }

    .wall {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(170px, 1fr));
      gap: 18px;
    }

    .wall .entry {
      border-bottom: 1px solid rgba(47, 72, 88, 0.12);
      padding-bottom: 8px;
    }

    .wall .entry .name {
      font-weight: 700;
      font-style: italic;
    }

    .wall .entry .meta {
      color: #8b857d;
      font-size: 0.78rem;
    }

    .pager {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 14px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    h2 {
      margin: 0 0 6px;
      font-size: 1.3rem;
      color: var(--accent-2);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Save Our College</h1>
      <p class="subtitle">Add your voice. Every signature counts.</p>
      <div class="badges" style="margin-top: 12px;">
        <span class="badge" id="visitors-badge">Visitors: --</span>
        <span class="badge" id="signed-badge">Signed: {{TOTAL}}</span>
      </div>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Students</span>
        <span id="students" class="value">{{STUDENTS}}</span>
      </div>
      <div class="stat">
        <span class="label">Alumni</span>
        <span id="alumni" class="value">{{ALUMNI}}</span>
      </div>
      <div class="stat">
        <span class="label">Public</span>
        <span id="public" class="value">{{PUBLIC}}</span>
      </div>
      <div class="stat">
        <span class="label">Total</span>
        <span id="total" class="value total">{{TOTAL}}</span>
      </div>
    </section>

    <section>
      <h2>Sign the petition</h2>
      <form id="signature-form">
        <input id="name" name="name" type="text" placeholder="Full name" required />
        <input id="email" name="email" type="email" placeholder="Email address" required />
        <select id="category" name="category">
          <option value="student">Current Student</option>
          <option value="alumni">Alumni</option>
          <option value="public">General Public</option>
        </select>
        <button id="sign-btn" type="submit">Sign the Petition</button>
      </form>
      <div class="status" id="sign-status"></div>
    </section>

    <section>
      <h2>Wall of support</h2>
      <form id="filter-form" onsubmit="return false;">
        <input id="search" type="text" placeholder="Search by name..." />
        <div class="badges">
          <button class="ghost active" type="button" data-category="">All</button>
          <button class="ghost" type="button" data-category="student">Student</button>
          <button class="ghost" type="button" data-category="alumni">Alumni</button>
          <button class="ghost" type="button" data-category="public">Public</button>
        </div>
      </form>
      <div class="wall" id="wall" style="margin-top: 16px;"></div>
      <div class="pager" style="margin-top: 16px;">
        <button class="ghost" id="prev-btn" type="button">Previous</button>
        <span id="page-label">Page 1 of 1</span>
        <button class="ghost" id="next-btn" type="button">Next</button>
      </div>
    </section>

    <section>
      <h2>Send an anonymous message</h2>
      <form id="message-form">
        <textarea id="message" rows="4" placeholder="Your message..."></textarea>
        <label>
          <input id="can-share" type="checkbox" style="width: auto;" />
          This message may be shared publicly
        </label>
        <input id="files" type="file" multiple />
        <button id="message-btn" type="submit">Send Message</button>
      </form>
      <div class="status" id="message-status"></div>
    </section>
  </main>

  <script>
    const signForm = document.getElementById('signature-form');
    const signBtn = document.getElementById('sign-btn');
    const signStatus = document.getElementById('sign-status');
    const messageForm = document.getElementById('message-form');
    const messageBtn = document.getElementById('message-btn');
    const messageStatus = document.getElementById('message-status');
    const wallEl = document.getElementById('wall');
    const pageLabel = document.getElementById('page-label');
    const searchEl = document.getElementById('search');
    const categoryButtons = Array.from(document.querySelectorAll('[data-category]'));

    let page = 1;
    let totalPages = 1;
    let search = '';
    let category = '';
    let submitting = false;

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const loadCounts = async () => {
      const res = await fetch('/api/signatures');
      if (!res.ok) return;
      const data = await res.json();
      document.getElementById('students').textContent = data.students;
      document.getElementById('alumni').textContent = data.alumni;
      document.getElementById('public').textContent = data.public;
      document.getElementById('total').textContent = data.total;
      document.getElementById('signed-badge').textContent = `Signed: ${data.total}`;
    };

    const loadBoard = async () => {
      const params = new URLSearchParams({ page: String(page) });
      if (search) params.set('search', search);
      if (category) params.set('category', category);
      const res = await fetch(`/api/board?${params}`);
      if (!res.ok) return;
      const data = await res.json();
      page = data.page;
      totalPages = data.total_pages;
      pageLabel.textContent = `Page ${data.page} of ${data.total_pages} (${data.total} signatures)`;
      wallEl.innerHTML = data.signatures
        .map((sig) => `
          <div class="entry">
            <div class="name">${sig.name.replace(/</g, '&lt;')}</div>
            <div class="meta">${sig.category.replace(/</g, '&lt;')}</div>
            <div class="meta">${sig.timestamp.replace(/</g, '&lt;')}</div>
          </div>`)
        .join('') || '<p class="subtitle">No signatures match.</p>';
    };

    const trackVisitor = async () => {
      const isNewVisitor = !localStorage.getItem('siteVisited');
      if (isNewVisitor) {
        localStorage.setItem('siteVisited', 'true');
      }
      const res = await fetch('/api/visitors', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ isNewVisitor })
      });
      if (!res.ok) return;
      const data = await res.json();
      document.getElementById('visitors-badge').textContent = `Visitors: ${data.count}`;
    };

    signForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (submitting) return;
      submitting = true;
      signBtn.disabled = true;
      setStatus(signStatus, 'Submitting...', '');
      try {
        const res = await fetch('/api/signatures', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            name: document.getElementById('name').value,
            email: document.getElementById('email').value,
            category: document.getElementById('category').value
          })
        });
        if (!res.ok) {
          const body = await res.json().catch(() => ({}));
          throw new Error(body.error || 'Submission failed');
        }
        signForm.reset();
        setStatus(signStatus, 'Thank you! Your signature has been recorded.', 'ok');
        setTimeout(() => setStatus(signStatus, '', ''), 3000);
        await Promise.all([loadCounts(), loadBoard()]);
      } catch (err) {
        setStatus(signStatus, err.message, 'error');
      } finally {
        submitting = false;
        signBtn.disabled = false;
      }
    });

    messageForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      messageBtn.disabled = true;
      setStatus(messageStatus, 'Sending...', '');
      try {
        const form = new FormData();
        form.set('message', document.getElementById('message').value);
        form.set('canShareOnInstagram', String(document.getElementById('can-share').checked));
        Array.from(document.getElementById('files').files).forEach((file, index) => {
          form.set(`file_${index}`, file);
        });
        const res = await fetch('/api/send-message', { method: 'POST', body: form });
        if (!res.ok) {
          const body = await res.json().catch(() => ({}));
          throw new Error(body.error || 'Send failed');
        }
        messageForm.reset();
        setStatus(messageStatus, 'Message sent. Thank you.', 'ok');
        setTimeout(() => setStatus(messageStatus, '', ''), 3000);
      } catch (err) {
        setStatus(messageStatus, err.message, 'error');
      } finally {
        messageBtn.disabled = false;
      }
    });

    searchEl.addEventListener('input', () => {
      search = searchEl.value;
      page = 1;
      loadBoard();
    });

    categoryButtons.forEach((button) => {
      button.addEventListener('click', () => {
        category = button.dataset.category;
        page = 1;
        categoryButtons.forEach((b) => b.classList.toggle('active', b === button));
        loadBoard();
      });
    });

    document.getElementById('prev-btn').addEventListener('click', () => {
      if (page > 1) {
        page -= 1;
        loadBoard();
      }
    });

    document.getElementById('next-btn').addEventListener('click', () => {
      if (page < totalPages) {
        page += 1;
        loadBoard();
      }
    });

    trackVisitor();
    loadCounts();
    loadBoard();
    setInterval(loadCounts, 5000);
  </script>
</body>
</html>
"#;
