//! The lookup page and the raw data files behind it.

use std::path::Path;

use axum::response::Html;
use tower_http::services::ServeDir;

/// Raw JSON documents under `/data`, straight from the data directory.
pub fn data_service(data_dir: &Path) -> ServeDir {
    ServeDir::new(data_dir)
}

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="ja">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Loadout</title>
  <style>
    body { font-family: sans-serif; max-width: 960px; margin: 24px auto; padding: 0 12px; }
    .controls { display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 12px; }
    select, input { padding: 6px; }
    table { width: 100%; border-collapse: collapse; }
    th, td { border-bottom: 1px solid #ddd; padding: 6px; text-align: left; }
    #meta { margin: 8px 0; color: #555; }
    #defaults { margin: 8px 0; }
  </style>
</head>
<body>
  <h1>Loadout</h1>
  <div class="controls">
    <select id="weaponSelect"></select>
    <select id="catFilter"><option value="">(all)</option></select>
    <input id="kw" type="search" placeholder="keyword" />
  </div>
  <div id="meta"></div>
  <div id="defaults"></div>
  <table>
    <thead><tr><th>名前</th><th>カテゴリ</th><th>コスト</th><th>キー</th></tr></thead>
    <tbody id="tbody"></tbody>
  </table>

  <script>
    const sel = document.getElementById('weaponSelect');
    const cat = document.getElementById('catFilter');
    const kw = document.getElementById('kw');
    const tbody = document.getElementById('tbody');
    const meta = document.getElementById('meta');
    const defaults = document.getElementById('defaults');

    function cell(text) {
      const td = document.createElement('td');
      td.textContent = text;
      return td;
    }

    function fillOptions(view) {
      view.weapons.forEach(w => {
        const opt = document.createElement('option');
        opt.value = w.key; opt.textContent = w.label;
        sel.appendChild(opt);
      });
      view.categories.forEach(c => {
        const opt = document.createElement('option');
        opt.value = c; opt.textContent = c;
        cat.appendChild(opt);
      });
      if (view.selected_weapon) sel.value = view.selected_weapon;
    }

    function draw(view) {
      tbody.innerHTML = '';
      view.rows.forEach(r => {
        const tr = document.createElement('tr');
        tr.appendChild(cell((r.is_default ? '★ ' : '') + r.name));
        tr.appendChild(cell(r.category));
        tr.appendChild(cell(r.cost));
        tr.appendChild(cell(r.key));
        tbody.appendChild(tr);
      });
      meta.textContent = view.summary;
      defaults.textContent = view.default_loadout.length
        ? 'デフォルト装備: ' + view.default_loadout.join(', ')
        : '';
    }

    async function fetchView() {
      const params = new URLSearchParams({ weapon: sel.value, category: cat.value, keyword: kw.value });
      const res = await fetch('/api/view?' + params.toString(), { cache: 'no-store' });
      if (!res.ok) throw new Error('HTTP ' + res.status);
      return res.json();
    }

    async function render() {
      try { draw(await fetchView()); }
      catch (err) { console.error(err); meta.textContent = 'error: ' + err.message; }
    }

    async function init() {
      const view = await fetchView();
      fillOptions(view);
      draw(view);
      sel.addEventListener('change', render);
      cat.addEventListener('change', render);
      kw.addEventListener('input', render);
    }

    init().catch(err => {
      console.error(err);
      alert('初期化に失敗しました。Consoleを確認してください。');
    });
  </script>
</body>
</html>
"#;
