use axum::response::Html;

const UPLOAD_FORM: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume Parser</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
  </style>
</head>
<body>
  <h1>Resume Parser</h1>
  <form id="upload">
    <input type="file" name="file" accept=".pdf,.docx" required>
    <button type="submit">Parse</button>
  </form>
  <p id="download"></p>
  <pre id="result"></pre>
  <script>
    document.getElementById("upload").addEventListener("submit", async (event) => {
      event.preventDefault();
      const result = document.getElementById("result");
      const download = document.getElementById("download");
      result.textContent = "Parsing...";
      download.innerHTML = "";
      const response = await fetch("/api/v1/resumes", { method: "POST", body: new FormData(event.target) });
      const body = await response.json();
      if (!response.ok) {
        result.textContent = body.error ? body.error.message : JSON.stringify(body, null, 2);
        return;
      }
      result.textContent = JSON.stringify(body.data, null, 2);
      if (body.persisted.artifact) {
        download.innerHTML = '<a href="' + body.download_url + '">Download JSON</a>';
      }
    });
  </script>
</body>
</html>
"#;

/// GET /
/// Minimal upload page for trying the parser from a browser.
pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}
