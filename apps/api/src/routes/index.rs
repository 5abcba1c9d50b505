use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>AI Hiring Backend API</title>
</head>
<body>
  <h1>Welcome to the AI Hiring Backend API</h1>
  <p>All POST endpoints return JSON. Errors are returned as <code>{"error": "..."}</code>.</p>
  <ul>
    <li><code>POST /generate-jd</code> &mdash; JSON <code>title</code>, <code>seniority</code>, <code>skills</code>, optional <code>location</code> and <code>description</code>; returns <code>job_description</code></li>
    <li><code>POST /screen-resume</code> &mdash; multipart <code>job_description</code> and <code>resume</code> (PDF); returns <code>screening_result</code></li>
    <li><code>POST /generate-questions</code> &mdash; JSON <code>title</code>, <code>skills</code>; returns <code>questions</code></li>
    <li><code>POST /evaluate</code> &mdash; JSON <code>questions</code>, <code>answers</code>; returns <code>evaluation</code></li>
    <li><code>POST /generate-feedback</code> &mdash; JSON <code>candidate_name</code>, <code>job_title</code>, <code>outcome</code>, optional <code>tone</code>; returns <code>email</code></li>
    <li><code>GET /health</code> &mdash; liveness check</li>
  </ul>
</body>
</html>
"#;

/// GET /
/// Static landing page listing the available endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
