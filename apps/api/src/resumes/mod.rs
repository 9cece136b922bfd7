// Upload surface: multipart intake, parse, persist, serve the JSON back.

pub mod handlers;
pub mod ingest;
