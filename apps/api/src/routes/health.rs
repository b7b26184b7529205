/// GET /
/// Liveness probe; plain text, no body schema.
pub async fn home_handler() -> &'static str {
    "Resume Builder API is running!"
}
