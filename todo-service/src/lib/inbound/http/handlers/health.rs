pub async fn health() -> &'static str {
    "Server working fine"
}
