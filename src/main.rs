#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), research_portfolio::backend::ServerError> {
    research_portfolio::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    research_portfolio::frontend::run();
}
