use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    reserved_words::cli::run_cli().await
}
