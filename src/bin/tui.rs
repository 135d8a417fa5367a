use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    desde::tui::run().await
}
