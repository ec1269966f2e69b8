use spectrum::{app::SpectrumApp, error::Result};

#[tokio::main]
async fn main() -> Result<()> {
    let app = SpectrumApp::init().await?;
    app.run().await
}
