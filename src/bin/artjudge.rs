#[path = "artjudge/app/mod.rs"]
mod app;
#[path = "artjudge/args.rs"]
mod args;
#[path = "artjudge/config/mod.rs"]
mod config;
#[path = "artjudge/logging.rs"]
mod logging;
#[path = "artjudge/render.rs"]
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
