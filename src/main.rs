mod app;
mod body;
mod field;
mod forces;
mod input;
mod physics;
mod render;
mod sim;
mod vec2;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
