mod core;
mod gui;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    gui::run()
}
