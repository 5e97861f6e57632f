mod app;
mod atlas;
mod input;
mod player;
mod render;

fn main() {
    env_logger::init();
    log::info!("spritewalk starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
