use std::{env, io};

use anyhow::{ensure, Context};
use handctl::engine::Engine;
use handctl::filter::Ema;
use handctl::intent::LogDispatcher;
use handctl::screen::ScreenBounds;
use handctl::source::StdinSource;

/// Reads landmark frames from stdin (one line per frame, 42 floats per hand) and logs the
/// resulting input intents instead of injecting them.
fn main() -> anyhow::Result<()> {
    handctl::init_logger!();

    let screen = match env::var("HANDCTL_SCREEN") {
        Ok(s) => s.parse().context("HANDCTL_SCREEN")?,
        Err(_) => ScreenBounds::new(1920, 1080),
    };
    let mut engine = Engine::new(screen);

    if let Ok(alpha) = env::var("HANDCTL_SMOOTHING") {
        let alpha: f32 = alpha.parse().context("HANDCTL_SMOOTHING")?;
        ensure!(
            (0.0..=1.0).contains(&alpha),
            "HANDCTL_SMOOTHING must be between 0.0 and 1.0, got {alpha}"
        );
        log::info!("cursor smoothing enabled (alpha {alpha})");
        engine.set_cursor_filter(Ema::new(alpha));
    }

    log::info!(
        "mapping gestures to a {}x{} screen",
        screen.width(),
        screen.height()
    );

    let stdin = io::stdin();
    let mut source = StdinSource::new(stdin.lock());
    engine.run(&mut source, &mut LogDispatcher, || false);
    Ok(())
}
