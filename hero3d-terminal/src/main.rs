/// hero3d Terminal - preview the hero background in a terminal
///
/// Controls:
///   - Mouse: parallax
///   - Q/ESC: Quit

use hero3d_terminal::{init_logging, LoggingConfig, TerminalApp};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> io::Result<()> {
    init_logging(LoggingConfig::default());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut app = TerminalApp::new(&mut rng)?;
    app.run()
}
