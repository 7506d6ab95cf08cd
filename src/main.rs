//! `arcsweep [preset.toml]`: open the sweep window, optionally with options
//! loaded from a TOML preset.

use std::path::Path;

use arcsweep::{options::Options, ArcSweepError, Viewer};

fn load_options(path: Option<&Path>) -> Result<Options, ArcSweepError> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let options = Options::load(path)?;
    log::info!("loaded options from {}", path.display());
    Ok(options)
}

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let options = match load_options(arg.as_deref().map(Path::new)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("failed to load {}: {e}", arg.unwrap_or_default());
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
