use std::path::PathBuf;

use sketchkit::{init_logging, render_to_file, SketchConfig, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("sketchkit {} (built {})", VERSION, BUILD_DATE);

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SketchConfig::load_from_file(&path)?,
        None => SketchConfig::load_or_default(&SketchConfig::default_path())?,
    };

    render_to_file(&config)?;
    Ok(())
}
