mod color;
mod data;
mod error;
mod map;
mod render;

use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use map::VolcanoMap;

const VOLCANO_FILE: &str = "data/volcanoes.txt";
const BOUNDARY_FILE: &str = "data/world.json";
const OUTPUT_FILE: &str = "volcanoes.html";

const INITIAL_CENTER: [f64; 2] = [38.58, -99.09];
const INITIAL_ZOOM: u8 = 6;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let records = data::loader::load_volcanoes(Path::new(VOLCANO_FILE))
        .context("loading volcano records")?;
    let boundaries = data::loader::load_boundaries(Path::new(BOUNDARY_FILE))
        .context("loading boundary document")?;
    info!(
        "loaded {} volcanoes and {} boundary features",
        records.len(),
        boundaries.len()
    );
    if records.is_empty() {
        warn!("{VOLCANO_FILE} contains no records");
    }
    if boundaries.is_empty() {
        warn!("{BOUNDARY_FILE} contains no features");
    }

    let document = VolcanoMap::new(INITIAL_CENTER, INITIAL_ZOOM).build(&records, &boundaries);
    document
        .save(Path::new(OUTPUT_FILE))
        .context("exporting map")?;
    info!("map written to {OUTPUT_FILE}");

    Ok(())
}
