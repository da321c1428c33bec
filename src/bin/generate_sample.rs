//! Writes a small sample dataset (`data/volcanoes.txt` + `data/world.json`)
//! so the map can be built without the full source files.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

/// A few well-known US volcanoes spanning all three elevation buckets.
const VOLCANOES: &[(&str, f64, f64, f64)] = &[
    ("Rainier", 46.87, -121.75, 4392.0),
    ("Shasta", 41.42, -122.20, 4317.0),
    ("St. Helens", 46.20, -122.18, 2549.0),
    ("Lassen Peak", 40.49, -121.51, 3189.0),
    ("Sunset Crater", 35.37, -111.50, 2447.0),
    ("Capulin", 36.78, -103.97, 2494.0),
    ("Kilauea", 19.43, -155.29, 1222.0),
    ("Soda Lakes", 39.53, -118.87, 1251.0),
    ("Ubehebe Craters", 36.77, -117.45, 752.0),
    ("Salton Buttes", 33.22, -115.57, -40.0),
];

fn write_volcanoes(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["NAME", "LAT", "LON", "ELEV"])?;
    for (name, lat, lon, elev) in VOLCANOES {
        writer.write_record([
            name.to_string(),
            lat.to_string(),
            lon.to_string(),
            elev.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Crude rectangular "countries", one per population bucket.
fn write_boundaries(path: &Path) -> Result<()> {
    let countries = [
        ("Lowland", 296_793, [[-10.0, 40.0], [0.0, 40.0], [0.0, 50.0], [-10.0, 50.0]]),
        ("Midland", 15_000_000, [[5.0, 40.0], [15.0, 40.0], [15.0, 50.0], [5.0, 50.0]]),
        ("Highland", 82_000_000, [[20.0, 40.0], [30.0, 40.0], [30.0, 50.0], [20.0, 50.0]]),
    ];

    let features: Vec<serde_json::Value> = countries
        .iter()
        .map(|(name, pop, ring)| {
            let mut ring: Vec<[f64; 2]> = ring.to_vec();
            ring.push(ring[0]); // close the ring
            json!({
                "type": "Feature",
                "properties": { "NAME": name, "POP2005": pop },
                "geometry": { "type": "Polygon", "coordinates": [ring] },
            })
        })
        .collect();

    let document = json!({ "type": "FeatureCollection", "features": features });
    std::fs::write(path, serde_json::to_string_pretty(&document)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = Path::new("data");
    std::fs::create_dir_all(data_dir).context("creating data directory")?;

    write_volcanoes(&data_dir.join("volcanoes.txt"))?;
    write_boundaries(&data_dir.join("world.json"))?;

    println!("sample data written to {}", data_dir.display());
    Ok(())
}
