use anyhow::Context;
use isochrone_map::prelude::*;

/// Headless isochrone run: pick a start point, request contours, list the overlays.
///
/// Usage: `isochrone-app [LON LAT] [MINUTES] [MODE]`, e.g.
/// `isochrone-app 4.9 52.37 "5,10,15" walking`. Requires `MAPBOX_ACCESS_TOKEN`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    isochrone_map::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lon = args
        .first()
        .map(|s| s.parse::<f64>())
        .transpose()
        .context("LON must be a number")?
        .unwrap_or(4.9);
    let lat = args
        .get(1)
        .map(|s| s.parse::<f64>())
        .transpose()
        .context("LAT must be a number")?
        .unwrap_or(52.37);
    let minutes = args.get(2).cloned().unwrap_or_else(|| "5,10,15".to_string());
    let mode = args
        .get(3)
        .map(|s| s.parse::<TransportMode>())
        .transpose()?
        .unwrap_or_default();

    let config = IsochroneConfig::from_env()?;
    let mut map = Map::with_defaults(View::default())?;
    let mut tool = IsochroneTool::http(config)?;
    tool.install(&mut map);

    let mut form = IsochroneForm::new().with_durations(minutes).with_mode(mode);
    tool.toggle_panel(&mut form);

    tool.pick_start_point(&mut map)?;
    let click = MapEvent::SingleClick {
        coordinate: LatLng::new(lat, lon).to_mercator(),
    };
    tool.handle_event(&mut map, &mut form, &click)?;

    let painted = tool
        .run(&mut map, &form)
        .await
        .context("isochrone run failed")?;

    println!("{} isochrone layer(s) from {}, {}", painted, form.coord_x, form.coord_y);
    for layer in map.layers() {
        println!(
            "  z={:<3} {:<8} {:<20} {}",
            layer.z_index(),
            layer.layer_type().to_string(),
            layer.name(),
            layer.title()
        );
    }
    Ok(())
}
