use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use log::info;
use zquad::compute::geojson::quad_to_geojson;
use zquad::ZQuad;

#[derive(Parser, Debug)]
#[command(version, about = "Look up a z-quad by position, value or name", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["latlng", "quad", "name"])))]
struct Args {
    /// Position as LAT,LNG in degrees
    #[arg(long, allow_hyphen_values = true)]
    latlng: Option<String>,

    /// Quad value
    #[arg(short, long)]
    quad: Option<u64>,

    /// Hyphenated quad name
    #[arg(short, long)]
    name: Option<String>,

    /// Zoom out to this level (no-op when the quad is already coarser)
    #[arg(short, long)]
    zoom: Option<u8>,

    /// Print the quad as a GeoJSON Feature
    #[arg(long)]
    geojson: bool,
}

fn parse_latlng(text: &str) -> anyhow::Result<(f64, f64)> {
    let Some((lat, lng)) = text.split_once(',') else {
        bail!("expected LAT,LNG, got {:?}", text);
    };
    let lat = lat.trim().parse().with_context(|| format!("bad latitude {:?}", lat))?;
    let lng = lng.trim().parse().with_context(|| format!("bad longitude {:?}", lng))?;
    Ok((lat, lng))
}

fn resolve(args: &Args) -> anyhow::Result<ZQuad> {
    if let Some(latlng) = &args.latlng {
        let (lat, lng) = parse_latlng(latlng)?;
        info!("Resolving position {}, {}", lat, lng);
        return Ok(ZQuad::from_wgs84(lat, lng)?);
    }
    if let Some(value) = args.quad {
        info!("Resolving value {}", value);
        return Ok(ZQuad::from_value(value)?);
    }
    if let Some(name) = &args.name {
        info!("Resolving name {}", name);
        return Ok(name.parse()?);
    }
    bail!("one of --latlng, --quad or --name is required")
}

fn float_to_string(value: f64) -> String {
    let text = format!("{:.12}", value);
    let text = text.trim_end_matches('0');
    text.strip_suffix('.').unwrap_or(text).to_string()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut quad = resolve(&args)?;
    if let Some(zoom) = args.zoom {
        quad = quad.clamp_to_zoom(zoom);
    }

    if args.geojson {
        println!("{}", quad_to_geojson(&quad)?);
        return Ok(());
    }

    println!("name:   {}", quad.name());
    println!("zoom:   {}", quad.zoom());
    println!("value:  {}", quad.value());
    println!(
        "center: {}, {}",
        float_to_string(quad.center_lat()),
        float_to_string(quad.center_lng())
    );
    if let Some(parent) = quad.parent() {
        println!("parent: {}", parent.name());
    }
    if let Some(children) = quad.children() {
        for (i, child) in children.iter().enumerate() {
            println!("child {}: {}", i, child.name());
        }
    }

    Ok(())
}
