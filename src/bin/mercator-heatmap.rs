use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use mercator_heatmap::{
    ColorScale, GeoBounds, HeatmapError, LabelStyle, RenderThreading, RunConfig,
};

const GUIDE: &str = "\
The data file is tab-separated, with this exact header row:

  fileName\tlabel\tlatitude\tlongitude\twidth\tstddeviations
  0001.png\t2016-10-01\t33\t-80\t0.5\t2.57
  0001.png\t2016-10-01\t33\t-80.5\t0.5\t1.6
  0002.png\t2016-10-02\t33\t-80\t0.5\t1.0
  ...

Rows sharing a fileName form one frame. Use the fileName 'auto' on every row to key
frames by label instead and number the output files 0000.png, 0001.png, ... in sorted
label order.

NORTH/WEST/SOUTH/EAST are the edges of the map image in decimal degrees.

Example, for a US map cropped to the lower 48:
  $ mercator-heatmap data.tsv mercator-us-2633x1385.png 49.0 -124.7 25.1 -66.9 frames/
";

#[derive(Parser, Debug)]
#[command(
    name = "mercator-heatmap",
    version,
    about = "Render heatmap frames over a Mercator base map.",
    after_help = GUIDE,
    allow_negative_numbers = true
)]
struct Cli {
    /// Tab-separated data table.
    data: PathBuf,

    /// Base map image.
    map: PathBuf,

    /// Latitude of the map's top edge.
    north: f64,

    /// Longitude of the map's left edge.
    west: f64,

    /// Latitude of the map's bottom edge.
    south: f64,

    /// Longitude of the map's right edge.
    east: f64,

    /// Directory for the rendered frames (created if missing).
    out_dir: PathBuf,

    /// Deviation baseline; scores below it are not drawn.
    #[arg(long, default_value_t = mercator_heatmap::data::DEFAULT_BASELINE)]
    baseline: f64,

    /// Comma-separated #rrggbb[aa] colors, lowest bucket first.
    #[arg(long)]
    palette: Option<String>,

    /// Label font size in pixels.
    #[arg(long, default_value_t = mercator_heatmap::render::label::DEFAULT_FONT_SIZE)]
    font_size: f32,

    /// Extra directory of .ttf/.otf/.ttc fonts for labels.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long, env = "MERCATOR_HEATMAP_THREADS")]
    threads: Option<usize>,

    /// Only log warnings and errors.
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, HeatmapError> {
        let palette = match &self.palette {
            Some(list) => ColorScale::parse_palette(list)?,
            None => mercator_heatmap::data::DEFAULT_PALETTE.to_vec(),
        };
        let bounds = GeoBounds {
            north: self.north,
            west: self.west,
            south: self.south,
            east: self.east,
        };
        let mut config = RunConfig::new(self.data, self.map, bounds, self.out_dir);
        config.color_scale = ColorScale::new(self.baseline, palette)?;
        config.label = LabelStyle {
            font_size: self.font_size,
            font_dir: self.font_dir,
            ..LabelStyle::default()
        };
        config.threading = RenderThreading {
            parallel: self.parallel,
            threads: self.threads,
        };
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("\n{GUIDE}");
            return ExitCode::FAILURE;
        }
    };

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let result = cli
        .into_config()
        .and_then(|config| mercator_heatmap::run(&config));
    match result {
        Ok(paths) => {
            eprintln!("wrote {} frame(s)", paths.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_config() {
                eprintln!("\n{GUIDE}");
            }
            ExitCode::FAILURE
        }
    }
}
