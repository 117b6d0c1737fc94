use clap::{Parser, Subcommand};
use devctx::region::{Point, Rect, Size};
use devctx_cli::{ContextArgs, commands, parse_point, parse_rect, parse_size};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "devctx")]
#[command(about = "Inspect logical-to-device coordinate mappings and clip regions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    context: ContextArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configured transform
    Info,

    /// Map points between logical and device coordinates
    Map {
        /// Points as X,Y
        #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,

        /// Treat the points as device coordinates and map them back
        #[arg(short, long)]
        reverse: bool,
    },

    /// Convert a width and height between logical and device units
    Extent {
        /// Extent as W,H
        #[arg(value_parser = parse_size, allow_hyphen_values = true)]
        extent: Size,

        /// Treat the extent as device units and convert it back
        #[arg(short, long)]
        reverse: bool,
    },

    /// Push nested clip rectangles and report the effective clip
    Clip {
        /// Rectangles as X,Y,W,H, pushed in order
        #[arg(required = true, value_parser = parse_rect, allow_hyphen_values = true)]
        rects: Vec<Rect>,

        /// The rectangles are already in device coordinates
        #[arg(short, long)]
        device: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let mut dc = cli.context.build_context()?;
    let format = cli.context.format;

    match cli.command {
        Commands::Info => commands::info::execute(&dc, format),
        Commands::Map { points, reverse } => {
            commands::map::execute(&mut dc, &points, reverse, format)
        }
        Commands::Extent { extent, reverse } => {
            commands::extent::execute(&dc, extent, reverse, format)
        }
        Commands::Clip { rects, device } => commands::clip::execute(&mut dc, &rects, device, format),
    }
}
