// cli.rs - Command-line interface for the headless simulator
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "physics-camera")]
#[command(about = "Headless physics camera simulator", long_about = None)]
pub struct Cli {
    /// Controller config (JSON); defaults are used for missing fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// glTF file providing the collision meshes; a flat floor otherwise
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Half extent of the default floor
    #[arg(long, default_value_t = 100.0)]
    pub floor_half_extent: f32,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 300)]
    pub ticks: u32,

    /// Tick duration in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Initial camera height
    #[arg(long, default_value_t = 500.0)]
    pub start_height: f32,

    /// Hold jump during this tick
    #[arg(long)]
    pub jump_at: Option<u32>,

    /// Hold the forward key for the whole run
    #[arg(long, default_value = "false")]
    pub walk: bool,
}
