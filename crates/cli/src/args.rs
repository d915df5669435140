use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Binary STL (positions only; facet normals recomputed).
    #[default]
    Stl,
    /// Wavefront OBJ (keeps per-vertex normals and UVs).
    Obj,
}

#[derive(clap::Args, Debug)]
pub struct SphereArgs {
    /// Output path for the generated mesh.
    #[arg(short, long)]
    pub output: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Latitude bands.
    #[arg(long, default_value_t = 32)]
    pub vertical_cuts: u32,

    /// Longitude columns per ring.
    #[arg(long, default_value_t = 64)]
    pub horizontal_cuts: u32,
}

#[derive(clap::Args, Debug)]
pub struct VesselArgs {
    /// Output path for the generated mesh.
    #[arg(short, long)]
    pub output: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Angular resolution of both cylinder walls.
    #[arg(long, default_value_t = 48)]
    pub definition: u32,

    #[arg(long, default_value_t = 1.0)]
    pub height: f32,

    #[arg(long, default_value_t = 0.42)]
    pub internal_radius: f32,

    #[arg(long, default_value_t = 0.5)]
    pub external_radius: f32,

    /// Thickness of the solid bottom.
    #[arg(long, default_value_t = 0.08)]
    pub bottom_border: f32,

    /// Angular resolution of the handle.
    #[arg(long, default_value_t = 24)]
    pub torus_definition: u32,

    /// Minor (tube) radius of the handle.
    #[arg(long, default_value_t = 0.05)]
    pub tube_radius: f32,

    /// Major radius of the handle.
    #[arg(long, default_value_t = 0.25)]
    pub torus_radius: f32,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a unit UV sphere.
    Sphere(SphereArgs),
    /// Generate the cup-with-handle vessel.
    Vessel(VesselArgs),
}
