use anyhow::Result;
use clap::Parser;
use lathe::{generate_sphere, generate_vessel, SphereConfig, VesselConfig};
use lathe_mesh::Mesh;

mod args;
mod obj;

use args::{Args, Commands, Format};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Commands::Sphere(a) => {
            let config = SphereConfig {
                vertical_cuts: a.vertical_cuts,
                horizontal_cuts: a.horizontal_cuts,
            };
            let mesh = generate_sphere(&config)?;
            write_out(&a.output, a.format, &mesh)
        }
        Commands::Vessel(a) => {
            let config = VesselConfig {
                definition: a.definition,
                height: a.height,
                internal_radius: a.internal_radius,
                external_radius: a.external_radius,
                bottom_border: a.bottom_border,
                torus_definition: a.torus_definition,
                tube_radius: a.tube_radius,
                torus_radius: a.torus_radius,
            };
            let mesh = generate_vessel(&config)?;
            write_out(&a.output, a.format, &mesh)
        }
    }
}

fn write_out(path: &str, format: Format, mesh: &Mesh) -> Result<()> {
    log::info!(
        "writing {} vertices / {} triangles to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        path
    );
    match format {
        Format::Stl => lathe_stl::write_stl(path, mesh),
        Format::Obj => obj::write_obj(path, mesh),
    }
}
