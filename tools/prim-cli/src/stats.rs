//! Stats command - generate the scene meshes and print their buffer sizes

use anyhow::{Context, Result};
use clap::Args;
use primscene_core::config::SceneConfig;
use primscene_core::procedural::{Mesh, MeshBuffers, VertexLayout};
use primscene_core::scene::{SceneMeshes, SceneState};

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Also list the attribute layout of each vertex format
    #[arg(long)]
    pub layouts: bool,
}

fn print_row(name: &str, buffers: &MeshBuffers) {
    println!(
        "  {:<14} {:>8} {:>8} {:>9} {:>7} {:>10}  {}",
        name,
        buffers.vertex_data.len() / buffers.stride().max(1) as usize,
        buffers.index_count(),
        buffers.index_count() / 3,
        buffers.stride(),
        buffers.vertex_data.len() + buffers.index_data().len(),
        buffers.layout.name(),
    );
}

/// Execute the stats command
pub fn execute(args: StatsArgs, config: &SceneConfig) -> Result<()> {
    let meshes = SceneMeshes::generate(&config.shapes).context("Failed to generate scene meshes")?;
    let state = SceneState::new(config).context("Failed to create light sources")?;

    println!(
        "  {:<14} {:>8} {:>8} {:>9} {:>7} {:>10}  layout",
        "mesh", "vertices", "indices", "triangles", "stride", "bytes"
    );
    let mut total_vertices = 0;
    let mut total_indices = 0;
    for (shape, buffers) in meshes.buffers() {
        total_vertices += buffers.vertex_data.len() / buffers.stride() as usize;
        total_indices += buffers.indices.len();
        print_row(shape.name(), &buffers);
    }

    let marker: &Mesh = &state.key_light.mesh;
    print_row("light_marker", &marker.to_buffers());
    println!("  total (lit shapes): {total_vertices} vertices, {total_indices} indices");

    if args.layouts {
        println!();
        for layout in [
            VertexLayout::Position,
            VertexLayout::PositionColor,
            VertexLayout::PositionColorUv,
        ] {
            println!("  {} (stride {})", layout.name(), layout.stride());
            for attr in layout.attributes() {
                println!(
                    "    location {}: {} x f32 at offset {}",
                    attr.location, attr.components, attr.offset
                );
            }
        }
    }

    Ok(())
}
