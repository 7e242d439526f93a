// Mesh pipeline: derive `.vtk` path -> guard -> read STL -> write VTK

use crate::config::load_settings_for_input;
use crate::config::settings::Settings;
use crate::guard::CollisionGuard;
use crate::invoke::CommandRunner;
use crate::path::{FilePath, SubstitutionRule};
use crate::pipeline::{Outcome, single_argument};
use crate::stl;

pub const MESH_USAGE: &str = "Missing single argument: file path of binary STL file.";

/// Run the STL to VTK tool on its command-line arguments (program name excluded).
///
/// `runner` is only used for the collision notification.
pub fn run_stl_to_vtk(
    args: &[String],
    runner: &dyn CommandRunner,
) -> crate::error::Result<Outcome> {
    let input = FilePath::new(single_argument(args, MESH_USAGE)?);
    let settings = load_settings_for_input(input.as_path())?;
    stl_to_vtk(&input, runner, &settings)
}

pub fn stl_to_vtk(
    input: &FilePath,
    runner: &dyn CommandRunner,
    settings: &Settings,
) -> crate::error::Result<Outcome> {
    let output = input.derive(SubstitutionRule::StlToVtk)?;
    CollisionGuard::new(runner, settings).guard_or_abort(&output)?;

    let mesh = stl::read_stl_file(input.as_path())?;
    tracing::info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.triangles.len(),
        "mesh loaded"
    );
    stl::write_vtk_file(&mesh, output.as_path())?;

    Ok(Outcome::Completed(output))
}
