use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::GenerateError;
use crate::mesh::{concat, flat_shade, MeshBuffer};
use crate::params::TreeParameters;
use crate::sampler::Sampler;
use crate::stem::{BuildContext, StemGenerator};

/// Counts describing a generated tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub stems: usize,
    pub leaves: usize,
}

/// Generated tree geometry: the stem surface and all leaf cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeMeshes {
    pub stems: MeshBuffer,
    pub leaves: MeshBuffer,
    pub stats: GenerationStats,
}

/// Generate a tree from parameters and a seed.
///
/// Identical parameters and seed always produce identical buffers.
///
/// # Panics
///
/// Panics if `params` fails [`TreeParameters::validate`].
pub fn generate(params: &TreeParameters, seed: u64) -> Result<TreeMeshes, GenerateError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(params, &mut rng)
}

/// Generate a tree drawing randomness from `sampler`.
///
/// # Panics
///
/// Panics if `params` fails [`TreeParameters::validate`].
pub fn generate_with<S: Sampler + ?Sized>(
    params: &TreeParameters,
    sampler: &mut S,
) -> Result<TreeMeshes, GenerateError> {
    if let Err(err) = params.validate() {
        panic!("invalid tree parameters: {}", err);
    }

    let mut ctx = BuildContext::new(params, sampler);
    let trunk = StemGenerator::trunk(&mut ctx);
    let parts = trunk.build(&mut ctx)?;

    let stats = GenerationStats {
        stems: ctx.budget.built(),
        leaves: parts.leaves.len(),
    };

    let mut stems = concat(&parts.stems);
    if params.flat_shaded {
        stems = flat_shade(&stems);
    }
    let leaves = concat(&parts.leaves);

    log::info!(
        "Generated tree: {} stems ({} vertices, {} triangles), {} leaves",
        stats.stems,
        stems.vertex_count(),
        stems.triangle_count(),
        stats.leaves
    );

    Ok(TreeMeshes {
        stems,
        leaves,
        stats,
    })
}
