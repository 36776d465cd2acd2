use arbor_procgen::{generate, TreeParameters};

fn main() {
    env_logger::init();

    println!("=== Arbor - Tree Generation Demo ===\n");

    for name in TreeParameters::PRESET_NAMES {
        let Some(params) = TreeParameters::preset(name) else {
            continue;
        };

        println!("--- {} ---", name);
        println!("Shape: {:?}", params.shape);
        println!("Levels: {}", params.levels);
        println!("Scale: {:.1}m (+/- {:.1})", params.scale, params.scale_variance);
        println!("Leaves per terminal stem: {}", params.leaves);

        let seed = 12345;
        match generate(&params, seed) {
            Ok(tree) => {
                println!("Generated {} stems", tree.stats.stems);
                println!("Generated {} leaves", tree.stats.leaves);
                println!(
                    "Stem mesh: {} vertices, {} triangles",
                    tree.stems.vertex_count(),
                    tree.stems.triangle_count()
                );
                println!(
                    "Leaf mesh: {} vertices, {} triangles",
                    tree.leaves.vertex_count(),
                    tree.leaves.triangle_count()
                );

                let bytes = tree.stems.position_bytes().len()
                    + tree.stems.index_bytes().len()
                    + tree.leaves.position_bytes().len()
                    + tree.leaves.index_bytes().len();
                println!("Buffer size: ~{:.2} KB", bytes as f32 / 1024.0);
            }
            Err(err) => println!("Generation failed: {}", err),
        }
        println!();
    }

    // Demonstrate variation from seeds
    println!("=== Seed Variation Demo ===");
    let params = TreeParameters::quaking_aspen();

    for seed in [111, 222, 333, 444, 555] {
        match generate(&params, seed) {
            Ok(tree) => println!(
                "Seed {}: {} stems, {} leaves",
                seed, tree.stats.stems, tree.stats.leaves
            ),
            Err(err) => println!("Seed {}: {}", seed, err),
        }
    }

    println!("\n=== Tree Extent Analysis ===");
    let params = TreeParameters::balsam_fir();
    let Ok(tree) = generate(&params, 99999) else {
        println!("Balsam fir exceeded its stem budget");
        return;
    };

    if let Some((min, max)) = tree.stems.bounds() {
        println!("Balsam fir height: {:.2}m", max.y - min.y);
        println!("Canopy width: {:.2}m x {:.2}m", max.x - min.x, max.z - min.z);
    }
}
