//! Minimal Wavefront OBJ writer for generated tree meshes.

use std::io::{self, Write};

use arbor_procgen::{MeshBuffer, TreeMeshes};

/// Write the tree as two named objects, `stems` and `leaves`.
///
/// OBJ indices are 1-based and global across the file, so the leaf faces are
/// offset by the stem vertex count.
pub fn write_tree<W: Write>(out: &mut W, tree: &TreeMeshes) -> io::Result<()> {
    writeln!(out, "# arbor tree")?;
    writeln!(
        out,
        "# {} stems, {} leaves",
        tree.stats.stems, tree.stats.leaves
    )?;

    let mut base = 1;
    for (name, mesh) in [("stems", &tree.stems), ("leaves", &tree.leaves)] {
        if mesh.is_empty() {
            continue;
        }
        write_object(out, name, mesh, base)?;
        base += mesh.vertex_count();
    }

    Ok(())
}

fn write_object<W: Write>(out: &mut W, name: &str, mesh: &MeshBuffer, base: usize) -> io::Result<()> {
    writeln!(out, "o {}", name)?;
    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in &mesh.triangles {
        writeln!(
            out,
            "f {} {} {}",
            *a as usize + base,
            *b as usize + base,
            *c as usize + base
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_procgen::GenerationStats;
    use glam::Vec3;

    fn triangle(offset: f32) -> MeshBuffer {
        MeshBuffer {
            vertices: vec![
                Vec3::new(offset, 0.0, 0.0),
                Vec3::new(offset + 1.0, 0.0, 0.0),
                Vec3::new(offset, 1.0, 0.0),
            ],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_faces_are_one_based_and_global() {
        let tree = TreeMeshes {
            stems: triangle(0.0),
            leaves: triangle(5.0),
            stats: GenerationStats { stems: 1, leaves: 1 },
        };

        let mut buf = Vec::new();
        write_tree(&mut buf, &tree).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1 2 3", "f 4 5 6"]);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 6);
        assert!(text.contains("o stems"));
        assert!(text.contains("o leaves"));
    }

    #[test]
    fn test_empty_leaves_omitted() {
        let tree = TreeMeshes {
            stems: triangle(0.0),
            leaves: MeshBuffer::new(),
            stats: GenerationStats { stems: 1, leaves: 0 },
        };

        let mut buf = Vec::new();
        write_tree(&mut buf, &tree).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("o leaves"));
    }
}
