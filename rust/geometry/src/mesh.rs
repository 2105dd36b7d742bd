// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point3, Vector3};

/// Material tag carried by each generated mesh, with the reference
/// renderer's default color as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Walls,
    Roof,
}

impl Material {
    /// Default color the reference renderer assigns to this surface.
    pub fn color(&self) -> &'static str {
        match self {
            Material::Walls => "#d0c6b4",
            Material::Roof => "#b05f4e",
        }
    }
}

/// Triangle mesh with flat vertex buffers, ready for a rendering
/// collaborator to upload as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz), flat shaded
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
    /// Surface this mesh belongs to
    pub material: Material,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new(material: Material) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            material,
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(material: Material, vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
            material,
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Calculate bounds (min, max)
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new(Material::Walls);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.material, Material::Walls);
    }

    #[test]
    fn test_add_vertex() {
        let mut mesh = Mesh::new(Material::Roof);
        mesh.add_vertex(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.normals, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bounds() {
        let mut mesh = Mesh::new(Material::Walls);
        mesh.add_vertex(Point3::new(-1.0, 0.0, 2.0), Vector3::y());
        mesh.add_vertex(Point3::new(3.0, 5.0, -4.0), Vector3::y());

        let (min, max) = mesh.bounds();
        assert_eq!((min.x, min.y, min.z), (-1.0, 0.0, -4.0));
        assert_eq!((max.x, max.y, max.z), (3.0, 5.0, 2.0));
    }

    #[test]
    fn test_material_colors() {
        assert_eq!(Material::Walls.color(), "#d0c6b4");
        assert_eq!(Material::Roof.color(), "#b05f4e");
    }
}
