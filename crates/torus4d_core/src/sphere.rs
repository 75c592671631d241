//! Latitude/longitude sphere mesh
//!
//! The grid has `resolution + 1` rows (latitude, `i`) and as many columns
//! (longitude, `j`), stored row-major. Point `(i, j)` lives at index
//! `i * (resolution + 1) + j` and the four points `(i, j)`, `(i+1, j)`,
//! `(i, j+1)`, `(i+1, j+1)` form a quad face.

use std::f32::consts::{PI, TAU};

use torus4d_math::Vec3;

/// A grid point with its parametric coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVertex {
    pub position: Vec3,
    /// Longitude fraction `j / resolution`
    pub u: f32,
    /// Latitude fraction `i / resolution`
    pub v: f32,
}

/// One grid cell of the sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereFace {
    /// Latitude step
    pub i: usize,
    /// Longitude step
    pub j: usize,
    /// Indices of `(i, j)`, `(i+1, j)`, `(i, j+1)`, `(i+1, j+1)`
    pub corners: [usize; 4],
}

/// Static sphere mesh; topology never changes after generation
#[derive(Debug, Clone)]
pub struct SphereMesh {
    resolution: usize,
    vertices: Vec<SphereVertex>,
}

impl SphereMesh {
    /// Generate the grid. A resolution of 0 is raised to 1.
    pub fn generate(resolution: usize, radius: f32) -> Self {
        let resolution = if resolution == 0 {
            log::warn!("Sphere resolution 0 is not drawable, using 1");
            1
        } else {
            resolution
        };

        let steps = resolution as f32;
        let mut vertices = Vec::with_capacity((resolution + 1) * (resolution + 1));
        for i in 0..=resolution {
            let theta = (i as f32 / steps) * PI;
            for j in 0..=resolution {
                let phi = (j as f32 / steps) * TAU;
                vertices.push(SphereVertex {
                    position: Vec3::new(
                        radius * theta.sin() * phi.cos(),
                        radius * theta.sin() * phi.sin(),
                        radius * theta.cos(),
                    ),
                    u: j as f32 / steps,
                    v: i as f32 / steps,
                });
            }
        }

        log::debug!(
            "Generated sphere mesh: resolution {}, {} vertices",
            resolution,
            vertices.len()
        );

        Self {
            resolution,
            vertices,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// Flat index of grid point `(i, j)`
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * (self.resolution + 1) + j
    }

    /// Every grid cell, latitude-major
    pub fn faces(&self) -> impl Iterator<Item = SphereFace> + '_ {
        let res = self.resolution;
        (0..res).flat_map(move |i| {
            (0..res).map(move |j| SphereFace {
                i,
                j,
                corners: [
                    self.index(i, j),
                    self.index(i + 1, j),
                    self.index(i, j + 1),
                    self.index(i + 1, j + 1),
                ],
            })
        })
    }
}
