use glam::{IVec3, Vec2, Vec3};
use thiserror::Error;

use crate::layout::{VertexLayoutDescriptor, VertexSemantic};
use crate::renderer::gpu_bytes;

pub const VERTEX_COUNT: usize = 3616;
pub const POSITIONS_ARRAY_COUNT: usize = VERTEX_COUNT * 3;
pub const NORMALS_ARRAY_COUNT: usize = VERTEX_COUNT * 3;
pub const UVS_ARRAY_COUNT: usize = VERTEX_COUNT * 2;
pub const WEIGHTS_ARRAY_COUNT: usize = VERTEX_COUNT * 3;
pub const JOINTS_ARRAY_COUNT: usize = VERTEX_COUNT * 3;
pub const TRIANGLE_COUNT: usize = 4881;
pub const INDEX_COUNT: usize = 14643;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{semantic:?} array has {len} values, not a multiple of {components}")]
    ComponentMismatch {
        semantic: VertexSemantic,
        len: usize,
        components: usize,
    },

    #[error("{semantic:?} buffer has {actual} vertices, expected {expected}")]
    VertexCountMismatch {
        semantic: VertexSemantic,
        expected: usize,
        actual: usize,
    },

    #[error("index buffer length {len} is not a whole number of triangles")]
    IndexCountNotTriangles { len: usize },

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        index: u32,
        position: usize,
        vertex_count: usize,
    },

    #[error("astro boy {what}: expected {expected}, got {actual}")]
    ContractMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("layout has no {semantic:?} attribute")]
    MissingAttribute { semantic: VertexSemantic },

    #[error("{semantic:?} reads from buffer {buffer_index}, which has no layout")]
    MissingBufferLayout {
        semantic: VertexSemantic,
        buffer_index: u32,
    },

    #[error("{semantic:?} elements are {element_size} bytes but the layout stride is {stride}")]
    StrideMismatch {
        semantic: VertexSemantic,
        stride: u32,
        element_size: usize,
    },
}

/// The asset's raw arrays, as exported: flat scalars, one array per attribute
#[derive(Debug, Clone, Copy)]
pub struct FlatGeometry<'a> {
    pub positions: &'a [f32],
    pub normals: &'a [f32],
    pub uvs: &'a [f32],
    pub weights: &'a [f32],
    pub joints: &'a [i32],
    pub indices: &'a [u32],
}

/// Non-interleaved mesh data, one buffer per vertex attribute slot
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub weights: Vec<Vec3>,
    pub joint_ids: Vec<IVec3>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn from_flat(flat: FlatGeometry<'_>) -> Result<Self, GeometryError> {
        let positions = chunked(VertexSemantic::Position, flat.positions, 3, |c| {
            Vec3::new(c[0], c[1], c[2])
        })?;
        let normals = chunked(VertexSemantic::Normal, flat.normals, 3, |c| {
            Vec3::new(c[0], c[1], c[2])
        })?;
        let uvs = chunked(VertexSemantic::Uv, flat.uvs, 2, |c| Vec2::new(c[0], c[1]))?;
        let weights = chunked(VertexSemantic::Weight, flat.weights, 3, |c| {
            Vec3::new(c[0], c[1], c[2])
        })?;
        let joint_ids = chunked(VertexSemantic::JointId, flat.joints, 3, |c| {
            IVec3::new(c[0], c[1], c[2])
        })?;

        let mesh = Self {
            positions,
            normals,
            uvs,
            weights,
            joint_ids,
            indices: flat.indices.to_vec(),
        };
        mesh.validate()?;

        log::debug!(
            "loaded mesh buffers: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// raw bytes of the buffer bound at this semantic's slot
    pub fn vertex_buffer(&self, semantic: VertexSemantic) -> &[u8] {
        match semantic {
            VertexSemantic::Position => gpu_bytes(&self.positions),
            VertexSemantic::Normal => gpu_bytes(&self.normals),
            VertexSemantic::Uv => gpu_bytes(&self.uvs),
            VertexSemantic::Weight => gpu_bytes(&self.weights),
            VertexSemantic::JointId => gpu_bytes(&self.joint_ids),
        }
    }

    pub fn index_buffer(&self) -> &[u8] {
        gpu_bytes(&self.indices)
    }

    fn vertex_len(&self, semantic: VertexSemantic) -> usize {
        match semantic {
            VertexSemantic::Position => self.positions.len(),
            VertexSemantic::Normal => self.normals.len(),
            VertexSemantic::Uv => self.uvs.len(),
            VertexSemantic::Weight => self.weights.len(),
            VertexSemantic::JointId => self.joint_ids.len(),
        }
    }

    fn element_size(semantic: VertexSemantic) -> usize {
        match semantic {
            VertexSemantic::Position | VertexSemantic::Normal | VertexSemantic::Weight => {
                std::mem::size_of::<Vec3>()
            }
            VertexSemantic::Uv => std::mem::size_of::<Vec2>(),
            VertexSemantic::JointId => std::mem::size_of::<IVec3>(),
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertex_count();

        for semantic in VertexSemantic::ALL {
            let actual = self.vertex_len(semantic);
            if actual != vertex_count {
                return Err(GeometryError::VertexCountMismatch {
                    semantic,
                    expected: vertex_count,
                    actual,
                });
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCountNotTriangles {
                len: self.indices.len(),
            });
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }

        Ok(())
    }

    pub fn check_astro_boy_contract(&self) -> Result<(), GeometryError> {
        let checks = [
            ("vertex count", VERTEX_COUNT, self.vertex_count()),
            ("triangle count", TRIANGLE_COUNT, self.triangle_count()),
            ("index count", INDEX_COUNT, self.indices.len()),
        ];

        for (what, expected, actual) in checks {
            if expected != actual {
                return Err(GeometryError::ContractMismatch {
                    what,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Each buffer's element size must equal the stride of the buffer its attribute reads from
    pub fn check_layout(&self, layout: &VertexLayoutDescriptor) -> Result<(), GeometryError> {
        for semantic in VertexSemantic::ALL {
            if layout.attribute(semantic).is_none() {
                return Err(GeometryError::MissingAttribute { semantic });
            }
        }

        for attribute in &layout.attributes {
            let Some(buffer_layout) = layout.layout(attribute.buffer_index) else {
                return Err(GeometryError::MissingBufferLayout {
                    semantic: attribute.semantic,
                    buffer_index: attribute.buffer_index,
                });
            };

            let element_size = Self::element_size(attribute.semantic);
            if element_size != buffer_layout.stride as usize {
                return Err(GeometryError::StrideMismatch {
                    semantic: attribute.semantic,
                    stride: buffer_layout.stride,
                    element_size,
                });
            }
        }

        Ok(())
    }
}

fn chunked<S: Copy, T>(
    semantic: VertexSemantic,
    values: &[S],
    components: usize,
    build: impl Fn(&[S]) -> T,
) -> Result<Vec<T>, GeometryError> {
    if values.len() % components != 0 {
        return Err(GeometryError::ComponentMismatch {
            semantic,
            len: values.len(),
            components,
        });
    }

    Ok(values.chunks_exact(components).map(build).collect())
}
