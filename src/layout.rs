use serde::{Deserialize, Serialize};

/// The per-vertex data channels of the Astro Boy mesh, in binding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VertexSemantic {
    Position,
    Normal,
    Uv,
    Weight,
    JointId,
}

impl VertexSemantic {
    pub const ALL: [VertexSemantic; 5] = [
        Self::Position,
        Self::Normal,
        Self::Uv,
        Self::Weight,
        Self::JointId,
    ];

    /// the shader location, which is also the index of the buffer holding this channel
    pub const fn location(self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::Uv => 2,
            Self::Weight => 3,
            Self::JointId => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VertexFormat {
    Float2,
    Float3,
    Int3,
}

impl VertexFormat {
    pub const fn component_count(self) -> u32 {
        match self {
            Self::Float2 => 2,
            Self::Float3 | Self::Int3 => 3,
        }
    }

    pub const fn byte_size(self) -> u32 {
        // every component is 32 bits wide
        self.component_count() * 4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepFunction {
    PerVertex,
    PerInstance,
}

/// One row of the static attribute table; the slot index is its position in the table
#[derive(Debug, Clone, Copy)]
pub struct AttributeSlot {
    pub semantic: VertexSemantic,
    pub format: VertexFormat,
    pub step_function: StepFunction,
}

pub const ASTRO_BOY_ATTRIBUTES: [AttributeSlot; 5] = [
    AttributeSlot {
        semantic: VertexSemantic::Position,
        format: VertexFormat::Float3,
        step_function: StepFunction::PerVertex,
    },
    AttributeSlot {
        semantic: VertexSemantic::Normal,
        format: VertexFormat::Float3,
        step_function: StepFunction::PerVertex,
    },
    AttributeSlot {
        semantic: VertexSemantic::Uv,
        format: VertexFormat::Float2,
        step_function: StepFunction::PerVertex,
    },
    AttributeSlot {
        semantic: VertexSemantic::Weight,
        format: VertexFormat::Float3,
        step_function: StepFunction::PerVertex,
    },
    AttributeSlot {
        semantic: VertexSemantic::JointId,
        format: VertexFormat::Int3,
        step_function: StepFunction::PerVertex,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexAttribute {
    pub location: u32,
    pub semantic: VertexSemantic,
    pub format: VertexFormat,
    pub buffer_index: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexBufferLayout {
    pub buffer_index: u32,
    pub stride: u32,
    pub step_function: StepFunction,
}

/// Backend-independent vertex layout, translated into pipeline state by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexLayoutDescriptor {
    pub attributes: Vec<VertexAttribute>,
    pub layouts: Vec<VertexBufferLayout>,
}

impl VertexLayoutDescriptor {
    pub fn attribute(&self, semantic: VertexSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    pub fn layout(&self, buffer_index: u32) -> Option<&VertexBufferLayout> {
        self.layouts.iter().find(|l| l.buffer_index == buffer_index)
    }
}

/// Builds the non-interleaved Astro Boy layout: one buffer per attribute,
/// each attribute at offset 0 of its own buffer.
pub fn build_vertex_layout() -> VertexLayoutDescriptor {
    let attributes: Vec<VertexAttribute> = ASTRO_BOY_ATTRIBUTES
        .iter()
        .enumerate()
        .map(|(slot, entry)| VertexAttribute {
            location: slot as u32,
            semantic: entry.semantic,
            format: entry.format,
            buffer_index: slot as u32,
            offset: 0,
        })
        .collect();

    let layouts: Vec<VertexBufferLayout> = ASTRO_BOY_ATTRIBUTES
        .iter()
        .enumerate()
        .map(|(slot, entry)| VertexBufferLayout {
            buffer_index: slot as u32,
            stride: entry.format.byte_size(),
            step_function: entry.step_function,
        })
        .collect();

    log::debug!(
        "built vertex layout with {} attributes over {} buffers",
        attributes.len(),
        layouts.len()
    );

    VertexLayoutDescriptor {
        attributes,
        layouts,
    }
}
