use ash::vk;

use crate::layout::VertexLayoutDescriptor;

use super::{VertexDescription, vk_attribute_descriptions, vk_binding_descriptions};

/// Owned vertex input descriptions for pipeline creation.
///
/// The create info returned by `vertex_input_state` borrows from this,
/// so it must outlive the `create_graphics_pipelines` call.
pub struct VertexInputConfig {
    pub vertex_binding_descriptions: Vec<vk::VertexInputBindingDescription>,
    pub vertex_attribute_descriptions: Vec<vk::VertexInputAttributeDescription>,
}

impl VertexInputConfig {
    pub fn from_layout(layout: &VertexLayoutDescriptor) -> Self {
        Self {
            vertex_binding_descriptions: vk_binding_descriptions(layout),
            vertex_attribute_descriptions: vk_attribute_descriptions(layout),
        }
    }

    pub fn for_vertex<V: VertexDescription>() -> Self {
        Self {
            vertex_binding_descriptions: V::binding_descriptions(),
            vertex_attribute_descriptions: V::attribute_descriptions(),
        }
    }

    pub fn vertex_input_state(&self) -> vk::PipelineVertexInputStateCreateInfo<'_> {
        vk::PipelineVertexInputStateCreateInfo::default()
            .vertex_binding_descriptions(&self.vertex_binding_descriptions)
            .vertex_attribute_descriptions(&self.vertex_attribute_descriptions)
    }

    /// zero offsets for cmd_bind_vertex_buffers, one per binding
    pub fn vertex_buffer_offsets(&self) -> Vec<vk::DeviceSize> {
        vec![0; self.vertex_binding_descriptions.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::layout::build_vertex_layout;
    use crate::renderer::AstroBoyVertex;

    #[test]
    fn vertex_input_state_counts() {
        let config = VertexInputConfig::for_vertex::<AstroBoyVertex>();
        let state = config.vertex_input_state();

        assert_eq!(state.vertex_binding_description_count, 5);
        assert_eq!(state.vertex_attribute_description_count, 5);
        assert_eq!(
            state.p_vertex_binding_descriptions,
            config.vertex_binding_descriptions.as_ptr()
        );
        assert_eq!(config.vertex_buffer_offsets(), [0; 5]);
    }

    #[test]
    fn layout_and_vertex_type_agree() {
        let from_layout = VertexInputConfig::from_layout(&build_vertex_layout());
        let from_vertex = VertexInputConfig::for_vertex::<AstroBoyVertex>();

        let locations = |c: &VertexInputConfig| -> Vec<(u32, u32, vk::Format)> {
            c.vertex_attribute_descriptions
                .iter()
                .map(|a| (a.location, a.binding, a.format))
                .collect()
        };
        assert_eq!(locations(&from_layout), locations(&from_vertex));

        let strides = |c: &VertexInputConfig| -> Vec<(u32, u32)> {
            c.vertex_binding_descriptions
                .iter()
                .map(|b| (b.binding, b.stride))
                .collect()
        };
        assert_eq!(strides(&from_layout), strides(&from_vertex));
    }
}
