use ash::vk;

use crate::layout::{
    StepFunction, VertexAttribute, VertexBufferLayout, VertexFormat, VertexLayoutDescriptor,
    build_vertex_layout,
};

pub trait VertexDescription {
    fn binding_descriptions() -> Vec<vk::VertexInputBindingDescription>;
    fn attribute_descriptions() -> Vec<vk::VertexInputAttributeDescription>;
}

/// Marker for the skinned Astro Boy mesh, whose attributes each live in their own buffer
pub struct AstroBoyVertex;

impl VertexDescription for AstroBoyVertex {
    fn binding_descriptions() -> Vec<vk::VertexInputBindingDescription> {
        vk_binding_descriptions(&build_vertex_layout())
    }

    fn attribute_descriptions() -> Vec<vk::VertexInputAttributeDescription> {
        vk_attribute_descriptions(&build_vertex_layout())
    }
}

// color formats are also used to define non-color vec sizes 1-4
pub fn vk_format(format: VertexFormat) -> vk::Format {
    match format {
        VertexFormat::Float2 => vk::Format::R32G32_SFLOAT,
        VertexFormat::Float3 => vk::Format::R32G32B32_SFLOAT,
        VertexFormat::Int3 => vk::Format::R32G32B32_SINT,
    }
}

pub fn vk_input_rate(step_function: StepFunction) -> vk::VertexInputRate {
    match step_function {
        StepFunction::PerVertex => vk::VertexInputRate::VERTEX,
        StepFunction::PerInstance => vk::VertexInputRate::INSTANCE,
    }
}

// bindings - the index in the array passed to cmd_bind_vertex_buffers
//   one per attribute here, since nothing is interleaved
// locations - a unique identifier for the attribute in the shader
pub fn vk_binding_descriptions(
    layout: &VertexLayoutDescriptor,
) -> Vec<vk::VertexInputBindingDescription> {
    layout.layouts.iter().map(vk_binding_description).collect()
}

pub fn vk_attribute_descriptions(
    layout: &VertexLayoutDescriptor,
) -> Vec<vk::VertexInputAttributeDescription> {
    layout.attributes.iter().map(vk_attribute_description).collect()
}

fn vk_binding_description(buffer_layout: &VertexBufferLayout) -> vk::VertexInputBindingDescription {
    vk::VertexInputBindingDescription::default()
        .binding(buffer_layout.buffer_index)
        .stride(buffer_layout.stride)
        .input_rate(vk_input_rate(buffer_layout.step_function))
}

fn vk_attribute_description(attribute: &VertexAttribute) -> vk::VertexInputAttributeDescription {
    vk::VertexInputAttributeDescription::default()
        .binding(attribute.buffer_index)
        .location(attribute.location)
        .format(vk_format(attribute.format))
        .offset(attribute.offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_descriptions_keep_binding_identity() {
        let attributes = AstroBoyVertex::attribute_descriptions();
        assert_eq!(attributes.len(), 5);

        for (slot, attribute) in attributes.iter().enumerate() {
            assert_eq!(attribute.location, slot as u32);
            assert_eq!(attribute.binding, attribute.location);
            assert_eq!(attribute.offset, 0);
        }

        let formats: Vec<_> = attributes.iter().map(|a| a.format).collect();
        assert_eq!(
            formats,
            [
                vk::Format::R32G32B32_SFLOAT,
                vk::Format::R32G32B32_SFLOAT,
                vk::Format::R32G32_SFLOAT,
                vk::Format::R32G32B32_SFLOAT,
                vk::Format::R32G32B32_SINT,
            ]
        );
    }

    #[test]
    fn binding_descriptions_per_vertex() {
        let bindings = AstroBoyVertex::binding_descriptions();
        assert_eq!(bindings.len(), 5);

        let strides: Vec<_> = bindings.iter().map(|b| b.stride).collect();
        assert_eq!(strides, [12, 12, 8, 12, 12]);

        for (slot, binding) in bindings.iter().enumerate() {
            assert_eq!(binding.binding, slot as u32);
            assert_eq!(binding.input_rate, vk::VertexInputRate::VERTEX);
        }
    }

    #[test]
    fn instance_step_maps_to_instance_rate() {
        assert_eq!(
            vk_input_rate(StepFunction::PerInstance),
            vk::VertexInputRate::INSTANCE
        );
    }
}
