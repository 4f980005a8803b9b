use astro_boy_vertex_layout::renderer::{AstroBoyVertex, VertexInputConfig};
use astro_boy_vertex_layout::*;

fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    let layout = build_vertex_layout();
    for attribute in &layout.attributes {
        log::info!(
            "location {} ({:?}): {:?} from buffer {} at offset {}",
            attribute.location,
            attribute.semantic,
            attribute.format,
            attribute.buffer_index,
            attribute.offset
        );
    }

    let config = VertexInputConfig::for_vertex::<AstroBoyVertex>();
    let vertex_input_state = config.vertex_input_state();
    log::info!(
        "vertex input state: {} bindings, {} attributes",
        vertex_input_state.vertex_binding_description_count,
        vertex_input_state.vertex_attribute_description_count
    );

    let json = serde_json::to_string_pretty(&layout)?;
    println!("{json}");

    Ok(())
}
