/// A marker for types that get copied into GPU vertex and index buffers
///
/// Implementors must have no padding, so their byte size is exactly
/// the stride the vertex layout declares for them
pub trait GPUWrite: bytemuck::Pod {}

impl GPUWrite for u32 {}
impl GPUWrite for glam::Vec2 {}
impl GPUWrite for glam::Vec3 {}
impl GPUWrite for glam::IVec3 {}

pub fn gpu_bytes<T: GPUWrite>(elements: &[T]) -> &[u8] {
    bytemuck::cast_slice(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_cover_every_element() {
        let positions = vec![glam::Vec3::new(1.0, 2.0, 3.0); 4];
        let bytes = gpu_bytes(&positions);

        assert_eq!(bytes.len(), 4 * 12);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(bytes.len(), std::mem::size_of_val(positions.as_slice()));
    }
}
