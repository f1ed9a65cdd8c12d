use super::helpers;

/// Depth attachment sized to the swapchain.
///
/// Recreated whenever the surface is reconfigured so both stay the same size.
pub(crate) struct DepthTarget {
    #[allow(dead_code)]
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.tex, self.view) = helpers::create_depth_texture(device, width, height);
    }
}
