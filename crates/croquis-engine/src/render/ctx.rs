/// Renderer-facing GPU handles for one frame.
///
/// Geometry reaches the renderer already in NDC (the batch applies the view
/// transform on the CPU), so no viewport data is needed here.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
}

/// Where a frame's draw calls land: the frame encoder plus the swapchain
/// color view. The clear pass has already run when the application sees this.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
