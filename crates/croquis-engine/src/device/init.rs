/// Initialization parameters for the GPU layer.
///
/// Deliberately minimal; the drawing tool needs no device features or limit
/// overrides beyond the defaults.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// The scene works in sRGB-encoded colors, so an sRGB surface gives
    /// correct output without a manual encode in the shader.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO doubles as the frame pacer:
    /// presentation blocks on vsync, which is all the pacing this
    /// application needs.
    pub present_mode: wgpu::PresentMode,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}
