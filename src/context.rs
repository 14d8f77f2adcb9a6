use std::sync::Arc;

use winit::window::Window;

use crate::error::SandboxError;

/// Adapter, device and queue: everything a demo needs to create and feed
/// GPU resources.
///
/// Device and queue are internally reference counted, so cloning a `Gpu`
/// only clones the handles.
#[derive(Debug, Clone)]
pub struct Gpu {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub adapter_info: wgpu::AdapterInfo,
}

impl Gpu {
    pub async fn request(
        instance: &wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<(Self, wgpu::Adapter), SandboxError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| {
                log::error!("Adapter request failed: {e}");
                SandboxError::NoGpu
            })?;
        let adapter_info = adapter.get_info();
        log::info!("Using {} ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("sandbox_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await?;

        Ok((
            Self {
                device,
                queue,
                adapter_info,
            },
            adapter,
        ))
    }

    /// A device that is not tied to any window. Used for offscreen rendering.
    pub async fn headless() -> Result<Self, SandboxError> {
        let instance = wgpu::Instance::new(&instance_descriptor());
        let (gpu, _) = Self::request(&instance, None).await?;
        Ok(gpu)
    }
}

/// Window, surface and device of a running demo.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub gpu: Gpu,
    pub config: wgpu::SurfaceConfiguration,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> Result<Self, SandboxError> {
        #[cfg(target_arch = "wasm32")]
        {
            if !wgpu::util::is_browser_webgpu_supported().await {
                return Err(SandboxError::WebGpuNotSupported);
            }
        }
        log::info!("Start initializing WebGPU...");

        let size = window.inner_size();
        let instance = wgpu::Instance::new(&instance_descriptor());
        let surface = instance.create_surface(window.clone())?;
        let (gpu, adapter) = Gpu::request(&instance, Some(&surface)).await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&surface_caps.formats).ok_or(SandboxError::NoGpu)?;
        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            surface_caps.alpha_modes[0]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &config);
        log::debug!("Surface configured: {:?}", config);

        Ok(Self {
            window,
            surface,
            gpu,
            config,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.gpu.device, &self.config);
        true
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

fn instance_descriptor() -> wgpu::InstanceDescriptor {
    wgpu::InstanceDescriptor {
        #[cfg(not(target_arch = "wasm32"))]
        backends: wgpu::Backends::PRIMARY,
        #[cfg(target_arch = "wasm32")]
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    }
}

/// Picks the surface format a browser canvas would prefer: the first non-sRGB
/// format, so vertex colors land on screen unconverted.
pub fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}
