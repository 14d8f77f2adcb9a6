//! Application event loop.
//!
//! This module owns the `winit` event loop that drives a single demo. There is
//! no scheduling beyond what the host provides: every redraw request becomes
//! one frame, and animated demos request the next redraw as soon as a frame
//! is presented.
//!
//! # Lifecycle
//!
//! 1. `run()` sets up logging, validates the [`Config`] and starts the loop
//! 2. on resume the window (or canvas) is created, then the GPU [`Context`],
//!    the demo and its [`FrameTargets`]
//! 3. each `RedrawRequested` calls `on_update`, records the demo's render and
//!    presents the frame
//! 4. resizes reconfigure the surface and rebuild the frame targets
//!
//! Initialization failures are fatal. Natively they are returned from
//! `run()`, on the web they are shown with `alert()`.

use std::sync::Arc;

use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::Window,
};

use crate::{
    config::Config,
    context::Context,
    demos::{Demo, Target},
    render::{FrameTargets, submit_frame},
};

/// GPU context, demo and the attachments sized for the current surface.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    demo: Box<dyn Demo>,
    targets: FrameTargets,
    sample_count: u32,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, config: Config) -> anyhow::Result<Self> {
        let ctx = Context::new(window).await?;
        let sample_count = config.sample_count();
        let target = Target {
            format: ctx.config.format,
            width: ctx.config.width,
            height: ctx.config.height,
            sample_count,
        };
        let demo = config.demo.build(&ctx.gpu, &target, &config).await?;
        let targets = FrameTargets::new(&ctx.gpu.device, &target, &demo.attachments());
        Ok(Self {
            ctx,
            demo,
            targets,
            sample_count,
            is_surface_configured: true,
        })
    }

    fn target(&self) -> Target {
        Target {
            format: self.ctx.config.format,
            width: self.ctx.config.width,
            height: self.ctx.config.height,
            sample_count: self.sample_count,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if !self.ctx.resize(width, height) {
            // minimised, keep the old targets until we get a real size
            self.is_surface_configured = false;
            return;
        }
        self.is_surface_configured = true;
        let target = self.target();
        self.targets = FrameTargets::new(&self.ctx.gpu.device, &target, &self.demo.attachments());
        self.demo.on_resize(&self.ctx.gpu, &target);
        self.ctx.window.request_redraw();
    }

    fn render(&mut self, started: Instant) -> Result<(), wgpu::SurfaceError> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        self.demo.on_update(&self.ctx.gpu, started.elapsed());

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        submit_frame(
            &self.ctx.gpu.device,
            &self.ctx.gpu.queue,
            &self.targets,
            &self.demo.attachments(),
            self.demo.on_render(),
            &view,
        );
        output.present();

        if self.demo.is_animated() {
            self.ctx.window.request_redraw();
        }
        Ok(())
    }
}

pub(crate) enum FlowEvent {
    #[allow(dead_code)]
    Initialized(Box<AppState>),
    #[allow(dead_code)]
    Failed(anyhow::Error),
}

pub(crate) struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[allow(dead_code)]
    proxy: EventLoopProxy<FlowEvent>,
    config: Config,
    state: Option<AppState>,
    initializing: bool,
    started: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(event_loop: &EventLoop<FlowEvent>, config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime: tokio::runtime::Runtime::new()?,
            proxy: event_loop.create_proxy(),
            config,
            state: None,
            initializing: false,
            started: Instant::now(),
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        #[cfg(target_arch = "wasm32")]
        alert(&format!("{:#}", error));
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Arc<Window>> {
        let mut window_attributes = Window::default_attributes()
            .with_title(format!("WebGPU Sandbox: {}", self.config.demo.title()));

        // the page's CSS sizes the canvas on the web
        #[cfg(not(target_arch = "wasm32"))]
        {
            window_attributes = window_attributes.with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        }

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = wgpu::web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&self.config.canvas_id))
                .ok_or_else(|| crate::error::SandboxError::NoCanvas(self.config.canvas_id.clone()))?;
            window_attributes = window_attributes.with_canvas(Some(canvas.unchecked_into()));
        }

        Ok(Arc::new(event_loop.create_window(window_attributes)?))
    }

    fn install(&mut self, state: AppState) {
        self.started = Instant::now();
        state.ctx.window.request_redraw();
        self.state = Some(state);
    }
}

impl ApplicationHandler<FlowEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.initializing {
            return;
        }
        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };
        self.initializing = true;
        let init_future = AppState::new(window, self.config.clone());

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok(state) => self.install(state),
                Err(e) => self.fail(event_loop, e),
            }
            self.initializing = false;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let event = match init_future.await {
                    Ok(state) => FlowEvent::Initialized(Box::new(state)),
                    Err(e) => FlowEvent::Failed(e),
                };
                if proxy.send_event(event).is_err() {
                    log::error!("Event loop closed before the demo finished initializing");
                }
            });
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: FlowEvent) {
        self.initializing = false;
        match event {
            FlowEvent::Initialized(state) => {
                let mut state = *state;
                // The canvas may have been resized while we were waiting
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
                self.install(state);
            }
            FlowEvent::Failed(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => match state.render(self.started) {
                Ok(_) => {}
                // Reconfigure the surface if it's lost or outdated
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = state.ctx.window.inner_size();
                    state.resize(size.width, size.height);
                }
                Err(e) => {
                    log::error!("Unable to render {}", e);
                }
            },
            _ => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn alert(message: &str) {
    if let Some(window) = wgpu::web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        // a second demo on the same page finds the logger already installed
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// Runs the configured demo until its window is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    init_logging();
    config.validate()?;

    let event_loop: EventLoop<FlowEvent> = EventLoop::with_user_event().build()?;
    #[allow(unused_mut)]
    let mut app = App::new(&event_loop, config)?;

    #[cfg(not(target_arch = "wasm32"))]
    {
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::EventLoopExtWebSys;
        event_loop.spawn_app(app);
        Ok(())
    }
}
