use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputEvent, InputFrame};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub initial_size: (f64, f64),
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "croquis".to_string(),
            initial_size: (800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the application exits or the window closes.
    ///
    /// Window or GPU creation failure aborts startup and is returned to the
    /// caller, which is expected to report it and exit with a failure status.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.startup_error.take() {
            return Err(err);
        }

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    input_frame: InputFrame,
    clock: FrameClock,

    /// Last tracked cursor position in logical pixels; button events need it
    /// because winit does not attach coordinates to them.
    pointer_pos: Option<(f32, f32)>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn create_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let (width, height) = self.config.initial_size;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            pointer_pos: None,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => {
                // Startup-fatal; carried out of run() for the caller to report.
                self.startup_error = Some(err);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the FIFO present mode paces the loop.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows so the app stays reachable inside `with_mut` closures.
        let (app, entry) = (&mut self.app, self.entry.as_mut());

        let Some(entry) = entry else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        // Feed the input subsystem first; unrecognized events fall through.
        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, *fields.pointer_pos, &event) {
                match ev {
                    InputEvent::PointerMoved { x, y }
                    | InputEvent::PointerButton { x, y, .. } => {
                        *fields.pointer_pos = Some((x, y));
                    }
                    InputEvent::PointerLeft => *fields.pointer_pos = None,
                    _ => {}
                }
                fields.input_frame.push(ev);
            }
        });

        match &event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let mut control = AppControl::Continue;

                entry.with_mut(|fields| {
                    let ft = fields.clock.tick();

                    let viewport = {
                        let phys = fields.window.inner_size();
                        let scale = fields.window.scale_factor();
                        let logical: LogicalSize<f64> = phys.to_logical(scale);
                        Viewport::new(logical.width as f32, logical.height as f32)
                    };

                    // Scope so `ctx` drops before the input frame is cleared.
                    {
                        let mut ctx = FrameCtx {
                            window: fields.window,
                            gpu: fields.gpu,
                            input_frame: fields.input_frame,
                            viewport,
                            time: ft,
                        };

                        control = app.on_frame(&mut ctx);
                    }

                    fields.input_frame.clear();
                });

                if control == AppControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
