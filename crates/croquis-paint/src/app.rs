use croquis_engine::core::{App, AppControl, FrameCtx};
use croquis_engine::coords::{Rgb, Viewport, ViewTransform};
use croquis_engine::render::{render_scene, ShapeBatch, ShapeRenderer};
use croquis_engine::scene::Scene;

use crate::controller::{Controller, DisplayMode};
use crate::shapes::{landmarks, palette};

/// Window clear color: dark neutral gray.
const BACKGROUND: Rgb = Rgb::new(26, 26, 26);

/// The drawing application.
///
/// Owns the scene, the cumulative view transform and the display-mode state;
/// each frame drains the input events through the controller, then redraws
/// everything from scratch.
pub struct PaintApp {
    scene: Scene,
    transform: ViewTransform,
    controller: Controller,
    viewport: Viewport,

    batch: ShapeBatch,
    renderer: ShapeRenderer,
}

impl PaintApp {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: ViewTransform::identity(),
            controller: Controller::new(),
            viewport: Viewport::default(),
            batch: ShapeBatch::default(),
            renderer: ShapeRenderer::new(),
        }
    }
}

impl App for PaintApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.viewport = ctx.viewport;

        // Events first, then draw. Everything is turn-based within the frame.
        for ev in &ctx.input_frame.events {
            let control = self.controller.handle_event(
                ev,
                &mut self.scene,
                &mut self.transform,
                self.viewport,
            );
            if control == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        self.batch.reset(self.transform);

        // Landmarks are always visible, underneath whichever view is active.
        landmarks::grid(&mut self.batch);
        landmarks::axes(&mut self.batch);

        match self.controller.mode() {
            DisplayMode::Drawing => render_scene(&self.scene, &mut self.batch),
            DisplayMode::PaletteView => palette::draw(&mut self.batch),
        }

        let batch = &self.batch;
        let renderer = &mut self.renderer;
        ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, batch);
        })
    }
}
