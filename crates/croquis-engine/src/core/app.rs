use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented on top of the runtime.
///
/// The runtime calls [`on_frame`](Self::on_frame) once per redraw, after all
/// pending window events have been translated into the frame's input list.
/// Returning [`AppControl::Exit`] ends the loop after the current tick.
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
