use super::types::InputEvent;

/// Input events collected for the current frame, in arrival order.
///
/// The runtime fills this between redraws; the application drains it at the
/// start of each frame, then the runtime clears it.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn push(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
