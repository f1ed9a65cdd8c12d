use crate::params::ParamEdit;
use smallvec::SmallVec;

/// Host notifications, recorded by the DOM listeners and applied by the frame step.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in CSS pixels relative to the viewport.
    PointerMove { x: f32, y: f32 },
    /// Vertical page scroll in CSS pixels.
    Scroll { y: f32 },
    /// New viewport size in CSS pixels.
    Resize { width: f32, height: f32 },
    /// Live edit from the debug panel.
    Param(ParamEdit),
}

/// Events arriving between two frames. A handful per frame is typical, so the
/// inline capacity avoids allocating on the common path.
pub type EventBatch = SmallVec<[InputEvent; 8]>;

/// FIFO of pending events shared between the listeners and the frame loop.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: EventBatch,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: InputEvent) {
        // Consecutive pointer/resize samples supersede each other within a frame.
        // Scrolls are kept: each one may cross a section boundary.
        if let Some(last) = self.pending.last_mut() {
            let supersedes = matches!(
                (&*last, &ev),
                (InputEvent::PointerMove { .. }, InputEvent::PointerMove { .. })
                    | (InputEvent::Resize { .. }, InputEvent::Resize { .. })
            );
            if supersedes {
                *last = ev;
                return;
            }
        }
        self.pending.push(ev);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&mut self) -> EventBatch {
        std::mem::take(&mut self.pending)
    }
}
