use crate::draw::model::Point;

/// Pointer lifecycle events in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Leave(Point),
}

impl PointerEvent {
    pub fn position(self) -> Point {
        match self {
            PointerEvent::Down(p)
            | PointerEvent::Move(p)
            | PointerEvent::Up(p)
            | PointerEvent::Leave(p) => p,
        }
    }
}

/// Input port a UI layer wires its pointer callbacks into.
///
/// Implementors expect a single ordered stream; hosts with several input
/// sources must merge them before calling in.
pub trait PointerInput {
    fn on_pointer_down(&mut self, viewport: Point);
    fn on_pointer_move(&mut self, viewport: Point);
    fn on_pointer_up(&mut self, viewport: Point);
    fn on_pointer_leave(&mut self, viewport: Point);

    fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.on_pointer_down(p),
            PointerEvent::Move(p) => self.on_pointer_move(p),
            PointerEvent::Up(p) => self.on_pointer_up(p),
            PointerEvent::Leave(p) => self.on_pointer_leave(p),
        }
    }

    fn dispatch_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = PointerEvent>,
        Self: Sized,
    {
        for event in events {
            self.dispatch(event);
        }
    }
}
