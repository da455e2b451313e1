use super::{Event, EventKind};
use crate::errors::Result;
use crate::models::WindowHandle;
use crate::utils::modmask_lookup::{Button, ModMask};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;

pub type EventHandler = Rc<dyn Fn(&Event) -> Result<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(usize);

/// Synchronous publish and subscribe.
///
/// Handlers run in registration order on the caller's stack. An event emitted
/// while another one is being dispatched is queued instead and delivered by
/// [`EventSystem::process_queue`]. All state sits behind `Cell`/`RefCell` so
/// handlers holding an `Rc<EventSystem>` can emit and register while running.
#[derive(Default)]
pub struct EventSystem {
    handlers: RefCell<HashMap<EventKind, Vec<EventHandler>>>,
    queue: RefCell<VecDeque<Event>>,
    dispatching: Cell<bool>,
    draining: Cell<bool>,
    next_id: Cell<usize>,
}

impl fmt::Debug for EventSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let handlers: usize = self.handlers.borrow().values().map(Vec::len).sum();
        f.debug_struct("EventSystem")
            .field("handlers", &handlers)
            .field("queued", &self.queued())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}

impl EventSystem {
    pub fn register_handler<F>(&self, kind: EventKind, handler: F) -> HandlerId
    where
        F: Fn(&Event) -> Result<()> + 'static,
    {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(handler));
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        tracing::trace!("Registered handler {} for {:?}", id, kind);
        HandlerId(id)
    }

    /// Handlers cannot be compared, so they stay registered.
    pub fn unregister_handler(&self, kind: EventKind, id: HandlerId) {
        tracing::debug!("Ignoring unregister of handler {:?} for {:?}", id, kind);
    }

    pub fn clear_handlers(&self) {
        self.handlers.borrow_mut().clear();
    }

    /// Number of events waiting for [`EventSystem::process_queue`].
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn emit(&self, event: Event) {
        if self.dispatching.get() {
            self.queue.borrow_mut().push_back(event);
            return;
        }
        // Cloned so handlers may register new handlers while we iterate.
        let handlers = self
            .handlers
            .borrow()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();
        if handlers.is_empty() {
            return;
        }
        self.dispatching.set(true);
        for handler in &handlers {
            if let Err(err) = handler(&event) {
                tracing::error!("Error in event handler for {:?}: {}", event.kind(), err);
            }
        }
        self.dispatching.set(false);
    }

    /// Delivers queued events in FIFO order, including events queued by the
    /// handlers that run meanwhile. Does nothing when called from a handler.
    pub fn process_queue(&self) {
        if self.draining.get() || self.dispatching.get() {
            return;
        }
        self.draining.set(true);
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(event) => self.emit(event),
                None => break,
            }
        }
        self.draining.set(false);
    }

    /// Emits one of the window lifecycle events. Kinds that carry more than
    /// a handle are rejected.
    pub fn emit_window_event(&self, kind: EventKind, handle: WindowHandle) -> bool {
        let event = match kind {
            EventKind::WindowCreated => Event::WindowCreated(handle),
            EventKind::WindowDestroyed => Event::WindowDestroyed(handle),
            EventKind::WindowFocused => Event::WindowFocused(handle),
            EventKind::WindowUnfocused => Event::WindowUnfocused(handle),
            EventKind::WindowMinimized => Event::WindowMinimized(handle),
            EventKind::WindowMaximized => Event::WindowMaximized(handle),
            EventKind::WindowRestored => Event::WindowRestored(handle),
            _ => {
                tracing::warn!("{:?} is not a window event", kind);
                return false;
            }
        };
        self.emit(event);
        true
    }

    pub fn emit_key_event(&self, pressed: bool, keycode: u32, modifiers: ModMask) {
        self.emit(if pressed {
            Event::KeyPressed { keycode, modifiers }
        } else {
            Event::KeyReleased { keycode, modifiers }
        });
    }

    pub fn emit_mouse_event(
        &self,
        kind: EventKind,
        x: i32,
        y: i32,
        button: Button,
        modifiers: ModMask,
    ) -> bool {
        let event = match kind {
            EventKind::MouseMoved => Event::MouseMoved { x, y },
            EventKind::MousePressed => Event::MousePressed {
                x,
                y,
                button,
                modifiers,
            },
            EventKind::MouseReleased => Event::MouseReleased {
                x,
                y,
                button,
                modifiers,
            },
            _ => {
                tracing::warn!("{:?} is not a mouse event", kind);
                return false;
            }
        };
        self.emit(event);
        true
    }
}
