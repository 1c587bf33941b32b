use crate::host::Scene;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum PluginEvent {
    SceneTransitioned { scene: Scene },
}

impl fmt::Display for PluginEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginEvent::SceneTransitioned { scene } => {
                write!(f, "SceneTransitioned scene={}", scene.name)
            }
        }
    }
}

#[derive(Default)]
pub struct EventBus {
    events: Vec<PluginEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: PluginEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<PluginEvent> {
        self.events.drain(..).collect()
    }
}

#[derive(Clone, Default)]
pub struct EventBusHandle(Rc<RefCell<EventBus>>);

impl EventBusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(&self) -> Ref<'_, EventBus> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, EventBus> {
        self.0.borrow_mut()
    }
}
