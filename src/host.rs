use crate::instrumentation::InstrumentationMarker;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod scene_names {
    pub const HEALTH_WARNING: &str = "HealthWarning";
    pub const MENU_CORE: &str = "MenuCore";
}

pub mod layers {
    /// Render layer reserved for avatar parts that only third-person
    /// cameras may draw.
    pub const ONLY_IN_THIRD_PERSON: u32 = 3;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub name: String,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSceneMode {
    Single,
    Additive,
}

#[derive(Debug)]
pub struct Camera {
    pub name: String,
    pub culling_mask: u32,
    pub near_clip_plane: f32,
    pub is_main: bool,
    marker: Option<InstrumentationMarker>,
}

impl Camera {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            culling_mask: u32::MAX,
            near_clip_plane: 0.3,
            is_main: false,
            marker: None,
        }
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Attaches the render instrumentation marker if the camera does not
    /// already carry one. Returns whether a new marker was attached.
    pub(crate) fn attach_marker(&mut self) -> bool {
        if self.marker.is_some() {
            return false;
        }
        self.marker = Some(InstrumentationMarker::new());
        true
    }
}

#[derive(Clone)]
pub struct CameraHandle(Rc<RefCell<Camera>>);

impl CameraHandle {
    pub fn new(camera: Camera) -> Self {
        Self(Rc::new(RefCell::new(camera)))
    }

    pub fn borrow(&self) -> Ref<'_, Camera> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Camera> {
        self.0.borrow_mut()
    }
}

/// Snapshot view over the host's live cameras. The handler queries this on
/// every transition instead of caching camera identity across calls.
pub trait CameraRegistry {
    fn all_cameras(&self) -> Vec<CameraHandle>;
    fn main_camera(&self) -> Option<CameraHandle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

pub struct TransitionSignal {
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_id: u64,
}

impl Default for TransitionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSignal {
    pub fn new() -> Self {
        Self { listeners: Vec::new(), next_id: 0 }
    }

    pub fn subscribe(&mut self, listener: Box<dyn FnMut()>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn fire(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

pub type TransitionSignalHandle = Rc<RefCell<TransitionSignal>>;

/// Host-side scene services. The transition signal may not exist yet when
/// first probed; callers retry on later scene loads.
pub trait HostScenes {
    fn find_transition_signal(&self) -> Option<TransitionSignalHandle>;
    fn active_scene(&self) -> Scene;
}
