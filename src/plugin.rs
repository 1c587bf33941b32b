use crate::avatar::{AvatarManager, AvatarTailor, MenuPresenter};
use crate::events::EventBusHandle;
use crate::host::{CameraRegistry, HostScenes, LoadSceneMode, Scene};
use crate::input_commands::{InputCommandDispatcher, InputEdgeSource};
use crate::scene_transition::SceneTransitionHandler;
use crate::settings::{SettingsHandle, SettingsStore};
use crate::skeletal::{self, SkeletalHandAnimations, SkeletalInputRuntime};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Callback surface the host drives. The no-op hooks exist for interface
/// completeness only.
pub trait HostPlugin {
    fn on_start(&mut self);
    fn on_update(&mut self);
    fn on_scene_loaded(&mut self, scene: &Scene, mode: LoadSceneMode);
    fn on_application_quit(&mut self);
    fn on_fixed_update(&mut self) {}
    fn on_scene_unloaded(&mut self, _scene: &Scene) {}
    fn on_active_scene_changed(&mut self, _prev: &Scene, _next: &Scene) {}
}

pub struct PluginDeps {
    pub host: Rc<dyn HostScenes>,
    pub cameras: Rc<dyn CameraRegistry>,
    pub avatars: Rc<RefCell<dyn AvatarManager>>,
    pub tailor: Rc<RefCell<dyn AvatarTailor>>,
    pub menu: Rc<RefCell<dyn MenuPresenter>>,
    pub edges: Rc<RefCell<dyn InputEdgeSource>>,
    pub skeletal: Rc<RefCell<dyn SkeletalInputRuntime>>,
    pub events: EventBusHandle,
    pub settings_path: PathBuf,
}

pub struct Plugin {
    settings_store: SettingsStore,
    transitions: SceneTransitionHandler,
    dispatcher: InputCommandDispatcher,
    avatars: Rc<RefCell<dyn AvatarManager>>,
    edges: Rc<RefCell<dyn InputEdgeSource>>,
    hand_animations: Option<SkeletalHandAnimations>,
}

impl Plugin {
    pub fn new(deps: PluginDeps) -> Self {
        let settings_store = SettingsStore::new(deps.settings_path);
        let settings = settings_store.handle();

        let hand_animations =
            skeletal::register_hand_animations(&mut *deps.skeletal.borrow_mut());
        if hand_animations.is_none() {
            log::debug!("[plugin] skeletal input runtime inactive, hand animations unavailable");
        }

        let transitions = SceneTransitionHandler::new(
            deps.host,
            deps.cameras,
            settings.clone(),
            deps.events,
            deps.tailor,
            deps.menu,
        );
        let dispatcher = InputCommandDispatcher::new(settings, deps.avatars.clone());

        Self {
            settings_store,
            transitions,
            dispatcher,
            avatars: deps.avatars,
            edges: deps.edges,
            hand_animations,
        }
    }

    pub fn settings(&self) -> SettingsHandle {
        self.settings_store.handle()
    }

    pub fn hand_animations(&self) -> Option<SkeletalHandAnimations> {
        self.hand_animations
    }
}

impl HostPlugin for Plugin {
    fn on_start(&mut self) {
        self.settings_store.load();
        let settings = self.settings_store.handle();
        self.avatars.borrow_mut().load_from_settings(&settings.borrow());
    }

    fn on_update(&mut self) {
        self.dispatcher.dispatch(&*self.edges.borrow());
    }

    fn on_scene_loaded(&mut self, scene: &Scene, _mode: LoadSceneMode) {
        self.transitions.on_scene_loaded(scene);
    }

    fn on_application_quit(&mut self) {
        self.transitions.shutdown();
        if let Err(err) = self.settings_store.save() {
            log::error!("[plugin] failed to save settings: {err:?}");
        }
    }
}
