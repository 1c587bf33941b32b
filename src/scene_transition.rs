use crate::avatar::{AvatarTailor, MenuPresenter};
use crate::camera_config;
use crate::events::{EventBusHandle, PluginEvent};
use crate::host::{scene_names, CameraRegistry, HostScenes, ListenerId, Scene, TransitionSignalHandle};
use crate::instrumentation;
use crate::settings::SettingsHandle;
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

enum TransitionBinding {
    Unbound,
    Bound { signal: TransitionSignalHandle, listener: ListenerId },
}

/// Binds to the host's transition-finished signal once it can be found and
/// reacts to scene loads. Camera instrumentation and configuration run on
/// every signal firing; the one-shot scene actions run on the load
/// notification itself.
pub struct SceneTransitionHandler {
    binding: TransitionBinding,
    host: Rc<dyn HostScenes>,
    cameras: Rc<dyn CameraRegistry>,
    settings: SettingsHandle,
    events: EventBusHandle,
    tailor: Rc<RefCell<dyn AvatarTailor>>,
    menu: Rc<RefCell<dyn MenuPresenter>>,
    menu_button_registered: bool,
}

impl SceneTransitionHandler {
    pub fn new(
        host: Rc<dyn HostScenes>,
        cameras: Rc<dyn CameraRegistry>,
        settings: SettingsHandle,
        events: EventBusHandle,
        tailor: Rc<RefCell<dyn AvatarTailor>>,
        menu: Rc<RefCell<dyn MenuPresenter>>,
    ) -> Self {
        Self {
            binding: TransitionBinding::Unbound,
            host,
            cameras,
            settings,
            events,
            tailor,
            menu,
            menu_button_registered: false,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, TransitionBinding::Bound { .. })
    }

    pub fn on_scene_loaded(&mut self, scene: &Scene) {
        self.try_bind();

        if scene.name == scene_names::HEALTH_WARNING
            && self.settings.borrow().calibrate_full_body_tracking_on_start
        {
            self.tailor.borrow_mut().calibrate_full_body_tracking();
        }

        if scene.name == scene_names::MENU_CORE && !self.menu_button_registered {
            let menu = self.menu.clone();
            self.menu.borrow_mut().register_button(
                "Avatars",
                Box::new(move || menu.borrow_mut().present_avatar_list()),
            );
            self.menu_button_registered = true;
        }
    }

    pub fn shutdown(&mut self) {
        if let TransitionBinding::Bound { signal, listener } =
            mem::replace(&mut self.binding, TransitionBinding::Unbound)
        {
            signal.borrow_mut().unsubscribe(listener);
        }
    }

    /// Safe to call on every scene load; the signal is subscribed at most
    /// once for the whole session.
    fn try_bind(&mut self) {
        if self.is_bound() {
            return;
        }
        let Some(signal) = self.host.find_transition_signal() else {
            log::debug!("[transitions] scenes manager not available yet");
            return;
        };
        let listener = signal
            .borrow_mut()
            .subscribe(transition_callback(
                self.host.clone(),
                self.cameras.clone(),
                self.settings.clone(),
                self.events.clone(),
            ));
        log::info!("[transitions] bound to scene transition signal");
        self.binding = TransitionBinding::Bound { signal, listener };
    }
}

fn transition_callback(
    host: Rc<dyn HostScenes>,
    cameras: Rc<dyn CameraRegistry>,
    settings: SettingsHandle,
    events: EventBusHandle,
) -> Box<dyn FnMut()> {
    Box::new(move || {
        let snapshot = cameras.all_cameras();
        instrumentation::inject_markers(&snapshot);

        match cameras.main_camera() {
            Some(main) => camera_config::apply(&main, &settings.borrow()),
            None => log::error!("[transitions] could not find main camera"),
        }

        events
            .borrow_mut()
            .push(PluginEvent::SceneTransitioned { scene: host.active_scene() });
    })
}
