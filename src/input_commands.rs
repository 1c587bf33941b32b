use crate::avatar::AvatarManager;
use crate::settings::SettingsHandle;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarCommand {
    NextAvatar,
    PreviousAvatar,
    ToggleFirstPerson,
    CycleResizeMode,
    ToggleFloorAdjust,
}

impl AvatarCommand {
    /// Dispatch priority order. When several edges land on the same tick
    /// only the first match fires.
    pub const IN_PRIORITY_ORDER: [AvatarCommand; 5] = [
        AvatarCommand::NextAvatar,
        AvatarCommand::PreviousAvatar,
        AvatarCommand::ToggleFirstPerson,
        AvatarCommand::CycleResizeMode,
        AvatarCommand::ToggleFloorAdjust,
    ];

    pub fn from_config_name(value: &str) -> Option<Self> {
        match value {
            "next_avatar" => Some(Self::NextAvatar),
            "previous_avatar" => Some(Self::PreviousAvatar),
            "toggle_first_person" => Some(Self::ToggleFirstPerson),
            "cycle_resize_mode" => Some(Self::CycleResizeMode),
            "toggle_floor_adjust" => Some(Self::ToggleFloorAdjust),
            _ => None,
        }
    }
}

/// Discrete key-press edges, true only on the tick the key went down.
pub trait InputEdgeSource {
    fn was_pressed(&self, command: AvatarCommand) -> bool;
}

pub struct InputCommandDispatcher {
    settings: SettingsHandle,
    avatars: Rc<RefCell<dyn AvatarManager>>,
}

impl InputCommandDispatcher {
    pub fn new(settings: SettingsHandle, avatars: Rc<RefCell<dyn AvatarManager>>) -> Self {
        Self { settings, avatars }
    }

    /// Runs once per frame tick. First matching edge wins; at most one
    /// binding fires per tick.
    pub fn dispatch(&self, edges: &dyn InputEdgeSource) {
        if edges.was_pressed(AvatarCommand::NextAvatar) {
            self.avatars.borrow_mut().switch_to_next();
        } else if edges.was_pressed(AvatarCommand::PreviousAvatar) {
            self.avatars.borrow_mut().switch_to_previous();
        } else if edges.was_pressed(AvatarCommand::ToggleFirstPerson) {
            let visible = {
                let mut settings = self.settings.borrow_mut();
                settings.is_avatar_visible_in_first_person =
                    !settings.is_avatar_visible_in_first_person;
                settings.is_avatar_visible_in_first_person
            };
            log::info!(
                "[input] {} first person visibility",
                if visible { "Enabled" } else { "Disabled" }
            );
            self.avatars.borrow_mut().notify_first_person_changed(visible);
        } else if edges.was_pressed(AvatarCommand::CycleResizeMode) {
            let mode = {
                let mut settings = self.settings.borrow_mut();
                settings.resize_mode = settings.resize_mode.next();
                settings.resize_mode
            };
            log::info!("[input] set resize mode to {}", mode.label());
            self.avatars.borrow_mut().resize_current_avatar();
        } else if edges.was_pressed(AvatarCommand::ToggleFloorAdjust) {
            let enabled = {
                let mut settings = self.settings.borrow_mut();
                settings.enable_floor_adjust = !settings.enable_floor_adjust;
                settings.enable_floor_adjust
            };
            log::info!("[input] {} floor adjust", if enabled { "Enabled" } else { "Disabled" });
            self.avatars.borrow_mut().resize_current_avatar();
        }
    }
}
