use crate::settings::Settings;

/// External avatar lifecycle collaborator. Avatar loading and scaling are
/// its concern; the plugin only requests them.
pub trait AvatarManager {
    fn switch_to_next(&mut self);
    fn switch_to_previous(&mut self);
    fn resize_current_avatar(&mut self);
    fn notify_first_person_changed(&mut self, visible: bool);
    /// Fire-and-forget load of the previously used avatar. Failures are the
    /// manager's concern, not the caller's.
    fn load_from_settings(&mut self, settings: &Settings);
}

pub trait AvatarTailor {
    fn calibrate_full_body_tracking(&mut self);
}

pub trait MenuPresenter {
    fn register_button(&mut self, label: &str, on_activate: Box<dyn FnMut()>);
    fn present_avatar_list(&mut self);
}
