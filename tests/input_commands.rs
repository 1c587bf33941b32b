use custom_avatar::avatar::AvatarManager;
use custom_avatar::input_commands::{AvatarCommand, InputCommandDispatcher, InputEdgeSource};
use custom_avatar::settings::{ResizeMode, Settings, SettingsHandle, SettingsStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Default)]
struct FakeEdges {
    pressed: HashSet<AvatarCommand>,
}

impl FakeEdges {
    fn with(commands: &[AvatarCommand]) -> Self {
        Self { pressed: commands.iter().copied().collect() }
    }
}

impl InputEdgeSource for FakeEdges {
    fn was_pressed(&self, command: AvatarCommand) -> bool {
        self.pressed.contains(&command)
    }
}

#[derive(Default)]
struct RecordingAvatars {
    next_switches: usize,
    previous_switches: usize,
    resizes: usize,
    first_person_notifications: Vec<bool>,
}

impl AvatarManager for RecordingAvatars {
    fn switch_to_next(&mut self) {
        self.next_switches += 1;
    }

    fn switch_to_previous(&mut self) {
        self.previous_switches += 1;
    }

    fn resize_current_avatar(&mut self) {
        self.resizes += 1;
    }

    fn notify_first_person_changed(&mut self, visible: bool) {
        self.first_person_notifications.push(visible);
    }

    fn load_from_settings(&mut self, _settings: &Settings) {}
}

fn dispatcher() -> (InputCommandDispatcher, SettingsHandle, Rc<RefCell<RecordingAvatars>>) {
    let settings = SettingsStore::new("unused-settings.json").handle();
    let avatars = Rc::new(RefCell::new(RecordingAvatars::default()));
    let dispatcher = InputCommandDispatcher::new(settings.clone(), avatars.clone());
    (dispatcher, settings, avatars)
}

#[test]
fn resize_mode_cycles_back_after_three_presses() {
    let (dispatcher, settings, avatars) = dispatcher();
    assert_eq!(settings.borrow().resize_mode, ResizeMode::None);

    let edges = FakeEdges::with(&[AvatarCommand::CycleResizeMode]);
    dispatcher.dispatch(&edges);
    assert_eq!(settings.borrow().resize_mode, ResizeMode::Height);
    dispatcher.dispatch(&edges);
    assert_eq!(settings.borrow().resize_mode, ResizeMode::ArmSpan);
    dispatcher.dispatch(&edges);
    assert_eq!(settings.borrow().resize_mode, ResizeMode::None, "third press wraps around");

    assert_eq!(avatars.borrow().resizes, 3, "every cycle requests a resize");
}

#[test]
fn first_person_double_toggle_round_trips() {
    let (dispatcher, settings, avatars) = dispatcher();
    let original = settings.borrow().is_avatar_visible_in_first_person;

    let edges = FakeEdges::with(&[AvatarCommand::ToggleFirstPerson]);
    dispatcher.dispatch(&edges);
    assert_ne!(settings.borrow().is_avatar_visible_in_first_person, original);
    dispatcher.dispatch(&edges);
    assert_eq!(settings.borrow().is_avatar_visible_in_first_person, original);

    assert_eq!(
        avatars.borrow().first_person_notifications,
        vec![!original, original],
        "spawned avatar is notified with each new value"
    );
}

#[test]
fn floor_adjust_toggle_requests_resize() {
    let (dispatcher, settings, avatars) = dispatcher();

    let edges = FakeEdges::with(&[AvatarCommand::ToggleFloorAdjust]);
    dispatcher.dispatch(&edges);
    assert!(settings.borrow().enable_floor_adjust);
    assert_eq!(avatars.borrow().resizes, 1);

    dispatcher.dispatch(&edges);
    assert!(!settings.borrow().enable_floor_adjust);
    assert_eq!(avatars.borrow().resizes, 2);
}

#[test]
fn avatar_switching_reaches_the_manager() {
    let (dispatcher, _settings, avatars) = dispatcher();

    dispatcher.dispatch(&FakeEdges::with(&[AvatarCommand::NextAvatar]));
    dispatcher.dispatch(&FakeEdges::with(&[AvatarCommand::PreviousAvatar]));
    dispatcher.dispatch(&FakeEdges::with(&[AvatarCommand::PreviousAvatar]));

    assert_eq!(avatars.borrow().next_switches, 1);
    assert_eq!(avatars.borrow().previous_switches, 2);
}

#[test]
fn simultaneous_edges_fire_only_the_highest_priority_command() {
    let (dispatcher, settings, avatars) = dispatcher();

    let edges = FakeEdges::with(&AvatarCommand::IN_PRIORITY_ORDER);
    dispatcher.dispatch(&edges);

    assert_eq!(avatars.borrow().next_switches, 1, "first match wins");
    assert_eq!(avatars.borrow().previous_switches, 0);
    assert_eq!(avatars.borrow().resizes, 0);
    assert!(avatars.borrow().first_person_notifications.is_empty());
    assert_eq!(settings.borrow().resize_mode, ResizeMode::None);
    assert!(!settings.borrow().enable_floor_adjust);
}

#[test]
fn no_edges_no_side_effects() {
    let (dispatcher, settings, avatars) = dispatcher();

    dispatcher.dispatch(&FakeEdges::default());

    assert_eq!(avatars.borrow().next_switches, 0);
    assert_eq!(avatars.borrow().resizes, 0);
    assert_eq!(settings.borrow().resize_mode, ResizeMode::None);
}
