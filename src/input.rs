use crate::input_commands::{AvatarCommand, InputEdgeSource};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Keyboard-backed edge source. Press edges are latched by `push` and stay
/// visible until `clear_frame`, which the host loop calls once per tick.
pub struct AvatarInput {
    bindings: InputBindings,
    next_pressed: bool,
    previous_pressed: bool,
    first_person_pressed: bool,
    resize_mode_pressed: bool,
    floor_adjust_pressed: bool,
}

impl AvatarInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(path: impl AsRef<Path>) -> Self {
        let bindings = InputBindings::load_or_default(path);
        Self::with_bindings(bindings)
    }

    fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            bindings,
            next_pressed: false,
            previous_pressed: false,
            first_person_pressed: false,
            resize_mode_pressed: false,
            floor_adjust_pressed: false,
        }
    }

    pub fn push(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, pressed, repeat } => {
                if pressed && !repeat {
                    self.apply_key_binding(&key);
                }
            }
            InputEvent::Other => {}
        }
    }

    pub fn clear_frame(&mut self) {
        self.next_pressed = false;
        self.previous_pressed = false;
        self.first_person_pressed = false;
        self.resize_mode_pressed = false;
        self.floor_adjust_pressed = false;
    }

    fn apply_key_binding(&mut self, key: &Key) {
        if let Some(binding_key) = InputKeyBinding::from_event_key(key) {
            let commands: Vec<_> = self.bindings.commands_for_key(&binding_key).collect();
            for command in commands {
                self.latch_command(command);
            }
        }
    }

    fn latch_command(&mut self, command: AvatarCommand) {
        match command {
            AvatarCommand::NextAvatar => self.next_pressed = true,
            AvatarCommand::PreviousAvatar => self.previous_pressed = true,
            AvatarCommand::ToggleFirstPerson => self.first_person_pressed = true,
            AvatarCommand::CycleResizeMode => self.resize_mode_pressed = true,
            AvatarCommand::ToggleFloorAdjust => self.floor_adjust_pressed = true,
        }
    }
}

impl Default for AvatarInput {
    fn default() -> Self {
        Self::with_bindings(InputBindings::default())
    }
}

impl InputEdgeSource for AvatarInput {
    fn was_pressed(&self, command: AvatarCommand) -> bool {
        match command {
            AvatarCommand::NextAvatar => self.next_pressed,
            AvatarCommand::PreviousAvatar => self.previous_pressed,
            AvatarCommand::ToggleFirstPerson => self.first_person_pressed,
            AvatarCommand::CycleResizeMode => self.resize_mode_pressed,
            AvatarCommand::ToggleFloorAdjust => self.floor_adjust_pressed,
        }
    }
}

#[derive(Debug, Clone)]
struct InputBindings {
    key_to_commands: HashMap<InputKeyBinding, Vec<AvatarCommand>>,
}

impl InputBindings {
    fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<InputConfigFile>(&contents) {
                Ok(config) => Self::from_config(config, &path.display().to_string()),
                Err(err) => {
                    log::warn!(
                        "[input] failed to parse {}: {err}. Falling back to default bindings.",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[input] failed to read {}: {err}. Falling back to default bindings.",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn from_config(config: InputConfigFile, origin: &str) -> Self {
        let overrides = config.into_overrides(origin);
        Self::with_overrides(overrides)
    }

    fn with_overrides(overrides: HashMap<AvatarCommand, Vec<InputKeyBinding>>) -> Self {
        let mut command_map = Self::default_command_map();
        for (command, keys) in overrides {
            if keys.is_empty() {
                continue;
            }
            command_map.insert(command, keys);
        }
        Self::from_command_map(command_map)
    }

    fn default_command_map() -> HashMap<AvatarCommand, Vec<InputKeyBinding>> {
        use AvatarCommand::*;
        let mut map = HashMap::new();
        map.insert(NextAvatar, vec![InputKeyBinding::named(NamedKeyCode::PageDown)]);
        map.insert(PreviousAvatar, vec![InputKeyBinding::named(NamedKeyCode::PageUp)]);
        map.insert(ToggleFirstPerson, vec![InputKeyBinding::named(NamedKeyCode::Home)]);
        map.insert(CycleResizeMode, vec![InputKeyBinding::named(NamedKeyCode::End)]);
        map.insert(ToggleFloorAdjust, vec![InputKeyBinding::named(NamedKeyCode::Insert)]);
        map
    }

    fn from_command_map(command_map: HashMap<AvatarCommand, Vec<InputKeyBinding>>) -> Self {
        let mut key_to_commands: HashMap<InputKeyBinding, Vec<AvatarCommand>> = HashMap::new();
        for (command, keys) in command_map {
            for key in keys {
                key_to_commands.entry(key).or_default().push(command);
            }
        }
        Self { key_to_commands }
    }

    fn commands_for_key(&self, key: &InputKeyBinding) -> impl Iterator<Item = AvatarCommand> + '_ {
        self.key_to_commands.get(key).into_iter().flatten().copied()
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_command_map(Self::default_command_map())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InputKeyBinding {
    Character(String),
    Named(NamedKeyCode),
}

impl InputKeyBinding {
    fn named(named: NamedKeyCode) -> Self {
        Self::Named(named)
    }

    fn from_event_key(key: &Key) -> Option<Self> {
        match key {
            Key::Character(ch) => {
                let s = ch.to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(Self::Character(s.to_lowercase()))
                }
            }
            Key::Named(named) => NamedKeyCode::from_named_key(named).map(Self::Named),
            _ => None,
        }
    }

    fn from_config_value(raw: &str) -> Result<Self, ()> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(());
        }
        if let Some(named) = NamedKeyCode::from_str(&normalized) {
            return Ok(Self::Named(named));
        }
        if normalized.chars().count() == 1 {
            return Ok(Self::Character(normalized));
        }
        Err(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NamedKeyCode {
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
}

impl NamedKeyCode {
    fn from_named_key(key: &NamedKey) -> Option<Self> {
        match key {
            NamedKey::PageUp => Some(Self::PageUp),
            NamedKey::PageDown => Some(Self::PageDown),
            NamedKey::Home => Some(Self::Home),
            NamedKey::End => Some(Self::End),
            NamedKey::Insert => Some(Self::Insert),
            _ => None,
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "page_up" => Some(Self::PageUp),
            "page_down" => Some(Self::PageDown),
            "home" => Some(Self::Home),
            "end" => Some(Self::End),
            "insert" => Some(Self::Insert),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InputConfigFile {
    #[serde(default)]
    bindings: HashMap<String, Vec<String>>,
}

impl InputConfigFile {
    fn into_overrides(self, origin: &str) -> HashMap<AvatarCommand, Vec<InputKeyBinding>> {
        let mut overrides = HashMap::new();
        for (command_name, keys) in self.bindings {
            let command_key = command_name.trim().to_lowercase();
            match AvatarCommand::from_config_name(&command_key) {
                Some(command) => {
                    let mut parsed = Vec::new();
                    for key in keys {
                        match InputKeyBinding::from_config_value(&key) {
                            Ok(binding) => parsed.push(binding),
                            Err(_) => log::warn!(
                                "[input] {origin}: unknown key '{key}' for command '{command_name}', ignoring."
                            ),
                        }
                    }
                    if parsed.is_empty() {
                        log::warn!(
                            "[input] {origin}: command '{command_name}' has no valid keys, keeping defaults."
                        );
                        continue;
                    }
                    overrides.insert(command, parsed);
                }
                None => log::warn!("[input] {origin}: unknown command '{command_name}', ignoring."),
            }
        }
        overrides
    }
}

pub enum InputEvent {
    Key { key: Key, pressed: bool, repeat: bool },
    Other,
}

impl InputEvent {
    pub fn from_window_event(ev: &WindowEvent) -> Self {
        match ev {
            WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
                key: event.logical_key.clone(),
                pressed: event.state == ElementState::Pressed,
                repeat: event.repeat,
            },
            _ => InputEvent::Other,
        }
    }
}
