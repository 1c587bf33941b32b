pub mod avatar;
pub mod camera_config;
pub mod events;
pub mod host;
pub mod input;
pub mod input_commands;
pub mod instrumentation;
pub mod plugin;
pub mod scene_transition;
pub mod settings;
pub mod skeletal;

pub use plugin::{HostPlugin, Plugin, PluginDeps};
