use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell, RefMut};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    #[default]
    None,
    Height,
    ArmSpan,
}

impl ResizeMode {
    pub fn next(self) -> Self {
        match self {
            ResizeMode::None => ResizeMode::Height,
            ResizeMode::Height => ResizeMode::ArmSpan,
            ResizeMode::ArmSpan => ResizeMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResizeMode::None => "None",
            ResizeMode::Height => "Height",
            ResizeMode::ArmSpan => "Arm Span",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub calibrate_full_body_tracking_on_start: bool,
    #[serde(default)]
    pub is_avatar_visible_in_first_person: bool,
    #[serde(default)]
    pub resize_mode: ResizeMode,
    #[serde(default)]
    pub enable_floor_adjust: bool,
    #[serde(default = "Settings::default_near_clip_plane")]
    pub camera_near_clip_plane: f32,
    #[serde(default)]
    pub previous_avatar_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calibrate_full_body_tracking_on_start: false,
            is_avatar_visible_in_first_person: false,
            resize_mode: ResizeMode::default(),
            enable_floor_adjust: false,
            camera_near_clip_plane: Self::default_near_clip_plane(),
            previous_avatar_path: None,
        }
    }
}

impl Settings {
    fn default_near_clip_plane() -> f32 {
        0.1
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings file {}", path.display()))
    }
}

#[derive(Clone)]
pub struct SettingsHandle(Rc<RefCell<Settings>>);

impl SettingsHandle {
    fn new(inner: Rc<RefCell<Settings>>) -> Self {
        Self(inner)
    }

    pub fn borrow(&self) -> Ref<'_, Settings> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Settings> {
        self.0.borrow_mut()
    }
}

pub struct SettingsStore {
    path: PathBuf,
    settings: Rc<RefCell<Settings>>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), settings: Rc::new(RefCell::new(Settings::default())) }
    }

    pub fn handle(&self) -> SettingsHandle {
        SettingsHandle::new(self.settings.clone())
    }

    pub fn load(&self) {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(settings) => *self.settings.borrow_mut() = settings,
                Err(err) => {
                    log::error!(
                        "[settings] failed to parse {}: {err}. Keeping defaults.",
                        self.path.display()
                    );
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("[settings] no settings file at {}, using defaults", self.path.display());
            }
            Err(err) => {
                log::error!(
                    "[settings] failed to read {}: {err}. Keeping defaults.",
                    self.path.display()
                );
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.settings.borrow().save(&self.path)
    }
}
