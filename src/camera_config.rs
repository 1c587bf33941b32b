use crate::host::{layers, CameraHandle};
use crate::settings::Settings;

/// Applies the main-camera policy: the third-person-only layer is removed
/// from the culling mask (other bits untouched) and the near clip plane is
/// taken from the current settings.
pub fn apply(camera: &CameraHandle, settings: &Settings) {
    let mut camera = camera.borrow_mut();
    log::debug!("[camera] adding third person culling mask to '{}'", camera.name);
    camera.culling_mask &= !(1 << layers::ONLY_IN_THIRD_PERSON);
    camera.near_clip_plane = settings.camera_near_clip_plane;
}
