use crate::host::CameraHandle;

/// One-time per-camera tag used by downstream render-event hooks. At most
/// one exists per live camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentationMarker(());

impl InstrumentationMarker {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

/// Attaches a marker to every camera in the snapshot that does not already
/// carry one. Safe to call any number of times over the same set. Returns
/// the number of cameras that received a new marker.
pub fn inject_markers(cameras: &[CameraHandle]) -> usize {
    let mut attached = 0;
    for camera in cameras {
        let mut camera = camera.borrow_mut();
        if camera.attach_marker() {
            log::info!("[instrumentation] added render marker to camera '{}'", camera.name);
            attached += 1;
        }
    }
    attached
}
