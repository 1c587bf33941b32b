pub const LEFT_HAND_ANIM_ACTION: &str = "/actions/customavatars/in/lefthandanim";
pub const RIGHT_HAND_ANIM_ACTION: &str = "/actions/customavatars/in/righthandanim";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletalActionHandle(pub u64);

/// Probe over the skeletal input runtime. When the runtime is not active at
/// plugin construction the capability is silently unavailable for the
/// session.
pub trait SkeletalInputRuntime {
    fn is_active(&self) -> bool;
    fn register_action(&mut self, path: &str) -> SkeletalActionHandle;
}

#[derive(Debug, Clone, Copy)]
pub struct SkeletalHandAnimations {
    pub left: SkeletalActionHandle,
    pub right: SkeletalActionHandle,
}

pub fn register_hand_animations(
    runtime: &mut dyn SkeletalInputRuntime,
) -> Option<SkeletalHandAnimations> {
    if !runtime.is_active() {
        return None;
    }
    Some(SkeletalHandAnimations {
        left: runtime.register_action(LEFT_HAND_ANIM_ACTION),
        right: runtime.register_action(RIGHT_HAND_ANIM_ACTION),
    })
}
