use crate::rig::classifier::apply_selection;
use crate::rig::shared::enums::ObjectMode;
use crate::rig::shared::errors::RigError;
use crate::rig::shared::mode_guard::ModeGuard;
use crate::rig::shared::structs::Classification;
use crate::rig::shared::traits::SceneHost;
use crate::rig::shared::types::ObjectKey;

/// Deletes the unused joints of `classification` from `armature`.
///
/// Only `classification.unused` is ever selected, so essential joints are never
/// part of the deletion request. With nothing to delete the host is not asked
/// to delete anything and 0 is returned.
pub fn remove<H: SceneHost>(
    host: &mut H,
    armature: ObjectKey,
    classification: &Classification,
) -> Result<usize, RigError> {
    let mut host = ModeGuard::enter(host, ObjectMode::EditArmature)?;
    let skeleton = host
        .skeleton_mut(armature)
        .ok_or(RigError::MissingObject)?;
    let selected = apply_selection(skeleton, &classification.unused);
    if selected == 0 {
        log::debug!("No unused joints to delete.");
        return Ok(0);
    }
    debug_assert!(skeleton
        .selected_names()
        .iter()
        .all(|name| !classification.is_essential(name)));
    let removed = host.delete_selected_joints(armature)?;
    log::debug!("Requested deletion of {} joints, {} removed.", selected, removed);
    Ok(removed)
}
