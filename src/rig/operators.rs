use crate::rig::classifier::{apply_selection, classify, find_bound_meshes};
use crate::rig::mutator;
use crate::rig::shared::enums::{ObjectKind, ObjectMode, ReportLevel};
use crate::rig::shared::errors::RigError;
use crate::rig::shared::mode_guard::ModeGuard;
use crate::rig::shared::structs::Classification;
use crate::rig::shared::traits::{Operator, OperatorResult, Reporter, SceneHost};
use crate::rig::shared::types::ObjectKey;

/// Selects bones with no weights that don't affect the mesh.
#[derive(Copy, Clone, Debug, Default)]
pub struct SelectUnusedBones;

/// Removes bones with no weights that don't affect the mesh.
#[derive(Copy, Clone, Debug, Default)]
pub struct RemoveUnusedBones;

/// Returns the active object if it is an armature.
pub fn active_armature<H: SceneHost + ?Sized>(host: &H) -> Result<ObjectKey, RigError> {
    let active = host.active_object().ok_or(RigError::NoActiveObject)?;
    match host.object_kind(active) {
        Some(ObjectKind::Armature) => Ok(active),
        Some(kind) => Err(RigError::InvalidTarget {
            name: host.object_name(active).unwrap_or_default().to_string(),
            kind,
        }),
        None => Err(RigError::MissingObject),
    }
}

/// Classifies the joints of `armature` against every mesh bound to it.
/// Warns through `reporter` when no mesh is bound.
pub fn classify_armature<H, R>(
    host: &H,
    armature: ObjectKey,
    reporter: &mut R,
) -> Result<Classification, RigError>
where
    H: SceneHost + ?Sized,
    R: Reporter,
{
    let skeleton = host.skeleton(armature).ok_or(RigError::MissingObject)?;
    let bound = find_bound_meshes(host, armature);
    if bound.is_empty() {
        reporter.report(ReportLevel::Warning, "No meshes found using this armature");
    }
    log::debug!(
        "Armature '{}' has {} joints and {} bound meshes.",
        host.object_name(armature).unwrap_or_default(),
        skeleton.len(),
        bound.len()
    );
    let meshes = bound.iter().filter_map(|key| host.mesh(*key));
    Ok(classify(skeleton, meshes))
}

fn select_unused<H: SceneHost, R: Reporter>(
    host: &mut H,
    reporter: &mut R,
) -> Result<usize, RigError> {
    let armature = active_armature(&*host)?;
    let mut host = ModeGuard::enter(host, ObjectMode::EditArmature)?;
    let classification = classify_armature(&*host, armature, reporter)?;
    let skeleton = host
        .skeleton_mut(armature)
        .ok_or(RigError::MissingObject)?;
    let count = apply_selection(skeleton, &classification.unused);
    reporter.report(
        ReportLevel::Info,
        &format!("Selected {} unused bones", count),
    );
    Ok(count)
}

fn remove_unused<H: SceneHost, R: Reporter>(
    host: &mut H,
    reporter: &mut R,
) -> Result<usize, RigError> {
    let armature = active_armature(&*host)?;
    let mut host = ModeGuard::enter(host, ObjectMode::EditArmature)?;
    let classification = classify_armature(&*host, armature, reporter)?;
    reporter.report(
        ReportLevel::Info,
        &format!("Selected {} unused bones", classification.unused_count()),
    );
    let removed = mutator::remove(&mut *host, armature, &classification)?;
    reporter.report(
        ReportLevel::Info,
        &format!("Removed {} unused bones", removed),
    );
    Ok(removed)
}

fn finish<R: Reporter>(result: Result<usize, RigError>, reporter: &mut R) -> OperatorResult {
    match result {
        Ok(count) => OperatorResult::Finished { count },
        Err(RigError::InvalidTarget { .. }) | Err(RigError::NoActiveObject) => {
            reporter.report(ReportLevel::Error, "Active object must be an armature");
            OperatorResult::Cancelled
        }
        Err(e) => {
            reporter.report(ReportLevel::Error, &e.to_string());
            OperatorResult::Cancelled
        }
    }
}

impl Operator for SelectUnusedBones {
    fn id(&self) -> &'static str {
        "armature.select_unused_bones"
    }

    fn label(&self) -> &'static str {
        "Select Unused Bones"
    }

    fn description(&self) -> &'static str {
        "Select bones with no weights that don't affect the mesh"
    }

    fn execute<H: SceneHost, R: Reporter>(&self, host: &mut H, reporter: &mut R) -> OperatorResult {
        log::debug!("Running {}.", self.id());
        finish(select_unused(host, reporter), reporter)
    }
}

impl Operator for RemoveUnusedBones {
    fn id(&self) -> &'static str {
        "armature.remove_unused_bones"
    }

    fn label(&self) -> &'static str {
        "Remove Unused Bones"
    }

    fn description(&self) -> &'static str {
        "Remove bones with no weights that don't affect the mesh"
    }

    fn execute<H: SceneHost, R: Reporter>(&self, host: &mut H, reporter: &mut R) -> OperatorResult {
        log::debug!("Running {}.", self.id());
        finish(remove_unused(host, reporter), reporter)
    }
}
