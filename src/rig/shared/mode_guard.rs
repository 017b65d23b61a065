use std::ops::{Deref, DerefMut};

use crate::rig::shared::enums::ObjectMode;
use crate::rig::shared::errors::RigError;
use crate::rig::shared::traits::SceneHost;

/// Holds the host in a required mode and switches back to the previous mode
/// when dropped. Restoration is best effort: a failure is only logged.
pub struct ModeGuard<'a, H: SceneHost> {
    host: &'a mut H,
    previous: ObjectMode,
}

impl<'a, H: SceneHost> ModeGuard<'a, H> {
    pub fn enter(host: &'a mut H, mode: ObjectMode) -> Result<Self, RigError> {
        let previous = host.mode();
        if previous != mode {
            host.set_mode(mode)?;
            log::debug!(
                "Switched from {} to {} mode.",
                previous.to_string(),
                mode.to_string()
            );
        }
        Ok(ModeGuard { host, previous })
    }
}

impl<'a, H: SceneHost> Deref for ModeGuard<'a, H> {
    type Target = H;

    fn deref(&self) -> &Self::Target {
        self.host
    }
}

impl<'a, H: SceneHost> DerefMut for ModeGuard<'a, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.host
    }
}

impl<'a, H: SceneHost> Drop for ModeGuard<'a, H> {
    fn drop(&mut self) {
        if self.host.mode() == self.previous {
            return;
        }
        if let Err(e) = self.host.set_mode(self.previous) {
            log::debug!(
                "Failed to restore {} mode: {}",
                self.previous.to_string(),
                e
            );
        }
    }
}
