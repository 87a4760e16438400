use crate::error::Result;
use crate::system::command::CommandRunner;

/// Common surface for the three installation routes: the distro's native
/// manager, an AUR helper, and Flatpak.
pub trait PackageManager {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Install the target package. Non-zero exits surface as typed errors.
    fn install(&self, runner: &dyn CommandRunner) -> Result<()>;

    /// Remove the target package.
    fn remove(&self, runner: &dyn CommandRunner) -> Result<()>;
}
