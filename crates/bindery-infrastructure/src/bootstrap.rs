//! Kernel bootstrap
//!
//! Composition root for hosts that want the configured defaults: install
//! logging, then build the kernel from the same configuration.
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let kernel = init_kernel(&config)?;
//! kernel.bind::<dyn ShapeFactory>().to_factory();
//! ```

use bindery_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::kernel::Kernel;
use crate::logging::init_logging;

/// Initialize logging and build a kernel from `config`
pub fn init_kernel(config: &AppConfig) -> Result<Kernel> {
    init_logging(&config.logging)?;
    Ok(build_kernel(config))
}

/// Build a kernel from `config` without touching the global subscriber
pub fn build_kernel(config: &AppConfig) -> Kernel {
    let kernel = Kernel::with_config(config);
    info!(
        max_request_depth = config.kernel.max_request_depth,
        fallback_to_unnamed = config.factory.fallback_to_unnamed,
        "Kernel ready"
    );
    kernel
}
