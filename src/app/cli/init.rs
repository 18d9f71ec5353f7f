//! Init command implementation.

use crate::app::logging::init_tracing;
use crate::domain::{AppError, ScaffoldRequest};

pub fn run_init(request: ScaffoldRequest) -> Result<(), AppError> {
    init_tracing(request.debug);

    let outcome = crate::app::api::init(&request)?;

    if !outcome.config_written {
        println!("⚠️  Kept existing configuration; configuration file was not written");
    }
    println!("✅ SFRootRepo initialized successfully at {}", outcome.path.display());
    if !outcome.site_root_is_default {
        println!("   Site Root: {}", outcome.site_root);
    }
    Ok(())
}
