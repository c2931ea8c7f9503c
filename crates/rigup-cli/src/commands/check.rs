//! Check command implementation.
//!
//! Validates the composed descriptor without emitting it: schema checks
//! always, project-layout checks with `--fs`.

use rigup_config::{validate_fs, validate_schema, BuildDescriptor, ProjectSettings, SystemEnvironment};

use crate::cli::CheckArgs;
use crate::commands::utils::{resolve_mode, resolve_root};
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking build descriptor...");

    let env = SystemEnvironment;
    let root = resolve_root(&args.root)?;
    let mode = resolve_mode(args.mode, &env)?;
    let settings = ProjectSettings::load(&root)?;

    let descriptor = BuildDescriptor::compose_with_settings(mode, &env, &root, &settings);

    validate_schema(&descriptor)?;
    ui::success("Descriptor is internally consistent");

    if args.fs {
        ui::info("Checking project layout...");
        validate_fs(&descriptor, &root)?;
        ui::success("Project layout matches the descriptor");
    }

    ui::success(&format!("{mode} descriptor is valid"));
    Ok(())
}
