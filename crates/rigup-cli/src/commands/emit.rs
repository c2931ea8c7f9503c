//! Emit command implementation.
//!
//! Composes the descriptor for the resolved mode and writes it as JSON to
//! stdout or a file. Stdout stays clean JSON; status lines go to stderr.

use std::fs;

use rigup_config::{BuildDescriptor, ProjectSettings, SystemEnvironment};
use tracing::debug;

use crate::cli::EmitArgs;
use crate::commands::utils::{resolve_mode, resolve_root};
use crate::error::Result;
use crate::ui;

pub fn execute(args: EmitArgs) -> Result<()> {
    let env = SystemEnvironment;
    let root = resolve_root(&args.root)?;
    let mode = resolve_mode(args.mode, &env)?;
    let settings = ProjectSettings::load(&root)?;
    debug!(%mode, root = %root.display(), "emitting descriptor");

    let descriptor = BuildDescriptor::compose_with_settings(mode, &env, &root, &settings);

    let json = if args.pretty {
        serde_json::to_string_pretty(&descriptor)?
    } else {
        serde_json::to_string(&descriptor)?
    };

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))?;
            ui::success(&format!(
                "Wrote {mode} descriptor to {}",
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
