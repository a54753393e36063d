//! Write a starter config and sample roster.

use std::path::Path;

use anyhow::{Context as _, Result};
use dialoguer::Confirm;

use super::InitArgs;
use crate::config::{generate_default_config, SAMPLE_ROSTER};
use crate::context::Context;

/// Run the init command.
pub async fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Initializing student directory");

    let config_path = ctx.cwd.join("roster.toml");
    let data_path = ctx.cwd.join("data").join("students.json");

    let mut written = Vec::new();
    for (path, content) in [
        (config_path.as_path(), generate_default_config()),
        (data_path.as_path(), SAMPLE_ROSTER.to_string()),
    ] {
        if write_file(path, &content, args.force)? {
            ctx.output.success(&format!("Created {}", path.display()));
            written.push(path.display().to_string());
        } else {
            ctx.output.warn(&format!("Kept existing {}", path.display()));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "written": written }));
        return Ok(());
    }

    ctx.output.info("Next steps:");
    ctx.output.list_item("roster check");
    ctx.output.list_item("roster render --out index.html");
    Ok(())
}

/// Write `content` to `path`, asking before overwriting unless `force`.
fn write_file(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
