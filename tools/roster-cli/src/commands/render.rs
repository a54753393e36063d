//! Render the directory page.

use anyhow::{Context as _, Result};

use super::{build_page, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let page = build_page(&args.source, ctx)?;

    let spinner = ctx.output.spinner("Rendering...");
    let result = page.render_document().await;
    spinner.finish_and_clear();
    let html = result.context("Failed to render page")?;

    let Some(out) = args.out else {
        print!("{}", html);
        return Ok(());
    };

    let path = ctx.resolve_path(&out);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, &html)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "bytes": html.len(),
        }));
    } else {
        ctx.output
            .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
    }

    Ok(())
}
