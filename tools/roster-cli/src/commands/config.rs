//! Configuration inspection commands.

use anyhow::Result;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    println!("[page]");
    ctx.output.kv("title", &ctx.config.page.title);
    ctx.output.kv("data_path", &ctx.config.page.data_path);
    ctx.output.kv("container_id", &ctx.config.page.container_id);
    ctx.output.kv("fallback_message", &ctx.config.page.fallback_message);

    println!("[source]");
    ctx.output.kv(
        "root",
        ctx.config.source.root.as_deref().unwrap_or("(working directory)"),
    );
    ctx.output.kv(
        "base_url",
        ctx.config.source.base_url.as_deref().unwrap_or("(none)"),
    );

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx
        .config_file
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
    } else {
        println!("{}", path.as_deref().unwrap_or("(defaults, no config file found)"));
    }
    Ok(())
}
