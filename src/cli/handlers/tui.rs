use anyhow::Result;

use super::CommandContext;

pub fn handle_tui(ctx: CommandContext, seed: Option<u64>) -> Result<()> {
    crate::tui::run_tui(ctx.config, ctx.settings, seed)?;
    Ok(())
}
