use super::AppContext;
use crate::output::Output;
use crate::ThemeCommands;
use color_eyre::eyre::Context;
use color_eyre::Result;

pub fn run_theme(ctx: &AppContext, cmd: ThemeCommands, output: &Output) -> Result<()> {
    let mut store = ctx.open_store()?;

    match cmd {
        ThemeCommands::Show => {
            output.theme(store.theme());
        }
        ThemeCommands::Set { mode } => {
            store.set_theme(mode).wrap_err("Failed to save theme")?;
            output.success(format!("Theme set to {}", mode));
        }
        ThemeCommands::Toggle => {
            let mode = store.toggle_theme().wrap_err("Failed to save theme")?;
            output.success(format!("Theme switched to {}", mode));
        }
    }

    Ok(())
}
