use super::AppContext;
use crate::output::Output;
use crate::SessionCommands;
use color_eyre::eyre::Context;
use color_eyre::Result;
use streambox_models::UserSession;

pub fn run_session(ctx: &AppContext, cmd: SessionCommands, output: &Output) -> Result<()> {
    let mut store = ctx.open_store()?;

    match cmd {
        SessionCommands::Show => output.session(store.session()),
        SessionCommands::Login { name, email } => {
            let session = UserSession::new(name, email);
            let greeting = format!("Signed in as {}", session.name);
            store.sign_in(session).wrap_err("Failed to save session")?;
            output.success(greeting);
        }
        SessionCommands::Logout => {
            store.sign_out().wrap_err("Failed to clear session")?;
            output.success("Signed out");
        }
    }

    Ok(())
}
