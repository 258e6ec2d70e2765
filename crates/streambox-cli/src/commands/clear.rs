use super::AppContext;
use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use streambox_core::{CollectionKind, THEME_KEY};

pub fn run_clear(
    ctx: &AppContext,
    all: bool,
    collections: bool,
    theme: bool,
    session: bool,
    output: &Output,
) -> Result<()> {
    let mut store = ctx.open_store()?;

    if all {
        let removed = store.clear_all().wrap_err("Failed to clear storage")?;
        output.success(format!("Cleared all stored data ({} entries)", removed));
        return Ok(());
    }

    let mut cleared_anything = false;

    if collections {
        for kind in [CollectionKind::Favourites, CollectionKind::WatchLater] {
            let removed = store.collection_mut(kind).clear();
            output.success(format!("Cleared {} ({} removed)", kind, removed));
        }
        cleared_anything = true;
    }

    if theme {
        store.storage().remove(THEME_KEY).wrap_err("Failed to clear theme")?;
        output.success("Cleared stored theme");
        cleared_anything = true;
    }

    if session {
        store.sign_out().wrap_err("Failed to clear session")?;
        output.success("Cleared stored session");
        cleared_anything = true;
    }

    if !cleared_anything {
        output.warn("No clear option specified. Use --collections, --theme, --session, or --all");
        output.println("\nExample: streambox clear --collections");
    }

    Ok(())
}
