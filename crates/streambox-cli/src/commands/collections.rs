use super::AppContext;
use crate::output::Output;
use crate::CollectionCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use streambox_core::{AppStore, CollectionKind, Membership};
use streambox_models::{Movie, MovieId};

pub async fn run_collection(
    ctx: &AppContext,
    kind: CollectionKind,
    cmd: CollectionCommands,
    output: &Output,
) -> Result<()> {
    let mut store = ctx.open_store()?;

    match cmd {
        CollectionCommands::List => {
            output.collection(kind, &store);
            Ok(())
        }
        CollectionCommands::Add { id } => {
            let movie = resolve_movie(ctx, &mut store, &id).await?;
            let title = movie.title.clone();
            if store.collection_mut(kind).add(movie) {
                output.success(format!("Added '{}' to {}", title, kind));
            } else {
                output.info(format!("'{}' is already in {}", title, kind));
            }
            report_unsaved(&store, kind, output);
            Ok(())
        }
        CollectionCommands::Remove { id } => {
            let id = MovieId::from(id);
            if store.collection_mut(kind).remove(&id) {
                output.success(format!("Removed {} from {}", id, kind));
            } else {
                output.info(format!("{} is not in {}", id, kind));
            }
            report_unsaved(&store, kind, output);
            Ok(())
        }
        CollectionCommands::Toggle { id } => {
            let movie = resolve_movie(ctx, &mut store, &id).await?;
            let title = movie.title.clone();
            match store.collection_mut(kind).toggle(movie) {
                Membership::Added => output.success(format!("Added '{}' to {}", title, kind)),
                Membership::Removed => output.success(format!("Removed '{}' from {}", title, kind)),
            }
            report_unsaved(&store, kind, output);
            Ok(())
        }
        CollectionCommands::Clear => {
            let removed = store.collection_mut(kind).clear();
            output.success(format!("Cleared {} ({} removed)", kind, removed));
            report_unsaved(&store, kind, output);
            Ok(())
        }
    }
}

/// Look a movie up in the catalog; collections only accept catalog movies
async fn resolve_movie(ctx: &AppContext, store: &mut AppStore, id: &str) -> Result<Movie> {
    ctx.load_catalog(store).await?;
    let id = MovieId::from(id);
    store
        .catalog()
        .find(&id)
        .cloned()
        .ok_or_else(|| eyre!("No movie with id {} in the catalog", id))
}

fn report_unsaved(store: &AppStore, kind: CollectionKind, output: &Output) {
    if store.collection(kind).has_unsaved_changes() {
        output.warn(format!("Could not save {}; changes will be lost when StreamBox exits", kind));
    }
}
