use super::AppContext;
use crate::output::Output;
use crate::OptionKind;
use color_eyre::Result;
use streambox_core::trending_movies;

pub async fn run_movies(
    ctx: &AppContext,
    languages: Vec<String>,
    genres: Vec<String>,
    search: Option<String>,
    trending: bool,
    output: &Output,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.load_catalog(&mut store).await?;

    let criteria = store.catalog_mut().criteria_mut();
    criteria.selected_languages.extend(languages);
    criteria.selected_genres.extend(genres);
    if let Some(query) = search {
        criteria.set_search(query);
    }

    let mut movies = store.catalog().visible();
    if trending {
        movies = trending_movies(&movies);
    }

    output.movies(&movies, &store);

    Ok(())
}

pub async fn run_options(ctx: &AppContext, kind: OptionKind, output: &Output) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.load_catalog(&mut store).await?;

    let languages = (kind != OptionKind::Genres).then(|| store.catalog().languages());
    let genres = (kind != OptionKind::Languages).then(|| store.catalog().genres());
    output.options(languages.as_deref(), genres.as_deref());

    Ok(())
}
