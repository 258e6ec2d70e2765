use clap::ValueEnum;
use comfy_table::{modifiers, presets, Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use streambox_core::{AppStore, CollectionKind};
use streambox_models::{Movie, ThemeMode, UserSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

#[derive(Debug, Clone, Copy)]
enum Notice {
    Success,
    Info,
    Warning,
}

impl Notice {
    fn tag(self) -> &'static str {
        match self {
            Notice::Success => "success",
            Notice::Info => "info",
            Notice::Warning => "warning",
        }
    }
}

/// Renders StreamBox results for a terminal or as JSON documents
///
/// Every JSON document carries a `type` field naming what it describes.
/// Quiet mode suppresses everything.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Success, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Warning, msg.as_ref());
    }

    /// Pre-rendered text for the terminal; dropped in JSON modes
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.quiet || !self.is_human() {
            return;
        }
        println!("{}", msg.as_ref());
    }

    /// Structured document for JSON modes; dropped in human mode
    pub fn json(&self, data: &Value) {
        if self.quiet || self.is_human() {
            return;
        }
        self.emit(data);
    }

    /// A filtered catalog listing, with where the catalog came from
    pub fn movies(&self, movies: &[Movie], store: &AppStore) {
        let catalog = store.catalog();

        if !self.is_human() {
            self.json(&json!({
                "type": "movies",
                "count": movies.len(),
                "total": catalog.movies().len(),
                "source": catalog.source(),
                "loadedAt": catalog.loaded_at(),
                "criteria": catalog.criteria(),
                "movies": movies,
            }));
            return;
        }

        if movies.is_empty() {
            self.warn("No movies match the current filters");
            return;
        }

        self.println(movie_table(movies, store).to_string());
        let mut summary = format!("{} of {} movies", movies.len(), catalog.movies().len());
        if let (Some(source), Some(loaded_at)) = (catalog.source(), catalog.loaded_at()) {
            summary.push_str(&format!(
                " ({} catalog, loaded {})",
                source,
                loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        self.info(summary);
    }

    pub fn collection(&self, kind: CollectionKind, store: &AppStore) {
        let collection = store.collection(kind);

        if !self.is_human() {
            self.json(&json!({
                "type": "collection",
                "collection": kind.label(),
                "count": collection.len(),
                "movies": collection.items(),
            }));
            return;
        }

        if collection.is_empty() {
            self.info(format!("Your {} list is empty", kind));
        } else {
            self.println(movie_table(collection.items(), store).to_string());
            self.info(format!("{} movie(s) in {}", collection.len(), kind));
        }
    }

    /// Filter choices; `None` leaves that dimension out
    pub fn options(&self, languages: Option<&[String]>, genres: Option<&[String]>) {
        if !self.is_human() {
            let mut data = json!({ "type": "options" });
            if let Some(languages) = languages {
                data["languages"] = json!(languages);
            }
            if let Some(genres) = genres {
                data["genres"] = json!(genres);
            }
            self.json(&data);
            return;
        }

        if let Some(languages) = languages {
            self.println(format!("{} {}", "Languages:".bold(), languages.join(", ")));
        }
        if let Some(genres) = genres {
            self.println(format!("{} {}", "Genres:".bold(), genres.join(", ")));
        }
    }

    pub fn theme(&self, mode: ThemeMode) {
        if self.is_human() {
            self.info(format!("Theme: {}", mode));
        } else {
            self.json(&json!({ "type": "theme", "theme": mode }));
        }
    }

    pub fn session(&self, session: Option<&UserSession>) {
        match session {
            Some(session) if self.is_human() => self.info(format!(
                "Signed in as {} <{}> since {}",
                session.name,
                session.email,
                session.signed_in_at.format("%Y-%m-%d %H:%M UTC")
            )),
            Some(session) => self.json(&json!({ "type": "session", "session": session })),
            None => self.info("Not signed in"),
        }
    }

    fn notice(&self, notice: Notice, msg: &str) {
        if self.quiet {
            return;
        }

        if !self.is_human() {
            self.emit(&json!({ "type": notice.tag(), "message": msg }));
            return;
        }

        match notice {
            Notice::Success => println!("{} {}", "✓".green(), msg),
            Notice::Info => println!("{}", msg),
            Notice::Warning => println!("{} {}", "⚠".yellow(), msg),
        }
    }

    fn emit(&self, data: &Value) {
        let text = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data),
            _ => serde_json::to_string(data),
        };
        println!("{}", text.unwrap_or_default());
    }
}

/// Movies with their favourites / watch-later membership
fn movie_table(movies: &[Movie], store: &AppStore) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["ID", "Title", "Language", "Genres", "Rating", "Trending", "Fav", "Later"]
            .into_iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
    );

    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id.as_str()),
            Cell::new(&movie.title).fg(Color::Cyan),
            Cell::new(&movie.language),
            Cell::new(movie.genres.join(", ")),
            Cell::new(movie.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".to_string())),
            Cell::new(check(movie.is_trending)),
            Cell::new(check(store.favourites().contains(&movie.id))),
            Cell::new(check(store.watch_later().contains(&movie.id))),
        ]);
    }

    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn check(flag: bool) -> String {
    if flag { "✓".green().to_string() } else { String::new() }
}
