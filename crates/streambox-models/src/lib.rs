pub mod movie;
pub mod session;
pub mod theme;

pub use movie::{Movie, MovieId, RawMovie};
pub use session::UserSession;
pub use theme::ThemeMode;
