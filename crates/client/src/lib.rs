mod api;
mod auth;
mod error;
mod guard;
mod measurements;
mod profile;
mod session;

pub use api::*;
pub use auth::*;
pub use error::*;
pub use guard::*;
pub use measurements::*;
pub use profile::*;
pub use session::*;
