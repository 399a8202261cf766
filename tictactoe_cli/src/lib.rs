mod error;
mod game;
mod input;
mod terminal;
pub use error::*;
pub use game::*;
pub use input::*;
pub use terminal::*;
