pub use board::*;
pub use bot::*;
pub use errors::*;
pub use lines::*;
pub use moves::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod bot;
mod errors;
mod lines;
mod moves;
mod session;
mod visualization;
