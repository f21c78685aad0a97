pub use adjacency::*;
pub use board::*;
pub use deck::*;
pub use effects::*;
pub use errors::*;
pub use protocol::*;
pub use selection::*;
pub use session::*;
pub use targets::*;
pub use tiles::*;
pub use validate::*;
pub use visualization::*;

mod adjacency;
#[cfg(test)]
mod arbitrary;
mod board;
mod deck;
mod effects;
mod errors;
mod protocol;
mod selection;
mod session;
mod targets;
mod tiles;
mod validate;
mod visualization;
