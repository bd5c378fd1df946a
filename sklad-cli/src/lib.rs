pub mod input;
pub mod session;

pub use input::TokenReader;
pub use session::{Session, MENU};
