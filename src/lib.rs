pub mod buffer;
pub mod cli;
pub mod finding;
pub mod input;
pub mod printer;
pub mod session;

pub use buffer::CharBuffer;
pub use finding::Finding;
pub use session::{run, Report, Session, SessionError};
