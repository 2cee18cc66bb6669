pub mod chars;
pub mod tokens;

pub use chars::CharCursor;
pub use tokens::TokenCursor;
