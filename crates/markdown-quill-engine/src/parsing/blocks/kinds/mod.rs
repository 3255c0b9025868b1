pub mod block_quote;
pub mod paragraph;
pub mod reference;

pub use block_quote::BlockQuote;
pub use paragraph::Paragraph;
pub use reference::ReferenceDeclaration;
