//! Leaf parsers that match directly against the buffer.
//!
//! Primitives never touch the scratch-frame stack and never move the cursor
//! when they fail. Their configuration is validated once, when they are
//! constructed.

mod comment;
mod eof;
mod ident;
mod literal;
mod natural;
mod regexp;
mod space;

pub use comment::{BlockComment, LineComment};
pub use eof::Eof;
pub use ident::Ident;
pub use literal::Literal;
pub use natural::Natural;
pub use regexp::Regexp;
pub use space::Space;
