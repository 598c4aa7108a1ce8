//! Domain services: error taxonomy and the pure parsing rules applied to
//! search results.

mod error;
mod name_parser;
mod org_resolver;

pub use error::*;
pub use name_parser::*;
pub use org_resolver::*;
