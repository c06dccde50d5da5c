//! URI Template expansion per RFC 6570 (level 4).
//!
//! Templates are parsed into an AST and rendered against scalar, list, and
//! insertion-ordered map values, covering all expansion operators plus the
//! explode (`*`) and prefix-length (`:N`) modifiers.
//!
//! ```
//! use std::collections::HashMap;
//! use uritemplate::{expand, Value};
//!
//! let mut params = HashMap::new();
//! params.insert("query".to_string(), Value::from("rust templates"));
//! let uri = expand("https://example.com/search{?query}", &params).unwrap();
//! assert_eq!(uri, "https://example.com/search?query=rust%20templates");
//! ```

mod ast;
pub mod encoder;
mod error;
mod expander;
mod operator;
mod parser;
mod value;

pub use ast::{Expression, Template, TemplatePart, VarSpec};
pub use encoder::EncodeMode;
pub use error::ExpandError;
pub use expander::expand;
pub use operator::Operator;
pub use parser::TemplateParser;
pub use value::Value;
