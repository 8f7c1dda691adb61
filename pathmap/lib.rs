//! Path patterns with named placeholders.
//!
//! A pattern is a `/`-separated list of segments. Each segment is either
//! literal text, a single-segment placeholder `[name]`, or a greedy
//! multi-segment placeholder `[...name]`. Placeholders may be followed by a
//! literal suffix in the same segment, e.g. `[id].json`.
//!
//! ```
//! let mapper = pathmap::PathMapper::new("/pages/[...page].page.json").unwrap();
//! assert!(mapper.test("/pages/products/shoes.page.json"));
//!
//! let bindings = mapper.match_path("/pages/products/shoes.page.json").unwrap();
//! assert_eq!(bindings.get("page"), Some("products/shoes"));
//! assert_eq!(
//!     mapper.stringify(&bindings).unwrap(),
//!     "/pages/products/shoes.page.json"
//! );
//! ```

mod bindings;
mod compile;
mod error;
mod escape;
mod mapper;
mod part;

pub use bindings::*;
pub use compile::*;
pub use error::*;
pub use escape::*;
pub use mapper::*;
pub use part::*;
