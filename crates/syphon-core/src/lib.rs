//! Syphon core
//!
//! Converts between a flat set of form controls and a nested JSON object.
//!
//! - [`serialize`]: controls → object. `foo[bar][baz]` names nest, a trailing
//!   `[]` collects values into an array.
//! - [`deserialize`]: object → controls, resolving each control's name back to
//!   a value in the object.
//!
//! Reading and writing per control type goes through [`InputReaders`] and
//! [`InputWriters`], both overridable per call through [`Options`]. Controls are
//! anything implementing [`Control`]; [`host::memory::Element`] is a ready-made
//! in-memory document.
//!
//! ```rust
//! use serde_json::json;
//! use syphon_core::host::Element;
//! use syphon_core::{Options, deserialize, serialize};
//!
//! let mut form = Element::form().with_children([
//!     Element::input("text").with_name("widget").with_value("wombat"),
//!     Element::input("text").with_name("foo[bar]").with_value("baz"),
//! ]);
//!
//! let data = serialize(&form, &Options::default()).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(data),
//!     json!({"widget": "wombat", "foo": {"bar": "baz"}})
//! );
//!
//! deserialize(&mut form, &json!({"foo": {"bar": "qux"}}), &Options::default());
//! ```

pub mod assembler;
pub mod config;
pub mod control;
pub mod deserialize;
pub mod error;
pub mod host;
pub mod key_path;
pub mod options;
pub mod readers;
pub mod registry;
pub mod resolver;
pub mod serialize;
pub mod value;
pub mod writers;

pub use config::{SyphonConfig, discover_config};
pub use control::{Control, FormRoot};
pub use deserialize::{DeserializeSummary, deserialize};
pub use error::{Error, Result};
pub use key_path::{KeyJoiner, KeyPath, KeySplitter, PathSegment};
pub use options::Options;
pub use readers::{InputReaders, ReadFn};
pub use registry::TypeRegistry;
pub use serialize::serialize;
pub use writers::{InputWriters, WriteFn};
