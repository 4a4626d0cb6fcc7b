//! Abbreviation IR
//!
//! Input types for the abbreviation output engine.
//!
//! # Modules
//!
//! - [`tree`]: Flat abbreviation tree with derived navigation
//! - [`fields`]: Parser for `${1:placeholder}` field markers in text
//! - [`profile`]: Output profile (indentation, casing, inline elements, thresholds)
//!
//! Trees are plain owned data; a tree and a profile can be shared freely
//! between threads, and every render call builds its own scratch state.

pub mod fields;
mod node_id;
pub mod profile;
pub mod tree;

pub use fields::{parse_fields, Field, FieldsModel, MAX_FIELD_INDEX};
pub use node_id::NodeId;
pub use profile::{
    Case, FieldFormat, FieldStyle, Profile, ProfileOptions, Quotes, SelfClosingStyle,
};
pub use tree::{
    AbbrTree, AttrFlags, Attribute, Node, NodeData, NodeFlags, NodeSpec, RawNode, TreeError,
};
