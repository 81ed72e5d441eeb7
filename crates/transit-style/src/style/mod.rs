//! Attribute rules and the tables that hold them.
//!
//! This module provides the core styling primitives:
//!
//! - [`AttrValue`]: a concrete attribute value
//! - [`AttributeRule`]: a constant, a [`Resolver`], or an ordered candidate list
//! - [`StyleTable`]: the rules for one element class
//! - [`ResolvedAttributes`]: what a table produced for one element
//! - [`ConfigurationError`]: errors from building scales and stylesheets
//!
//! Resolution never fails. A rule with nothing to say yields `None` and the
//! engine leaves the attribute unset.

mod error;
mod rule;
mod table;
mod value;

pub use error::ConfigurationError;
pub use rule::{AttributeRule, Candidate, Resolver};
pub use table::{ResolvedAttributes, StyleTable};
pub use value::AttrValue;
