//! Attribute rules and how they resolve.

use std::fmt;
use std::sync::Arc;

use super::value::AttrValue;
use crate::display::DisplayContext;
use crate::model::ElementData;
use crate::scale::ScaleUtils;

type ResolverFn = dyn Fn(&mut DisplayContext<'_>, &dyn ElementData, usize, &ScaleUtils) -> Option<AttrValue>
    + Send
    + Sync;

/// A function computing an attribute from the display and element.
///
/// Returning `None` means "no opinion". Resolvers must not mutate the element
/// but may append marker definitions to the display's surface.
///
/// Cloning a resolver shares the underlying function, which is immutable.
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);

impl Resolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut DisplayContext<'_>, &dyn ElementData, usize, &ScaleUtils) -> Option<AttrValue>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(f))
    }

    /// A resolver that always yields `value`.
    pub fn constant(value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        Self::new(move |_, _, _, _| Some(value.clone()))
    }

    pub fn call(
        &self,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
        utils: &ScaleUtils,
    ) -> Option<AttrValue> {
        (self.0)(display, data, index, utils)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// The default entry of a candidate list.
#[derive(Debug, Clone)]
pub enum Candidate {
    Constant(AttrValue),
    Resolver(Resolver),
}

/// How an attribute gets its value.
#[derive(Debug, Clone)]
pub enum AttributeRule {
    /// Always this value.
    Constant(AttrValue),
    /// Computed per element; `None` omits the attribute.
    Resolver(Resolver),
    /// Overrides are tried in order and the first value wins. When every
    /// override passes, the default applies.
    Candidates {
        default: Candidate,
        overrides: Vec<Resolver>,
    },
}

impl AttributeRule {
    /// A candidate list with a constant default.
    pub fn candidates(default: impl Into<AttrValue>, overrides: Vec<Resolver>) -> Self {
        AttributeRule::Candidates {
            default: Candidate::Constant(default.into()),
            overrides,
        }
    }

    /// A candidate list whose default is itself computed.
    pub fn computed_candidates(default: Resolver, overrides: Vec<Resolver>) -> Self {
        AttributeRule::Candidates {
            default: Candidate::Resolver(default),
            overrides,
        }
    }

    /// Resolves the rule for one element.
    ///
    /// Only `None` counts as absent; `Bool(false)` is a value like any other.
    pub fn resolve(
        &self,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
        utils: &ScaleUtils,
    ) -> Option<AttrValue> {
        match self {
            AttributeRule::Constant(value) => Some(value.clone()),
            AttributeRule::Resolver(resolver) => resolver.call(display, data, index, utils),
            AttributeRule::Candidates { default, overrides } => overrides
                .iter()
                .find_map(|r| r.call(display, data, index, utils))
                .or_else(|| match default {
                    Candidate::Constant(value) => Some(value.clone()),
                    Candidate::Resolver(resolver) => resolver.call(display, data, index, utils),
                }),
        }
    }

    /// Layers a user override on top of the current rule.
    ///
    /// The override is tried before anything already there: a constant or
    /// single resolver becomes the default of a new candidate list, and an
    /// existing candidate list gets the override at the front. When the
    /// override has no value, the previous rule applies unchanged.
    pub fn layer_override(&mut self, resolver: Resolver) {
        match self {
            AttributeRule::Candidates { overrides, .. } => overrides.insert(0, resolver),
            AttributeRule::Constant(value) => {
                *self = AttributeRule::Candidates {
                    default: Candidate::Constant(value.clone()),
                    overrides: vec![resolver],
                };
            }
            AttributeRule::Resolver(existing) => {
                *self = AttributeRule::Candidates {
                    default: Candidate::Resolver(existing.clone()),
                    overrides: vec![resolver],
                };
            }
        }
    }
}

impl From<AttrValue> for AttributeRule {
    fn from(value: AttrValue) -> Self {
        AttributeRule::Constant(value)
    }
}

impl From<&str> for AttributeRule {
    fn from(s: &str) -> Self {
        AttributeRule::Constant(s.into())
    }
}

impl From<f64> for AttributeRule {
    fn from(n: f64) -> Self {
        AttributeRule::Constant(n.into())
    }
}

impl From<i32> for AttributeRule {
    fn from(n: i32) -> Self {
        AttributeRule::Constant(n.into())
    }
}

impl From<bool> for AttributeRule {
    fn from(b: bool) -> Self {
        AttributeRule::Constant(b.into())
    }
}

impl From<Resolver> for AttributeRule {
    fn from(resolver: Resolver) -> Self {
        AttributeRule::Resolver(resolver)
    }
}
