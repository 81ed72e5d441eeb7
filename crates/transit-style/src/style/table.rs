//! Style tables: attribute name → rule, for one element class.

use serde_json::{Map, Value};

use super::rule::{AttributeRule, Resolver};
use super::value::AttrValue;
use crate::display::DisplayContext;
use crate::model::ElementData;
use crate::scale::ScaleUtils;

/// The rules for one element class, in declaration order.
///
/// `Clone` is a full structural copy: editing a clone never touches the
/// original. Resolver functions are shared between the copies, but they are
/// immutable.
///
/// # Example
///
/// ```rust
/// use transit_style::{AttributeRule, Resolver, StyleTable};
///
/// let table = StyleTable::new()
///     .add("fill", "#000")
///     .add("r", 7)
///     .add(
///         "stroke",
///         AttributeRule::candidates("#444", vec![Resolver::new(|_, data, _, _| {
///             if data.is_focused() { Some("#000".into()) } else { None }
///         })]),
///     );
///
/// assert!(table.has("stroke"));
/// assert_eq!(table.names().collect::<Vec<_>>(), vec!["fill", "r", "stroke"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    rules: Vec<(String, AttributeRule)>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a rule, returning the table for chaining.
    pub fn add<R: Into<AttributeRule>>(mut self, name: &str, rule: R) -> Self {
        self.set(name, rule);
        self
    }

    /// Sets a rule in place. A replaced rule keeps its original position.
    pub fn set<R: Into<AttributeRule>>(&mut self, name: &str, rule: R) {
        let rule = rule.into();
        match self.rules.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = rule,
            None => self.rules.push((name.to_string(), rule)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeRule> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeRule)> {
        self.rules.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Layers a user override onto an attribute.
    ///
    /// An attribute the table doesn't define yet gets the resolver as its
    /// only rule.
    pub fn layer_override(&mut self, name: &str, resolver: Resolver) {
        match self.rules.iter_mut().find(|(n, _)| n == name) {
            Some((_, rule)) => rule.layer_override(resolver),
            None => self
                .rules
                .push((name.to_string(), AttributeRule::Resolver(resolver))),
        }
    }

    /// Resolves one attribute; `None` when the table has no such rule or the
    /// rule has no value for this element.
    pub fn resolve(
        &self,
        name: &str,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
        utils: &ScaleUtils,
    ) -> Option<AttrValue> {
        self.get(name)?.resolve(display, data, index, utils)
    }

    /// Resolves every attribute for one element, skipping absent ones.
    pub fn resolve_all(
        &self,
        display: &mut DisplayContext<'_>,
        data: &dyn ElementData,
        index: usize,
        utils: &ScaleUtils,
    ) -> ResolvedAttributes {
        let mut resolved = ResolvedAttributes::default();
        for (name, rule) in &self.rules {
            match rule.resolve(display, data, index, utils) {
                Some(value) => resolved.values.push((name.clone(), value)),
                None => log::trace!("attribute '{}' omitted for element {}", name, index),
            }
        }
        resolved
    }
}

/// The attributes to set on one rendered element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAttributes {
    values: Vec<(String, AttrValue)>,
}

impl ResolvedAttributes {
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The attributes as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.values {
            let value = serde_json::to_value(value).unwrap_or(Value::Null);
            map.insert(name.clone(), value);
        }
        Value::Object(map)
    }
}
