//! Ordered (predicate, effect) rule tables.
//!
//! Each policy declares its rules as a static slice. They are applied top to
//! bottom against one accumulator list.

use crate::model::Recommendation;

/// What a matching rule does to the accumulated list.
#[derive(Debug, Clone, Copy)]
pub enum Effect {
    /// Discard everything so far and start over from this pool.
    Replace(&'static [Recommendation]),
    /// Add this pool after the current entries.
    Append(&'static [Recommendation]),
    /// Keep only entries for which the predicate holds.
    Filter(fn(&Recommendation) -> bool),
}

impl Effect {
    pub fn apply(&self, list: &mut Vec<Recommendation>) {
        match self {
            Effect::Replace(pool) => {
                list.clear();
                list.extend_from_slice(pool);
            }
            Effect::Append(pool) => list.extend_from_slice(pool),
            Effect::Filter(keep) => list.retain(|rec| keep(rec)),
        }
    }
}

/// A named rule over some evaluation context `C`.
#[derive(Debug, Clone, Copy)]
pub struct Rule<C> {
    pub name: &'static str,
    pub when: fn(&C) -> bool,
    pub effect: Effect,
}

impl<C> Rule<C> {
    pub const fn new(name: &'static str, when: fn(&C) -> bool, effect: Effect) -> Self {
        Self { name, when, effect }
    }
}

/// Run every matching rule in declaration order.
pub fn evaluate<C>(rules: &[Rule<C>], ctx: &C) -> Vec<Recommendation> {
    let mut list = Vec::new();

    for rule in rules {
        if (rule.when)(ctx) {
            rule.effect.apply(&mut list);
            tracing::debug!(rule = rule.name, len = list.len(), "recommendation rule matched");
        }
    }

    list
}
