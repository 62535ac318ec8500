//! Live body store with deferred additions and removals
//!
//! Passes over the bodies iterate a stable slice while every structural
//! change is staged; `commit` applies the staged changes once per step.

use std::collections::HashSet;

use nalgebra::Vector2;

use crate::body::{Body, BodyId, BodyKind};

pub mod debris;

#[cfg(test)]
mod population_test;

pub use debris::{debris_burst, merge_debris, SpeedRange};

/// What a `commit` changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub removed: usize,
    pub added: usize,
}

/// Bodies currently simulated plus the two staging lists
#[derive(Debug, Clone, Default)]
pub struct Population {
    bodies: Vec<Body>,
    pending_add: Vec<Body>,
    pending_remove: HashSet<BodyId>,
    next_id: u64,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&mut self, body: &mut Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        id
    }

    /// Adds a body to the live store immediately and returns its id
    ///
    /// Only for use outside a step, e.g. while loading a generated system.
    pub fn insert(&mut self, mut body: Body) -> BodyId {
        let id = self.assign_id(&mut body);
        self.bodies.push(body);
        id
    }

    /// Queues a body to join the live store at the next commit
    pub fn stage_add(&mut self, mut body: Body) -> BodyId {
        let id = self.assign_id(&mut body);
        self.pending_add.push(body);
        id
    }

    /// Queues a live body for removal at the next commit
    ///
    /// Returns `false` if it was already staged.
    pub fn stage_remove(&mut self, id: BodyId) -> bool {
        self.pending_remove.insert(id)
    }

    pub fn is_staged_for_removal(&self, id: BodyId) -> bool {
        self.pending_remove.contains(&id)
    }

    /// Applies staged removals, then staged additions, and clears both lists
    pub fn commit(&mut self) -> CommitSummary {
        let before = self.bodies.len();
        if !self.pending_remove.is_empty() {
            let pending = &self.pending_remove;
            self.bodies.retain(|b| !pending.contains(&b.id));
        }
        let removed = before - self.bodies.len();
        let added = self.pending_add.len();
        self.bodies.append(&mut self.pending_add);
        self.pending_remove.clear();
        CommitSummary { removed, added }
    }

    /// Drops every live and staged body; ids keep increasing
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.pending_add.clear();
        self.pending_remove.clear();
    }

    /// Clears everything and loads `bodies` as the new live store
    pub fn replace(&mut self, bodies: impl IntoIterator<Item = Body>) -> Vec<BodyId> {
        self.clear();
        bodies.into_iter().map(|b| self.insert(b)).collect()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable live bodies together with the removal set
    pub fn split_mut(&mut self) -> (&mut [Body], &HashSet<BodyId>) {
        (&mut self.bodies, &self.pending_remove)
    }

    pub fn pending_additions(&self) -> &[Body] {
        &self.pending_add
    }

    pub fn pending_removals(&self) -> &HashSet<BodyId> {
        &self.pending_remove
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn count_kind(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind() == kind).count()
    }

    /// Total mass of live massive bodies
    pub fn total_massive_mass(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.mass())
            .sum()
    }

    /// Total momentum of every live body
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
