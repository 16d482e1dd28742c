//! Hierarchy elements: contacts, pad-pairs, algedonodes, set-activators,
//! lights and dials.
//!
//! Elements never hold references to each other. The [`Hierarchy`] owns every
//! element in flat arenas and elements name their neighbours by index
//! ([`NodeId`], [`ActivatorId`], [`LightId`]). Each element exposes the local
//! half of the activation protocol; the hierarchy walks the edges between
//! them.
//!
//! [`Hierarchy`]: crate::hierarchy::Hierarchy

use crate::contacts::{contact_count, COLUMNS};
use crate::state::{AOrB, MAX_DIAL_VALUE, MIN_DIAL_VALUE};
use serde::{Deserialize, Serialize};

/// Index into the hierarchy's node arena (`row * COLUMNS + column`).
pub type NodeId = usize;
/// Index into the hierarchy's set-activator arena.
pub type ActivatorId = usize;
/// Index into the hierarchy's light arena.
pub type LightId = usize;

/// Dial lines 0..8 feed algedonode contacts; lines 8 and 9 are escape lines.
pub const ALGEDONODE_LINES: usize = 8;
/// Output lines per dial.
pub const DIAL_LINES: usize = 10;

/// Arena index of node `(row, column)`.
pub const fn node_id(row: usize, column: usize) -> NodeId {
    row * COLUMNS + column
}

/// How an activator or light was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationSource {
    /// Straight from a dial escape line (value 9 or 10).
    DialOutput,
    /// Through an algedonode pad-pair.
    Algedonode,
}

/// Downstream end of a pad-pair output or an escape line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Activator(ActivatorId),
    Light(LightId),
}

/// Shared behaviour of pad-pair outputs.
///
/// Activation through an algedonode always succeeds. Activation from a dial
/// escape line only succeeds while the representative upstream node is
/// active, i.e. the escape line can only be taken from inside the branch that
/// is already lit.
pub trait Activatable {
    /// Upstream node whose activity gates escape-line activation.
    fn representative(&self) -> NodeId;

    /// Attempt activation. Returns whether it took effect.
    fn activate(&mut self, source: ActivationSource, upstream_active: bool) -> bool;

    /// Drop any activation state.
    fn clear(&mut self);

    fn is_active(&self) -> bool;

    fn activation_source(&self) -> Option<ActivationSource>;
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// A tap on a pad-pair, driven by one dial line.
#[derive(Debug, Clone)]
pub struct Contact {
    position: f64,
    active: bool,
    parent_active: bool,
}

impl Contact {
    pub fn new(position: f64, parent_active: bool) -> Self {
        Self {
            position,
            active: false,
            parent_active,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether this contact's dial line fired this cycle.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_parent_active(&self) -> bool {
        self.parent_active
    }

    /// The dial line fired. The contact always records it, but only reaches
    /// the pad-pair (returning its position) when the owning node is active.
    pub fn fire(&mut self) -> Option<f64> {
        self.active = true;
        self.parent_active.then_some(self.position)
    }
}

// ---------------------------------------------------------------------------
// Pad-pair
// ---------------------------------------------------------------------------

/// Two adjacent pad regions under a node. A live contact lands on one of them
/// depending on its position relative to the strip offset.
#[derive(Debug, Clone)]
pub struct PadPair {
    /// Strip offset in strip units, `[-1, 1]`.
    offset: f64,
    active_index: Option<usize>,
    outputs: Option<[Target; 2]>,
}

impl Default for PadPair {
    fn default() -> Self {
        Self::new()
    }
}

impl PadPair {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            active_index: None,
            outputs: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Region selected this cycle, if any contact reached the pad.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn outputs(&self) -> Option<[Target; 2]> {
        self.outputs
    }

    /// Wire the two outputs. Happens exactly once, at construction.
    pub fn connect(&mut self, outputs: [Target; 2]) {
        assert!(
            self.outputs.is_none(),
            "pad-pair outputs are already wired to {:?}",
            self.outputs
        );
        self.outputs = Some(outputs);
    }

    /// Region a contact at `position` lands on.
    ///
    /// The pad-pair sits at the midpoint of a strip, so the offset is halved
    /// to bring it into pad units. A contact exactly on the boundary lands on
    /// region 1.
    pub fn region_for(&self, position: f64) -> usize {
        if position >= self.offset / 2.0 {
            1
        } else {
            0
        }
    }

    /// Select the region for `position` and return the output it drives.
    pub fn select(&mut self, position: f64) -> Option<Target> {
        let index = self.region_for(position);
        self.active_index = Some(index);
        self.outputs.map(|outputs| outputs[index])
    }

    /// Reset the selection. Returns both outputs so the caller can clear them
    /// regardless of which one was driven.
    pub fn clear(&mut self) -> Option<[Target; 2]> {
        self.active_index = None;
        self.outputs
    }
}

// ---------------------------------------------------------------------------
// Algedonode
// ---------------------------------------------------------------------------

/// One algedonode: a bank of `2^row` contacts over a pad-pair.
///
/// Row 0 nodes are permanently active. Deeper nodes are activated by the
/// set-activator driving their partition and dropped again by [`Node::clear`].
#[derive(Debug, Clone)]
pub struct Node {
    row: usize,
    column: usize,
    active: bool,
    contacts: Vec<Contact>,
    pad: PadPair,
}

impl Node {
    /// Panics if `positions` does not hold exactly `2^row` contacts.
    pub fn new(row: usize, column: usize, positions: &[f64]) -> Self {
        let active = row == 0;
        let mut node = Self {
            row,
            column,
            active,
            contacts: Vec::new(),
            pad: PadPair::new(),
        };
        node.check_contact_count(positions.len());
        node.contacts = positions.iter().map(|&p| Contact::new(p, active)).collect();
        node
    }

    fn check_contact_count(&self, got: usize) {
        let expected = contact_count(self.row);
        assert_eq!(
            got, expected,
            "node ({}, {}) takes {} contacts, got {}",
            self.row, self.column, expected, got
        );
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn pad(&self) -> &PadPair {
        &self.pad
    }

    pub(crate) fn pad_mut(&mut self) -> &mut PadPair {
        &mut self.pad
    }

    /// Fire contact `index`; returns the output the pad-pair selected, if the
    /// contact was live.
    pub(crate) fn fire_contact(&mut self, index: usize) -> Option<Target> {
        let position = self.contacts[index].fire()?;
        self.pad.select(position)
    }

    /// Reassign contact positions in place.
    ///
    /// Panics if the count does not match this node's wiring.
    pub fn set_contact_positions(&mut self, positions: &[f64]) {
        self.check_contact_count(positions.len());
        for (contact, &position) in self.contacts.iter_mut().zip(positions) {
            contact.position = position;
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        for contact in &mut self.contacts {
            contact.parent_active = true;
        }
    }

    /// Drop activation (rows below 0) and reset every contact. The pad-pair is
    /// cleared separately by the hierarchy, which also owns its outputs.
    pub fn clear(&mut self) {
        if self.row > 0 {
            self.active = false;
        }
        for contact in &mut self.contacts {
            contact.active = false;
            contact.parent_active = self.active;
        }
    }
}

// ---------------------------------------------------------------------------
// Set-activator
// ---------------------------------------------------------------------------

/// Fan-out element that activates one contiguous partition of a row.
#[derive(Debug, Clone)]
pub struct SetActivator {
    /// Row of the nodes this activator drives.
    row: usize,
    start_column: usize,
    end_column: usize,
    active: bool,
    source: Option<ActivationSource>,
    representative: NodeId,
}

impl SetActivator {
    /// Drives nodes `start_column..=end_column` of `row`. `representative` is
    /// any node of the upstream partition wired into it.
    pub fn new(row: usize, start_column: usize, end_column: usize, representative: NodeId) -> Self {
        Self {
            row,
            start_column,
            end_column,
            active: false,
            source: None,
            representative,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Inclusive column bounds of the driven partition.
    pub fn partition(&self) -> (usize, usize) {
        (self.start_column, self.end_column)
    }

    /// Nodes this activator switches on.
    pub fn partition_nodes(&self) -> impl Iterator<Item = NodeId> {
        let row = self.row;
        (self.start_column..=self.end_column).map(move |column| node_id(row, column))
    }
}

impl Activatable for SetActivator {
    fn representative(&self) -> NodeId {
        self.representative
    }

    fn activate(&mut self, source: ActivationSource, upstream_active: bool) -> bool {
        if source == ActivationSource::DialOutput && !upstream_active {
            return false;
        }
        self.active = true;
        self.source = Some(source);
        true
    }

    fn clear(&mut self) {
        self.active = false;
        self.source = None;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activation_source(&self) -> Option<ActivationSource> {
        self.source
    }
}

// ---------------------------------------------------------------------------
// Light
// ---------------------------------------------------------------------------

/// Terminal output. Two per column, A and B.
#[derive(Debug, Clone)]
pub struct Light {
    a_or_b: AOrB,
    column: usize,
    active: bool,
    source: Option<ActivationSource>,
    /// Row 3 node controlling this light.
    parent: NodeId,
}

impl Light {
    pub fn new(a_or_b: AOrB, column: usize, parent: NodeId) -> Self {
        Self {
            a_or_b,
            column,
            active: false,
            source: None,
            parent,
        }
    }

    pub fn a_or_b(&self) -> AOrB {
        self.a_or_b
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Activatable for Light {
    fn representative(&self) -> NodeId {
        self.parent
    }

    fn activate(&mut self, source: ActivationSource, upstream_active: bool) -> bool {
        if source == ActivationSource::DialOutput && !upstream_active {
            return false;
        }
        self.active = true;
        self.source = Some(source);
        true
    }

    fn clear(&mut self) {
        self.active = false;
        self.source = None;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activation_source(&self) -> Option<ActivationSource> {
        self.source
    }
}

// ---------------------------------------------------------------------------
// Dial
// ---------------------------------------------------------------------------

/// A contact on some node: `(node, contact index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRef {
    pub node: NodeId,
    pub index: usize,
}

/// One of a dial's ten output lines.
///
/// Algedonode lines reach contacts, escape lines reach activators or lights.
/// A line can fan out to several of either.
#[derive(Debug, Clone, Default)]
pub struct DialOutput {
    contacts: Vec<ContactRef>,
    targets: Vec<Target>,
    fired: bool,
}

impl DialOutput {
    pub fn contacts(&self) -> &[ContactRef] {
        &self.contacts
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Whether this line fired during the current cycle.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Input selector. Holds a value in `1..=10` and fires the matching line.
#[derive(Debug, Clone)]
pub struct Dial {
    index: usize,
    value: u8,
    outputs: Vec<DialOutput>,
}

impl Dial {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            value: MIN_DIAL_VALUE,
            outputs: vec![DialOutput::default(); DIAL_LINES],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Panics outside `1..=10`.
    pub fn set_value(&mut self, value: u8) {
        assert!(
            (MIN_DIAL_VALUE..=MAX_DIAL_VALUE).contains(&value),
            "dial {} value {} is outside 1..=10",
            self.index,
            value
        );
        self.value = value;
    }

    pub fn outputs(&self) -> &[DialOutput] {
        &self.outputs
    }

    pub fn output(&self, line: usize) -> &DialOutput {
        &self.outputs[line]
    }

    /// Line selected by the current value.
    pub fn selected_line(&self) -> usize {
        (self.value - MIN_DIAL_VALUE) as usize
    }

    pub(crate) fn connect_contact(&mut self, line: usize, contact: ContactRef) {
        debug_assert!(line < ALGEDONODE_LINES);
        self.outputs[line].contacts.push(contact);
    }

    /// Wire both escape lines: value 9 to `targets[0]`, value 10 to `targets[1]`.
    pub(crate) fn connect_escape(&mut self, targets: [Target; 2]) {
        self.outputs[ALGEDONODE_LINES].targets.push(targets[0]);
        self.outputs[ALGEDONODE_LINES + 1].targets.push(targets[1]);
    }

    /// Mark the selected line as fired and return it.
    pub(crate) fn fire(&mut self) -> usize {
        let line = self.selected_line();
        self.outputs[line].fired = true;
        line
    }

    pub fn clear(&mut self) {
        for output in &mut self.outputs {
            output.fired = false;
        }
    }
}
