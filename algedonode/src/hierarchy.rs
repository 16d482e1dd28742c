//! The algedonode hierarchy: wiring and activation propagation.
//!
//! Four dials feed four rows of eight algedonodes. Each row-0 node is always
//! active; every deeper node is switched on by the set-activator of its
//! partition. Propagation fires one line per dial, in dial order:
//!
//! ```text
//! dial line ─→ contact ─→ pad-pair ─→ set-activator ─→ next-row partition
//!                                  └→ light (row 3)
//! dial escape line (9/10) ─────────→ set-activator / light   [gated]
//! ```
//!
//! The output side is wired by a recursive binary partition of the columns:
//! the full row 0 feeds two activators covering columns 0–3 and 4–7 of row 1,
//! each half feeds two quarter activators in row 2, and so on until each row-3
//! node drives its own B/A light pair. Every path from row 0 to the lights
//! halves the candidate columns, so a valid propagation lights exactly one of
//! the sixteen lights.
//!
//! Nodes in one partition are always activated together, which lets a single
//! representative node stand in for the whole upstream partition when an
//! escape line is gated.

use crate::contacts::{contact_count, ContactLayout, COLUMNS, ROWS};
use crate::elements::*;
use crate::state::{AOrB, DialState, LightResult, SimulationRecord, DIAL_COUNT};
use tracing::{debug, trace, warn};

/// The complete hierarchy: 4 dials, 32 algedonodes, 14 set-activators and
/// 16 lights, wired once at construction.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    /// Row-major, see [`node_id`].
    nodes: Vec<Node>,
    activators: Vec<SetActivator>,
    /// Column-major, B before A within a column.
    lights: Vec<Light>,
    dials: Vec<Dial>,
    contacts: ContactLayout,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    /// Hierarchy with the default contact layout and every strip at zero.
    pub fn new() -> Self {
        Self::with_contacts(ContactLayout::default_layout())
    }

    /// Build and wire a hierarchy.
    ///
    /// Panics if `contacts` does not match the wiring (4 rows, 8 columns,
    /// `2^row` contacts per node).
    pub fn with_contacts(contacts: ContactLayout) -> Self {
        if let Err(e) = contacts.check_shape() {
            panic!("contact layout does not match the hierarchy wiring: {e}");
        }

        let nodes = (0..ROWS)
            .flat_map(|row| (0..COLUMNS).map(move |column| (row, column)))
            .map(|(row, column)| Node::new(row, column, contacts.positions(row, column)))
            .collect();

        let mut hierarchy = Self {
            nodes,
            activators: Vec::new(),
            lights: Vec::new(),
            dials: (0..DIAL_COUNT).map(Dial::new).collect(),
            contacts,
        };
        hierarchy.wire_inputs();
        hierarchy.link_partitions(0, 0, COLUMNS - 1);
        hierarchy.wire_final_escape_lines();

        debug!(
            nodes = hierarchy.nodes.len(),
            activators = hierarchy.activators.len(),
            lights = hierarchy.lights.len(),
            "wired algedonode hierarchy"
        );
        hierarchy
    }

    // -----------------------------------------------------------------------
    // Wiring
    // -----------------------------------------------------------------------

    /// Dial `row`'s eight algedonode lines, grouped in chunks of `2^row`
    /// consecutive lines and cycled across the columns: column `c` takes chunk
    /// `c mod (8 / 2^row)`, one line per contact.
    fn wire_inputs(&mut self) {
        for row in 0..ROWS {
            let chunk = contact_count(row);
            let groups = ALGEDONODE_LINES / chunk;
            for column in 0..COLUMNS {
                let node = node_id(row, column);
                assert_eq!(
                    self.nodes[node].contact_count(),
                    chunk,
                    "node ({row}, {column}) contact count does not match its dial chunk"
                );
                let group = column % groups;
                for index in 0..chunk {
                    self.dials[row].connect_contact(group * chunk + index, ContactRef { node, index });
                }
            }
        }
    }

    /// Wire the outputs of columns `start..=end` of `row`.
    ///
    /// A single column is a row-3 node and drives its own lights. Otherwise
    /// the range is split in half, each half of the next row gets an
    /// activator, every node in the range (and the row's dial escape lines)
    /// feeds output 0 to the lower half and output 1 to the upper half, and
    /// both halves are wired in turn.
    fn link_partitions(&mut self, row: usize, start: usize, end: usize) {
        if start == end {
            debug_assert_eq!(row, ROWS - 1);
            let node = node_id(row, start);
            let b = self.push_light(AOrB::B, start, node);
            let a = self.push_light(AOrB::A, start, node);
            self.nodes[node]
                .pad_mut()
                .connect([Target::Light(b), Target::Light(a)]);
            return;
        }

        let mid = (start + end) / 2 + 1;
        let representative = node_id(row, start);
        let lower = self.push_activator(SetActivator::new(row + 1, start, mid - 1, representative));
        let upper = self.push_activator(SetActivator::new(row + 1, mid, end, representative));
        let targets = [Target::Activator(lower), Target::Activator(upper)];

        for column in start..=end {
            self.nodes[node_id(row, column)].pad_mut().connect(targets);
        }
        self.dials[row].connect_escape(targets);

        self.link_partitions(row + 1, start, mid - 1);
        self.link_partitions(row + 1, mid, end);
    }

    /// The last dial's escape lines go straight to every light pair.
    fn wire_final_escape_lines(&mut self) {
        let last = DIAL_COUNT - 1;
        for pair in 0..COLUMNS {
            let b = 2 * pair;
            debug_assert_eq!(self.lights[b].a_or_b(), AOrB::B);
            self.dials[last].connect_escape([Target::Light(b), Target::Light(b + 1)]);
        }
    }

    fn push_activator(&mut self, activator: SetActivator) -> ActivatorId {
        self.activators.push(activator);
        self.activators.len() - 1
    }

    fn push_light(&mut self, a_or_b: AOrB, column: usize, parent: NodeId) -> LightId {
        self.lights.push(Light::new(a_or_b, column, parent));
        self.lights.len() - 1
    }

    // -----------------------------------------------------------------------
    // Inputs
    // -----------------------------------------------------------------------

    /// Panics if `dial > 3` or `value` is outside `1..=10`.
    pub fn set_dial_value(&mut self, dial: usize, value: u8) {
        assert!(dial < DIAL_COUNT, "dial index {dial} is outside 0..=3");
        self.dials[dial].set_value(value);
    }

    pub fn set_dial_values(&mut self, state: DialState) {
        for (dial, value) in state.values().into_iter().enumerate() {
            self.dials[dial].set_value(value);
        }
    }

    pub fn dial_values(&self) -> DialState {
        let mut values = [0u8; DIAL_COUNT];
        for (slot, dial) in values.iter_mut().zip(&self.dials) {
            *slot = dial.value();
        }
        DialState::from_valid(values)
    }

    /// Move the strip under `column`, repositioning all four of its pad-pairs.
    /// The offset is clamped to `[-1, 1]`.
    pub fn move_strip(&mut self, column: usize, offset: f64) {
        assert!(column < COLUMNS, "strip column {column} is outside 0..=7");
        let offset = offset.clamp(-1.0, 1.0);
        for row in 0..ROWS {
            self.nodes[node_id(row, column)].pad_mut().set_offset(offset);
        }
        debug!(column, offset, "moved strip");
    }

    pub fn strip_offset(&self, column: usize) -> f64 {
        self.nodes[node_id(0, column)].pad().offset()
    }

    pub fn strip_offsets(&self) -> [f64; COLUMNS] {
        let mut offsets = [0.0; COLUMNS];
        for (column, slot) in offsets.iter_mut().enumerate() {
            *slot = self.strip_offset(column);
        }
        offsets
    }

    /// Reassign every contact position without rewiring.
    ///
    /// Panics if the layout shape does not match the wiring.
    pub fn set_new_contact_positions(&mut self, contacts: &ContactLayout) {
        if let Err(e) = contacts.check_shape() {
            panic!("contact layout does not match the hierarchy wiring: {e}");
        }
        for node in &mut self.nodes {
            let positions = contacts.positions(node.row(), node.column());
            node.set_contact_positions(positions);
        }
        self.contacts = contacts.clone();
        debug!("reassigned contact positions");
    }

    pub fn restore_default_contacts(&mut self) {
        self.set_new_contact_positions(&ContactLayout::default_layout());
    }

    pub fn randomize_contacts(&mut self, seed: u64) {
        self.set_new_contact_positions(&ContactLayout::randomized(seed));
    }

    pub fn contact_layout(&self) -> &ContactLayout {
        &self.contacts
    }

    // -----------------------------------------------------------------------
    // Propagation
    // -----------------------------------------------------------------------

    /// Reset all transient activation state.
    ///
    /// Dial values, strip offsets and contact positions are untouched. Row-0
    /// nodes stay active. Every pad-pair clears both of its outputs, so every
    /// activator and light ends up inactive. Safe to call repeatedly.
    pub fn clear(&mut self) {
        for dial in &mut self.dials {
            dial.clear();
        }
        for id in 0..self.nodes.len() {
            self.nodes[id].clear();
            if let Some(outputs) = self.nodes[id].pad_mut().clear() {
                for target in outputs {
                    self.clear_target(target);
                }
            }
        }
    }

    fn clear_target(&mut self, target: Target) {
        match target {
            Target::Activator(id) => self.activators[id].clear(),
            Target::Light(id) => self.lights[id].clear(),
        }
    }

    /// Fire every dial's selected line, dial 0 first.
    ///
    /// Call [`Hierarchy::clear`] beforehand; stale activations from an
    /// earlier cycle are not reset here.
    pub fn propagate_dial_values(&mut self) {
        for dial in 0..DIAL_COUNT {
            self.propagate_dial(dial);
        }

        let lit = self.lights.iter().filter(|l| l.is_active()).count();
        if lit != 1 {
            warn!(state = %self.dial_values(), lit, "propagation did not light exactly one light");
        }
    }

    /// Fire one dial's selected line and everything downstream of it.
    pub fn propagate_dial(&mut self, dial: usize) {
        let line = self.dials[dial].fire();
        trace!(dial, value = self.dials[dial].value(), "dial fired");

        for k in 0..self.dials[dial].output(line).contacts().len() {
            let contact = self.dials[dial].output(line).contacts()[k];
            if let Some(target) = self.nodes[contact.node].fire_contact(contact.index) {
                self.activate_target(target, ActivationSource::Algedonode);
            }
        }
        for k in 0..self.dials[dial].output(line).targets().len() {
            let target = self.dials[dial].output(line).targets()[k];
            self.activate_target(target, ActivationSource::DialOutput);
        }
    }

    fn activate_target(&mut self, target: Target, source: ActivationSource) {
        match target {
            Target::Activator(id) => {
                let upstream = self.nodes[self.activators[id].representative()].is_active();
                if !self.activators[id].activate(source, upstream) {
                    trace!(activator = id, "escape line blocked by inactive partition");
                    return;
                }
                let (start, end) = self.activators[id].partition();
                let row = self.activators[id].row();
                trace!(row, start, end, ?source, "partition activated");
                for column in start..=end {
                    self.nodes[node_id(row, column)].activate();
                }
            }
            Target::Light(id) => {
                let upstream = self.nodes[self.lights[id].representative()].is_active();
                if self.lights[id].activate(source, upstream) {
                    trace!(light = id, ?source, "light lit");
                } else {
                    trace!(light = id, "escape line blocked by inactive node");
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// First lit light in scan order (column 0 first, B before A).
    ///
    /// Uniqueness is a property of the wiring, not checked here: with more
    /// than one light lit the first wins, with none the result is `None`.
    pub fn illuminated_light(&self) -> Option<LightResult> {
        self.lights
            .iter()
            .find(|light| light.is_active())
            .map(light_result)
    }

    /// Every lit light, in scan order.
    pub fn illuminated_lights(&self) -> Vec<LightResult> {
        self.lights
            .iter()
            .filter(|light| light.is_active())
            .map(light_result)
            .collect()
    }

    /// Current dial values and the light they currently show.
    pub fn current_result(&self) -> SimulationRecord {
        SimulationRecord {
            state: self.dial_values(),
            result: self.illuminated_light(),
        }
    }

    /// Clear, set the dials to `state`, propagate and read the lit light.
    pub fn simulate(&mut self, state: DialState) -> Option<LightResult> {
        self.clear();
        self.set_dial_values(state);
        self.propagate_dial_values();
        self.illuminated_light()
    }

    /// Evaluate all 10,000 states in lexicographic order.
    ///
    /// The dial values and lit light observable before the call are restored
    /// afterwards.
    pub fn full_simulate(&mut self) -> Vec<SimulationRecord> {
        let saved = self.dial_values();
        let was_propagated = self.lights.iter().any(|l| l.is_active());

        let records: Vec<SimulationRecord> = DialState::all()
            .map(|state| SimulationRecord {
                state,
                result: self.simulate(state),
            })
            .collect();

        self.clear();
        self.set_dial_values(saved);
        if was_propagated {
            self.propagate_dial_values();
        }

        debug!(
            states = records.len(),
            unlit = records.iter().filter(|r| r.result.is_none()).count(),
            "full simulation finished"
        );
        records
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn node(&self, row: usize, column: usize) -> &Node {
        &self.nodes[node_id(row, column)]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn set_activators(&self) -> &[SetActivator] {
        &self.activators
    }

    /// Activator driving the partition of `row` that starts at `start_column`.
    pub fn activator_for(&self, row: usize, start_column: usize) -> Option<&SetActivator> {
        self.activators
            .iter()
            .find(|a| a.row() == row && a.partition().0 == start_column)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light(&self, column: usize, a_or_b: AOrB) -> &Light {
        let offset = match a_or_b {
            AOrB::B => 0,
            AOrB::A => 1,
        };
        &self.lights[2 * column + offset]
    }

    pub fn dials(&self) -> &[Dial] {
        &self.dials
    }

    /// Nodes whose pad-pair selected a region this cycle, in row order.
    pub fn fired_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| node.pad().active_index().is_some())
    }
}

fn light_result(light: &Light) -> LightResult {
    LightResult {
        column: light.column(),
        a_or_b: light.a_or_b(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: [u8; 4]) -> DialState {
        DialState::new(values).unwrap()
    }

    #[test]
    fn element_counts() {
        let h = Hierarchy::new();
        assert_eq!(h.nodes().len(), 32);
        assert_eq!(h.set_activators().len(), 2 + 4 + 8);
        assert_eq!(h.lights().len(), 16);
        assert_eq!(h.dials().len(), 4);
    }

    #[test]
    fn contact_counts_double_per_row() {
        let h = Hierarchy::new();
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                assert_eq!(h.node(row, column).contact_count(), 1 << row);
            }
        }
    }

    #[test]
    fn input_wiring_cycles_chunks() {
        let h = Hierarchy::new();
        // Row 1: chunks of two lines, four chunks, so column 5 takes lines 2 and 3.
        let dial = &h.dials()[1];
        assert!(dial.output(2).contacts().contains(&ContactRef { node: node_id(1, 5), index: 0 }));
        assert!(dial.output(3).contacts().contains(&ContactRef { node: node_id(1, 5), index: 1 }));
        // Row 3: every column takes all eight lines.
        assert_eq!(h.dials()[3].output(6).contacts().len(), COLUMNS);
        // Every algedonode line reaches 2^row contacts.
        for (row, dial) in h.dials().iter().enumerate() {
            for line in 0..ALGEDONODE_LINES {
                assert_eq!(dial.output(line).contacts().len(), 1 << row);
            }
        }
    }

    #[test]
    fn partitions_halve_per_row() {
        let h = Hierarchy::new();
        let mut bounds: Vec<(usize, usize, usize)> = h
            .set_activators()
            .iter()
            .map(|a| (a.row(), a.partition().0, a.partition().1))
            .collect();
        bounds.sort();
        assert_eq!(
            bounds,
            vec![
                (1, 0, 3),
                (1, 4, 7),
                (2, 0, 1),
                (2, 2, 3),
                (2, 4, 5),
                (2, 6, 7),
                (3, 0, 0),
                (3, 1, 1),
                (3, 2, 2),
                (3, 3, 3),
                (3, 4, 4),
                (3, 5, 5),
                (3, 6, 6),
                (3, 7, 7),
            ]
        );
    }

    #[test]
    fn escape_lines_reach_one_pair_per_partition() {
        let h = Hierarchy::new();
        let expected = [1, 2, 4, 8];
        for (dial, &pairs) in h.dials().iter().zip(&expected) {
            assert_eq!(dial.output(8).targets().len(), pairs);
            assert_eq!(dial.output(9).targets().len(), pairs);
        }
        assert!(h.dials()[3]
            .output(8)
            .targets()
            .iter()
            .all(|t| matches!(t, Target::Light(id) if h.lights()[*id].a_or_b() == AOrB::B)));
    }

    #[test]
    fn light_ordering_is_b_then_a() {
        let h = Hierarchy::new();
        for column in 0..COLUMNS {
            assert_eq!(h.lights()[2 * column].a_or_b(), AOrB::B);
            assert_eq!(h.lights()[2 * column + 1].a_or_b(), AOrB::A);
            assert_eq!(h.light(column, AOrB::A).column(), column);
            assert_eq!(h.light(column, AOrB::A).representative(), node_id(3, column));
        }
    }

    #[test]
    fn golden_baselines() {
        let mut h = Hierarchy::new();
        let cases = [
            ([1, 1, 1, 1], 0, AOrB::B),
            ([8, 8, 8, 8], 7, AOrB::A),
            ([9, 9, 9, 9], 0, AOrB::B),
            ([10, 10, 10, 10], 7, AOrB::A),
            ([8, 9, 1, 1], 4, AOrB::B),
        ];
        for (values, column, a_or_b) in cases {
            assert_eq!(
                h.simulate(state(values)),
                Some(LightResult { column, a_or_b }),
                "state {values:?}"
            );
        }
    }

    #[test]
    fn path_for_all_ones() {
        let mut h = Hierarchy::new();
        h.simulate(state([1, 1, 1, 1]));
        let path: Vec<(usize, usize)> = h.fired_nodes().map(|n| (n.row(), n.column())).collect();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn escape_line_blocked_without_active_partition() {
        let mut h = Hierarchy::new();
        h.clear();
        h.set_dial_value(1, 9);
        // Dial 0 never fired, so no row-1 partition is active.
        h.propagate_dial(1);
        for activator in h.set_activators().iter().filter(|a| a.row() == 2) {
            assert!(!activator.is_active(), "{:?}", activator.partition());
        }
    }

    #[test]
    fn escape_line_takes_the_active_branch() {
        let mut h = Hierarchy::new();
        h.simulate(state([8, 9, 1, 1]));

        let blocked = h.activator_for(2, 0).unwrap();
        assert!(!blocked.is_active());
        let taken = h.activator_for(2, 4).unwrap();
        assert!(taken.is_active());
        assert_eq!(taken.activation_source(), Some(ActivationSource::DialOutput));
        assert_eq!(
            h.activator_for(1, 4).unwrap().activation_source(),
            Some(ActivationSource::Algedonode)
        );
    }

    #[test]
    fn final_escape_lights_through_dial_output() {
        let mut h = Hierarchy::new();
        h.simulate(state([3, 3, 3, 10]));
        let lit = h.illuminated_lights();
        assert_eq!(lit.len(), 1);
        let light = h.light(lit[0].column, lit[0].a_or_b);
        assert_eq!(light.a_or_b(), AOrB::A);
        assert_eq!(light.activation_source(), Some(ActivationSource::DialOutput));
    }

    #[test]
    fn gated_contacts_record_but_do_not_forward() {
        let mut h = Hierarchy::new();
        h.simulate(state([1, 1, 1, 1]));
        // Dial 1 line 0 reaches columns 0 and 4; only column 0 is in the live half.
        let live = &h.node(1, 0).contacts()[0];
        let gated = &h.node(1, 4).contacts()[0];
        assert!(live.is_active() && live.is_parent_active());
        assert!(gated.is_active() && !gated.is_parent_active());
        assert_eq!(h.node(1, 4).pad().active_index(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut h = Hierarchy::new();
        h.simulate(state([4, 7, 2, 9]));
        h.clear();
        h.clear();
        for node in h.nodes() {
            assert_eq!(node.is_active(), node.row() == 0);
            assert_eq!(node.pad().active_index(), None);
            assert!(node.contacts().iter().all(|c| !c.is_active()));
        }
        assert!(h.set_activators().iter().all(|a| !a.is_active()));
        assert!(h.lights().iter().all(|l| !l.is_active()));
        assert!(h.dials().iter().all(|d| d.outputs().iter().all(|o| !o.has_fired())));
        assert_eq!(h.illuminated_light(), None);
        assert_eq!(h.dial_values(), state([4, 7, 2, 9]));
    }

    #[test]
    fn stale_lights_survive_without_clear() {
        let mut h = Hierarchy::new();
        h.simulate(state([1, 1, 1, 1]));
        h.set_dial_values(state([8, 8, 8, 8]));
        h.propagate_dial_values();
        assert!(h.illuminated_lights().len() > 1);
        // First in scan order wins.
        assert_eq!(
            h.illuminated_light(),
            Some(LightResult { column: 0, a_or_b: AOrB::B })
        );
    }

    #[test]
    fn strip_offset_moves_whole_column() {
        let mut h = Hierarchy::new();
        h.move_strip(3, 0.5);
        for row in 0..ROWS {
            assert_eq!(h.node(row, 3).pad().offset(), 0.5);
        }
        assert_eq!(h.strip_offset(2), 0.0);
        h.move_strip(3, 4.0);
        assert_eq!(h.strip_offset(3), 1.0);
    }

    #[test]
    fn strip_offset_flips_pad_selection() {
        let mut h = Hierarchy::new();
        // Threshold -0.5 puts every contact on region 1.
        for column in 0..COLUMNS {
            h.move_strip(column, -1.0);
        }
        assert_eq!(
            h.simulate(state([1, 1, 1, 1])),
            Some(LightResult { column: 7, a_or_b: AOrB::A })
        );
        assert_eq!(h.node(0, 0).pad().active_index(), Some(1));
        assert_eq!(h.node(3, 7).pad().active_index(), Some(1));
    }

    #[test]
    fn full_simulate_is_uniform_with_defaults() {
        let mut h = Hierarchy::new();
        let records = h.full_simulate();
        assert_eq!(records.len(), 10_000);
        let mut counts = [0usize; 16];
        for record in &records {
            let light = record.result.expect("every state lights a light");
            let slot = 2 * light.column + usize::from(light.a_or_b == AOrB::A);
            counts[slot] += 1;
        }
        assert!(counts.iter().all(|&c| c == 625), "{counts:?}");
    }

    #[test]
    fn full_simulate_restores_state() {
        let mut h = Hierarchy::new();
        h.simulate(state([5, 2, 10, 7]));
        let before = h.current_result();
        h.full_simulate();
        assert_eq!(h.current_result(), before);

        let mut idle = Hierarchy::new();
        idle.set_dial_values(state([3, 3, 3, 3]));
        idle.full_simulate();
        assert_eq!(idle.illuminated_light(), None);
        assert_eq!(idle.dial_values(), state([3, 3, 3, 3]));
    }

    #[test]
    fn contacts_round_trip() {
        let mut h = Hierarchy::new();
        let baseline = h.full_simulate();
        h.randomize_contacts(99);
        assert_eq!(h.contact_layout(), &ContactLayout::randomized(99));
        h.restore_default_contacts();
        assert_eq!(h.full_simulate(), baseline);
    }

    #[test]
    #[should_panic(expected = "does not match the hierarchy wiring")]
    fn mismatched_layout_panics() {
        let rows = vec![vec![vec![0.0]; COLUMNS]; ROWS];
        let layout: ContactLayout = serde_json::from_value(serde_json::json!({ "rows": rows })).unwrap();
        Hierarchy::with_contacts(layout);
    }

    #[test]
    #[should_panic(expected = "outside 0..=3")]
    fn dial_index_out_of_range_panics() {
        Hierarchy::new().set_dial_value(4, 1);
    }
}
