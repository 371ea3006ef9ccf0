//! Core data types for the monitor comparator.
//!
//! This module defines the monitor record, the keyboard overlay, and the
//! `DeskSetup` state container that owns the in-memory object list and all of
//! its mutator operations. Derived state (physical dimensions, stack order,
//! occlusion) is recomputed here after every qualifying mutation.

use crate::constants::{
    KEYBOARD_COMPACT_INCHES, KEYBOARD_DEFAULT_POSITION, KEYBOARD_FULL_SIZE_INCHES,
    MONITOR_COLORS, PIXELS_PER_INCH,
};
use crate::geometry::{bounding_box, derive_monitor_metrics, Rect};
use crate::occlusion::{compute_obscured, StackedRect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for monitors.
pub type MonitorId = Uuid;

/// Identifies any object placed on the canvas: a monitor or the keyboard overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// A monitor.
    Monitor(MonitorId),
    /// The singleton keyboard overlay.
    Keyboard,
}

/// Aspect ratio as a width/height pair, e.g. 16:9.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AspectRatio {
    /// Width component.
    pub w: f32,
    /// Height component.
    pub h: f32,
}

/// Pixel resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    /// Horizontal pixels.
    pub w: u32,
    /// Vertical pixels.
    pub h: u32,
}

/// Physical orientation of a monitor on the desk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    /// Wider than tall (the default).
    Landscape,
    /// Rotated 90°, taller than wide.
    Portrait,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }
}

/// Visibility/size mode of the keyboard overlay used for scale reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyboardMode {
    /// Not shown; excluded from snapping and occlusion.
    Hidden,
    /// Full-size (100%) keyboard.
    FullSize,
    /// Compact (75%) keyboard.
    Compact,
}

impl KeyboardMode {
    /// Physical footprint in inches, or `None` when hidden.
    pub fn dimensions_inches(self) -> Option<(f32, f32)> {
        match self {
            KeyboardMode::Hidden => None,
            KeyboardMode::FullSize => Some(KEYBOARD_FULL_SIZE_INCHES),
            KeyboardMode::Compact => Some(KEYBOARD_COMPACT_INCHES),
        }
    }

    /// Short label for the mode switch in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            KeyboardMode::Hidden => "Off",
            KeyboardMode::FullSize => "100%",
            KeyboardMode::Compact => "75%",
        }
    }
}

/// User-entered specification for a new monitor.
///
/// The add-monitor form validates positivity before calling [`DeskSetup::add_monitor`];
/// the core assumes every spec it receives passes [`MonitorSpec::is_valid`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonitorSpec {
    /// Nominal diagonal size in inches.
    pub diagonal: f32,
    /// Aspect ratio of the panel.
    pub aspect_ratio: AspectRatio,
    /// Native pixel resolution.
    pub resolution: Resolution,
}

impl MonitorSpec {
    /// Whether all quantities are positive and finite.
    pub fn is_valid(&self) -> bool {
        self.diagonal.is_finite()
            && self.diagonal > 0.0
            && self.aspect_ratio.w.is_finite()
            && self.aspect_ratio.w > 0.0
            && self.aspect_ratio.h.is_finite()
            && self.aspect_ratio.h > 0.0
            && self.resolution.w > 0
            && self.resolution.h > 0
    }
}

/// A monitor placed on the virtual desk.
///
/// `ppi`, `width_inches` and `height_inches` are pure functions of the spec
/// fields and are recomputed whenever any of them changes; they are never
/// edited directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    /// Unique identifier.
    pub id: MonitorId,
    /// User-displayable name.
    pub name: String,
    /// Nominal diagonal size in inches.
    pub diagonal: f32,
    /// Aspect ratio of the panel.
    pub aspect_ratio: AspectRatio,
    /// Native pixel resolution.
    pub resolution: Resolution,
    /// Derived pixels per inch.
    pub ppi: f32,
    /// Derived physical width in inches (pre-rotation).
    pub width_inches: f32,
    /// Derived physical height in inches (pre-rotation).
    pub height_inches: f32,
    /// Whether the monitor is shown on the canvas and participates in
    /// snapping and occlusion.
    pub visible: bool,
    /// Landscape or portrait.
    pub orientation: Orientation,
    /// Top-left corner in canvas-space coordinates.
    pub position: (f32, f32),
    /// Draw order among visible monitors; higher draws on top. Reassigned by
    /// [`DeskSetup`] on every qualifying mutation.
    pub stack_order: u32,
    /// Distinguishing border color (RGB).
    pub color: [u8; 3],
    /// Monotonically increasing creation counter; tie-break for stacking.
    pub created_seq: u64,
}

impl Monitor {
    fn new(
        spec: MonitorSpec,
        name: String,
        color: [u8; 3],
        position: (f32, f32),
        created_seq: u64,
    ) -> Self {
        let metrics = derive_monitor_metrics(spec.diagonal, spec.aspect_ratio, spec.resolution);
        Self {
            id: Uuid::new_v4(),
            name,
            diagonal: spec.diagonal,
            aspect_ratio: spec.aspect_ratio,
            resolution: spec.resolution,
            ppi: metrics.ppi,
            width_inches: metrics.width_inches,
            height_inches: metrics.height_inches,
            visible: true,
            orientation: Orientation::Landscape,
            position,
            stack_order: 0,
            color,
            created_seq,
        }
    }

    /// Recomputes the derived physical dimensions from the spec fields.
    fn rederive(&mut self) {
        let metrics = derive_monitor_metrics(self.diagonal, self.aspect_ratio, self.resolution);
        self.ppi = metrics.ppi;
        self.width_inches = metrics.width_inches;
        self.height_inches = metrics.height_inches;
    }

    /// Canvas-space bounding box, accounting for orientation.
    pub fn rect(&self) -> Rect {
        bounding_box(
            self.position,
            self.width_inches,
            self.height_inches,
            self.orientation,
            PIXELS_PER_INCH,
        )
    }
}

/// Partial update applied to a monitor by [`DeskSetup::update_monitor`].
///
/// Changing the diagonal, aspect ratio or resolution triggers re-derivation of
/// the physical dimensions; size and visibility changes trigger restacking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorPatch {
    /// New top-left position.
    pub position: Option<(f32, f32)>,
    /// New orientation.
    pub orientation: Option<Orientation>,
    /// New visibility.
    pub visible: Option<bool>,
    /// New display name.
    pub name: Option<String>,
    /// New diagonal size.
    pub diagonal: Option<f32>,
    /// New aspect ratio.
    pub aspect_ratio: Option<AspectRatio>,
    /// New resolution.
    pub resolution: Option<Resolution>,
}

/// The desk: every placed object and the mutators operating on them.
///
/// Owns the monitor list, the singleton keyboard overlay, and the counters for
/// default names and creation order. All mutation goes through the methods
/// here so derived state stays consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskSetup {
    /// All monitors, visible or not, in creation order.
    pub monitors: Vec<Monitor>,
    /// Current keyboard overlay mode.
    pub keyboard_mode: KeyboardMode,
    /// Top-left corner of the keyboard overlay in canvas space.
    pub keyboard_position: (f32, f32),
    /// Counter for generating default monitor names.
    next_monitor_number: u32,
    /// Counter for `created_seq` assignment.
    next_created_seq: u64,
}

impl Default for DeskSetup {
    fn default() -> Self {
        Self {
            monitors: Vec::new(),
            keyboard_mode: KeyboardMode::Hidden,
            keyboard_position: KEYBOARD_DEFAULT_POSITION,
            next_monitor_number: 1,
            next_created_seq: 0,
        }
    }
}

impl DeskSetup {
    /// Creates an empty desk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the desk to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a desk from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a monitor from a pre-validated spec and returns its id.
    ///
    /// Assigns a default name, the first unused palette color, and a staggered
    /// spawn position, then reassigns stack order.
    pub fn add_monitor(&mut self, spec: MonitorSpec) -> MonitorId {
        debug_assert!(spec.is_valid(), "spec must be validated by the form");

        let color = self.next_color();
        let name = format!("Monitor {}", self.next_monitor_number);
        let position = (20.0, 20.0 + (self.monitors.len() as f32 * 30.0) % 200.0);
        let created_seq = self.next_created_seq;

        let monitor = Monitor::new(spec, name, color, position, created_seq);
        let id = monitor.id;
        log::debug!("adding {} ({}\", {:?})", monitor.name, spec.diagonal, spec.resolution);

        self.monitors.push(monitor);
        self.next_monitor_number += 1;
        self.next_created_seq += 1;
        self.restack();
        id
    }

    /// First palette color not already in use, wrapping by index once the
    /// palette is exhausted.
    fn next_color(&self) -> [u8; 3] {
        let used: Vec<[u8; 3]> = self.monitors.iter().map(|m| m.color).collect();
        MONITOR_COLORS
            .iter()
            .find(|c| !used.contains(*c))
            .copied()
            .unwrap_or(MONITOR_COLORS[self.monitors.len() % MONITOR_COLORS.len()])
    }

    /// Looks up a monitor by id.
    pub fn monitor(&self, id: MonitorId) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.id == id)
    }

    fn monitor_mut(&mut self, id: MonitorId) -> Option<&mut Monitor> {
        self.monitors.iter_mut().find(|m| m.id == id)
    }

    /// Applies a partial patch to a monitor.
    ///
    /// Re-derives physical dimensions when the spec fields change and
    /// reassigns stack order when size or visibility changes. Referencing a
    /// missing id is a logged no-op returning `false`.
    pub fn update_monitor(&mut self, id: MonitorId, patch: MonitorPatch) -> bool {
        let Some(monitor) = self.monitor_mut(id) else {
            log::warn!("update for missing monitor {id}");
            return false;
        };

        let mut size_changed = false;
        let mut composition_changed = false;

        if let Some(position) = patch.position {
            monitor.position = position;
        }
        if let Some(orientation) = patch.orientation {
            monitor.orientation = orientation;
        }
        if let Some(name) = patch.name {
            monitor.name = name;
        }
        if let Some(visible) = patch.visible {
            if monitor.visible != visible {
                composition_changed = true;
            }
            monitor.visible = visible;
        }
        if let Some(diagonal) = patch.diagonal {
            monitor.diagonal = diagonal;
            size_changed = true;
        }
        if let Some(aspect_ratio) = patch.aspect_ratio {
            monitor.aspect_ratio = aspect_ratio;
            size_changed = true;
        }
        if let Some(resolution) = patch.resolution {
            monitor.resolution = resolution;
            size_changed = true;
        }

        if size_changed {
            monitor.rederive();
        }
        if size_changed || composition_changed {
            self.restack();
        }
        true
    }

    /// Removes a monitor. Returns `false` if the id does not exist.
    pub fn delete_monitor(&mut self, id: MonitorId) -> bool {
        let before = self.monitors.len();
        self.monitors.retain(|m| m.id != id);
        let removed = self.monitors.len() != before;
        if removed {
            self.restack();
        } else {
            log::warn!("delete for missing monitor {id}");
        }
        removed
    }

    /// Renames a monitor. Returns `false` if the id does not exist.
    pub fn rename_monitor(&mut self, id: MonitorId, new_name: impl Into<String>) -> bool {
        self.update_monitor(
            id,
            MonitorPatch {
                name: Some(new_name.into()),
                ..Default::default()
            },
        )
    }

    /// Shows, hides or resizes the keyboard overlay.
    pub fn set_keyboard_mode(&mut self, mode: KeyboardMode) {
        self.keyboard_mode = mode;
    }

    /// Moves the keyboard overlay.
    pub fn set_keyboard_position(&mut self, position: (f32, f32)) {
        self.keyboard_position = position;
    }

    /// Canvas-space bounding box of the keyboard overlay, or `None` when hidden.
    pub fn keyboard_rect(&self) -> Option<Rect> {
        let (w, h) = self.keyboard_mode.dimensions_inches()?;
        Some(Rect::from_pos_size(
            self.keyboard_position,
            w * PIXELS_PER_INCH,
            h * PIXELS_PER_INCH,
        ))
    }

    /// All visible monitors.
    pub fn visible_monitors(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter().filter(|m| m.visible)
    }

    /// Reassigns `stack_order` for all visible monitors.
    ///
    /// Visible monitors are sorted by descending footprint area, tie-broken by
    /// ascending creation order, and ranked `1..=N`. Smaller monitors end up
    /// on top, so nothing disappears completely behind a larger panel.
    fn restack(&mut self) {
        let mut order: Vec<(usize, f32, u64)> = self
            .monitors
            .iter()
            .enumerate()
            .filter(|(_, m)| m.visible)
            .map(|(i, m)| (i, m.rect().area(), m.created_seq))
            .collect();
        order.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.2.cmp(&b.2))
        });
        for (rank, (i, _, _)) in order.into_iter().enumerate() {
            self.monitors[i].stack_order = rank as u32 + 1;
        }
    }

    /// Every visible placed object with its footprint and draw order.
    ///
    /// The keyboard, when shown, stacks above all monitors.
    pub fn stacked_rects(&self) -> Vec<StackedRect> {
        let mut objects: Vec<StackedRect> = self
            .visible_monitors()
            .map(|m| StackedRect {
                id: ObjectId::Monitor(m.id),
                rect: m.rect(),
                stack_order: m.stack_order,
            })
            .collect();
        if let Some(rect) = self.keyboard_rect() {
            let top = objects.iter().map(|o| o.stack_order).max().unwrap_or(0);
            objects.push(StackedRect {
                id: ObjectId::Keyboard,
                rect,
                stack_order: top + 1,
            });
        }
        objects
    }

    /// Ids of all objects currently covered by a smaller, higher object.
    pub fn obscured_ids(&self) -> HashSet<ObjectId> {
        compute_obscured(&self.stacked_rects())
    }

    /// Canvas-space bounding box of any placed object.
    pub fn object_rect(&self, id: ObjectId) -> Option<Rect> {
        match id {
            ObjectId::Monitor(id) => self.monitor(id).filter(|m| m.visible).map(|m| m.rect()),
            ObjectId::Keyboard => self.keyboard_rect(),
        }
    }

    /// Footprints a dragged object may snap against: every other visible object.
    pub fn snap_targets(&self, moving: ObjectId) -> Vec<Rect> {
        self.stacked_rects()
            .into_iter()
            .filter(|o| o.id != moving)
            .map(|o| o.rect)
            .collect()
    }

    /// Maximum right/bottom bounding-box extent over all visible objects.
    ///
    /// `(0, 0)` when nothing is visible.
    pub fn content_extent(&self) -> (f32, f32) {
        self.stacked_rects().iter().fold((0.0, 0.0), |acc, o| {
            (acc.0.max(o.rect.right()), acc.1.max(o.rect.bottom()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_27_1440p() -> MonitorSpec {
        MonitorSpec {
            diagonal: 27.0,
            aspect_ratio: AspectRatio { w: 16.0, h: 9.0 },
            resolution: Resolution { w: 2560, h: 1440 },
        }
    }

    fn spec_24_1080p() -> MonitorSpec {
        MonitorSpec {
            diagonal: 24.0,
            aspect_ratio: AspectRatio { w: 16.0, h: 9.0 },
            resolution: Resolution { w: 1920, h: 1080 },
        }
    }

    #[test]
    fn add_monitor_derives_metrics_and_defaults() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_27_1440p());

        let m = desk.monitor(id).expect("monitor exists");
        assert_eq!(m.name, "Monitor 1");
        assert!(m.visible);
        assert_eq!(m.orientation, Orientation::Landscape);
        assert_eq!(m.color, MONITOR_COLORS[0]);
        assert!((m.ppi - 108.786).abs() < 1e-2);
        assert!(m.width_inches > 0.0 && m.height_inches > 0.0);
        assert_eq!(m.stack_order, 1);
    }

    #[test]
    fn spec_validation_rejects_non_positive_inputs() {
        let mut spec = spec_27_1440p();
        assert!(spec.is_valid());
        spec.diagonal = 0.0;
        assert!(!spec.is_valid());
        spec.diagonal = -27.0;
        assert!(!spec.is_valid());
        spec.diagonal = f32::NAN;
        assert!(!spec.is_valid());

        let mut spec = spec_27_1440p();
        spec.aspect_ratio = AspectRatio { w: 0.0, h: 0.0 };
        assert!(!spec.is_valid());

        let mut spec = spec_27_1440p();
        spec.resolution.h = 0;
        assert!(!spec.is_valid());
    }

    #[test]
    fn monitors_get_distinct_colors_and_staggered_positions() {
        let mut desk = DeskSetup::new();
        let a = desk.add_monitor(spec_27_1440p());
        let b = desk.add_monitor(spec_24_1080p());

        let (a, b) = (desk.monitor(a).unwrap(), desk.monitor(b).unwrap());
        assert_ne!(a.color, b.color);
        assert_eq!(a.position, (20.0, 20.0));
        assert_eq!(b.position, (20.0, 50.0));
        assert_eq!(b.name, "Monitor 2");
    }

    #[test]
    fn update_size_rederives_dimensions() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_24_1080p());
        let ppi_before = desk.monitor(id).unwrap().ppi;

        let updated = desk.update_monitor(
            id,
            MonitorPatch {
                resolution: Some(Resolution { w: 3840, h: 2160 }),
                ..Default::default()
            },
        );
        assert!(updated);

        let m = desk.monitor(id).unwrap();
        assert!((m.ppi - ppi_before * 2.0).abs() < 1e-3);
    }

    #[test]
    fn update_missing_monitor_is_a_noop() {
        let mut desk = DeskSetup::new();
        desk.add_monitor(spec_27_1440p());
        let before = desk.to_json().unwrap();

        assert!(!desk.update_monitor(
            Uuid::new_v4(),
            MonitorPatch {
                position: Some((999.0, 999.0)),
                ..Default::default()
            },
        ));
        assert!(!desk.delete_monitor(Uuid::new_v4()));
        assert_eq!(desk.to_json().unwrap(), before);
    }

    #[test]
    fn rename_and_delete() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_27_1440p());

        assert!(desk.rename_monitor(id, "Office"));
        assert_eq!(desk.monitor(id).unwrap().name, "Office");

        assert!(desk.delete_monitor(id));
        assert!(desk.monitor(id).is_none());
    }

    #[test]
    fn rotation_keeps_position_and_area() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_27_1440p());
        let before = desk.monitor(id).unwrap().rect();

        desk.update_monitor(
            id,
            MonitorPatch {
                orientation: Some(Orientation::Portrait),
                ..Default::default()
            },
        );

        let after = desk.monitor(id).unwrap().rect();
        assert_eq!((after.left, after.top), (before.left, before.top));
        assert_eq!(after.width, before.height);
        assert_eq!(after.height, before.width);
    }

    #[test]
    fn stack_order_ranks_by_descending_area() {
        let mut desk = DeskSetup::new();
        let big = desk.add_monitor(spec_27_1440p());
        let small = desk.add_monitor(spec_24_1080p());

        assert_eq!(desk.monitor(big).unwrap().stack_order, 1);
        assert_eq!(desk.monitor(small).unwrap().stack_order, 2);
    }

    #[test]
    fn stack_order_ties_break_by_creation_order() {
        let mut desk = DeskSetup::new();
        let first = desk.add_monitor(spec_27_1440p());
        let second = desk.add_monitor(spec_27_1440p());

        // Identical area: the earlier monitor stays underneath.
        assert_eq!(desk.monitor(first).unwrap().stack_order, 1);
        assert_eq!(desk.monitor(second).unwrap().stack_order, 2);
    }

    #[test]
    fn stack_order_is_a_permutation_after_mutations() {
        let mut desk = DeskSetup::new();
        let a = desk.add_monitor(spec_27_1440p());
        let b = desk.add_monitor(spec_24_1080p());
        let c = desk.add_monitor(MonitorSpec {
            diagonal: 49.0,
            aspect_ratio: AspectRatio { w: 32.0, h: 9.0 },
            resolution: Resolution { w: 5120, h: 1440 },
        });

        desk.update_monitor(
            b,
            MonitorPatch {
                visible: Some(false),
                ..Default::default()
            },
        );
        let mut orders: Vec<u32> = desk.visible_monitors().map(|m| m.stack_order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2]);

        // The big ultrawide is at the bottom, the 27" on top of it.
        assert_eq!(desk.monitor(c).unwrap().stack_order, 1);
        assert_eq!(desk.monitor(a).unwrap().stack_order, 2);

        desk.update_monitor(
            b,
            MonitorPatch {
                visible: Some(true),
                ..Default::default()
            },
        );
        let mut orders: Vec<u32> = desk.visible_monitors().map(|m| m.stack_order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn same_position_stack_scenario() {
        // Three monitors of decreasing area at the same position: the smallest
        // is stacked highest and never obscured; the largest is obscured.
        let mut desk = DeskSetup::new();
        let specs = [
            MonitorSpec {
                diagonal: 34.0,
                aspect_ratio: AspectRatio { w: 21.0, h: 9.0 },
                resolution: Resolution { w: 3440, h: 1440 },
            },
            spec_27_1440p(),
            spec_24_1080p(),
        ];
        let ids: Vec<MonitorId> = specs.iter().map(|s| desk.add_monitor(*s)).collect();
        for &id in &ids {
            desk.update_monitor(
                id,
                MonitorPatch {
                    position: Some((100.0, 100.0)),
                    ..Default::default()
                },
            );
        }

        let smallest = desk.monitor(ids[2]).unwrap();
        assert_eq!(smallest.stack_order, 3);

        let obscured = desk.obscured_ids();
        assert!(!obscured.contains(&ObjectId::Monitor(ids[2])));
        assert!(obscured.contains(&ObjectId::Monitor(ids[0])));
        assert!(obscured.contains(&ObjectId::Monitor(ids[1])));
    }

    #[test]
    fn hidden_monitors_are_excluded_from_occlusion_and_snapping() {
        let mut desk = DeskSetup::new();
        let big = desk.add_monitor(spec_27_1440p());
        let small = desk.add_monitor(spec_24_1080p());
        desk.update_monitor(
            small,
            MonitorPatch {
                position: Some((20.0, 20.0)),
                ..Default::default()
            },
        );
        assert!(desk.obscured_ids().contains(&ObjectId::Monitor(big)));

        desk.update_monitor(
            small,
            MonitorPatch {
                visible: Some(false),
                ..Default::default()
            },
        );
        assert!(desk.obscured_ids().is_empty());
        assert!(desk.snap_targets(ObjectId::Keyboard).len() == 1);
        assert!(desk.object_rect(ObjectId::Monitor(small)).is_none());
    }

    #[test]
    fn keyboard_stacks_above_monitors_and_snaps_against_them() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_27_1440p());
        desk.set_keyboard_mode(KeyboardMode::FullSize);

        let objects = desk.stacked_rects();
        let kbd = objects
            .iter()
            .find(|o| o.id == ObjectId::Keyboard)
            .expect("keyboard present");
        assert!(objects
            .iter()
            .filter(|o| o.id != ObjectId::Keyboard)
            .all(|o| o.stack_order < kbd.stack_order));

        // The keyboard snaps against monitors but not against itself.
        let targets = desk.snap_targets(ObjectId::Keyboard);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0], desk.monitor(id).unwrap().rect());

        desk.set_keyboard_mode(KeyboardMode::Hidden);
        assert!(desk.keyboard_rect().is_none());
        assert_eq!(desk.snap_targets(ObjectId::Monitor(id)).len(), 0);
    }

    #[test]
    fn keyboard_modes_have_expected_footprints() {
        assert_eq!(KeyboardMode::Hidden.dimensions_inches(), None);
        let full = KeyboardMode::FullSize.dimensions_inches().unwrap();
        let compact = KeyboardMode::Compact.dimensions_inches().unwrap();
        assert!(full.0 > compact.0);
        assert_eq!(full.1, compact.1);
    }

    #[test]
    fn content_extent_tracks_visible_objects() {
        let mut desk = DeskSetup::new();
        assert_eq!(desk.content_extent(), (0.0, 0.0));

        let id = desk.add_monitor(spec_27_1440p());
        desk.update_monitor(
            id,
            MonitorPatch {
                position: Some((100.0, 200.0)),
                ..Default::default()
            },
        );
        let rect = desk.monitor(id).unwrap().rect();
        assert_eq!(desk.content_extent(), (rect.right(), rect.bottom()));

        desk.set_keyboard_mode(KeyboardMode::FullSize);
        desk.set_keyboard_position((1000.0, 1000.0));
        let kbd = desk.keyboard_rect().unwrap();
        assert_eq!(desk.content_extent(), (kbd.right(), kbd.bottom()));
    }

    #[test]
    fn desk_json_roundtrip() {
        let mut desk = DeskSetup::new();
        let id = desk.add_monitor(spec_27_1440p());
        desk.set_keyboard_mode(KeyboardMode::Compact);
        desk.rename_monitor(id, "Primary");

        let json = desk.to_json().unwrap();
        let mut restored = DeskSetup::from_json(&json).unwrap();

        assert_eq!(restored.monitors.len(), 1);
        assert_eq!(restored.monitor(id).unwrap().name, "Primary");
        assert_eq!(restored.keyboard_mode, KeyboardMode::Compact);
        // Counters survive the roundtrip so default names continue correctly.
        let next = restored.add_monitor(spec_24_1080p());
        assert_eq!(restored.monitor(next).unwrap().name, "Monitor 2");
    }
}
