use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// Device state carried by a pointer event, after the host has folded mouse
/// and touch events into one shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerInput {
    /// Buttons held while the event fired.
    Mouse(MouseButtons),
    /// Number of touch points currently on the surface.
    Touch { touches: u8 },
}

impl PointerInput {
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Touch { .. })
    }

    pub const fn same_device(self, other: Self) -> bool {
        self.is_touch() == other.is_touch()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    pub input: PointerInput,
    /// Tile under the pointer on `Down`, when there is one.
    pub target: Option<TileId>,
}

impl PointerEvent {
    pub const fn down(position: Point, input: PointerInput, target: Option<TileId>) -> Self {
        Self {
            phase: PointerPhase::Down,
            position,
            input,
            target,
        }
    }

    pub const fn moved(position: Point, input: PointerInput) -> Self {
        Self {
            phase: PointerPhase::Move,
            position,
            input,
            target: None,
        }
    }

    pub const fn up(position: Point, input: PointerInput) -> Self {
        Self {
            phase: PointerPhase::Up,
            position,
            input,
            target: None,
        }
    }
}

/// Captured once when a gesture starts and kept until it ends.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureStart {
    pub origin: Point,
    pub action: Action,
    pub input: PointerInput,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Idle,
    /// Pressed on a tile, not moved yet.
    Armed,
    Tracking,
}

/// Drag-length readout shown next to the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub position: Point,
    pub count: usize,
}

/// A finished gesture, ready to be folded into the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub action: Action,
    pub tiles: Selection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    Started,
    /// The pointer moved but the selection stayed the same.
    Moved,
    SelectionChanged,
    Cancelled,
    Committed(Commit),
}

impl GestureOutcome {
    /// Whether the selected tiles may have changed.
    pub const fn has_update(&self) -> bool {
        use GestureOutcome::*;
        match self {
            Ignored => false,
            Started => true,
            Moved => false,
            SelectionChanged => true,
            Cancelled => true,
            Committed(_) => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveGesture {
    start: GestureStart,
    phase: GesturePhase,
    selection: Selection,
    indicator: Indicator,
}

/// Turns pointer events into line selections. At most one gesture is in
/// flight; anything that would start a second one is ignored or cancels the
/// current one.
///
/// The geometry is captured once, after layout. A host that resizes the board
/// has to build a new controller.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureController {
    geometry: CellGeometry,
    gesture: Option<ActiveGesture>,
}

impl GestureController {
    pub fn new(geometry: CellGeometry) -> Self {
        if geometry.is_degenerate() {
            log::warn!(
                "Tile geometry {:?} has no area, pointer positions snap to the board edges",
                geometry
            );
        }
        Self {
            geometry,
            gesture: None,
        }
    }

    pub fn from_source(source: &impl GeometrySource) -> Self {
        Self::new(source.first_cell_bounds())
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture
            .as_ref()
            .map_or(GesturePhase::Idle, |gesture| gesture.phase)
    }

    pub fn gesture_start(&self) -> Option<&GestureStart> {
        self.gesture.as_ref().map(|gesture| &gesture.start)
    }

    pub fn selection(&self) -> &[TileId] {
        self.gesture
            .as_ref()
            .map_or(&[], |gesture| gesture.selection.as_slice())
    }

    pub fn is_selected(&self, id: TileId) -> bool {
        self.selection().contains(&id)
    }

    /// Visible while a gesture is in flight.
    pub fn indicator(&self) -> Option<Indicator> {
        self.gesture.as_ref().map(|gesture| gesture.indicator)
    }

    pub fn handle(
        &mut self,
        event: &PointerEvent,
        settings: &Settings,
        puzzle: &Puzzle,
    ) -> Result<GestureOutcome> {
        use PointerPhase::*;

        let Some(gesture) = &self.gesture else {
            return match event.phase {
                Down => self.begin(event, settings, puzzle),
                Move | Up => Ok(GestureOutcome::Ignored),
            };
        };

        let start = gesture.start;
        if !start.input.same_device(event.input) {
            return Ok(GestureOutcome::Ignored);
        }

        Ok(match event.phase {
            Down if interrupts(&start, event.input, settings) => self.cancel(),
            Down => GestureOutcome::Ignored,
            Move => self.track(event.position, puzzle),
            Up => self.finish(event.position, puzzle),
        })
    }

    /// Drops the gesture in flight without committing anything.
    pub fn cancel(&mut self) -> GestureOutcome {
        match self.gesture.take() {
            Some(gesture) => {
                log::debug!(
                    "Gesture cancelled with {} tiles selected",
                    gesture.selection.len()
                );
                GestureOutcome::Cancelled
            }
            None => GestureOutcome::Ignored,
        }
    }

    fn begin(
        &mut self,
        event: &PointerEvent,
        settings: &Settings,
        puzzle: &Puzzle,
    ) -> Result<GestureOutcome> {
        let Some(target) = event.target else {
            return Ok(GestureOutcome::Ignored);
        };
        match event.input {
            PointerInput::Touch { touches } if touches != 1 => {
                return Ok(GestureOutcome::Ignored);
            }
            PointerInput::Mouse(buttons) if buttons.is_empty() => {
                return Ok(GestureOutcome::Ignored);
            }
            _ => {}
        }
        let coords = puzzle.coords_of(target)?;

        let start = GestureStart {
            origin: event.position,
            action: settings.resolve_action(event.input),
            input: event.input,
        };
        log::debug!("Gesture started on {:?} with {:?}", coords, start);

        self.gesture = Some(ActiveGesture {
            start,
            phase: GesturePhase::Armed,
            selection: vec![target],
            indicator: Indicator {
                position: event.position,
                count: 1,
            },
        });
        Ok(GestureOutcome::Started)
    }

    fn track(&mut self, position: Point, puzzle: &Puzzle) -> GestureOutcome {
        let geometry = self.geometry;
        let Some(gesture) = self.gesture.as_mut() else {
            return GestureOutcome::Ignored;
        };

        let selection = select_line(gesture.start.origin, position, &geometry, puzzle);
        gesture.phase = GesturePhase::Tracking;
        gesture.indicator = Indicator {
            position,
            count: selection.len(),
        };

        if selection == gesture.selection {
            GestureOutcome::Moved
        } else {
            log::trace!("Selection now {} tiles", selection.len());
            gesture.selection = selection;
            GestureOutcome::SelectionChanged
        }
    }

    fn finish(&mut self, position: Point, puzzle: &Puzzle) -> GestureOutcome {
        let Some(gesture) = self.gesture.take() else {
            return GestureOutcome::Ignored;
        };

        let tiles = select_line(gesture.start.origin, position, &self.geometry, puzzle);
        log::debug!("Gesture committed: {:?} on {} tiles", gesture.start.action, tiles.len());

        GestureOutcome::Committed(Commit {
            action: gesture.start.action,
            tiles,
        })
    }
}

/// Whether a press during a gesture aborts it: a second finger on a touch
/// gesture, a press that would resolve to another action in right-click mode,
/// or a newly pressed right button in toggle mode.
fn interrupts(start: &GestureStart, pressed: PointerInput, settings: &Settings) -> bool {
    match (start.input, pressed) {
        (PointerInput::Touch { .. }, PointerInput::Touch { touches }) => touches > 1,
        (PointerInput::Mouse(held), PointerInput::Mouse(buttons)) => {
            match settings.interaction_mode {
                InteractionMode::RightClick => settings.resolve_action(pressed) != start.action,
                InteractionMode::Toggle => {
                    buttons.contains(MouseButtons::RIGHT) && !held.contains(MouseButtons::RIGHT)
                }
            }
        }
        _ => false,
    }
}
