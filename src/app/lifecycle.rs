//! Application lifecycle - construction, ticking, tool changes and teardown.

use super::state::{CanvasState, Stickyboard, SystemState, ToolState};
use crate::board::Board;
use crate::constants::CARD_SIZE;
use crate::input::coords::screen_to_canvas;
use crate::input::{
    FrameGate, InputState, ListenerSet, PointerEvent, PointerOutcome, PositionReconciler,
};
use crate::perf::ScopedTimer;
use crate::persistence::{self, Autosaver, Storage, StorageFault};
use crate::settings::Settings;
use crate::spatial_index::SpatialIndex;
use crate::types::{ItemId, Point, PointerTarget, Tool};
use std::time::Instant;
use tracing::{debug, info, warn};

impl Stickyboard {
    /// Load the board stored under `settings.storage_key` and mount.
    /// A missing or unreadable blob starts an empty board.
    pub fn new(settings: Settings, storage: Box<dyn Storage>) -> Self {
        let settings = settings.sanitized();
        let limits = settings.limits();
        let report = persistence::load(storage.as_ref(), &settings.storage_key, limits);
        if report.migrated {
            info!("Stored board came from another schema version; selection reset");
        }
        if let Some(ref fault) = report.fault {
            warn!("Starting with an empty board: {}", fault);
        }

        let board = Board::from_snapshot(report.snapshot, limits);
        let autosave = Autosaver::new(
            storage,
            settings.storage_key.clone(),
            settings.save_debounce(),
        );
        info!(items = board.len(), "Board mounted");

        Self {
            canvas: CanvasState {
                board,
                input_state: InputState::default(),
                reconciler: PositionReconciler::new(),
                frame: FrameGate::new(),
                hit_index: SpatialIndex::new(CARD_SIZE),
                indexed_revision: None,
            },
            tools: ToolState {
                selected: settings.default_tool,
            },
            system: SystemState {
                settings,
                autosave,
                mounted: true,
                load_fault: report.fault,
                dropped_on_load: report.dropped,
            },
        }
    }

    pub fn board(&self) -> &Board {
        &self.canvas.board
    }

    pub fn settings(&self) -> &Settings {
        &self.system.settings
    }

    pub fn tool(&self) -> Tool {
        self.tools.selected
    }

    pub fn input_state(&self) -> &InputState {
        &self.canvas.input_state
    }

    pub fn is_mounted(&self) -> bool {
        self.system.mounted
    }

    /// Run a store mutation and schedule a save if it changed anything.
    pub fn with_board<R>(&mut self, now: Instant, f: impl FnOnce(&mut Board) -> R) -> R {
        let before = self.canvas.board.revision();
        let result = f(&mut self.canvas.board);
        if self.system.mounted && self.canvas.board.revision() != before {
            self.system
                .autosave
                .schedule(self.canvas.board.snapshot(), now);
        }
        result
    }

    /// Drive timers. Call from the host's frame or interval callback.
    /// Returns true if a save was attempted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.system.mounted {
            return false;
        }
        self.system.autosave.poll(now)
    }

    /// Switch tools. Leaving the Move tool drops the selection; a gesture in
    /// flight is discarded.
    pub fn set_tool(&mut self, tool: Tool, now: Instant) {
        if tool == self.tools.selected {
            return;
        }
        if !self.canvas.input_state.is_idle() {
            self.reset_gesture();
        }
        let previous = std::mem::replace(&mut self.tools.selected, tool);
        if previous == Tool::Move {
            self.with_board(now, |board| board.clear_selection());
        }
        debug!(from = ?previous, to = ?tool, "Tool changed");
    }

    /// Tear down: discard any drag session and pending save and stop
    /// handling events.
    pub fn unmount(&mut self) {
        if !self.system.mounted {
            return;
        }
        self.reset_gesture();
        self.system.autosave.cancel();
        self.system.mounted = false;
        info!("Board unmounted");
    }

    /// Write any pending save now.
    pub fn flush(&mut self) -> Result<(), StorageFault> {
        self.system.autosave.flush()
    }

    /// The latest storage problem: a failed save, else a failed load.
    pub fn storage_fault(&self) -> Option<&StorageFault> {
        self.system
            .autosave
            .last_error()
            .or(self.system.load_fault.as_ref())
    }

    pub fn dismiss_storage_fault(&mut self) {
        self.system.autosave.clear_error();
        self.system.load_fault = None;
    }

    pub fn dropped_on_load(&self) -> usize {
        self.system.dropped_on_load
    }

    /// Global pointer listeners the host should have bound right now.
    pub fn listeners(&self) -> ListenerSet {
        ListenerSet::for_state(self.system.mounted, !self.canvas.input_state.is_idle())
    }

    /// Where a card should be drawn: its drag preview if it is being
    /// dragged, else its committed position.
    pub fn visual_position(&self, id: &str) -> Option<Point> {
        let item = self.canvas.board.get_item(id)?;
        Some(self.canvas.reconciler.visual_position(id, item.position))
    }

    /// Draw positions for every card in stacking order.
    pub fn visual_positions(&self) -> Vec<(ItemId, Point)> {
        self.canvas
            .board
            .items()
            .iter()
            .map(|item| {
                let at = self.canvas.reconciler.visual_position(&item.id, item.position);
                (item.id.clone(), at)
            })
            .collect()
    }

    /// Hit-test a screen point against committed card bounds.
    pub fn target_at(&mut self, screen: Point) -> PointerTarget {
        let _timer = ScopedTimer::for_handler("hit_test");
        if !screen.is_finite() {
            return PointerTarget::Canvas;
        }
        self.refresh_hit_index();
        let canvas = screen_to_canvas(screen, self.canvas.board.pan_offset());
        match self.canvas.hit_index.topmost_at(canvas) {
            Some(id) => PointerTarget::Item(id),
            None => PointerTarget::Canvas,
        }
    }

    /// `pointer_down` with the target resolved by hit testing.
    pub fn pointer_down_at(&mut self, event: &PointerEvent) -> PointerOutcome {
        if !self.system.mounted {
            return PointerOutcome::Ignored;
        }
        let target = self.target_at(event.position);
        self.pointer_down(event, &target)
    }

    fn refresh_hit_index(&mut self) {
        let revision = self.canvas.board.revision();
        if self.canvas.indexed_revision != Some(revision) {
            self.canvas.hit_index.rebuild(self.canvas.board.items());
            self.canvas.indexed_revision = Some(revision);
        }
    }
}
