use std::fmt;

use crate::color::{Fill, Rgba};
use crate::device::PointerEvent;
use crate::grid::{CellId, Grid};
use crate::layout::GridLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Paint,
    Erase,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Paint => write!(f, "PAINT"),
            Mode::Erase => write!(f, "ERASE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub is_painting: bool,
    pub mode: Mode,
    pub active_color: Rgba,
}

impl InteractionState {
    pub fn new(mode: Mode, active_color: Rgba) -> Self {
        Self {
            is_painting: false,
            mode,
            active_color,
        }
    }

    /// The fill the current mode produces, read at the moment it is applied.
    pub fn effect(&self) -> Fill {
        match self.mode {
            Mode::Paint => Fill::Painted(self.active_color),
            Mode::Erase => Fill::Transparent,
        }
    }
}

/// Drives the drag-paint protocol over one grid.
#[derive(Debug, Default)]
pub struct PaintController {
    state: InteractionState,
}

impl PaintController {
    pub fn new(state: InteractionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state.is_painting
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.state.active_color = color;
    }

    pub fn pointer_down(&mut self, grid: &mut Grid, cell: CellId) -> bool {
        self.state.is_painting = true;
        log::debug!("Pointer down on {} ({})", cell, self.state.mode);
        self.apply(grid, cell)
    }

    pub fn pointer_move(&mut self, grid: &mut Grid, target: Option<CellId>) -> bool {
        match target {
            Some(cell) if self.state.is_painting => self.apply(grid, cell),
            _ => false,
        }
    }

    pub fn pointer_up(&mut self) {
        if self.state.is_painting {
            log::debug!("Pointer up, painting stopped");
        }
        self.state.is_painting = false;
    }

    pub fn pointer_cancel(&mut self) {
        if self.state.is_painting {
            log::debug!("Pointer cancelled, painting stopped");
        }
        self.state.is_painting = false;
    }

    /// Routes a unified pointer event. Returns true when a cell changed.
    pub fn handle(
        &mut self,
        grid: Option<&mut Grid>,
        layout: Option<&GridLayout>,
        event: PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::Up => {
                self.pointer_up();
                false
            }
            PointerEvent::Cancel => {
                self.pointer_cancel();
                false
            }
            PointerEvent::Down(point) => {
                let (Some(grid), Some(layout)) = (grid, layout) else {
                    return false;
                };
                match layout.hit_test(point.x, point.y) {
                    Some(cell) => self.pointer_down(grid, cell),
                    None => false,
                }
            }
            PointerEvent::Move(point) => {
                if !self.state.is_painting {
                    return false;
                }
                let (Some(grid), Some(layout)) = (grid, layout) else {
                    return false;
                };
                let target = layout.hit_test(point.x, point.y);
                self.pointer_move(grid, target)
            }
        }
    }

    fn apply(&self, grid: &mut Grid, cell: CellId) -> bool {
        let effect = self.state.effect();
        grid.cell_mut(cell)
            .map(|target| target.set_fill(effect))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Point;
    use crate::grid::build_grid;
    use crate::layout::Viewport;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    fn fill_at(grid: &Grid, row: u32, col: u32) -> Fill {
        grid.cell(CellId::new(row, col)).unwrap().fill()
    }

    fn controller() -> PaintController {
        PaintController::new(InteractionState::new(Mode::Paint, RED))
    }

    #[test]
    fn pointer_down_paints_first_cell() {
        let mut grid = build_grid(3, 3).unwrap();
        let mut paint = controller();
        assert!(paint.pointer_down(&mut grid, CellId::new(1, 1)));
        assert!(paint.is_painting());
        assert_eq!(fill_at(&grid, 1, 1), Fill::Painted(RED));
    }

    #[test]
    fn repeated_effects_are_idempotent() {
        let mut grid = build_grid(2, 2).unwrap();
        let mut paint = controller();
        let cell = CellId::new(0, 1);
        assert!(paint.pointer_down(&mut grid, cell));
        assert!(!paint.pointer_move(&mut grid, Some(cell)));
        assert_eq!(fill_at(&grid, 0, 1), Fill::Painted(RED));

        paint.set_mode(Mode::Erase);
        assert!(paint.pointer_move(&mut grid, Some(cell)));
        assert!(!paint.pointer_move(&mut grid, Some(cell)));
        assert_eq!(fill_at(&grid, 0, 1), Fill::Transparent);
    }

    #[test]
    fn mode_switch_mid_drag_erases_next_cells() {
        let mut grid = build_grid(4, 1).unwrap();
        let mut paint = controller();
        paint.pointer_down(&mut grid, CellId::new(0, 0));
        paint.pointer_move(&mut grid, Some(CellId::new(0, 1)));

        paint.set_mode(Mode::Erase);
        assert!(paint.is_painting());
        paint.pointer_move(&mut grid, Some(CellId::new(0, 1)));
        paint.pointer_move(&mut grid, Some(CellId::new(0, 2)));

        assert_eq!(fill_at(&grid, 0, 0), Fill::Painted(RED));
        assert_eq!(fill_at(&grid, 0, 1), Fill::Transparent);
        assert_eq!(fill_at(&grid, 0, 2), Fill::Transparent);
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn color_change_mid_drag_applies_to_next_cell() {
        let mut grid = build_grid(3, 1).unwrap();
        let mut paint = controller();
        paint.pointer_down(&mut grid, CellId::new(0, 0));
        paint.set_color(BLUE);
        paint.pointer_move(&mut grid, Some(CellId::new(0, 1)));

        assert_eq!(fill_at(&grid, 0, 0), Fill::Painted(RED));
        assert_eq!(fill_at(&grid, 0, 1), Fill::Painted(BLUE));
    }

    #[test]
    fn release_and_cancel_return_to_idle() {
        let mut grid = build_grid(3, 1).unwrap();
        let mut paint = controller();

        paint.pointer_down(&mut grid, CellId::new(0, 0));
        paint.pointer_up();
        assert!(!paint.is_painting());
        assert!(!paint.pointer_move(&mut grid, Some(CellId::new(0, 1))));

        paint.pointer_down(&mut grid, CellId::new(0, 0));
        paint.pointer_cancel();
        assert!(!paint.is_painting());
        assert!(!paint.pointer_move(&mut grid, Some(CellId::new(0, 2))));
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn moves_off_grid_are_ignored() {
        let mut grid = build_grid(3, 1).unwrap();
        let mut paint = controller();
        paint.pointer_down(&mut grid, CellId::new(0, 0));
        assert!(!paint.pointer_move(&mut grid, None));
        assert!(!paint.pointer_move(&mut grid, Some(CellId::new(5, 5))));
        assert!(paint.is_painting());
    }

    #[test]
    fn handle_hit_tests_every_move() {
        let mut grid = build_grid(3, 3).unwrap();
        let layout = GridLayout::compute(Viewport::new(320, 320, 0), 3, 3);
        let mut paint = controller();

        // press outside the grid does not start a drag
        assert!(!paint.handle(
            Some(&mut grid),
            Some(&layout),
            PointerEvent::Down(Point::new(1.0, 1.0))
        ));
        assert!(!paint.is_painting());

        let down = PointerEvent::Down(Point::new(150.0, 150.0));
        assert!(paint.handle(Some(&mut grid), Some(&layout), down));
        let across = PointerEvent::Move(Point::new(250.0, 150.0));
        assert!(paint.handle(Some(&mut grid), Some(&layout), across));
        let outside = PointerEvent::Move(Point::new(500.0, 500.0));
        assert!(!paint.handle(Some(&mut grid), Some(&layout), outside));
        assert!(!paint.handle(Some(&mut grid), Some(&layout), PointerEvent::Up));

        let idle_move = PointerEvent::Move(Point::new(50.0, 50.0));
        assert!(!paint.handle(Some(&mut grid), Some(&layout), idle_move));
        assert_eq!(grid.painted_count(), 2);
        assert_eq!(fill_at(&grid, 1, 2), Fill::Painted(RED));
    }

    #[test]
    fn handle_without_grid_only_tracks_release() {
        let mut paint = controller();
        assert!(!paint.handle(None, None, PointerEvent::Down(Point::new(1.0, 1.0))));
        assert!(!paint.handle(None, None, PointerEvent::Cancel));
        assert!(!paint.is_painting());
    }
}
