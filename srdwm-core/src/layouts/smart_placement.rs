//! Heuristics choosing an initial geometry for new windows.
//!
//! Every strategy returns a [`PlacementResult`]. A candidate is only accepted
//! when it fits inside the monitor and is at least
//! [`MIN_WINDOW_WIDTH`]x[`MIN_WINDOW_HEIGHT`].
use crate::models::{Monitor, Window, Xyhw};
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_WIDTH: i32 = 200;
pub const MIN_WINDOW_HEIGHT: i32 = 150;
pub const GRID_MARGIN: i32 = 10;
pub const CASCADE_OFFSET: i32 = 30;
const MAX_GRID_SIZE: i32 = 4;
const GRID_COLUMNS: i32 = 2;
const CASCADE_STEP: usize = 100;
const SMART_TILE_STEP: usize = 50;
const PREFERRED_WIDTH: i32 = 800;
const PREFERRED_HEIGHT: i32 = 600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub success: bool,
    pub reason: String,
}

impl PlacementResult {
    fn failed(reason: &str) -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            success: false,
            reason: reason.to_owned(),
        }
    }

    fn placed(xyhw: Xyhw, reason: &str) -> Self {
        Self {
            x: xyhw.x(),
            y: xyhw.y(),
            width: xyhw.w(),
            height: xyhw.h(),
            success: true,
            reason: reason.to_owned(),
        }
    }

    #[must_use]
    pub const fn xyhw(&self) -> Xyhw {
        Xyhw::new(self.x, self.y, self.width, self.height)
    }
}

/// Placement state. The grid cell counter advances on every grid placement
/// and never goes back, so cells are handed out row-major in two columns.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SmartPlacement {
    grid_index: i32,
}

impl SmartPlacement {
    /// Grid placement, falling back to cascade.
    pub fn place_window(
        &mut self,
        window: &Window,
        monitor: &Monitor,
        existing: &[&Window],
    ) -> PlacementResult {
        let result = self.place_in_grid(window, monitor, existing);
        if result.success {
            return result;
        }
        tracing::debug!("{}, cascading window {}", result.reason, window.handle);
        Self::cascade_place(window, monitor, existing)
    }

    pub fn place_in_grid(
        &mut self,
        _window: &Window,
        monitor: &Monitor,
        existing: &[&Window],
    ) -> PlacementResult {
        let count = i32::try_from(existing.len()).unwrap_or(i32::MAX).saturating_add(1);
        let grid_size = optimal_grid_size(count);

        let index = self.grid_index;
        self.grid_index += 1;
        let grid_x = index % GRID_COLUMNS;
        let grid_y = index / GRID_COLUMNS;

        let cell_width =
            ((monitor.width - (grid_size + 1) * GRID_MARGIN) / grid_size).max(MIN_WINDOW_WIDTH);
        let cell_height =
            ((monitor.height - (grid_size + 1) * GRID_MARGIN) / grid_size).max(MIN_WINDOW_HEIGHT);

        let candidate = Xyhw::new(
            monitor.x + GRID_MARGIN + grid_x * (cell_width + GRID_MARGIN),
            monitor.y + GRID_MARGIN + grid_y * (cell_height + GRID_MARGIN),
            cell_width,
            cell_height,
        );
        if is_position_valid(&candidate, monitor) {
            PlacementResult::placed(candidate, "Grid placement successful")
        } else {
            PlacementResult::failed("Grid placement failed")
        }
    }

    #[must_use]
    pub fn cascade_place(
        _window: &Window,
        monitor: &Monitor,
        existing: &[&Window],
    ) -> PlacementResult {
        let right = monitor.x + monitor.width;
        let bottom = monitor.y + monitor.height;
        let (candidate, reason) = match find_free_spaces(monitor, existing).first() {
            Some(&(x, y)) => (
                Xyhw::new(
                    x,
                    y,
                    PREFERRED_WIDTH.min(right - x - CASCADE_OFFSET),
                    PREFERRED_HEIGHT.min(bottom - y - CASCADE_OFFSET),
                ),
                "Cascade placement in free space",
            ),
            None => (
                Xyhw::new(
                    monitor.x + CASCADE_OFFSET,
                    monitor.y + CASCADE_OFFSET,
                    PREFERRED_WIDTH.min(monitor.width - 2 * CASCADE_OFFSET),
                    PREFERRED_HEIGHT.min(monitor.height - 2 * CASCADE_OFFSET),
                ),
                "Default cascade placement",
            ),
        };
        if is_position_valid(&candidate, monitor) {
            PlacementResult::placed(candidate, reason)
        } else {
            PlacementResult::failed("Cascade placement failed")
        }
    }

    /// Centred rectangle of half the monitor size.
    #[must_use]
    pub fn snap_to_edge(
        _window: &Window,
        monitor: &Monitor,
        _existing: &[&Window],
    ) -> PlacementResult {
        let candidate = monitor.xyhw().center_halfed();
        if is_position_valid(&candidate, monitor) {
            PlacementResult::placed(candidate, "Snap placement successful")
        } else {
            PlacementResult::failed("Snap placement failed")
        }
    }

    /// Scores candidates by overlap with the existing windows.
    ///
    /// The score is taken from the window's current geometry rather than the
    /// candidate, so it is the same for every candidate and the first valid
    /// one wins whenever the window overlaps nothing.
    #[must_use]
    pub fn smart_tile(window: &Window, monitor: &Monitor, existing: &[&Window]) -> PlacementResult {
        let right = monitor.x + monitor.width;
        let bottom = monitor.y + monitor.height;
        let mut best_score = -1;
        let mut best = None;
        for x in (monitor.x..right - MIN_WINDOW_WIDTH).step_by(SMART_TILE_STEP) {
            for y in (monitor.y..bottom - MIN_WINDOW_HEIGHT).step_by(SMART_TILE_STEP) {
                let candidate = Xyhw::new(
                    x,
                    y,
                    PREFERRED_WIDTH.min(right - x),
                    PREFERRED_HEIGHT.min(bottom - y),
                );
                if !is_position_valid(&candidate, monitor) {
                    continue;
                }
                let score = overlap_score(window, existing);
                if score > best_score {
                    best_score = score;
                    best = Some(candidate);
                }
            }
        }
        match best {
            Some(candidate) if best_score >= 0 => {
                PlacementResult::placed(candidate, "Smart tile placement successful")
            }
            _ => PlacementResult::failed("Smart tile placement failed"),
        }
    }
}

#[must_use]
pub fn windows_overlap(a: &Window, b: &Window) -> bool {
    a.normal.overlaps(&b.normal)
}

#[must_use]
pub fn is_position_valid(candidate: &Xyhw, monitor: &Monitor) -> bool {
    monitor.xyhw().contains_xyhw(candidate)
        && candidate.w() >= MIN_WINDOW_WIDTH
        && candidate.h() >= MIN_WINDOW_HEIGHT
}

fn optimal_grid_size(window_count: i32) -> i32 {
    if window_count <= 0 {
        return 1;
    }
    let size = f64::from(window_count).sqrt().ceil() as i32;
    size.clamp(1, MAX_GRID_SIZE)
}

/// +1 for every window not overlapped, -10 for every overlap.
fn overlap_score(window: &Window, existing: &[&Window]) -> i32 {
    existing
        .iter()
        .map(|other| if windows_overlap(window, other) { -10 } else { 1 })
        .sum()
}

/// Probe positions, column by column, where a minimum sized window would
/// not overlap anything.
fn find_free_spaces(monitor: &Monitor, existing: &[&Window]) -> Vec<(i32, i32)> {
    let right = monitor.x + monitor.width;
    let bottom = monitor.y + monitor.height;
    let mut spaces = vec![];
    for x in (monitor.x..right - MIN_WINDOW_WIDTH).step_by(CASCADE_STEP) {
        for y in (monitor.y..bottom - MIN_WINDOW_HEIGHT).step_by(CASCADE_STEP) {
            let probe = Xyhw::new(x, y, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            if !existing.iter().any(|w| w.normal.overlaps(&probe)) {
                spaces.push((x, y));
            }
        }
    }
    spaces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle;

    fn window(id: i32, x: i32, y: i32, w: i32, h: i32) -> Window {
        Window::new(WindowHandle(id), "").with_geometry(x, y, w, h)
    }

    #[test]
    fn grid_with_five_existing_windows_uses_a_three_by_three_grid() {
        let monitor = Monitor::new(0, 0, 0, 1920, 1080);
        let existing: Vec<Window> = (0..5).map(|i| window(i, i * 10, 0, 50, 50)).collect();
        let existing: Vec<&Window> = existing.iter().collect();
        let mut subject = SmartPlacement::default();
        let result = subject.place_window(&window(9, 0, 0, 1, 1), &monitor, &existing);
        assert!(result.success);
        assert_eq!((result.x, result.y), (10, 10));
        assert_eq!((result.width, result.height), (626, 346));
    }

    #[test]
    fn grid_cells_are_handed_out_in_two_columns() {
        let monitor = Monitor::new(0, 0, 0, 1920, 1080);
        let mut subject = SmartPlacement::default();
        let new = window(1, 0, 0, 1, 1);
        // No existing windows: a single cell filling the monitor.
        let first = subject.place_in_grid(&new, &monitor, &[]);
        assert_eq!(first.xyhw(), Xyhw::new(10, 10, 1900, 1060));
        // The second cell lands beside the first and no longer fits.
        let second = subject.place_in_grid(&new, &monitor, &[]);
        assert!(!second.success);
        // Cascade takes over.
        let fallback = subject.place_window(&new, &monitor, &[]);
        assert!(fallback.success);
        assert_eq!(fallback.xyhw(), Xyhw::new(0, 0, 800, 600));
    }

    #[test]
    fn cascade_should_skip_occupied_probes() {
        let monitor = Monitor::new(0, 0, 0, 1920, 1080);
        let occupant = window(1, 0, 0, 150, 1080);
        let result = SmartPlacement::cascade_place(&window(2, 0, 0, 1, 1), &monitor, &[&occupant]);
        assert!(result.success);
        assert_eq!((result.x, result.y), (200, 0));
    }

    #[test]
    fn cascade_sizes_are_capped_by_the_monitor_right_edge() {
        let monitor = Monitor::new(1, 1920, 0, 1000, 1080);
        let occupant = window(1, 1920, 0, 550, 1080);
        let result = SmartPlacement::cascade_place(&window(2, 0, 0, 1, 1), &monitor, &[&occupant]);
        assert!(result.success);
        // 1920 + 1000 - 2500 - 30 remain to the right of the free spot.
        assert_eq!(result.xyhw(), Xyhw::new(2500, 0, 390, 600));
    }

    #[test]
    fn cascade_without_free_space_uses_the_default_offset() {
        let monitor = Monitor::new(0, 0, 0, 1280, 720);
        let occupant = window(1, 0, 0, 1280, 720);
        let result = SmartPlacement::cascade_place(&window(2, 0, 0, 1, 1), &monitor, &[&occupant]);
        assert_eq!(result.reason, "Default cascade placement");
        assert_eq!(result.xyhw(), Xyhw::new(30, 30, 800, 600));
    }

    #[test]
    fn snap_to_edge_centres_half_the_monitor() {
        let monitor = Monitor::new(0, 100, 0, 1600, 900);
        let result = SmartPlacement::snap_to_edge(&window(1, 0, 0, 1, 1), &monitor, &[]);
        assert_eq!(result.xyhw(), Xyhw::new(500, 225, 800, 450));
    }

    #[test]
    fn smart_tile_fails_when_the_window_overlaps_everything() {
        let monitor = Monitor::default();
        let new = window(1, 0, 0, 500, 500);
        let other = window(2, 100, 100, 100, 100);
        assert!(!SmartPlacement::smart_tile(&new, &monitor, &[&other]).success);

        let clear = window(3, 1000, 1000, 10, 10);
        let result = SmartPlacement::smart_tile(&new, &monitor, &[&clear]);
        assert!(result.success);
        assert_eq!(result.xyhw(), Xyhw::new(0, 0, 800, 600));
    }

    #[test]
    fn every_successful_placement_is_valid() {
        let monitor = Monitor::new(0, 0, 0, 1024, 768);
        let existing: Vec<Window> = (0..7).map(|i| window(i, i * 90, i * 70, 300, 200)).collect();
        let existing: Vec<&Window> = existing.iter().collect();
        let new = window(99, 10, 10, 300, 300);
        let mut subject = SmartPlacement::default();
        for _ in 0..8 {
            for result in [
                subject.place_window(&new, &monitor, &existing),
                SmartPlacement::cascade_place(&new, &monitor, &existing),
                SmartPlacement::snap_to_edge(&new, &monitor, &existing),
                SmartPlacement::smart_tile(&new, &monitor, &existing),
            ] {
                if result.success {
                    assert!(is_position_valid(&result.xyhw(), &monitor));
                }
            }
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = window(1, 0, 0, 100, 100);
        let b = window(2, 50, 50, 100, 100);
        let c = window(3, 100, 0, 100, 100);
        assert!(windows_overlap(&a, &b) && windows_overlap(&b, &a));
        assert!(!windows_overlap(&a, &c) && !windows_overlap(&c, &a));
    }
}
