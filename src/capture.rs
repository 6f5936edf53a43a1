//! Capture resolution after a stone lands.

use log::trace;

use crate::board::{Grid, Point};

impl Grid {
    /// Remove every opponent group adjacent to `pt` that has no liberties.
    ///
    /// `pt` must already hold the stone that was just placed. Several
    /// independent groups can fall to one placement; a group touching `pt`
    /// on more than one side is only removed once. Returns the removed
    /// points, sorted.
    pub fn remove_captured(&mut self, pt: Point) -> Vec<Point> {
        let Some(color) = self.get(pt) else {
            return Vec::new();
        };
        let opponent = color.opponent();
        let mut captured: Vec<Point> = Vec::new();

        let adjacent: Vec<Point> = self.neighbors(pt).collect();
        for n in adjacent {
            // Already removed as part of a group found through another side.
            if self.get(n) != Some(opponent) {
                continue;
            }
            let group = self.find_group(n);
            if self.count_liberties(&group) == 0 {
                trace!("capturing {} {} stone(s) next to {pt}", group.len(), opponent);
                for &stone in &group {
                    self.set(stone, None);
                }
                captured.extend(group);
            }
        }
        captured.sort_unstable();
        captured
    }
}
