//! Group discovery and liberty counting.
//!
//! Both walks use an explicit stack with a visited bitmap, so call depth
//! stays constant no matter how large the board or the group.

use crate::board::{Grid, Point};

impl Grid {
    /// All stones orthogonally connected to `start` with the same color.
    ///
    /// Returns an empty vector for an empty or off-board point. The result
    /// is sorted and holds each point exactly once.
    pub fn find_group(&self, start: Point) -> Vec<Point> {
        let Some(color) = self.get(start) else {
            return Vec::new();
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.area()];
        let mut group = Vec::new();
        visited[start] = true;

        while let Some(pt) = stack.pop() {
            group.push(pt);
            for n in self.neighbors(pt) {
                if !visited[n] && self.get(n) == Some(color) {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        group.sort_unstable();
        group
    }

    /// Number of distinct empty points adjacent to any member of `group`.
    pub fn count_liberties(&self, group: &[Point]) -> usize {
        let mut seen = vec![false; self.area()];
        let mut libs = 0;
        for &pt in group {
            for n in self.neighbors(pt) {
                if self.is_empty(n) && !seen[n] {
                    seen[n] = true;
                    libs += 1;
                }
            }
        }
        libs
    }

    /// Liberties of the group containing `pt` (0 for an empty point).
    pub fn group_liberties(&self, pt: Point) -> usize {
        self.count_liberties(&self.find_group(pt))
    }
}
