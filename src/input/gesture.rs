use crate::board::Direction;

/// Drag recognizer: a press records the start point, the first movement away
/// from it is classified into a direction.
///
/// Classification is threshold-free. The axis with the strictly larger
/// absolute displacement wins, ties go vertical, and the sign picks the side
/// (screen coordinates, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    start: Option<(f64, f64)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a drag starts, replacing any unfinished one.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Feed a movement sample.
    ///
    /// Returns the swipe direction and resets when the point has moved;
    /// returns `None` with no drag in progress or zero displacement.
    pub fn update(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (start_x, start_y) = self.start?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        self.start = None;
        Some(classify(dx, dy))
    }

    /// Abandon the current drag (pointer released without moving).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

fn classify(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
