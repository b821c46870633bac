use crate::math::Vec2;

/// Append-only history of sampled positions. Insertion order is the
/// rendered path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    points: Vec<Vec2>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { points: Vec::new() }
    }

    pub fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}
