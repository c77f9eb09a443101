use std::ops::Range;

// block position in world space (x, y, z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position(pub i32, pub i32, pub i32);

// half-open bounds on each axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub x: Range<i32>,
    pub y: Range<i32>,
    pub z: Range<i32>,
}

impl Region {
    pub fn new(x: Range<i32>, y: Range<i32>, z: Range<i32>) -> Self {
        Self { x, y, z }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.x.contains(&pos.0) && self.y.contains(&pos.1) && self.z.contains(&pos.2)
    }

    // y-outermost so callers can report one progress line per layer
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.y.clone().flat_map(move |y| {
            self.x
                .clone()
                .flat_map(move |x| self.z.clone().map(move |z| Position(x, y, z)))
        })
    }
}
