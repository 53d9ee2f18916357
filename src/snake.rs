use crate::input::Heading;

/// Board position in pixel coordinates.
///
/// Both axes are multiples of the cell size while the cell is on the board;
/// a freshly grown tail segment briefly sits at the off-board sentinel until
/// the next step overwrites it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies inside a `width`×`height` board.
    #[must_use]
    pub fn is_inside(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// Placeholder coordinates for a just-grown tail segment. Never a legal
/// board position, and never equal to any position the head can reach.
const TAIL_SENTINEL: Cell = Cell { x: -1, y: -1 };

/// The snake: an ordered chain of body segments plus a travel heading.
///
/// Index 0 is the head; insertion order is head-to-tail. The body moves by
/// an in-place shift each tick, so no per-segment velocity is stored.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Cell>,
    heading: Heading,
}

impl Snake {
    /// Creates a snake of `length` stacked segments at `start`.
    #[must_use]
    pub fn new(start: Cell, length: usize, heading: Heading) -> Self {
        Self {
            segments: vec![start; length.max(1)],
            heading,
        }
    }

    /// Creates a snake from explicit segments (index 0 is the head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Heading) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments, heading }
    }

    /// Sets the travel heading.
    ///
    /// A request for the exact opposite of the current heading is ignored;
    /// this is the only guard against instant self-collision by reversal.
    pub fn set_heading(&mut self, heading: Heading) {
        if heading == self.heading.opposite() {
            return;
        }
        self.heading = heading;
    }

    /// Appends one tail segment at the off-board sentinel.
    ///
    /// The new segment gets its real coordinates on the next [`step`],
    /// when the body shift pulls it onto the old tail position.
    ///
    /// [`step`]: Snake::step
    pub fn grow(&mut self) {
        self.segments.push(TAIL_SENTINEL);
    }

    /// Advances the whole body by one cell.
    ///
    /// Segments shift tail-to-head first (each ends up exactly where its
    /// predecessor was), then the head moves one `cell_size` along the
    /// current heading. The order is load-bearing: head-first would smear
    /// the head position down the body.
    pub fn step(&mut self, cell_size: i32) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let head = &mut self.segments[0];
        match self.heading {
            Heading::Up => head.y -= cell_size,
            Heading::Down => head.y += cell_size,
            Heading::Left => head.x -= cell_size,
            Heading::Right => head.x += cell_size,
        }
    }

    /// Returns true when the head occupies the same cell as a tail segment.
    ///
    /// Only segments from index 3 onward are tested. With one-cell-per-tick
    /// motion the three segments behind the head can never be re-entered,
    /// so they are exempt.
    #[must_use]
    pub fn head_hits_tail(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(3).any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Returns the current travel heading.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments. Never true in practice; the
    /// constructors guarantee at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }
}
