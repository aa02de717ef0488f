use crate::error::CarouselError;
use crate::item::Item;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,  // Last transition moved to the next item
    Backward, // Last transition moved to the previous item
}

impl Direction {
    /// Signed magnitude used to mirror transition offsets.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Cursor over a fixed, non-empty item collection.
///
/// The cursor only ever moves by modular steps, so it is always a valid
/// index. Neighbours are derived from it on demand.
#[derive(Debug, Clone)]
pub struct CarouselState {
    items: Vec<Item>,
    cursor: usize,
    direction: Direction,
    key: u64,
}

impl CarouselState {
    pub fn new(items: Vec<Item>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCollection);
        }
        Ok(Self {
            items,
            cursor: 0,
            direction: Direction::Forward,
            key: 0,
        })
    }

    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.items.len();
        self.direction = Direction::Forward;
        self.key += 1;
    }

    pub fn retreat(&mut self) {
        let n = self.items.len();
        self.cursor = (self.cursor + n - 1) % n;
        self.direction = Direction::Backward;
        self.key += 1;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Identity of the active item instance; changes on every transition,
    /// including self-loops on a single-item carousel.
    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn current(&self) -> &Item {
        &self.items[self.cursor]
    }

    pub fn previous_index(&self) -> usize {
        let n = self.items.len();
        (self.cursor + n - 1) % n
    }

    pub fn next_index(&self) -> usize {
        (self.cursor + 1) % self.items.len()
    }

    pub fn previous(&self) -> &Item {
        &self.items[self.previous_index()]
    }

    pub fn next(&self) -> &Item {
        &self.items[self.next_index()]
    }
}
