use crate::entities::{Container, PlacedItem};

/// Outcome of a packing run: every truck that was used, each with its units in placement order.
#[derive(Clone, Debug, PartialEq)]
pub struct PackResult {
    /// The truck all units were loaded into
    pub container: Container,
    /// Placed units per truck, trucks in the order they were opened
    pub containers: Vec<Vec<PlacedItem>>,
    /// Number of trucks used
    pub count: usize,
}

impl PackResult {
    pub fn new(container: Container, containers: Vec<Vec<PlacedItem>>) -> Self {
        let count = containers.len();
        PackResult {
            container,
            containers,
            count,
        }
    }

    /// Total number of placed units
    pub fn n_placed(&self) -> usize {
        self.containers.iter().map(|c| c.len()).sum()
    }

    /// Area covered by the footprints of all placed units
    pub fn placed_area(&self) -> f32 {
        self.containers
            .iter()
            .flatten()
            .map(|pi| pi.footprint().area())
            .sum()
    }

    /// Fraction of the area of all used trucks covered by footprints, 0 if no truck is used.
    pub fn density(&self) -> f32 {
        match self.count {
            0 => 0.0,
            n => self.placed_area() / (n as f32 * self.container.area()),
        }
    }

    /// Fraction of a single truck covered by footprints, `None` if no truck has this index
    pub fn container_density(&self, index: usize) -> Option<f32> {
        let area = self
            .containers
            .get(index)?
            .iter()
            .map(|pi| pi.footprint().area())
            .sum::<f32>();
        Some(area / self.container.area())
    }
}
