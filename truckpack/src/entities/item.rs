/// A rectangular item to be loaded, requested `quantity` times.
/// Every copy is an independent unit sharing the same `id` and dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: u64,
    pub width: f32,
    pub height: f32,
    pub quantity: usize,
}

impl Item {
    pub fn new(id: u64, width: f32, height: f32, quantity: usize) -> Self {
        Item {
            id,
            width,
            height,
            quantity,
        }
    }

    /// Nominal area of a single unit, without margin
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
