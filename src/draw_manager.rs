use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::shapes::{Circle, Point, Shape, Square};

/// Owns a list of shapes and draws them in insertion order.
pub struct DrawManager {
    shapes: Vec<Box<dyn Shape>>,
}

impl DrawManager {
    /// The default scene: one square then one circle, both at the origin with size 3.
    pub fn new() -> Self {
        let origin = Point::origin();
        let mut manager = Self::empty();
        manager.add(Box::new(Square::new(origin, 3)));
        manager.add(Box::new(Circle::new(origin, 3)));
        manager
    }

    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a shape. Duplicates are fine.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.shapes.iter().map(|s| s.type_label()).collect()
    }

    pub fn draw_all<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!(count = self.shapes.len(), "drawing all shapes");
        for shape in &self.shapes {
            shape.draw(out)?;
        }
        Ok(())
    }
}

impl Default for DrawManager {
    fn default() -> Self {
        Self::new()
    }
}
