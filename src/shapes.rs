//! Drawable shapes behind a single `Shape` trait.
//!
//! Each shape knows how to draw itself, so code that holds a
//! `Box<dyn Shape>` never has to branch on the concrete type. Adding a
//! new shape means adding a new `impl Shape`, nothing else.

use std::io::{self, Write};

use tracing::debug;

/// A plain coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }
}

pub trait Shape {
    fn center(&self) -> Point;

    /// Fixed label of the concrete type, e.g. `"Circle"`.
    fn type_label(&self) -> &'static str;

    /// Writes this shape's single draw line to `out`.
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Any radius is accepted, including zero and negative values.
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Shape for Circle {
    fn center(&self) -> Point {
        self.center
    }

    fn type_label(&self) -> &'static str {
        "Circle"
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!(radius = self.radius, x = self.center.x, y = self.center.y, "drawing circle");
        writeln!(out, "Draw Circle!")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    center: Point,
    side: i32,
}

impl Square {
    pub fn new(center: Point, side: i32) -> Self {
        Self { center, side }
    }

    pub fn side(&self) -> i32 {
        self.side
    }
}

impl Shape for Square {
    fn center(&self) -> Point {
        self.center
    }

    fn type_label(&self) -> &'static str {
        "Square"
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!(side = self.side, x = self.center.x, y = self.center.y, "drawing square");
        writeln!(out, "Draw Square!")
    }
}

// Not part of the default scene; lives here to show a shape can be added
// without touching DrawManager.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    center: Point,
    side: i32,
}

impl Triangle {
    pub fn new(center: Point, side: i32) -> Self {
        Self { center, side }
    }

    pub fn side(&self) -> i32 {
        self.side
    }
}

impl Shape for Triangle {
    fn center(&self) -> Point {
        self.center
    }

    fn type_label(&self) -> &'static str {
        "Triangle"
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!(side = self.side, "drawing triangle");
        writeln!(out, "Draw Triangle!")
    }
}
