//! # Design Patterns: Open/Closed Shapes and an Abstract Factory
//!
//! This crate demonstrates two classic object-oriented patterns with traits:
//!
//! ## Shapes and the Open/Closed Principle
//! - `Shape` trait with one `draw` per concrete type
//! - `DrawManager` holds `Box<dyn Shape>` and never branches on type
//! - New shapes (see `Triangle`) need no change to the manager
//!
//! ## Abstract Factory
//! - `Phone` trait with `Smartphone` and `BasicPhone` families
//! - One `PhoneFactory` per manufacturer (Nokia, Samsung, HTC)
//! - Products handed out as `Rc<dyn Smartphone>` / `Rc<dyn BasicPhone>`
//!
//! Run the demos with: `cargo run --bin design_patterns`

pub mod config;
pub mod demo;
pub mod draw_manager;
pub mod error;
pub mod factory;
pub mod manufacturer;
pub mod phones;
pub mod shapes;

pub use config::DemoConfig;
pub use draw_manager::DrawManager;
pub use error::{DemoError, Result};
pub use factory::{HtcFactory, NokiaFactory, PhoneFactory, SamsungFactory};
pub use manufacturer::Manufacturer;
pub use phones::{BasicPhone, Phone, PhoneFamily, Smartphone};
pub use shapes::{Circle, Point, Shape, Square, Triangle};
