mod sketchpad;
pub use sketchpad::*;
