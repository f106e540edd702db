pub mod node;
pub mod pie_step;

pub use node::{Direction, PsNode, Traversal};
pub use pie_step::{PieStep, StepUpdate};
