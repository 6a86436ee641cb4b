pub mod node;
pub mod placement;
pub mod shape;
pub mod style;

pub use node::*;
pub use placement::*;
pub use shape::*;
pub use style::*;
