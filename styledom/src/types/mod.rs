mod appearance;
mod color;
mod edges;
mod enums;
mod space;
mod style;
mod value;

pub use appearance::Appearance;
pub use color::{Color, ColorError, Rgb};
pub use edges::Edges;
pub use enums::{Display, TextStyle, Wrap};
pub use space::SpaceProps;
pub use style::StyleProps;
pub use value::{Dimension, Responsive, Size};
