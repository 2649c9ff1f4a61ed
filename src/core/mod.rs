pub mod chooser;
pub mod printer;
pub mod showcase;
pub mod transformer;

pub use crate::domain::model::{ShowcaseReport, Student};
pub use crate::domain::ports::{BiConsumer, BinaryChooser, Printer, Supplier, Transformer};
pub use crate::utils::error::Result;
