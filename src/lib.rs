pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{ShowcaseSettings, TomlConfig};
pub use crate::core::{
    chooser::{NoShow, RandomChooser, RandomSource, WithNoShow, XorShiftRng},
    printer::{LinePrinter, PrintTwo},
    showcase::Showcase,
    transformer::{parse_decimal, DecimalParser},
};
pub use crate::domain::model::{ShowcaseReport, Student};
pub use crate::domain::ports::{
    BiConsumer, BinaryChooser, Printer, Supplier, Transformer, DEFAULT_NO_SHOW,
};
pub use crate::utils::error::{ContractError, Result};
