//! rigsmith library
//!
//! Assembles computer configurations step by step with the Builder pattern:
//! preset builders fill in components, a director sequences the steps into
//! named recipes.

pub mod error;
pub mod data;
pub mod builder;
pub mod director;
pub mod utils;
pub mod config;
pub mod display;
pub mod showcase;

pub use error::{RigsmithError, Result};
pub use data::{Computer, Preset, PresetCatalog, Variant};
pub use builder::{ComputerBuilder, PresetBuilder, Step};
pub use director::{ComputerDirector, Recipe};

/// Build the catalog preset `name` with `recipe`
pub fn build_preset(catalog: &PresetCatalog, name: &str, recipe: Recipe) -> Result<Computer> {
    let preset = catalog.get(name)?.clone();
    Ok(director::construct(Box::new(PresetBuilder::new(preset)), recipe))
}

/// Build the catalog preset `name` by running `steps` directly, without a director
pub fn build_preset_with_steps(catalog: &PresetCatalog, name: &str, steps: &[Step]) -> Result<Computer> {
    let mut preset_builder = PresetBuilder::new(catalog.get(name)?.clone());
    builder::apply_steps(&mut preset_builder, steps);
    Ok(preset_builder.get_result())
}
