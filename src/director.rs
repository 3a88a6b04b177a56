//! Named construction recipes over a bound builder

use crate::builder::{apply_steps, ComputerBuilder, Step};
use crate::data::Computer;
use std::fmt;

/// A named, fixed ordering of builder steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Recipe {
    /// Core hardware only: no OS, no accessories
    Basic,
    /// Core hardware, OS and accessories
    #[default]
    Full,
    /// Core hardware and OS, no accessories
    Minimal,
}

const BASIC_STEPS: &[Step] = &[
    Step::Cpu,
    Step::Gpu,
    Step::Ram,
    Step::Storage,
    Step::PowerSupply,
    Step::CoolingSystem,
];

const FULL_STEPS: &[Step] = &[
    Step::Cpu,
    Step::Gpu,
    Step::Ram,
    Step::Storage,
    Step::PowerSupply,
    Step::CoolingSystem,
    Step::Os,
    Step::AdditionalComponents,
];

const MINIMAL_STEPS: &[Step] = &[
    Step::Cpu,
    Step::Gpu,
    Step::Ram,
    Step::Storage,
    Step::PowerSupply,
    Step::CoolingSystem,
    Step::Os,
];

impl Recipe {
    pub const ALL: [Recipe; 3] = [Recipe::Basic, Recipe::Full, Recipe::Minimal];

    pub fn name(self) -> &'static str {
        match self {
            Recipe::Basic => "basic",
            Recipe::Full => "full",
            Recipe::Minimal => "minimal",
        }
    }

    /// The steps this recipe runs, in order
    pub fn steps(self) -> &'static [Step] {
        match self {
            Recipe::Basic => BASIC_STEPS,
            Recipe::Full => FULL_STEPS,
            Recipe::Minimal => MINIMAL_STEPS,
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives whichever builder is currently bound through a [`Recipe`].
///
/// The director owns the bound builder but never a computer of its own;
/// finished computers are retrieved from the builder.
#[derive(Debug)]
pub struct ComputerDirector {
    builder: Box<dyn ComputerBuilder>,
}

impl ComputerDirector {
    pub fn new(builder: Box<dyn ComputerBuilder>) -> Self {
        Self { builder }
    }

    /// Bind a different builder and hand back the previous one untouched
    pub fn set_builder(&mut self, builder: Box<dyn ComputerBuilder>) -> Box<dyn ComputerBuilder> {
        std::mem::replace(&mut self.builder, builder)
    }

    pub fn builder_mut(&mut self) -> &mut dyn ComputerBuilder {
        self.builder.as_mut()
    }

    /// Retrieve the finished computer from the bound builder
    pub fn get_result(&mut self) -> Computer {
        self.builder.get_result()
    }

    pub fn build(&mut self, recipe: Recipe) {
        tracing::debug!("Running {} recipe ({} steps)", recipe, recipe.steps().len());
        apply_steps(self.builder.as_mut(), recipe.steps());
    }

    pub fn build_basic_computer(&mut self) {
        self.build(Recipe::Basic);
    }

    pub fn build_full_computer(&mut self) {
        self.build(Recipe::Full);
    }

    pub fn build_minimal_computer(&mut self) {
        self.build(Recipe::Minimal);
    }
}

/// Build a computer from `builder` in one go: run `recipe`, then retrieve
pub fn construct(builder: Box<dyn ComputerBuilder>, recipe: Recipe) -> Computer {
    let mut director = ComputerDirector::new(builder);
    director.build(recipe);
    director.get_result()
}
