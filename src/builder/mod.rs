//! Step-wise computer construction

pub mod preset;

pub use preset::PresetBuilder;

use crate::data::Computer;
use std::fmt;

/// Step-wise construction of a [`Computer`].
///
/// Each step overwrites one field of the in-progress computer with a value
/// chosen by the implementation. Steps can run in any order and any subset;
/// skipped steps leave their field unset. [`get_result`] hands the computer
/// over and starts a fresh, fully unset one.
///
/// [`get_result`]: ComputerBuilder::get_result
pub trait ComputerBuilder: fmt::Debug {
    fn set_cpu(&mut self);
    fn set_gpu(&mut self);
    fn set_ram(&mut self);
    fn set_storage(&mut self);
    fn set_os(&mut self);
    fn set_additional_components(&mut self);
    fn set_cooling_system(&mut self);
    fn set_power_supply(&mut self);

    /// Take the in-progress computer, leaving an unset one in its place
    fn get_result(&mut self) -> Computer;
}

/// One builder step, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Step {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Os,
    #[value(alias = "accessories")]
    AdditionalComponents,
    #[value(alias = "cooling")]
    CoolingSystem,
    #[value(alias = "psu")]
    PowerSupply,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Cpu,
        Step::Gpu,
        Step::Ram,
        Step::Storage,
        Step::Os,
        Step::AdditionalComponents,
        Step::CoolingSystem,
        Step::PowerSupply,
    ];

    /// Run this step on `builder`
    pub fn apply(self, builder: &mut dyn ComputerBuilder) {
        match self {
            Step::Cpu => builder.set_cpu(),
            Step::Gpu => builder.set_gpu(),
            Step::Ram => builder.set_ram(),
            Step::Storage => builder.set_storage(),
            Step::Os => builder.set_os(),
            Step::AdditionalComponents => builder.set_additional_components(),
            Step::CoolingSystem => builder.set_cooling_system(),
            Step::PowerSupply => builder.set_power_supply(),
        }
    }
}

/// Run `steps` in order on `builder`
pub fn apply_steps(builder: &mut dyn ComputerBuilder, steps: &[Step]) {
    for step in steps {
        tracing::trace!(?step, "applying step");
        step.apply(builder);
    }
}
