//! The guided demonstration run when rigsmith is started without a subcommand

use crate::builder::{apply_steps, ComputerBuilder, PresetBuilder, Step};
use crate::data::{Computer, PresetCatalog, Variant};
use crate::director::ComputerDirector;
use crate::error::Result;
use serde::Serialize;

/// Steps of the hand-driven build: everything but the power supply and accessories
pub const MANUAL_STEPS: &[Step] = &[
    Step::Cpu,
    Step::Gpu,
    Step::Ram,
    Step::Storage,
    Step::Os,
    Step::CoolingSystem,
];

/// Closing notes on why the construction is split into builder steps
pub const ADVANTAGES: &[&str] = &[
    "Complex construction is split into simple steps",
    "The same steps produce different representations of a computer",
    "The caller controls which steps run and in what order",
    "Construction code is isolated from the code that uses the result",
    "New kinds of computer (server, multimedia) only need a new preset",
];

/// One titled build in the demonstration
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub computer: Computer,
}

/// The whole demonstration as a single TOML document: one `[[computers]]` entry per section
pub fn to_toml(sections: &[Section]) -> Result<String> {
    #[derive(Serialize)]
    struct Document<'a> {
        computers: &'a [Section],
    }

    Ok(toml::to_string(&Document { computers: sections })?)
}

fn builder_for(catalog: &PresetCatalog, variant: Variant) -> Result<PresetBuilder> {
    Ok(PresetBuilder::new(catalog.get(variant.name())?.clone()))
}

/// Full builds of every built-in variant through one director, followed by
/// a manual gaming build that skips the director.
pub fn sections(catalog: &PresetCatalog) -> Result<Vec<Section>> {
    let titles = [
        (Variant::Gaming, "Gaming computer (full build)"),
        (Variant::Office, "Office computer (full build)"),
        (Variant::BudgetGaming, "Budget gaming computer (full build)"),
    ];

    let mut director = ComputerDirector::new(Box::new(builder_for(catalog, Variant::Gaming)?));
    let mut sections = Vec::with_capacity(titles.len() + 1);

    for (index, (variant, title)) in titles.into_iter().enumerate() {
        let builder = builder_for(catalog, variant)?;
        let summary = builder.preset().summary.clone();
        director.set_builder(Box::new(builder));
        director.build_full_computer();

        sections.push(Section {
            title: format!("{}. {}", index + 1, title),
            summary,
            computer: director.get_result(),
        });
    }

    let mut manual = builder_for(catalog, Variant::Gaming)?;
    apply_steps(&mut manual, MANUAL_STEPS);
    sections.push(Section {
        title: format!("{}. Manual build without a director", sections.len() + 1),
        summary: Some("Steps applied one at a time; the power supply is left out".to_string()),
        computer: manual.get_result(),
    });

    Ok(sections)
}

/// `variant: cooling (note)` lines comparing the built-in variants
pub fn cooling_comparison(catalog: &PresetCatalog) -> Result<Vec<String>> {
    Variant::ALL
        .into_iter()
        .map(|variant| {
            let preset = catalog.get(variant.name())?;
            Ok(match &preset.cooling_note {
                Some(note) => format!("{}: {} ({})", variant, preset.cooling, note),
                None => format!("{}: {}", variant, preset.cooling),
            })
        })
        .collect()
}
