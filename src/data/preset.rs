//! Preset tables: the literal values each builder variant assigns

use crate::error::{Result, RigsmithError};
use crate::utils::parsing::normalize_name;
use serde::Deserialize;
use std::fmt;

/// The values a preset builder writes into a computer, one per step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preset {
    /// Catalog key. Taken from the `[presets.<name>]` table header, never from the body.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub cpu: String,
    pub gpu: String,
    /// RAM in gigabytes
    pub ram: u32,
    pub storage: String,
    pub os: String,
    pub cooling: String,
    /// Short assessment of the cooling choice, shown in the showcase comparison
    #[serde(default)]
    pub cooling_note: Option<String>,
    pub power_supply: String,
    #[serde(default)]
    pub accessories: Vec<String>,
}

impl Preset {
    /// Reject presets that would produce a computer outside the data model
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| RigsmithError::InvalidPreset {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("preset name is empty"));
        }
        if self.ram == 0 {
            return Err(invalid("ram must be greater than 0"));
        }
        Ok(())
    }
}

/// The three built-in builder variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Gaming,
    Office,
    BudgetGaming,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Gaming, Variant::Office, Variant::BudgetGaming];

    /// Catalog name of the variant
    pub fn name(self) -> &'static str {
        match self {
            Variant::Gaming => "gaming",
            Variant::Office => "office",
            Variant::BudgetGaming => "budget-gaming",
        }
    }

    /// The variant's fixed preset table
    pub fn preset(self) -> Preset {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        match self {
            Variant::Gaming => Preset {
                name: self.name().to_string(),
                summary: Some(
                    "Powerful CPU, top-end graphics card, lots of RAM, liquid cooling".to_string(),
                ),
                cpu: "Intel Core i9-14900K".to_string(),
                gpu: "NVIDIA RTX 4090".to_string(),
                ram: 64,
                storage: "2TB NVMe SSD + 4TB HDD".to_string(),
                os: "Windows 11 Pro".to_string(),
                cooling: "Liquid cooling (AIO 360mm)".to_string(),
                cooling_note: Some("efficient and quiet under sustained high load".to_string()),
                power_supply: "1000W Gold Certified".to_string(),
                accessories: owned(&[
                    "Mechanical gaming keyboard",
                    "RGB gaming mouse",
                    "240 Hz gaming monitor",
                    "7.1 sound card",
                ]),
            },
            Variant::Office => Preset {
                name: self.name().to_string(),
                summary: Some(
                    "Economical CPU, integrated graphics, stock cooler".to_string(),
                ),
                cpu: "Intel Core i5-13400".to_string(),
                gpu: "Integrated graphics".to_string(),
                ram: 16,
                storage: "512GB SSD".to_string(),
                os: "Windows 11 Pro".to_string(),
                cooling: "Stock CPU cooler".to_string(),
                cooling_note: Some("enough for everyday office tasks".to_string()),
                power_supply: "500W 80+ Bronze".to_string(),
                accessories: owned(&["Office keyboard and mouse", "Webcam", "Speakers"]),
            },
            Variant::BudgetGaming => Preset {
                name: self.name().to_string(),
                summary: Some("Best price/performance ratio, tower cooler".to_string()),
                cpu: "AMD Ryzen 5 7600".to_string(),
                gpu: "NVIDIA RTX 4060".to_string(),
                ram: 32,
                storage: "1TB NVMe SSD".to_string(),
                os: "Windows 11 Home".to_string(),
                cooling: "Tower cooler with 2 fans".to_string(),
                cooling_note: Some("good balance of price and efficiency".to_string()),
                power_supply: "650W 80+ Bronze".to_string(),
                accessories: owned(&["Gaming mouse", "Gaming keyboard"]),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name-keyed lookup table of presets.
///
/// Built-ins come first in fixed order; additional presets are appended,
/// and a preset reusing an existing name replaces it in place.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Catalog holding only the built-in variants
    pub fn builtin() -> Self {
        Self {
            presets: Variant::ALL.into_iter().map(Variant::preset).collect(),
        }
    }

    /// Built-ins extended with (or overridden by) the given presets
    pub fn with_presets<I>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = Preset>,
    {
        let mut catalog = Self::builtin();
        for preset in extra {
            catalog.insert(preset)?;
        }
        Ok(catalog)
    }

    /// Add a preset under its normalized name, replacing any existing one
    pub fn insert(&mut self, mut preset: Preset) -> Result<()> {
        preset.name = normalize_name(&preset.name);
        preset.validate()?;

        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                tracing::debug!("Preset '{}' overrides an existing preset", preset.name);
                *existing = preset;
            }
            None => {
                tracing::debug!("Registered preset '{}'", preset.name);
                self.presets.push(preset);
            }
        }
        Ok(())
    }

    /// Look a preset up by name (case, `_` and spaces are ignored)
    pub fn get(&self, name: &str) -> Result<&Preset> {
        let key = normalize_name(name);
        self.presets
            .iter()
            .find(|p| p.name == key)
            .ok_or_else(|| RigsmithError::UnknownPreset {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
