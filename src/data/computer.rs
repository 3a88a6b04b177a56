//! The finished (or in-progress) computer configuration

use serde::Serialize;
use std::fmt;

/// Rendered in place of any field no builder step has set
pub const UNSET: &str = "unset";

/// Header line printed above every configuration block
pub const DEFAULT_HEADER: &str = "Computer configuration";

/// One computer configuration.
///
/// Every field starts unset (`None` / empty) and is filled by a builder's
/// step operations. `Default` is the fully unset computer a builder starts
/// from and resets to after retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Computer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    /// RAM in gigabytes, > 0 when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_supply: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_components: Vec<String>,
}

impl Computer {
    /// Label/value pairs in display order: CPU, GPU, RAM, Storage, OS,
    /// power supply, cooling system. Accessories are rendered separately.
    pub fn labelled_fields(&self) -> [(&'static str, String); 7] {
        [
            ("CPU", text_or_unset(&self.cpu)),
            ("GPU", text_or_unset(&self.gpu)),
            (
                "RAM",
                self.ram_gb
                    .map(|gb| format!("{} GB", gb))
                    .unwrap_or_else(|| UNSET.to_string()),
            ),
            ("Storage", text_or_unset(&self.storage)),
            ("OS", text_or_unset(&self.os)),
            ("Power supply", text_or_unset(&self.power_supply)),
            ("Cooling system", text_or_unset(&self.cooling_system)),
        ]
    }

    /// True when no step has touched this computer
    pub fn is_unset(&self) -> bool {
        *self == Computer::default()
    }
}

fn text_or_unset(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| UNSET.to_string())
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", DEFAULT_HEADER)?;
        for (label, value) in self.labelled_fields() {
            writeln!(f, "{}: {}", label, value)?;
        }

        if !self.additional_components.is_empty() {
            writeln!(f, "Additional components:")?;
            for component in &self.additional_components {
                writeln!(f, "  - {}", component)?;
            }
        }
        Ok(())
    }
}
