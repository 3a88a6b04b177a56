//! Builder that fills a computer from a fixed preset table

use super::ComputerBuilder;
use crate::data::{Computer, Preset, Variant};

/// A [`ComputerBuilder`] whose steps copy values out of one [`Preset`].
///
/// The gaming, office and budget-gaming variants are this builder bound
/// to the matching built-in preset.
#[derive(Debug, Clone)]
pub struct PresetBuilder {
    preset: Preset,
    computer: Computer,
}

impl PresetBuilder {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            computer: Computer::default(),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.preset())
    }

    pub fn gaming() -> Self {
        Self::for_variant(Variant::Gaming)
    }

    pub fn office() -> Self {
        Self::for_variant(Variant::Office)
    }

    pub fn budget_gaming() -> Self {
        Self::for_variant(Variant::BudgetGaming)
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// The computer as assembled so far
    pub fn current(&self) -> &Computer {
        &self.computer
    }
}

impl ComputerBuilder for PresetBuilder {
    fn set_cpu(&mut self) {
        self.computer.cpu = Some(self.preset.cpu.clone());
    }

    fn set_gpu(&mut self) {
        self.computer.gpu = Some(self.preset.gpu.clone());
    }

    fn set_ram(&mut self) {
        self.computer.ram_gb = Some(self.preset.ram);
    }

    fn set_storage(&mut self) {
        self.computer.storage = Some(self.preset.storage.clone());
    }

    fn set_os(&mut self) {
        self.computer.os = Some(self.preset.os.clone());
    }

    // Replaces, never appends.
    fn set_additional_components(&mut self) {
        self.computer.additional_components = self.preset.accessories.clone();
    }

    fn set_cooling_system(&mut self) {
        self.computer.cooling_system = Some(self.preset.cooling.clone());
    }

    fn set_power_supply(&mut self) {
        self.computer.power_supply = Some(self.preset.power_supply.clone());
    }

    fn get_result(&mut self) -> Computer {
        tracing::debug!("Handing over '{}' computer", self.preset.name);
        std::mem::take(&mut self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{apply_steps, Step};

    fn fully_built(variant: Variant) -> Computer {
        let mut builder = PresetBuilder::for_variant(variant);
        apply_steps(&mut builder, &Step::ALL);
        builder.get_result()
    }

    #[test]
    fn all_steps_match_preset_table() {
        for variant in Variant::ALL {
            let preset = variant.preset();
            let computer = fully_built(variant);

            assert_eq!(computer.cpu.as_deref(), Some(preset.cpu.as_str()));
            assert_eq!(computer.gpu.as_deref(), Some(preset.gpu.as_str()));
            assert_eq!(computer.ram_gb, Some(preset.ram));
            assert_eq!(computer.storage.as_deref(), Some(preset.storage.as_str()));
            assert_eq!(computer.os.as_deref(), Some(preset.os.as_str()));
            assert_eq!(computer.cooling_system.as_deref(), Some(preset.cooling.as_str()));
            assert_eq!(computer.power_supply.as_deref(), Some(preset.power_supply.as_str()));
            assert_eq!(computer.additional_components, preset.accessories);
        }
    }

    #[test]
    fn gaming_table_values() {
        let computer = fully_built(Variant::Gaming);
        assert_eq!(computer.cpu.as_deref(), Some("Intel Core i9-14900K"));
        assert_eq!(computer.gpu.as_deref(), Some("NVIDIA RTX 4090"));
        assert_eq!(computer.ram_gb, Some(64));
        assert_eq!(computer.storage.as_deref(), Some("2TB NVMe SSD + 4TB HDD"));
        assert_eq!(computer.cooling_system.as_deref(), Some("Liquid cooling (AIO 360mm)"));
        assert_eq!(computer.power_supply.as_deref(), Some("1000W Gold Certified"));
    }

    #[test]
    fn budget_gaming_table_values() {
        let computer = fully_built(Variant::BudgetGaming);
        assert_eq!(computer.cpu.as_deref(), Some("AMD Ryzen 5 7600"));
        assert_eq!(computer.gpu.as_deref(), Some("NVIDIA RTX 4060"));
        assert_eq!(computer.ram_gb, Some(32));
        assert_eq!(computer.storage.as_deref(), Some("1TB NVMe SSD"));
        assert_eq!(computer.os.as_deref(), Some("Windows 11 Home"));
        assert_eq!(computer.power_supply.as_deref(), Some("650W 80+ Bronze"));
    }

    #[test]
    fn retrieval_takes_and_resets() {
        let mut builder = PresetBuilder::office();
        apply_steps(&mut builder, &Step::ALL);

        let first = builder.get_result();
        let second = builder.get_result();
        assert!(!first.is_unset());
        assert!(second.is_unset());
        assert!(builder.current().is_unset());
    }

    #[test]
    fn steps_are_idempotent() {
        let mut once = PresetBuilder::gaming();
        once.set_cpu();
        once.set_additional_components();

        let mut twice = PresetBuilder::gaming();
        twice.set_cpu();
        twice.set_cpu();
        twice.set_additional_components();
        twice.set_additional_components();

        assert_eq!(once.get_result(), twice.get_result());
    }

    #[test]
    fn omitted_steps_stay_unset() {
        let mut builder = PresetBuilder::budget_gaming();
        builder.set_ram();
        builder.set_os();
        let computer = builder.get_result();

        assert_eq!(computer.ram_gb, Some(32));
        assert!(computer.os.is_some());
        assert!(computer.cpu.is_none());
        assert!(computer.power_supply.is_none());
        assert!(computer.additional_components.is_empty());
    }

    #[test]
    fn zero_steps_yields_unset_computer() {
        let computer = PresetBuilder::gaming().get_result();
        assert!(computer.is_unset());
        assert!(!computer.to_string().contains("Additional components"));
    }

    #[test]
    fn retrieved_computer_is_independent_of_builder() {
        let mut builder = PresetBuilder::gaming();
        builder.set_cpu();
        let kept = builder.get_result();

        builder.set_gpu();
        builder.set_ram();
        let _ = builder.get_result();

        assert_eq!(kept.cpu.as_deref(), Some("Intel Core i9-14900K"));
        assert!(kept.gpu.is_none());
    }
}
