use crate::config::Config;
use crate::data::{Computer, PresetCatalog};
use crate::error::Result;
use crate::utils::parsing::parse_hex_color;
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Output format for a built computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines, one field per line
    #[default]
    Text,
    /// A TOML table per computer
    Toml,
}

pub fn hex_to_ansi(color: &str) -> String {
    // First try ANSI color names
    if let Some(ansi_code) = get_ansi_color_code(color) {
        return ansi_code;
    }

    // Fallback to hex color parsing for custom colors
    if let Some((r, g, b)) = parse_hex_color(color) {
        return format!("\x1b[38;2;{};{};{}m", r, g, b);
    }

    tracing::warn!(
        "Unknown color '{}'. Use an ANSI color name (red, bright_blue, gray, ...) or #RRGGBB",
        color
    );
    RESET.to_string()
}

fn get_ansi_color_code(color_name: &str) -> Option<String> {
    let code = match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => "30",
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" | "purple" => "35",
        "cyan" => "36",
        "white" => "37",

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => "90",
        "bright_red" | "orange" => "91",
        "bright_green" => "92",
        "bright_yellow" => "93",
        "bright_blue" => "94",
        "bright_magenta" | "violet" => "95",
        "bright_cyan" => "96",
        "bright_white" => "97",

        "reset" | "default" => "0",
        _ => return None,
    };
    Some(format!("\x1b[{}m", code))
}

/// Escape code for a color reference: a `[colors]` key, an ANSI name or a hex color
fn resolve_color(config: &Config, color: Option<&str>) -> String {
    match color {
        Some(key) => match config.colors.get(key) {
            Some(mapped) => hex_to_ansi(mapped),
            None => hex_to_ansi(key),
        },
        None => RESET.to_string(),
    }
}

/// Render one configuration block, ending with a blank separator line.
///
/// With `color` off no escape codes are emitted at all.
pub fn render_computer(config: &Config, computer: &Computer, color: bool) -> String {
    let display = &config.display;
    let paint = |code: &str, text: &str| {
        if color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    };
    let key_code = resolve_color(config, display.key_color.as_deref());
    let value_code = resolve_color(config, display.value_color.as_deref());

    let fields = computer.labelled_fields();
    let key_width = if display.align_keys {
        fields
            .iter()
            .map(|(label, _)| UnicodeWidthStr::width(*label))
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    let mut out = String::new();
    if !display.header.is_empty() {
        out.push_str(&paint(BOLD, display.header.as_str()));
        out.push('\n');
    }

    for (label, value) in &fields {
        let padding = " ".repeat(key_width.saturating_sub(UnicodeWidthStr::width(*label)));
        out.push_str(&paint(key_code.as_str(), *label));
        out.push_str(&display.separator);
        out.push_str(&padding);
        out.push_str(&paint(value_code.as_str(), value.as_str()));
        out.push('\n');
    }

    if !computer.additional_components.is_empty() {
        let heading = format!("Additional components{}", display.separator.trim_end());
        out.push_str(&paint(key_code.as_str(), heading.as_str()));
        out.push('\n');
        for component in &computer.additional_components {
            out.push_str(&format!("  {} ", display.bullet));
            out.push_str(&paint(value_code.as_str(), component.as_str()));
            out.push('\n');
        }
    }

    out.push('\n');
    out
}

/// Render a computer as a TOML document; unset fields are omitted
pub fn render_toml(computer: &Computer) -> Result<String> {
    Ok(toml::to_string(computer)?)
}

/// One line per preset: name padded to a common width, then its summary
pub fn render_preset_list(catalog: &PresetCatalog) -> String {
    let width = catalog
        .iter()
        .map(|preset| UnicodeWidthStr::width(preset.name.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for preset in catalog.iter() {
        match &preset.summary {
            Some(summary) => {
                let padding = " ".repeat(width - UnicodeWidthStr::width(preset.name.as_str()));
                out.push_str(&format!("{}{}  {}\n", preset.name, padding, summary));
            }
            None => out.push_str(&format!("{}\n", preset.name)),
        }
    }
    out
}

/// Print one computer in the requested format
pub fn print_computer(
    config: &Config,
    computer: &Computer,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_computer(config, computer, color)),
        OutputFormat::Toml => println!("{}", render_toml(computer)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PresetBuilder;
    use crate::director::{construct, Recipe};

    fn plain_config() -> Config {
        Config::default()
    }

    #[test]
    fn plain_block_matches_display_impl() {
        let computer = construct(Box::new(PresetBuilder::office()), Recipe::Full);
        let rendered = render_computer(&plain_config(), &computer, false);
        assert_eq!(rendered, format!("{}\n", computer));
    }

    #[test]
    fn block_ends_with_blank_line_and_has_no_escapes() {
        let computer = construct(Box::new(PresetBuilder::gaming()), Recipe::Basic);
        let rendered = render_computer(&plain_config(), &computer, false);
        assert!(rendered.ends_with("\n\n"));
        assert!(!rendered.contains('\x1b'));
        assert!(rendered.contains("OS: unset"));
        assert!(!rendered.contains("Additional components"));
    }

    #[test]
    fn aligned_keys_share_a_value_column() {
        let mut config = plain_config();
        config.display.align_keys = true;
        let computer = construct(Box::new(PresetBuilder::gaming()), Recipe::Full);
        let rendered = render_computer(&config, &computer, false);

        let columns: Vec<usize> = rendered
            .lines()
            .skip(1)
            .zip(computer.labelled_fields())
            .map(|(line, (_, value))| line.find(value.as_str()).unwrap())
            .collect();
        assert_eq!(columns.len(), 7);
        assert!(columns.windows(2).all(|w| w[0] == w[1]), "{rendered}");
        assert!(rendered.contains(&format!("CPU:{}Intel Core i9-14900K", " ".repeat(12))));
    }

    #[test]
    fn custom_separator_and_bullet() {
        let mut config = plain_config();
        config.display.separator = " => ".to_string();
        config.display.bullet = "*".to_string();
        config.display.header = String::new();
        let computer = construct(Box::new(PresetBuilder::budget_gaming()), Recipe::Full);
        let rendered = render_computer(&config, &computer, false);

        assert!(rendered.starts_with("CPU => AMD Ryzen 5 7600\n"));
        assert!(rendered.contains("Additional components =>\n  * Gaming mouse\n"));
    }

    #[test]
    fn colors_resolve_through_the_colors_map() {
        let mut config = plain_config();
        config.colors.insert("key".to_string(), "#ff0000".to_string());
        config.display.key_color = Some("key".to_string());
        config.display.value_color = Some("green".to_string());
        let computer = construct(Box::new(PresetBuilder::office()), Recipe::Minimal);
        let rendered = render_computer(&config, &computer, true);

        assert!(rendered.contains("\x1b[38;2;255;0;0mCPU\x1b[0m"));
        assert!(rendered.contains("\x1b[32mIntel Core i5-13400\x1b[0m"));
        assert!(rendered.starts_with("\x1b[1mComputer configuration\x1b[0m\n"));
    }

    #[test]
    fn ansi_names_and_unknown_colors() {
        assert_eq!(hex_to_ansi("grey"), "\x1b[90m");
        assert_eq!(hex_to_ansi("Bright_Blue"), "\x1b[94m");
        assert_eq!(hex_to_ansi("#000080"), "\x1b[38;2;0;0;128m");
        assert_eq!(hex_to_ansi("chartreuse-ish"), RESET);
    }

    #[test]
    fn preset_list_aligns_summaries() {
        let listing = render_preset_list(&PresetCatalog::builtin());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("gaming         Powerful CPU"));
        assert!(lines[2].starts_with("budget-gaming  Best price"));
    }

    #[test]
    fn toml_omits_unset_fields() {
        let computer = construct(Box::new(PresetBuilder::office()), Recipe::Basic);
        let rendered = render_toml(&computer).unwrap();
        assert!(rendered.contains("cpu = \"Intel Core i5-13400\""));
        assert!(rendered.contains("ram_gb = 16"));
        assert!(!rendered.contains("os ="));
        assert!(!rendered.contains("additional_components"));
    }
}
