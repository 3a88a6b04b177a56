//! String parsing utilities

/// Canonical form of a preset name: trimmed, lowercase, words joined by `-`
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a `#RRGGBB` hex color into its components
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    Some((
        u8::from_str_radix(&hex[0..2], 16).ok()?,
        u8::from_str_radix(&hex[2..4], 16).ok()?,
        u8::from_str_radix(&hex[4..6], 16).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_collapse_separators() {
        assert_eq!(normalize_name("Budget Gaming"), "budget-gaming");
        assert_eq!(normalize_name("  budget__gaming "), "budget-gaming");
        assert_eq!(normalize_name("OFFICE"), "office");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_color("ff8000"), None);
        assert_eq!(parse_hex_color("#ff80"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }
}
