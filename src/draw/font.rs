//! Font descriptor for text rendering.

use crate::config::OutputConfig;

/// Font used for the output line, resolved from the `[output]` config section.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    /// "normal", "bold", "light" or a numeric weight
    pub weight: String,
    /// "normal", "italic" or "oblique"
    pub style: String,
}

impl FontDescriptor {
    pub fn for_output(config: &OutputConfig) -> Self {
        Self {
            family: config.font_family.clone(),
            weight: config.font_weight.clone(),
            style: config.font_style.clone(),
        }
    }

    /// Pango description string such as "Sans Bold 20" or "Serif Italic 14".
    ///
    /// Normal style and weight are left out.
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];
        for attr in [&self.style, &self.weight] {
            if !attr.eq_ignore_ascii_case("normal") {
                parts.push(capitalize_first(attr));
            }
        }
        parts.push(format!("{}", size.round() as i32));
        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_font_is_bold_sans() {
        let font = FontDescriptor::for_output(&OutputConfig::default());
        assert_eq!(font.to_pango_string(20.0), "Sans Bold 20");
    }

    #[test]
    fn configured_style_and_weight_are_used() {
        let config = OutputConfig {
            font_family: "JetBrains Mono".to_string(),
            font_weight: "light".to_string(),
            font_style: "italic".to_string(),
            ..OutputConfig::default()
        };
        let font = FontDescriptor::for_output(&config);
        assert_eq!(font.to_pango_string(15.6), "JetBrains Mono Italic Light 16");
    }

    #[test]
    fn normal_attributes_are_omitted() {
        let config = OutputConfig {
            font_weight: "Normal".to_string(),
            ..OutputConfig::default()
        };
        assert_eq!(FontDescriptor::for_output(&config).to_pango_string(12.0), "Sans 12");
    }
}
