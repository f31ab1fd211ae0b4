use serde::Serialize;

/// A picture replaced by its textual description.
///
/// `data` carries the original image bytes base64-encoded, so the source
/// image stays recoverable from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub description: String,
    pub filename: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRecord {
    pub markdown: String,
}

/// Extracted content of one slide.
///
/// Field declaration order is the YAML key order: `title`, `texts`,
/// `images`, `tables`. The three sequences each preserve shape order;
/// interleaving across categories is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    pub title: Option<String>,
    pub texts: Vec<String>,
    pub images: Vec<ImageRecord>,
    pub tables: Vec<TableRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckRecord {
    pub slides: Vec<SlideRecord>,
}

impl DeckRecord {
    /// Renders the whole deck as a YAML document with a single top-level
    /// `slides` key. Unicode passes through literally.
    pub fn to_yaml(&self) -> crate::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slide() -> SlideRecord {
        SlideRecord {
            title: Some("Überblick".into()),
            texts: vec!["First bullet\nSecond bullet".into()],
            images: vec![ImageRecord {
                description: "desc".into(),
                filename: Some("image1.png".into()),
                data: Some("AAAA".into()),
            }],
            tables: vec![TableRecord { markdown: "| H1 | H2 |".into() }],
        }
    }

    #[test]
    fn keys_keep_declaration_order() {
        let deck = DeckRecord { slides: vec![sample_slide()] };
        let yaml = deck.to_yaml().unwrap();

        let title = yaml.find("title:").unwrap();
        let texts = yaml.find("texts:").unwrap();
        let images = yaml.find("images:").unwrap();
        let tables = yaml.find("tables:").unwrap();

        assert!(yaml.starts_with("slides:"));
        assert!(title < texts && texts < images && images < tables);
    }

    #[test]
    fn absent_title_serializes_as_null() {
        let deck = DeckRecord {
            slides: vec![SlideRecord {
                title: None,
                texts: vec![],
                images: vec![],
                tables: vec![],
            }],
        };
        let yaml = deck.to_yaml().unwrap();

        assert!(yaml.contains("title: null"));
        assert!(!yaml.contains("title: ''"));
    }

    #[test]
    fn unicode_is_not_escaped() {
        let deck = DeckRecord { slides: vec![sample_slide()] };
        let yaml = deck.to_yaml().unwrap();

        assert!(yaml.contains("Überblick"));
    }

    #[test]
    fn output_parses_back_into_the_same_structure() {
        let deck = DeckRecord { slides: vec![sample_slide()] };
        let yaml = deck.to_yaml().unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["slides"][0]["images"][0]["description"], "desc");
        assert_eq!(value["slides"][0]["tables"][0]["markdown"], "| H1 | H2 |");
    }
}
