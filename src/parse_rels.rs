use crate::constants::IMAGE_RELATIONSHIP;
use crate::types::ImageReference;
use crate::Result;
use roxmltree::Document;

/// Parses relationship (`.rels`) XML data of a slide, extracting image
/// relationships.
///
/// Relationship files map resource ids to their targets; only entries whose
/// `Type` is the image relationship are of interest here.
///
/// # Arguments
///
/// - `xml_data`: Raw relationship XML data as a byte slice.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<ImageReference>)`: extracted image ids and their target paths.
/// - `Err(Error)`: if the data is not valid UTF-8 or not well-formed XML.
pub fn parse_slide_rels(xml_data: &[u8]) -> Result<Vec<ImageReference>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut images = Vec::new();
    for rel in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
    {
        if rel.attribute("Type") != Some(IMAGE_RELATIONSHIP) {
            continue;
        }
        if let (Some(id), Some(target)) = (rel.attribute("Id"), rel.attribute("Target")) {
            images.push(ImageReference {
                id: id.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(images)
}
