use crate::types::{ImageReference, Shape};
use std::collections::HashMap;

/// A single parsed slide: its shapes in document order, the image
/// relationships from its rels file, and the image data preloaded from the
/// archive, keyed by relationship id.
#[derive(Debug)]
pub struct Slide {
    pub rel_path: String,
    pub slide_number: u32,
    pub shapes: Vec<Shape>,
    pub image_refs: Vec<ImageReference>,
    image_data: HashMap<String, Vec<u8>>,
}

impl Slide {
    pub fn new(
        rel_path: String,
        slide_number: u32,
        shapes: Vec<Shape>,
        image_refs: Vec<ImageReference>,
        image_data: HashMap<String, Vec<u8>>,
    ) -> Self {
        Self { rel_path, slide_number, shapes, image_refs, image_data }
    }

    /// Extracts the slide number from an archive path such as
    /// `ppt/slides/slide3.xml`.
    pub(crate) fn extract_slide_number(path: &str) -> Option<u32> {
        path.split('/')
            .last()
            .and_then(|filename| {
                filename
                    .strip_prefix("slide")
                    .and_then(|s| s.strip_suffix(".xml"))
            })
            .and_then(|num_str| num_str.parse::<u32>().ok())
    }

    /// Text of the first title placeholder, if the slide has one.
    ///
    /// A present title shape with empty text yields `Some("")`; only a slide
    /// without any title shape yields `None`.
    pub fn title_text(&self) -> Option<String> {
        self.shapes
            .iter()
            .find(|shape| shape.is_title)
            .map(|shape| {
                shape
                    .text_body
                    .as_ref()
                    .map(|body| body.text())
                    .unwrap_or_default()
            })
    }

    /// Raw bytes of an embedded image, looked up by relationship id.
    pub fn image_bytes(&self, id: &str) -> Option<&[u8]> {
        self.image_data.get(id).map(Vec::as_slice)
    }

    /// Fills in the archive targets of picture shapes from the slide's
    /// relationship entries.
    pub fn link_images(&mut self) {
        let id_to_target: HashMap<&str, &str> = self
            .image_refs
            .iter()
            .map(|img_ref| (img_ref.id.as_str(), img_ref.target.as_str()))
            .collect();

        for shape in &mut self.shapes {
            if let Some(ref mut img_ref) = shape.image {
                if let Some(target) = id_to_target.get(img_ref.id.as_str()) {
                    img_ref.target = (*target).to_string();
                }
            }
        }
    }
}
