use crate::classify::{classify_shape, ShapeClass};
use crate::describe::{ImageDescriber, ServiceError};
use crate::markdown::table_to_markdown;
use crate::options::{ConvertOptions, ImageErrorPolicy};
use crate::records::{ImageRecord, SlideRecord, TableRecord};
use crate::slide::Slide;
use crate::types::ImageReference;
use crate::{Error, Result};
use base64::{engine::general_purpose, Engine as _};

/// Description substituted under [`ImageErrorPolicy::Placeholder`].
pub const PLACEHOLDER_DESCRIPTION: &str = "[image description unavailable]";

/// Extracts one slide into its output record.
///
/// The title comes from the slide's title placeholder; title shapes are not
/// traversed again as body content. All remaining shapes are classified in
/// document order and collected into the record's `texts`, `images` and
/// `tables` sequences.
///
/// # Errors
///
/// Fails on structural problems (a picture whose image data is missing from
/// the archive) and, subject to `options.on_image_error`, on description
/// service failures. A missing service credential always fails.
pub fn extract_slide(
    slide: &Slide,
    describer: &dyn ImageDescriber,
    options: &ConvertOptions,
) -> Result<SlideRecord> {
    let mut record = SlideRecord {
        title: slide.title_text(),
        texts: Vec::new(),
        images: Vec::new(),
        tables: Vec::new(),
    };

    for shape in slide.shapes.iter().filter(|shape| !shape.is_title) {
        match classify_shape(shape, options.classify_order) {
            ShapeClass::Text(text) => record.texts.push(text),
            ShapeClass::Table(table) => record.tables.push(TableRecord {
                markdown: table_to_markdown(table),
            }),
            ShapeClass::Picture(image_ref) => {
                if let Some(image) = extract_image(slide, image_ref, describer, options)? {
                    record.images.push(image);
                }
            }
            ShapeClass::Ignored => {}
        }
    }

    Ok(record)
}

fn extract_image(
    slide: &Slide,
    image_ref: &ImageReference,
    describer: &dyn ImageDescriber,
    options: &ConvertOptions,
) -> Result<Option<ImageRecord>> {
    let bytes = slide
        .image_bytes(&image_ref.id)
        .ok_or_else(|| Error::ImageNotFound(image_ref.id.clone()))?;

    let description = match describer.describe(bytes) {
        Ok(text) => text,
        Err(err @ ServiceError::MissingCredential(_)) => return Err(err.into()),
        Err(err) => match options.on_image_error {
            ImageErrorPolicy::Abort => return Err(err.into()),
            ImageErrorPolicy::Placeholder => {
                log::warn!(
                    "slide {}: {err}; using placeholder description",
                    slide.slide_number
                );
                PLACEHOLDER_DESCRIPTION.to_string()
            }
            ImageErrorPolicy::Skip => {
                log::warn!("slide {}: {err}; skipping image", slide.slide_number);
                return Ok(None);
            }
        },
    };

    Ok(Some(ImageRecord {
        description,
        filename: image_filename(&image_ref.target),
        data: Some(general_purpose::STANDARD.encode(bytes)),
    }))
}

/// Base name of the relationship target,
/// e.g. `../media/image1.png` -> `image1.png`.
fn image_filename(target: &str) -> Option<String> {
    target
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
