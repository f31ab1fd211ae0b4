use crate::options::ClassifyOrder;
use crate::types::{ImageReference, Shape, ShapeType, TableShape};

/// Content category of a shape, as decided by [`classify_shape`].
///
/// Every shape resolves to exactly one variant; there is no error case. The
/// extractor dispatches on this instead of inspecting shape internals.
#[derive(Debug)]
pub enum ShapeClass<'a> {
    /// Combined text of the shape's text container, paragraphs joined with
    /// newlines.
    Text(String),
    Table(&'a TableShape),
    Picture(&'a ImageReference),
    Ignored,
}

/// Classifies one shape into its content category.
///
/// Pure and infallible: unrecognized shapes, empty placeholders and shapes
/// whose text container holds no text all resolve to [`ShapeClass::Ignored`].
///
/// The `order` argument decides which axis wins for shapes that carry both a
/// non-empty text container and a table/picture type:
///
/// - [`ClassifyOrder::TypeFirst`] (default): the declared type is checked
///   before the text container, so such a table stays a table.
/// - [`ClassifyOrder::TextFirst`]: a non-empty text container always wins.
///
/// Under either rule a picture requires an absent or empty text container; a
/// declared picture with real text is classified as text.
pub fn classify_shape(shape: &Shape, order: ClassifyOrder) -> ShapeClass<'_> {
    let text = shape.text_body.as_ref().filter(|body| !body.is_empty());

    if order == ClassifyOrder::TextFirst {
        if let Some(body) = text {
            return ShapeClass::Text(body.text());
        }
    }

    match shape.shape_type {
        ShapeType::Table => {
            if let Some(ref table) = shape.table {
                return ShapeClass::Table(table);
            }
        }
        ShapeType::Picture if text.is_none() => {
            if let Some(ref image) = shape.image {
                return ShapeClass::Picture(image);
            }
        }
        _ => {}
    }

    match text {
        Some(body) => ShapeClass::Text(body.text()),
        None => ShapeClass::Ignored,
    }
}
