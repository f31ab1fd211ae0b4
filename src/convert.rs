use crate::container::PptxContainer;
use crate::describe::ImageDescriber;
use crate::extract::extract_slide;
use crate::options::ConvertOptions;
use crate::records::DeckRecord;
use crate::Result;
use std::path::Path;

/// Converts a pptx file into its YAML representation.
///
/// Slides are processed strictly sequentially in presentation order; each
/// picture blocks on the description service before the next shape is
/// touched. The first failing slide aborts the whole conversion and no
/// output is produced.
///
/// # Arguments
///
/// - `path`: Path to the PPTX file.
/// - `describer`: Description service used for picture shapes.
/// - `options`: Classification rule and image failure policy.
///
/// # Returns
///
/// The YAML document as a string; writing it anywhere is the caller's
/// business.
pub fn pptx_to_yaml(
    path: &Path,
    describer: &dyn ImageDescriber,
    options: &ConvertOptions,
) -> Result<String> {
    let mut container = PptxContainer::open(path)?;
    let slides = container.parse_all()?;

    let mut records = Vec::with_capacity(slides.len());
    for slide in &slides {
        log::debug!("extracting slide {}", slide.slide_number);
        records.push(extract_slide(slide, describer, options)?);
    }

    DeckRecord { slides: records }.to_yaml()
}
