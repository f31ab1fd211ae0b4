use std::str::FromStr;

/// Which axis wins when a shape could be classified more than one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyOrder {
    /// The declared table/picture type is checked before the text container.
    #[default]
    TypeFirst,
    /// A non-empty text container wins over the declared type.
    TextFirst,
}

/// What to do when describing a single image fails.
///
/// A missing credential is not subject to this policy; it always aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageErrorPolicy {
    /// Fail the whole conversion.
    #[default]
    Abort,
    /// Keep the image record with a placeholder description.
    Placeholder,
    /// Drop the image from the output.
    Skip,
}

impl FromStr for ImageErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "placeholder" => Ok(Self::Placeholder),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown image error policy '{other}' (expected abort, placeholder or skip)"
            )),
        }
    }
}

/// Configuration options for a conversion run.
///
/// Use [`ConvertOptions::builder()`] to customize only the desired fields
/// while falling back to the defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `classify_order` | `ClassifyOrder` | `TypeFirst` | Disambiguation rule for shapes with conflicting type and text axes |
/// | `on_image_error` | `ImageErrorPolicy` | `Abort` | Reaction to a failed image description request |
///
/// # Example
///
/// ```
/// use pptx_to_yaml::{ConvertOptions, ImageErrorPolicy};
///
/// let options = ConvertOptions::builder()
///     .on_image_error(ImageErrorPolicy::Placeholder)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub classify_order: ClassifyOrder,
    pub on_image_error: ImageErrorPolicy,
}

impl ConvertOptions {
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder::default()
    }
}

/// Builder for [`ConvertOptions`].
#[derive(Debug, Default)]
pub struct ConvertOptionsBuilder {
    classify_order: Option<ClassifyOrder>,
    on_image_error: Option<ImageErrorPolicy>,
}

impl ConvertOptionsBuilder {
    /// Sets the classification rule for ambiguous shapes.
    pub fn classify_order(mut self, value: ClassifyOrder) -> Self {
        self.classify_order = Some(value);
        self
    }

    /// Sets the reaction to a failed image description request.
    pub fn on_image_error(mut self, value: ImageErrorPolicy) -> Self {
        self.on_image_error = Some(value);
        self
    }

    /// Builds the final [`ConvertOptions`], applying defaults for any fields
    /// that were not set.
    pub fn build(self) -> ConvertOptions {
        ConvertOptions {
            classify_order: self.classify_order.unwrap_or_default(),
            on_image_error: self.on_image_error.unwrap_or_default(),
        }
    }
}
