use crate::slide::Slide;
use crate::{parse_rels, parse_xml, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Handle on an opened PowerPoint (pptx) archive.
///
/// `PptxContainer` wraps the underlying zip archive and knows where slides,
/// their relationship files and their media live inside it. Slide data is
/// read and parsed on demand; nothing beyond the entry listing is kept in
/// memory up front.
pub struct PptxContainer {
    archive: zip::ZipArchive<std::fs::File>,
    pub slide_paths: Vec<String>,
    pub slide_count: u32,
}

impl PptxContainer {
    /// Opens a pptx file and enumerates its slides.
    ///
    /// # Arguments
    ///
    /// - `path`: Path to the PPTX file.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(PptxContainer)`: container instance with slide paths in
    ///   presentation order.
    /// - `Err(Error)`: if file access or the zip directory read fails.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut slide_paths: Vec<String> = Vec::new();
        for i in 0..archive.len() {
            let file = archive.by_index(i)?;
            let name = file.name().to_string();

            if name.starts_with("ppt/slides/slide") && name.ends_with(".xml") {
                slide_paths.push(name);
            }
        }

        // Numeric order, not lexical: slide10.xml sorts after slide2.xml.
        slide_paths.sort_by_key(|p| Slide::extract_slide_number(p).unwrap_or(0));
        let slide_count = slide_paths.len() as u32;

        log::debug!("opened {} with {} slides", path.display(), slide_count);

        Ok(Self { archive, slide_paths, slide_count })
    }

    /// Parses every slide sequentially, in presentation order.
    pub fn parse_all(&mut self) -> Result<Vec<Slide>> {
        let mut slides = Vec::with_capacity(self.slide_paths.len());

        for path in self.slide_paths.clone() {
            slides.push(self.load_slide(&path)?);
        }

        Ok(slides)
    }

    /// Loads and parses a single slide together with its relationships and
    /// embedded image data.
    pub fn load_slide(&mut self, slide_path: &str) -> Result<Slide> {
        let slide_xml = self.read_file(slide_path)?;

        let rels_path = Self::rels_path(slide_path);
        let rels_data = self.read_file(&rels_path).ok();

        let shapes = parse_xml::parse_slide_xml(&slide_xml)?;
        let image_refs = match rels_data {
            Some(ref bytes) => parse_rels::parse_slide_rels(bytes)?,
            None => Vec::new(),
        };

        let mut image_data = HashMap::new();
        for img_ref in &image_refs {
            let img_path = Self::image_path(slide_path, &img_ref.target);
            if let Ok(data) = self.read_file(&img_path) {
                image_data.insert(img_ref.id.clone(), data);
            }
        }

        let slide_number = Slide::extract_slide_number(slide_path).unwrap_or(0);
        let mut slide = Slide::new(
            slide_path.to_string(),
            slide_number,
            shapes,
            image_refs,
            image_data,
        );
        slide.link_images();

        Ok(slide)
    }

    /// Reads one entry from the archive into memory.
    fn read_file(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(path)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Constructs the relationships path for a slide,
    /// e.g. `ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`.
    fn rels_path(slide_path: &str) -> String {
        let mut rels_path = slide_path.to_string();
        if let Some(pos) = rels_path.rfind('/') {
            rels_path.insert_str(pos + 1, "_rels/");
        }
        rels_path.push_str(".rels");
        rels_path
    }

    /// Resolves a relationship target relative to the slide directory.
    /// Targets such as `../media/image1.png` point into `ppt/media/`.
    fn image_path(slide_path: &str, target: &str) -> String {
        if target.starts_with("../") {
            let adjusted_target = target.trim_start_matches("../");
            format!("ppt/{}", adjusted_target)
        } else {
            let slide_dir = slide_path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
            format!("{}/{}", slide_dir, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rels_path_sits_next_to_the_slide() {
        assert_eq!(
            PptxContainer::rels_path("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
    }

    #[test]
    fn image_path_resolves_media_targets() {
        assert_eq!(
            PptxContainer::image_path("ppt/slides/slide1.xml", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            PptxContainer::image_path("ppt/slides/slide1.xml", "pic.png"),
            "ppt/slides/pic.png"
        );
    }
}
