/// Shape type as declared by the slide XML, before any content inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    TextBox,
    Table,
    Picture,
    Other,
}

/// Text container of a shape, one entry per `<a:p>` paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody {
    pub paragraphs: Vec<String>,
}

impl TextBody {
    /// Combined text of the container, paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// A body counts as empty when every paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    /// Column count declared by `<a:tblGrid>`, which may diverge from the
    /// cell count of individual rows.
    pub column_count: usize,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Relationship reference of an embedded image: the `r:embed` id from the
/// slide XML and, once linked, the target path from the slide's rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub id: String,
    pub target: String,
}

/// One shape from a slide's shape tree.
///
/// The declared type and the text container are independent axes: a shape can
/// structurally be a table or picture and still carry a text body. The
/// classifier decides which axis wins, so both are kept here as parsed.
#[derive(Debug, Clone)]
pub struct Shape {
    pub shape_type: ShapeType,
    pub is_title: bool,
    pub text_body: Option<TextBody>,
    pub table: Option<TableShape>,
    pub image: Option<ImageReference>,
}

impl Shape {
    pub fn text_box(text_body: TextBody) -> Self {
        Self {
            shape_type: ShapeType::TextBox,
            is_title: false,
            text_body: Some(text_body),
            table: None,
            image: None,
        }
    }

    pub fn table(table: TableShape) -> Self {
        Self {
            shape_type: ShapeType::Table,
            is_title: false,
            text_body: None,
            table: Some(table),
            image: None,
        }
    }

    pub fn picture(image: ImageReference) -> Self {
        Self {
            shape_type: ShapeType::Picture,
            is_title: false,
            text_body: None,
            table: None,
            image: Some(image),
        }
    }

    pub fn other() -> Self {
        Self {
            shape_type: ShapeType::Other,
            is_title: false,
            text_body: None,
            table: None,
            image: None,
        }
    }
}
