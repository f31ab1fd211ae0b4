use crate::constants::{A_NAMESPACE, P_NAMESPACE, RELS_NAMESPACE, TABLE_URI};
use crate::types::{ImageReference, Shape, ShapeType, TableRow, TableShape, TextBody};
use crate::{Error, Result};
use roxmltree::{Document, Node};

/// Parses raw XML slide data from a PowerPoint (pptx) file into the slide's
/// ordered list of shapes.
///
/// Walks the shape tree (`<p:spTree>`) and maps `<p:sp>` to text-box shapes,
/// `<p:graphicFrame>` carrying a DrawingML table to table shapes and
/// `<p:pic>` to picture shapes. Anything else becomes an `Other` shape so
/// that document order is preserved.
///
/// # Arguments
///
/// - `xml_data`: Byte slice containing raw XML data of a PowerPoint slide.
///
/// # Returns
///
/// Returns a `Result` containing either:
/// - `Vec<Shape>`: Vector of parsed shapes in document order.
/// - `Error`: if the data is not UTF-8, not well-formed XML, or misses the
///   `<p:cSld>`/`<p:spTree>` skeleton every slide must have.
pub fn parse_slide_xml(xml_data: &[u8]) -> Result<Vec<Shape>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let c_sld = root
        .descendants()
        .find(|n| is_named(n, "cSld", P_NAMESPACE))
        .ok_or(Error::Malformed("no <p:cSld> element"))?;

    let sp_tree = c_sld
        .children()
        .find(|n| is_named(n, "spTree", P_NAMESPACE))
        .ok_or(Error::Malformed("no <p:spTree> element"))?;

    let mut shapes = Vec::new();
    for child_node in sp_tree.children().filter(|n| n.is_element()) {
        if child_node.tag_name().namespace() != Some(P_NAMESPACE) {
            continue;
        }
        match child_node.tag_name().name() {
            "sp" => shapes.push(parse_sp(&child_node)),
            "graphicFrame" => shapes.push(parse_graphic_frame(&child_node)),
            "pic" => shapes.push(parse_pic(&child_node)?),
            _ => shapes.push(Shape::other()),
        }
    }

    Ok(shapes)
}

fn is_named(node: &Node, name: &str, namespace: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(namespace)
}

/// Parses a `<p:sp>` node into a text-box shape. The title flag comes from
/// the shape's placeholder type (`<p:ph type="title"/>` or `"ctrTitle"`).
fn parse_sp(sp_node: &Node) -> Shape {
    let is_title = sp_node
        .descendants()
        .find(|n| is_named(n, "ph", P_NAMESPACE))
        .and_then(|ph| ph.attribute("type"))
        .map(|t| t == "title" || t == "ctrTitle")
        .unwrap_or(false);

    let text_body = sp_node
        .children()
        .find(|n| is_named(n, "txBody", P_NAMESPACE))
        .map(|tx_body| parse_text_body(&tx_body));

    Shape {
        shape_type: ShapeType::TextBox,
        is_title,
        text_body,
        table: None,
        image: None,
    }
}

/// Collects the paragraph texts of a text body node, one entry per `<a:p>`,
/// each the concatenation of its `<a:r>/<a:t>` runs.
fn parse_text_body(tx_body_node: &Node) -> TextBody {
    let mut paragraphs = Vec::new();

    for p_node in tx_body_node
        .children()
        .filter(|n| is_named(n, "p", A_NAMESPACE))
    {
        let mut text = String::new();
        for r_node in p_node.children().filter(|n| is_named(n, "r", A_NAMESPACE)) {
            if let Some(t) = r_node
                .children()
                .find(|n| is_named(n, "t", A_NAMESPACE))
                .and_then(|t_node| t_node.text())
            {
                text.push_str(t);
            }
        }
        paragraphs.push(text);
    }

    TextBody { paragraphs }
}

/// Parses a `<p:graphicFrame>` node. Only frames carrying a DrawingML table
/// become table shapes; charts, diagrams and other graphic payloads are kept
/// as `Other`.
fn parse_graphic_frame(node: &Node) -> Shape {
    let tbl_node = node
        .descendants()
        .find(|n| is_named(n, "graphicData", A_NAMESPACE) && n.attribute("uri") == Some(TABLE_URI))
        .and_then(|graphic_data| {
            graphic_data
                .children()
                .find(|n| is_named(n, "tbl", A_NAMESPACE))
        });

    match tbl_node {
        Some(tbl) => Shape::table(parse_table(&tbl)),
        None => Shape::other(),
    }
}

/// Parses a table node (`<a:tbl>`): the declared column count from
/// `<a:tblGrid>` and all `<a:tr>` rows.
fn parse_table(tbl_node: &Node) -> TableShape {
    let column_count = tbl_node
        .children()
        .find(|n| is_named(n, "tblGrid", A_NAMESPACE))
        .map(|grid| {
            grid.children()
                .filter(|n| is_named(n, "gridCol", A_NAMESPACE))
                .count()
        })
        .unwrap_or(0);

    let mut rows = Vec::new();
    for tr_node in tbl_node
        .children()
        .filter(|n| is_named(n, "tr", A_NAMESPACE))
    {
        let cells = tr_node
            .children()
            .filter(|n| is_named(n, "tc", A_NAMESPACE))
            .map(|tc_node| parse_cell_text(&tc_node))
            .collect();
        rows.push(TableRow { cells });
    }

    TableShape { column_count, rows }
}

/// Cell text is the concatenation of the cell's paragraph runs. Cells never
/// contribute embedded newlines, which keeps rendered markdown one line per
/// table row.
fn parse_cell_text(tc_node: &Node) -> String {
    let mut text = String::new();

    if let Some(tx_body) = tc_node
        .children()
        .find(|n| is_named(n, "txBody", A_NAMESPACE))
    {
        for p_node in tx_body.children().filter(|n| is_named(n, "p", A_NAMESPACE)) {
            for r_node in p_node.children().filter(|n| is_named(n, "r", A_NAMESPACE)) {
                if let Some(t) = r_node
                    .children()
                    .find(|n| is_named(n, "t", A_NAMESPACE))
                    .and_then(|t_node| t_node.text())
                {
                    text.push_str(t);
                }
            }
        }
    }

    text
}

/// Parses a `<p:pic>` node into a picture shape carrying the `r:embed`
/// relationship id of its image.
///
/// # Returns
///
/// - `Shape`: picture shape with an unlinked [`ImageReference`].
/// - `Error::Malformed`: if the `<a:blip>` element or its embed attribute is
///   missing.
fn parse_pic(pic_node: &Node) -> Result<Shape> {
    let blip_node = pic_node
        .descendants()
        .find(|n| is_named(n, "blip", A_NAMESPACE))
        .ok_or(Error::Malformed("picture without <a:blip>"))?;

    let embed_attr = blip_node
        .attribute((RELS_NAMESPACE, "embed"))
        .ok_or(Error::Malformed("picture blip without r:embed"))?;

    Ok(Shape::picture(ImageReference {
        id: embed_attr.to_string(),
        target: String::new(),
    }))
}
