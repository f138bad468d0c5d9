//! Slide markup walking: ordered text-run extraction from one slide part.

use crate::error::{Error, Result};

/// Directory holding slide parts inside the package.
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Returns true for slide part paths of the form `ppt/slides/slideN.xml`,
/// with N one or more ASCII digits.
pub fn is_slide_part(path: &str) -> bool {
    path.strip_prefix(SLIDE_PREFIX)
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Extract text runs from one slide part, in document order.
///
/// Text lives in `p:sp/p:txBody/a:p/a:r/a:t` chains; each non-empty run
/// becomes one string. Shapes without a text body, paragraphs without runs,
/// and runs without literal text contribute nothing. Text inside tables
/// (`a:tbl`) belongs to graphic frames, not shapes, and is skipped.
///
/// Fails with [`Error::MalformedMarkup`] if the bytes are not well-formed
/// XML; `part` is only used for error context.
pub fn extract_text_runs(part: &str, xml: &str) -> Result<Vec<String>> {
    let mut runs = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    // Don't trim text - preserve whitespace from xml:space="preserve" runs
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut table_depth = 0u32;
    let mut in_shape = false;
    let mut in_txbody = false;
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut current_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => {
                let local_name = e.name().local_name();
                match local_name.as_ref() {
                    // a:tbl - table content is not shape text
                    b"tbl" => {
                        table_depth += 1;
                    }
                    // p:sp - shape
                    b"sp" if table_depth == 0 => {
                        in_shape = true;
                    }
                    // p:txBody - text body in shape
                    b"txBody" if in_shape && table_depth == 0 => {
                        in_txbody = true;
                    }
                    // a:p - paragraph
                    b"p" if in_txbody && table_depth == 0 => {
                        in_paragraph = true;
                    }
                    // a:r - text run
                    b"r" if in_paragraph && table_depth == 0 => {
                        in_run = true;
                        current_text.clear();
                    }
                    // a:t - literal text
                    b"t" if in_run && table_depth == 0 => {
                        in_text = true;
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_text && table_depth == 0 {
                    let text = e.unescape().unwrap_or_default();
                    current_text.push_str(&text);
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => {
                let local_name = e.name().local_name();
                match local_name.as_ref() {
                    b"tbl" => {
                        table_depth = table_depth.saturating_sub(1);
                    }
                    b"t" if table_depth == 0 => {
                        in_text = false;
                    }
                    b"r" if table_depth == 0 => {
                        if in_run && !current_text.is_empty() {
                            runs.push(std::mem::take(&mut current_text));
                        }
                        in_run = false;
                    }
                    b"p" if table_depth == 0 => {
                        in_paragraph = false;
                    }
                    b"txBody" if table_depth == 0 => {
                        in_txbody = false;
                    }
                    b"sp" if table_depth == 0 => {
                        in_shape = false;
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => {
                return Err(Error::MalformedMarkup {
                    part: part.to_string(),
                    reason: e.to_string(),
                })
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PART: &str = "ppt/slides/slide1.xml";

    #[test]
    fn test_is_slide_part() {
        assert!(is_slide_part("ppt/slides/slide1.xml"));
        assert!(is_slide_part("ppt/slides/slide42.xml"));
        assert!(!is_slide_part("ppt/slides/slide.xml"));
        assert!(!is_slide_part("ppt/slides/slideA.xml"));
        assert!(!is_slide_part("ppt/slides/slide1.xml.rels"));
        assert!(!is_slide_part("ppt/slideLayouts/slideLayout1.xml"));
        assert!(!is_slide_part("ppt/notesSlides/notesSlide1.xml"));
        assert!(!is_slide_part("ppt/media/image1.png"));
    }

    #[test]
    fn test_runs_in_document_order() {
        let xml = r#"<?xml version="1.0"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
       xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:sp><p:txBody>
      <a:p><a:r><a:t>First</a:t></a:r><a:r><a:t>Second</a:t></a:r></a:p>
      <a:p><a:r><a:t>Third</a:t></a:r></a:p>
    </p:txBody></p:sp>
    <p:sp><p:txBody>
      <a:p><a:r><a:t>Fourth</a:t></a:r></a:p>
    </p:txBody></p:sp>
  </p:spTree></p:cSld>
</p:sld>"#;

        let runs = extract_text_runs(PART, xml).unwrap();
        assert_eq!(runs, vec!["First", "Second", "Third", "Fourth"]);
    }

    #[test]
    fn test_empty_runs_and_shapes_skipped() {
        let xml = r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
       xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:sp><p:spPr/></p:sp>
    <p:sp><p:txBody><a:p/></p:txBody></p:sp>
    <p:sp><p:txBody><a:p><a:r><a:t></a:t></a:r><a:r><a:t>kept</a:t></a:r></a:p></p:txBody></p:sp>
  </p:spTree></p:cSld>
</p:sld>"#;

        let runs = extract_text_runs(PART, xml).unwrap();
        assert_eq!(runs, vec!["kept"]);
    }

    #[test]
    fn test_table_text_excluded() {
        let xml = r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
       xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:graphicFrame><a:graphic><a:graphicData>
      <a:tbl><a:tr><a:tc><a:txBody>
        <a:p><a:r><a:t>cell text</a:t></a:r></a:p>
      </a:txBody></a:tc></a:tr></a:tbl>
    </a:graphicData></a:graphic></p:graphicFrame>
    <p:sp><p:txBody><a:p><a:r><a:t>shape text</a:t></a:r></a:p></p:txBody></p:sp>
  </p:spTree></p:cSld>
</p:sld>"#;

        let runs = extract_text_runs(PART, xml).unwrap();
        assert_eq!(runs, vec!["shape text"]);
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>
    <p:sp><p:txBody><a:p><a:r><a:t>A &amp; B</a:t></a:r></a:p></p:txBody></p:sp>
  </p:spTree></p:cSld></p:sld>"#;

        let runs = extract_text_runs(PART, xml).unwrap();
        assert_eq!(runs, vec!["A & B"]);
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let xml = "<p:sld><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:r><a:t>text</a:t></a:r></a:p";
        let err = extract_text_runs(PART, xml).unwrap_err();
        match err {
            Error::MalformedMarkup { part, .. } => assert_eq!(part, PART),
            other => panic!("expected MalformedMarkup, got {other:?}"),
        }
    }
}
