//! XML event pump.
//!
//! Drives a [`quick_xml::Reader`] over the source and forwards start and end
//! tags to a [`TreeBuilder`]. Everything that is not a tag is skipped.

use log::{debug, info};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use vellum_core::document::Document;

use crate::{
    attribute::Attributes,
    builder::{ParseConfig, TreeBuilder},
    error::{Diagnostic, ErrorCode, ParseError, Result},
    span::Span,
};

/// Read a whole document, returning it with the collected warnings.
pub(crate) fn read_document(
    source: &str,
    config: ParseConfig,
) -> std::result::Result<(Document, Vec<Diagnostic>), ParseError> {
    info!(bytes = source.len(), policy:% = config.unsupported_tags; "Reading document");

    let mut reader = Reader::from_str(source);
    // Stack discipline belongs to the builder.
    reader.check_end_names(false);

    let mut builder = TreeBuilder::new(config);

    loop {
        let start = reader.buffer_position();
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                let span = Span::new(start..reader.buffer_position());
                return Err(builder.abort(
                    Diagnostic::error(format!("malformed XML: {err}"))
                        .with_code(ErrorCode::E001)
                        .with_label(span, "here"),
                ));
            }
        };
        let span = Span::new(start..reader.buffer_position());

        let step = match event {
            Event::Start(tag) => start_tag(&mut builder, &tag, span),
            Event::Empty(tag) => empty_tag(&mut builder, &tag, span),
            Event::End(tag) => tag_name(tag.name().into_inner(), span)
                .and_then(|name| builder.end_element(name, span)),
            Event::Eof => break,
            Event::Text(_)
            | Event::CData(_)
            | Event::Comment(_)
            | Event::Decl(_)
            | Event::PI(_)
            | Event::DocType(_) => Ok(()),
        };

        if let Err(fatal) = step {
            debug!(code:? = fatal.code(), span:% = span; "Aborting parse");
            return Err(builder.abort(fatal));
        }
    }

    let (document, warnings) = builder.finish()?;
    info!(nodes = document.len(), warnings = warnings.len(); "Document read");
    Ok((document, warnings))
}

fn start_tag(builder: &mut TreeBuilder, tag: &BytesStart<'_>, span: Span) -> Result<()> {
    let name = tag_name(tag.name().into_inner(), span)?;
    let attributes = attributes(tag, span)?;
    builder.start_element(name, &attributes, span)
}

/// A self-closing tag is a start immediately followed by its end.
fn empty_tag(builder: &mut TreeBuilder, tag: &BytesStart<'_>, span: Span) -> Result<()> {
    start_tag(builder, tag, span)?;
    let name = tag_name(tag.name().into_inner(), span)?;
    builder.end_element(name, span)
}

fn tag_name(raw: &[u8], span: Span) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|_| {
        Diagnostic::error("tag name is not valid UTF-8")
            .with_code(ErrorCode::E002)
            .with_label(span, "in this tag")
    })
}

fn attributes(tag: &BytesStart<'_>, span: Span) -> Result<Attributes> {
    let malformed = |detail: String| {
        Diagnostic::error(format!("malformed attribute: {detail}"))
            .with_code(ErrorCode::E003)
            .with_label(span, "in this tag")
    };

    let mut attributes = Attributes::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|err| malformed(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| malformed("attribute name is not valid UTF-8".to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|err| malformed(err.to_string()))?;
        attributes.insert(key, value);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn read(source: &str) -> std::result::Result<(Document, Vec<Diagnostic>), ParseError> {
        read_document(source, ParseConfig::default())
    }

    #[test]
    fn test_skips_non_tag_events() {
        let source = r#"<?xml version="1.0"?>
<!DOCTYPE svg>
<!-- header -->
<svg viewBox="0 0 10 10">text<![CDATA[raw]]><?pi data?><circle r="1"/></svg>
"#;
        let (document, warnings) = read(source).expect("document should parse");
        assert_eq!(document.len(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_tag_spans_cover_the_tag() {
        let source = r#"<svg><bogus/></svg>"#;
        let (_, warnings) = read(source).expect("document should parse");

        assert_eq!(warnings.len(), 1);
        let label = &warnings[0].labels()[0];
        assert_eq!(&source[label.span().to_range()], "<bogus/>");
    }

    #[test]
    fn test_malformed_xml() {
        let err = read("<svg><!-- never closed").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_duplicate_attribute_is_malformed() {
        let err = read(r#"<svg><circle r="1" r="2"/></svg>"#).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_entities_in_attribute_values_are_unescaped() {
        let (document, warnings) =
            read(r#"<svg viewBox="0&#32;0&#32;20&#32;10"></svg>"#).expect("document should parse");
        assert!(warnings.is_empty());
        assert_approx_eq!(f64, document.viewport().view_box().width(), 20.0);
    }

    #[test]
    fn test_mismatch_is_reported_by_builder() {
        let err = read("<svg></circle>").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
    }
}
