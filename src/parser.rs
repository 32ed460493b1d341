//! Extraction of key/value pairs from `.resx` resource files.
//!
//! No schema validation happens here: any `<data name="KEY" ...>` element
//! carrying a `<value>` child yields a pair, everything else is skipped.

use std::{
    borrow::Cow,
    io::{BufRead, Read, Write},
};

use lazy_static::lazy_static;
use quick_xml::{
    Writer,
    escape::unescape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use regex::Regex;

use crate::{error::Error, traits::Parser};

lazy_static! {
    static ref DATA_REGEX: Regex =
        Regex::new(r#"(?s)<data\s[^>]*?\bname\s*=\s*"(?P<key>[^"]+)"(?:[^>]*[^/>])?>(?P<body>.*?)</data>"#)
            .unwrap();
    static ref VALUE_REGEX: Regex =
        Regex::new(r"(?s)<value>(?P<value>.*?)</value>|<value\s*/>").unwrap();
}

/// One `.resx` file reduced to its ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResxDocument {
    /// Pairs in document order. Duplicate keys are kept; the last one wins on merge.
    pub pairs: Vec<(String, String)>,
}

impl ResxDocument {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Extracts pairs from already decoded file content.
    pub fn parse(content: &str) -> Self {
        let pairs = DATA_REGEX
            .captures_iter(content)
            .filter_map(|data| {
                let value = VALUE_REGEX.captures(&data["body"])?;
                // `<value />` has no capture and stands for an empty string.
                let text = value.name("value").map_or("", |m| m.as_str());
                Some((unescape_text(&data["key"]), unescape_text(text)))
            })
            .collect();
        Self { pairs }
    }
}

impl Parser for ResxDocument {
    /// Decodes the reader (honoring UTF-8/UTF-16 byte order marks) and parses it.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(reader);

        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .map_err(|e| Error::parse_error(format!("resource file is not valid text: {}", e)))?;

        Ok(Self::parse(&content))
    }

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(Self::parse(s))
    }

    /// Writes a minimal `.resx` document holding only `<data>` elements.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 2);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("root")))?;

        for (key, value) in &self.pairs {
            let mut data = BytesStart::new("data");
            data.push_attribute(("name", key.as_str()));
            data.push_attribute(("xml:space", "preserve"));

            xml_writer.write_event(Event::Start(data))?;
            xml_writer.write_event(Event::Start(BytesStart::new("value")))?;
            xml_writer.write_event(Event::Text(BytesText::new(value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("value")))?;
            xml_writer.write_event(Event::End(BytesEnd::new("data")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("root")))?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

// Entity references that fail to resolve are kept verbatim.
fn unescape_text(raw: &str) -> String {
    match unescape(raw) {
        Ok(Cow::Borrowed(text)) => text.to_string(),
        Ok(Cow::Owned(text)) => text,
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Parser;
    use indoc::indoc;

    #[test]
    fn test_parse_visual_studio_resx() {
        let resx = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <root>
              <resheader name="resmimetype">
                <value>text/microsoft-resx</value>
              </resheader>
              <data name="Greeting" xml:space="preserve">
                <value>Hello</value>
              </data>
              <data name="Farewell" xml:space="preserve">
                <value>Goodbye</value>
                <comment>Shown on exit</comment>
              </data>
            </root>
        "#};
        let doc = ResxDocument::from_str(resx).unwrap();
        assert_eq!(
            doc.pairs,
            vec![
                ("Greeting".to_string(), "Hello".to_string()),
                ("Farewell".to_string(), "Goodbye".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_tolerates_attribute_order_and_single_line() {
        let resx = r#"<root><data type="System.String" name="A"><value>1</value></data><data name="B"><value>2</value></data></root>"#;
        let doc = ResxDocument::parse(resx);
        assert_eq!(
            doc.pairs,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_search_stays_inside_data_element() {
        let resx = indoc! {r#"
            <data name="NoValue" xml:space="preserve">
              <comment>nothing here</comment>
            </data>
            <data name="WithValue" xml:space="preserve">
              <value>Present</value>
            </data>
        "#};
        let doc = ResxDocument::parse(resx);
        assert_eq!(
            doc.pairs,
            vec![("WithValue".to_string(), "Present".to_string())]
        );
    }

    #[test]
    fn test_self_closing_data_does_not_steal_next_value() {
        let resx = r#"<data name="Empty" /><data name="Next"><value>v</value></data>"#;
        let doc = ResxDocument::parse(resx);
        assert_eq!(doc.pairs, vec![("Next".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_duplicate_keys_are_preserved_in_order() {
        let resx = r#"<data name="K"><value>first</value></data><data name="K"><value>second</value></data>"#;
        let doc = ResxDocument::parse(resx);
        assert_eq!(doc.pairs.len(), 2);
        assert_eq!(doc.pairs[1].1, "second");
    }

    #[test]
    fn test_multiline_value_and_entities() {
        let resx = "<data name=\"Tom &amp; Jerry\"><value>line one\nline &lt;two&gt;</value></data>";
        let doc = ResxDocument::parse(resx);
        assert_eq!(
            doc.pairs,
            vec![(
                "Tom & Jerry".to_string(),
                "line one\nline <two>".to_string()
            )]
        );
    }

    #[test]
    fn test_unknown_entity_is_kept_verbatim() {
        let doc = ResxDocument::parse(r#"<data name="A"><value>&nbsp;x</value></data>"#);
        assert_eq!(doc.pairs[0].1, "&nbsp;x");
    }

    #[test]
    fn test_empty_value() {
        let doc = ResxDocument::parse(r#"<data name="Empty" xml:space="preserve"><value></value></data>"#);
        assert_eq!(doc.pairs, vec![("Empty".to_string(), String::new())]);
    }

    #[test]
    fn test_self_closing_value_is_empty() {
        let resx = indoc! {r#"
            <data name="Blank" xml:space="preserve">
              <value />
            </data>
            <data name="Tight"><value/></data>
        "#};
        let doc = ResxDocument::parse(resx);
        assert_eq!(
            doc.pairs,
            vec![
                ("Blank".to_string(), String::new()),
                ("Tight".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let doc = ResxDocument::from_str("this is not xml at all").unwrap();
        assert!(doc.pairs.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let bytes: &[u8] = &[0x3c, 0x64, 0xff, 0xfe, 0xfd, 0x80];
        // 0xff 0xfe would be a UTF-16 BOM only at the start.
        let result = ResxDocument::from_reader(bytes);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_utf16_with_bom_is_decoded() {
        let resx = r#"<data name="Key"><value>Wert</value></data>"#;
        let mut bytes = vec![0xff, 0xfe];
        for unit in resx.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let doc = ResxDocument::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(doc.pairs, vec![("Key".to_string(), "Wert".to_string())]);
    }

    #[test]
    fn test_written_document_parses_back() {
        let doc = ResxDocument::new(vec![
            ("Greeting".to_string(), "Hallo & willkommen".to_string()),
            ("Farewell".to_string(), "Tschüss".to_string()),
        ]);
        let mut out = Vec::new();
        doc.to_writer(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(r#"<data name="Greeting" xml:space="preserve">"#));
        assert!(written.contains("Hallo &amp; willkommen"));
        assert_eq!(ResxDocument::from_str(&written).unwrap(), doc);
    }
}
