//! The default XML codec for the registrar's `OPS_envelope` dialect.
//!
//! Wire shape:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" standalone="no"?>
//! <!DOCTYPE OPS_envelope SYSTEM "ops.dtd">
//! <OPS_envelope>
//!   <header><version>0.9</version></header>
//!   <body><data_block>
//!     <dt_assoc>
//!       <item key="protocol">XCP</item>
//!       ...
//!     </dt_assoc>
//!   </data_block></body>
//! </OPS_envelope>
//! ```
//!
//! Mappings become `dt_assoc`, lists become `dt_array` with positional
//! keys, and text leaves become `item` content.

use super::{Codec, CodecError};
use crate::envelope::{Envelope, Value};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::collections::BTreeMap;

const ENVELOPE_VERSION: &str = "0.9";
const DOCTYPE: &str = r#"OPS_envelope SYSTEM "ops.dtd""#;

/// Codec for the `OPS_envelope` XML wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl XmlCodec {
    /// Creates the codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for XmlCodec {
    fn encode(&self, envelope: &Envelope) -> Result<String, CodecError> {
        let mut writer = Writer::new(Vec::new());
        write_document(&mut writer, envelope)?;
        String::from_utf8(writer.into_inner()).map_err(|e| CodecError::Encoding(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<Envelope, CodecError> {
        let mut reader = Reader::from_str(text);
        loop {
            match reader.read_event().map_err(decoding)? {
                Event::Start(e) if e.name().as_ref() == b"dt_assoc" => {
                    return parse_assoc(&mut reader);
                }
                Event::Eof => {
                    return Err(CodecError::Decoding(
                        "document contains no dt_assoc data block".to_owned(),
                    ));
                }
                _ => {}
            }
        }
    }
}

fn decoding(error: impl std::fmt::Display) -> CodecError {
    CodecError::Decoding(error.to_string())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), CodecError> {
    writer
        .write_event(event)
        .map_err(|e| CodecError::Encoding(e.to_string()))
}

fn write_document(writer: &mut Writer<Vec<u8>>, envelope: &Envelope) -> Result<(), CodecError> {
    emit(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))),
    )?;
    emit(writer, Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    emit(writer, Event::Start(BytesStart::new("OPS_envelope")))?;
    emit(writer, Event::Start(BytesStart::new("header")))?;
    emit(writer, Event::Start(BytesStart::new("version")))?;
    emit(writer, Event::Text(BytesText::new(ENVELOPE_VERSION)))?;
    emit(writer, Event::End(BytesEnd::new("version")))?;
    emit(writer, Event::End(BytesEnd::new("header")))?;
    emit(writer, Event::Start(BytesStart::new("body")))?;
    emit(writer, Event::Start(BytesStart::new("data_block")))?;
    write_assoc(writer, envelope)?;
    emit(writer, Event::End(BytesEnd::new("data_block")))?;
    emit(writer, Event::End(BytesEnd::new("body")))?;
    emit(writer, Event::End(BytesEnd::new("OPS_envelope")))
}

fn write_assoc(
    writer: &mut Writer<Vec<u8>>,
    map: &BTreeMap<String, Value>,
) -> Result<(), CodecError> {
    emit(writer, Event::Start(BytesStart::new("dt_assoc")))?;
    for (key, value) in map {
        write_item(writer, key, value)?;
    }
    emit(writer, Event::End(BytesEnd::new("dt_assoc")))
}

fn write_list(writer: &mut Writer<Vec<u8>>, items: &[Value]) -> Result<(), CodecError> {
    emit(writer, Event::Start(BytesStart::new("dt_array")))?;
    for (index, value) in items.iter().enumerate() {
        write_item(writer, &index.to_string(), value)?;
    }
    emit(writer, Event::End(BytesEnd::new("dt_array")))
}

fn write_item(writer: &mut Writer<Vec<u8>>, key: &str, value: &Value) -> Result<(), CodecError> {
    let mut item = BytesStart::new("item");
    item.push_attribute(("key", key));
    emit(writer, Event::Start(item))?;
    match value {
        Value::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
        Value::Assoc(map) => write_assoc(writer, map)?,
        Value::List(items) => write_list(writer, items)?,
    }
    emit(writer, Event::End(BytesEnd::new("item")))
}

fn parse_assoc(reader: &mut Reader<&[u8]>) -> Result<Envelope, CodecError> {
    let mut map = Envelope::new();
    loop {
        match reader.read_event().map_err(decoding)? {
            Event::Start(e) if e.name().as_ref() == b"item" => {
                let key = item_key(&e)?;
                let value = parse_item(reader)?;
                map.insert(key, value);
            }
            Event::Empty(e) if e.name().as_ref() == b"item" => {
                map.insert(item_key(&e)?, Value::Text(String::new()));
            }
            Event::End(e) if e.name().as_ref() == b"dt_assoc" => return Ok(map),
            Event::Eof => return Err(CodecError::Decoding("unterminated dt_assoc".to_owned())),
            _ => {}
        }
    }
}

fn parse_list(reader: &mut Reader<&[u8]>) -> Result<Vec<Value>, CodecError> {
    let mut items = Vec::new();
    loop {
        match reader.read_event().map_err(decoding)? {
            Event::Start(e) if e.name().as_ref() == b"item" => {
                items.push(parse_item(reader)?);
            }
            Event::Empty(e) if e.name().as_ref() == b"item" => {
                items.push(Value::Text(String::new()));
            }
            Event::End(e) if e.name().as_ref() == b"dt_array" => return Ok(items),
            Event::Eof => return Err(CodecError::Decoding("unterminated dt_array".to_owned())),
            _ => {}
        }
    }
}

/// Reads the content of one `item` element, up to its end tag.
///
/// A nested `dt_assoc` or `dt_array` wins over interleaved whitespace
/// text; a plain item yields its accumulated text.
fn parse_item(reader: &mut Reader<&[u8]>) -> Result<Value, CodecError> {
    let mut nested: Option<Value> = None;
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(decoding)? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(decoding)?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::Start(e) if e.name().as_ref() == b"dt_assoc" => {
                nested = Some(Value::Assoc(parse_assoc(reader)?));
            }
            Event::Start(e) if e.name().as_ref() == b"dt_array" => {
                nested = Some(Value::List(parse_list(reader)?));
            }
            Event::End(e) if e.name().as_ref() == b"item" => {
                return Ok(nested.unwrap_or(Value::Text(text)));
            }
            Event::Eof => return Err(CodecError::Decoding("unterminated item".to_owned())),
            _ => {}
        }
    }
}

fn item_key(start: &BytesStart<'_>) -> Result<String, CodecError> {
    for attr in start.attributes() {
        let attr = attr.map_err(decoding)?;
        if attr.key.as_ref() == b"key" {
            return Ok(attr.unescape_value().map_err(decoding)?.into_owned());
        }
    }
    Err(CodecError::Decoding(
        "item element without key attribute".to_owned(),
    ))
}
