//! Small helpers shared by the WordprocessingML part parsers

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Read the unescaped value of the attribute whose local name is `name`
///
/// Prefixes are ignored, so `w:val` and `val` both match `b"val"`.
pub(crate) fn attr_value(element: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Resolve the name of a general entity reference (`amp`, `#160`, `#x2014`)
pub(crate) fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => std::str::from_utf8(hex)
            .ok()
            .and_then(|digits| u32::from_str_radix(digits, 16).ok())
            .and_then(char::from_u32),
        [b'#', decimal @ ..] => std::str::from_utf8(decimal)
            .ok()
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(char::from_u32),
        _ => None,
    }
}

/// Text of a standalone `w:r` fragment
///
/// `w:t` content is kept verbatim; `w:tab` becomes a tab and `w:br`/`w:cr` a
/// newline. Fails when the fragment is not well-formed.
pub(crate) fn run_text(fragment: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(fragment);
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_text = false,
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => text.push_str(&String::from_utf8_lossy(e.as_ref())),
            Event::GeneralRef(e) if in_text => {
                if let Some(c) = resolve_entity(&e) {
                    text.push(c);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
