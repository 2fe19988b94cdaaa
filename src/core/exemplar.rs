use crate::domain::model::DataFrame;
use crate::domain::scoped_vars::Exemplar;

/// Values shorter than this many UTF-16 code units get one leading pad character.
pub const EXEMPLAR_PAD_WIDTH: usize = 16;
pub const EXEMPLAR_PAD_CHAR: char = '0';

/// Parses the first exemplar annotation attached to `row` of `frame`.
///
/// Absent when the frame carries no exemplars, the row is out of range, or the
/// row has no annotation. A present annotation always yields a mapping.
pub fn exemplar_at(frame: &DataFrame, row: usize) -> Option<Exemplar> {
    let annotation = frame.exemplars.as_ref()?.get(row)?.first()?;
    Some(parse_exemplar(annotation))
}

/// Decodes a `key:value;key:value` annotation.
///
/// Segments without a key are dropped, so an annotation with no pairs decodes
/// to an empty mapping. A value shorter than [`EXEMPLAR_PAD_WIDTH`] gets a
/// single `0` prepended, not padded to the width.
pub fn parse_exemplar(annotation: &str) -> Exemplar {
    let mut exemplar = Exemplar::default();

    for segment in annotation.split(';') {
        let Some(idx) = segment.find(':') else {
            continue;
        };
        if idx == 0 {
            continue;
        }

        let key = &segment[..idx];
        let value = &segment[idx + 1..];
        let value = if value.encode_utf16().count() < EXEMPLAR_PAD_WIDTH {
            format!("{}{}", EXEMPLAR_PAD_CHAR, value)
        } else {
            value.to_string()
        };
        exemplar.insert(key.to_string(), value);
    }

    if exemplar.is_empty() {
        tracing::debug!("exemplar annotation without key/value pairs: {:?}", annotation);
    }
    exemplar
}
