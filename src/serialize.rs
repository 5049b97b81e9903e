//! Text encoding of the cross-reference index.
//!
//! The format is consumed by the platform's storage layer and must stay
//! bit-exact:
//!
//! ```text
//! record := declStart "," declEnd ("," refOffset)* ";"
//! output := record*
//! ```
//!
//! Offsets are non-negative integers, so no escaping is needed. There is
//! no outer wrapper and no trailing newline; an empty index encodes as the
//! empty string.

use text_size::TextSize;

/// Separates offsets within one symbol record.
pub const FIELD_SEPARATOR: char = ',';

/// Terminates one symbol record.
pub const SYMBOL_SEPARATOR: char = ';';

/// Append one symbol record to the output buffer.
pub(crate) fn write_record(
    out: &mut String,
    declaration_start: TextSize,
    declaration_end: TextSize,
    references: &[TextSize],
) {
    push_offset(out, declaration_start);
    out.push(FIELD_SEPARATOR);
    push_offset(out, declaration_end);
    for &reference in references {
        out.push(FIELD_SEPARATOR);
        push_offset(out, reference);
    }
    out.push(SYMBOL_SEPARATOR);
}

fn push_offset(out: &mut String, offset: TextSize) {
    out.push_str(&u32::from(offset).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_layout() {
        let mut out = String::new();
        write_record(
            &mut out,
            TextSize::new(10),
            TextSize::new(14),
            &[TextSize::new(10), TextSize::new(40)],
        );
        assert_eq!(out, "10,14,10,40;");
    }

    #[test]
    fn test_records_concatenate_without_outer_delimiter() {
        let mut out = String::new();
        write_record(&mut out, TextSize::new(0), TextSize::new(3), &[TextSize::new(0)]);
        write_record(&mut out, TextSize::new(20), TextSize::new(25), &[TextSize::new(20)]);
        assert_eq!(out, "0,3,0;20,25,20;");
    }
}
