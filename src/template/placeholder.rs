//! # Placeholder Substitution
//!
//! Ticket templates reference transaction fields as `{field}` tokens. The
//! printer service fills them with real data; the preview fills them with
//! fixed sample values so the operator sees a realistic ticket.
//!
//! ## Sample Table
//!
//! | Token | Sample |
//! |-------|--------|
//! | `{nom_empresa}` | PARQUEADERO CENTRAL S.A.S. |
//! | `{nit_empresa}` | 900.123.456-7 |
//! | `{des_placa}` | ABC123 |
//! | `{fecha}` | 2024-01-15 |
//! | `{hora_entrada}` | 08:30 |
//! | `{hora_salida}` | 10:45 |
//! | `{tiempo}` | 2h 15m |
//! | `{tipo_vehiculo}` | AUTOMOVIL |
//! | `{valor}` | $ 6.000 |
//! | `{total}` | $ 5.400 |
//! | `{descuento}` | $ 600 |
//! | `{vendedor}` | OPERADOR 1 |
//! | `{espacio}` | A-12 |
//! | `{observaciones}` | Sin novedad |

use serde::Serialize;

use crate::protocol::graphics::raster_line_span;

/// Built-in sample values, in display order.
const PARKING_SAMPLES: [(&str, &str); 14] = [
    ("nom_empresa", "PARQUEADERO CENTRAL S.A.S."),
    ("nit_empresa", "900.123.456-7"),
    ("des_placa", "ABC123"),
    ("fecha", "2024-01-15"),
    ("hora_entrada", "08:30"),
    ("hora_salida", "10:45"),
    ("tiempo", "2h 15m"),
    ("tipo_vehiculo", "AUTOMOVIL"),
    ("valor", "$ 6.000"),
    ("total", "$ 5.400"),
    ("descuento", "$ 600"),
    ("vendedor", "OPERADOR 1"),
    ("espacio", "A-12"),
    ("observaciones", "Sin novedad"),
];

/// One row of the sample table, as listed by the API and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Token including braces, e.g. `{des_placa}`
    pub token: String,
    pub sample: String,
}

/// Lookup table from field name to sample value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    entries: Vec<(String, String)>,
}

impl Default for SampleData {
    /// The parking ticket sample table.
    fn default() -> Self {
        Self {
            entries: PARKING_SAMPLES
                .iter()
                .map(|&(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl SampleData {
    /// A table with no entries; every brace stays literal.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a field, replacing an existing value.
    ///
    /// `name` is the bare field name, without braces.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Sample value for a bare field name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table rows with braces around the field names.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        self.entries
            .iter()
            .map(|(name, value)| Placeholder {
                token: format!("{{{}}}", name),
                sample: value.clone(),
            })
            .collect()
    }
}

/// Replace every known `{field}` with its sample value.
///
/// Unknown fields and unmatched braces are left as they are. Raster line
/// payloads present as real control characters are copied untouched.
///
/// ## Example
///
/// ```
/// use ticketpress::template::placeholder::{substitute, SampleData};
///
/// let samples = SampleData::default();
/// assert_eq!(substitute("Placa: {des_placa}", &samples), "Placa: ABC123");
/// assert_eq!(substitute("{unknown} {", &samples), "{unknown} {");
/// ```
pub fn substitute(input: &str, samples: &SampleData) -> String {
    if !input.contains('{') {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(end) = raster_line_span(&chars, i) {
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }

        if chars[i] == '{'
            && let Some(close) = chars[i + 1..].iter().position(|&c| c == '}' || c == '{')
            && chars[i + 1 + close] == '}'
        {
            let name: String = chars[i + 1..i + 1 + close].iter().collect();
            if let Some(value) = samples.get(&name) {
                out.push_str(value);
                i += close + 2;
                continue;
            }
        }

        out.push(chars[i]);
        i += 1;
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_samples_substitute() {
        let samples = SampleData::default();
        for placeholder in samples.placeholders() {
            assert_eq!(substitute(&placeholder.token, &samples), placeholder.sample);
        }
    }

    #[test]
    fn test_substitute_in_text() {
        let samples = SampleData::default();
        assert_eq!(
            substitute("Entrada {hora_entrada} - Salida {hora_salida}", &samples),
            "Entrada 08:30 - Salida 10:45"
        );
    }

    #[test]
    fn test_nested_open_brace() {
        let samples = SampleData::default();
        assert_eq!(substitute("{{des_placa}}", &samples), "{ABC123}");
    }

    #[test]
    fn test_unmatched_braces() {
        let samples = SampleData::default();
        assert_eq!(substitute("{des_placa", &samples), "{des_placa");
        assert_eq!(substitute("}{}", &samples), "}{}");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let samples = SampleData::default();
        assert_eq!(substitute("{DES_PLACA}", &samples), "{DES_PLACA}");
    }

    #[test]
    fn test_with_value_overrides() {
        let samples = SampleData::default()
            .with_value("des_placa", "XYZ987")
            .with_value("cliente", "Ana");
        assert_eq!(samples.len(), 15);
        assert_eq!(substitute("{des_placa} {cliente}", &samples), "XYZ987 Ana");
    }

    #[test]
    fn test_empty_table() {
        let samples = SampleData::empty();
        assert!(samples.is_empty());
        assert_eq!(substitute("{des_placa}", &samples), "{des_placa}");
    }

    #[test]
    fn test_raster_payload_untouched() {
        let samples = SampleData::default().with_value("x", "LONG VALUE");
        // Payload of three bytes: '{', 'x', '}'
        let template = "\u{1B}*\u{0}\u{3}\u{0}{x}{x}";
        assert_eq!(
            substitute(template, &samples),
            "\u{1B}*\u{0}\u{3}\u{0}{x}LONG VALUE"
        );
    }
}
