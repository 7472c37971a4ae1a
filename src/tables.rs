//! Static lookup tables. Loaded once, read-only for the life of the process.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// TSE federative-unit codes as they appear in positions 9-10 of a voter
/// registration number, ordered by electorate size. `ZZ` covers voters
/// registered abroad.
pub(crate) const FEDERATIVE_UNITS: &[(&str, &str)] = &[
    ("01", "SP"),
    ("02", "MG"),
    ("03", "RJ"),
    ("04", "RS"),
    ("05", "BA"),
    ("06", "PR"),
    ("07", "CE"),
    ("08", "PE"),
    ("09", "SC"),
    ("10", "GO"),
    ("11", "MA"),
    ("12", "PB"),
    ("13", "PA"),
    ("14", "ES"),
    ("15", "PI"),
    ("16", "RN"),
    ("17", "AL"),
    ("18", "MT"),
    ("19", "MS"),
    ("20", "DF"),
    ("21", "SE"),
    ("22", "AM"),
    ("23", "RO"),
    ("24", "AC"),
    ("25", "AP"),
    ("26", "RR"),
    ("27", "TO"),
    ("28", "ZZ"),
];

lazy_static! {
    static ref FEDERATIVE_UNIT_BY_ABBREV: HashMap<&'static str, &'static str> =
        FEDERATIVE_UNITS.iter().map(|&(code, uf)| (uf, code)).collect();

    /// CNJ judiciary segment (digit `J` of a process number) mapped to the
    /// court codes (`TR`) that exist in that segment. Code 0 is the
    /// segment's superior court where one exists.
    static ref COURTS_BY_SEGMENT: HashMap<u32, Vec<u32>> = {
        let mut m = HashMap::new();
        m.insert(1, vec![0]); // Supremo Tribunal Federal
        m.insert(2, vec![0]); // Conselho Nacional de Justiça
        m.insert(3, vec![0]); // Superior Tribunal de Justiça
        m.insert(4, (1..=6).collect()); // Justiça Federal, regional courts
        m.insert(5, (0..=24).collect()); // Justiça do Trabalho (0 = TST)
        m.insert(6, (0..=27).collect()); // Justiça Eleitoral (0 = TSE)
        m.insert(7, (0..=12).collect()); // Justiça Militar da União
        m.insert(8, (1..=27).collect()); // Justiça Estadual
        m.insert(9, vec![13, 21, 26]); // Justiça Militar Estadual: MG, RS, SP
        m
    };

    /// Receita Federal legal-nature codes carried by CNPJ registrations.
    /// Membership only; descriptions are kept for diagnostics.
    static ref LEGAL_NATURES: HashMap<&'static str, &'static str> = HashMap::from([
        ("1015", "Órgão Público do Poder Executivo Federal"),
        ("1023", "Órgão Público do Poder Executivo Estadual ou do Distrito Federal"),
        ("1031", "Órgão Público do Poder Executivo Municipal"),
        ("1104", "Autarquia Federal"),
        ("2011", "Empresa Pública"),
        ("2038", "Sociedade de Economia Mista"),
        ("2046", "Sociedade Anônima Aberta"),
        ("2054", "Sociedade Anônima Fechada"),
        ("2062", "Sociedade Empresária Limitada"),
        ("2135", "Empresário (Individual)"),
        ("2305", "Empresa Individual de Responsabilidade Limitada"),
        ("3069", "Fundação Privada"),
        ("3999", "Associação Privada"),
        ("4014", "Empresa Individual Imobiliária"),
    ]);
}

/// Maps a federative-unit abbreviation (`"SP"`) to its TSE code (`"01"`).
pub fn federative_unit_code(abbrev: &str) -> Option<&'static str> {
    FEDERATIVE_UNIT_BY_ABBREV.get(abbrev).copied()
}

pub(crate) fn is_federative_unit_code(code: &str) -> bool {
    FEDERATIVE_UNITS.iter().any(|&(c, _)| c == code)
}

/// Court codes that exist within a CNJ judiciary segment.
pub(crate) fn court_codes(segment: u32) -> Option<&'static [u32]> {
    COURTS_BY_SEGMENT.get(&segment).map(|v| v.as_slice())
}

pub(crate) fn is_court_code(segment: u32, court: u32) -> bool {
    court_codes(segment).is_some_and(|codes| codes.contains(&court))
}

/// Whether `code` is a known Receita Federal legal-nature code.
pub fn is_valid_legal_nature(code: &str) -> bool {
    LEGAL_NATURES.contains_key(code)
}

/// Description of a legal-nature code, when known.
pub fn legal_nature_description(code: &str) -> Option<&'static str> {
    LEGAL_NATURES.get(code).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn federative_unit_round_trip() {
        assert_eq!(federative_unit_code("SP"), Some("01"));
        assert_eq!(federative_unit_code("ZZ"), Some("28"));
        assert_eq!(federative_unit_code("XX"), None);
        assert!(is_federative_unit_code("09"));
        assert!(!is_federative_unit_code("29"));
        assert!(!is_federative_unit_code("00"));
    }

    #[test]
    fn court_membership() {
        assert!(is_court_code(8, 26));
        assert!(is_court_code(4, 3));
        assert!(is_court_code(9, 13));
        assert!(!is_court_code(9, 14));
        assert!(!is_court_code(4, 7));
        assert!(!is_court_code(0, 1));
        assert!(!is_court_code(10, 1));
    }

    #[test]
    fn legal_nature_membership() {
        assert!(is_valid_legal_nature("2062"));
        assert_eq!(
            legal_nature_description("3999"),
            Some("Associação Privada")
        );
        assert!(!is_valid_legal_nature("0000"));
        assert!(!is_valid_legal_nature("206"));
    }
}
