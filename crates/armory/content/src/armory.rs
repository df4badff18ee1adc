//! Armory file parser.
//!
//! An armory file is line-oriented text:
//!
//! ```text
//! # comment
//! weights   0.8 1.0 1.0 0.0 0.0 0.0
//! minStats  20  20  20  20  20  20
//!
//! suit "Current"
//! HEAD   LEGEND "Helm"     10 12  2  8 20  2
//! ARMS   LEGEND "Gloves"    2 20 10  2 12  8
//! BODY   EXOTIC "Vest"     16  2 16 10  2 10
//! LEGS   LEGEND "Boots"     8  8 12 20  2  6
//!
//! HEAD   EXOTIC "Crown"     2 10 20  2 10 14
//! ```
//!
//! Piece lines are `SLOT RARITY "Name"` followed by six stat values. A `suit` line is
//! followed by exactly four piece lines in slot order. The last `weights` and
//! `minStats` lines win.

use std::collections::HashMap;
use std::str::FromStr;

use armory_core::{
    Armor, ArmoryError, Catalog, Criteria, NamedSuit, Rarity, Slot, Stat, Stats, Weights,
};

/// A parse failure, tagged with its 1-based line number.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Line {line}, {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(line: usize, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }
}

/// What went wrong on a line.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    #[error("unknown rarity: {0}")]
    UnknownRarity(String),

    #[error("unterminated name")]
    UnterminatedName,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unexpected text: {0}")]
    Unexpected(String),

    #[error("expected {0} piece")]
    ExpectedSlot(Slot),

    #[error("suit ends before its {0} piece")]
    IncompleteSuit(Slot),

    #[error(transparent)]
    Invalid(#[from] ArmoryError),
}

/// Parsed contents of an armory file.
#[derive(Clone, Debug, Default)]
pub struct ArmoryFile {
    catalog: Catalog,
    suits: Vec<NamedSuit>,
    weights: Option<Weights>,
    minimums: Option<Stats>,
    lines: HashMap<Armor, usize>,
}

impl ArmoryFile {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut file = ArmoryFile::default();
        let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

        while let Some((number, raw)) = lines.next() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (keyword, rest) = next_token(line).unwrap_or((line, ""));
            let at = |kind: ParseErrorKind| ParseError::new(number, kind);

            if keyword.eq_ignore_ascii_case("suit") {
                let (name, rest) = parse_name(rest).map_err(at)?;
                if !rest.trim().is_empty() {
                    return Err(at(ParseErrorKind::Unexpected(rest.trim().to_string())));
                }
                let suit = parse_suit_body(name, number, &mut lines)?;
                file.suits.push(suit);
            } else if keyword.eq_ignore_ascii_case("weights") {
                let values = six(&parse_numbers::<f64>(rest).map_err(at)?)
                    .map_err(|e| at(e.into()))?;
                file.weights = Some(Weights::new(values).map_err(|e| at(e.into()))?);
            } else if keyword.eq_ignore_ascii_case("minStats") {
                let values = six(&parse_numbers::<i32>(rest).map_err(at)?)
                    .map_err(|e| at(e.into()))?;
                file.minimums = Some(Stats::bounded(values).map_err(|e| at(e.into()))?);
            } else {
                let piece = parse_piece(line).map_err(at)?;
                file.add_piece(piece, number);
            }
        }

        tracing::debug!(
            pieces = file.catalog.len(),
            suits = file.suits.len(),
            "parsed armory file"
        );
        Ok(file)
    }

    fn add_piece(&mut self, piece: Armor, line: usize) {
        if self.catalog.insert(piece.clone()) {
            self.lines.insert(piece, line);
        } else {
            tracing::trace!(line, name = piece.name(), "duplicate piece ignored");
        }
    }

    /// Every distinct piece listed outside of a suit.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Declared suits, in file order.
    pub fn suits(&self) -> &[NamedSuit] {
        &self.suits
    }

    pub fn weights(&self) -> Option<&Weights> {
        self.weights.as_ref()
    }

    pub fn minimums(&self) -> Option<&Stats> {
        self.minimums.as_ref()
    }

    /// Criteria declared by the file, defaults elsewhere.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            weights: self.weights.unwrap_or_default(),
            minimums: self.minimums.unwrap_or_default(),
            ..Criteria::default()
        }
    }

    /// Line on which `piece` first appeared.
    pub fn line_of(&self, piece: &Armor) -> Option<usize> {
        self.lines.get(piece).copied()
    }
}

fn parse_suit_body<'t>(
    name: &str,
    suit_line: usize,
    lines: &mut impl Iterator<Item = (usize, &'t str)>,
) -> Result<NamedSuit, ParseError> {
    let mut pieces = Vec::with_capacity(Slot::COUNT);
    for slot in Slot::all() {
        let (number, line) = lines
            .next()
            .ok_or_else(|| ParseError::new(suit_line, ParseErrorKind::IncompleteSuit(slot)))?;
        let piece = parse_piece(line.trim()).map_err(|kind| ParseError::new(number, kind))?;
        if piece.slot() != slot {
            return Err(ParseError::new(number, ParseErrorKind::ExpectedSlot(slot)));
        }
        pieces.push(piece);
    }

    let pieces: [Armor; Slot::COUNT] = pieces
        .try_into()
        .map_err(|_| ParseError::new(suit_line, ParseErrorKind::IncompleteSuit(Slot::Legs)))?;
    NamedSuit::new(name, pieces).map_err(|e| ParseError::new(suit_line, e))
}

/// Parses `SLOT RARITY "Name" mob res rec dis int str`.
fn parse_piece(line: &str) -> Result<Armor, ParseErrorKind> {
    let (slot, rest) = next_token(line).ok_or(ParseErrorKind::Missing("slot"))?;
    let slot = Slot::from_str(slot).map_err(|_| ParseErrorKind::UnknownSlot(slot.to_string()))?;

    let (rarity, rest) = next_token(rest).ok_or(ParseErrorKind::Missing("rarity"))?;
    let rarity =
        Rarity::from_str(rarity).map_err(|_| ParseErrorKind::UnknownRarity(rarity.to_string()))?;

    let (name, rest) = parse_name(rest)?;
    let values = six(&parse_numbers::<i32>(rest)?)?;
    let stats = Stats::bounded(values)?;

    Ok(Armor::new(slot, rarity, name, stats))
}

/// A name is DOUBLE_QUOTE text DOUBLE_QUOTE. Returns the trimmed name and the rest.
fn parse_name(text: &str) -> Result<(&str, &str), ParseErrorKind> {
    let text = text
        .trim_start()
        .strip_prefix('"')
        .ok_or(ParseErrorKind::Missing("quoted name"))?;
    let end = text.find('"').ok_or(ParseErrorKind::UnterminatedName)?;
    let name = text[..end].trim();
    if name.is_empty() {
        return Err(ParseErrorKind::Missing("name"));
    }
    Ok((name, &text[end + 1..]))
}

fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(match text.find(char::is_whitespace) {
        Some(end) => text.split_at(end),
        None => (text, ""),
    })
}

fn parse_numbers<T: FromStr>(text: &str) -> Result<Vec<T>, ParseErrorKind> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| ParseErrorKind::InvalidNumber(token.to_string()))
        })
        .collect()
}

fn six<T: Copy>(values: &[T]) -> Result<[T; Stat::COUNT], ArmoryError> {
    values.try_into().map_err(|_| ArmoryError::MalformedVector {
        expected: Stat::COUNT,
        found: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Armory file for tests
weights   0.8 1.0 1.0 0.0 0.0 0.0
minStats  20  20  20  20  20  20

suit "Current"
HEAD   LEGEND "Helm"        10 12  2  8 20  2
ARMS   LEGEND "Gloves"       2 20 10  2 12  8
BODY   EXOTIC "Vest"        16  2 16 10  2 10
LEGS   LEGEND "Boots"        8  8 12 20  2  6

# Exotic Armor
HEAD   EXOTIC "Crown of Tempests"   2 10 20  2 10 14

# Legacy Armor
HEAD   LEGEND "Helm"        10 12  2  8 20  2
ARMS   legendary "Gloves"    2 20 10  2 12  8
HEAD   LEGEND "Helm"        10 12  2  8 20  2
"#;

    #[test]
    fn parses_pieces_suits_weights_and_minimums() {
        let file = ArmoryFile::parse(SAMPLE).unwrap();

        assert_eq!(file.catalog().len(), 3);
        assert_eq!(file.catalog().count(Slot::Head), 2);
        assert_eq!(file.catalog().count(Slot::Arms), 1);

        let crown = file.catalog().get(Slot::Head, 0).unwrap();
        assert_eq!(crown.name(), "Crown of Tempests");
        assert!(crown.is_exotic());
        assert_eq!(crown.stat(Stat::Str), 14);
        assert_eq!(file.line_of(crown), Some(13));

        assert_eq!(file.suits().len(), 1);
        let current = &file.suits()[0];
        assert_eq!(current.name(), "Current");
        assert_eq!(current.suit().piece(Slot::Body).name(), "Vest");

        let weights = file.weights().unwrap();
        assert_eq!(weights.get(Stat::Mob), 0.8);
        assert_eq!(weights.get(Stat::Dis), 0.0);
        assert_eq!(file.minimums(), Some(&Stats::new([20; 6])));
    }

    #[test]
    fn duplicate_pieces_keep_their_first_line() {
        let file = ArmoryFile::parse(SAMPLE).unwrap();
        let helm = file.catalog().get(Slot::Head, 1).unwrap();
        assert_eq!(helm.name(), "Helm");
        assert_eq!(file.line_of(helm), Some(16));
    }

    #[test]
    fn suit_pieces_are_not_catalog_pieces() {
        let file = ArmoryFile::parse(SAMPLE).unwrap();
        let vest = file.suits()[0].suit().piece(Slot::Body);
        assert!(!file.catalog().contains(vest));
        assert_eq!(file.line_of(vest), None);
    }

    #[test]
    fn defaults_when_nothing_is_declared() {
        let file = ArmoryFile::parse("LEGS LEGEND \"Boots\" 1 2 3 4 5 6\n").unwrap();
        assert!(file.weights().is_none());
        let criteria = file.criteria();
        assert_eq!(criteria.weights, Weights::uniform());
        assert_eq!(criteria.minimums, Stats::ZERO);
        assert_eq!(criteria.limit, Criteria::DEFAULT_LIMIT);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = ArmoryFile::parse("\nHEAD LEGEND \"Helm\" 1 2 3 4 5\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "Line 2, expected 6 stat values, found 5");

        let err = ArmoryFile::parse("FEET LEGEND \"Socks\" 1 2 3 4 5 6").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownSlot("FEET".to_string()));

        let err = ArmoryFile::parse("HEAD RARE \"Hat\" 1 2 3 4 5 6").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownRarity("RARE".to_string()));

        let err = ArmoryFile::parse("HEAD LEGEND Hat 1 2 3 4 5 6").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Missing("quoted name"));

        let err = ArmoryFile::parse("HEAD LEGEND \"Hat 1 2 3 4 5 6").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedName);

        let err = ArmoryFile::parse("HEAD LEGEND \"Hat\" 1 2 x 4 5 6").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("x".to_string()));
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = ArmoryFile::parse("HEAD LEGEND \"Hat\" 1 2 -3 4 5 6").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Invalid(ArmoryError::NegativeStat {
                stat: Stat::Rec,
                value: -3
            })
        );

        assert!(ArmoryFile::parse("weights 1 1 -1 1 1 1").is_err());
        assert!(ArmoryFile::parse("minStats 0 0 0 0 0 -20").is_err());
    }

    #[test]
    fn oversized_values_are_rejected() {
        let text = "# catalog\nHEAD LEGEND \"Hat\" 1000000000 0 0 0 0 0";
        let err = ArmoryFile::parse(text).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(
            err.kind,
            ParseErrorKind::Invalid(ArmoryError::StatTooLarge {
                stat: Stat::Mob,
                value: 1_000_000_000,
                max: Stats::MAX_VALUE
            })
        );

        assert!(ArmoryFile::parse("minStats 0 0 0 0 0 10001").is_err());
        assert!(ArmoryFile::parse("HEAD LEGEND \"Cap\" 10000 0 0 0 0 0").is_ok());
    }

    #[test]
    fn suits_need_four_pieces_in_slot_order() {
        let text = "suit \"Odd\"\nHEAD LEGEND \"H\" 1 1 1 1 1 1\nBODY LEGEND \"B\" 1 1 1 1 1 1\n";
        let err = ArmoryFile::parse(text).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::ExpectedSlot(Slot::Arms));
        assert_eq!(err.to_string(), "Line 3, expected ARMS piece");

        let text = "suit \"Short\"\nHEAD LEGEND \"H\" 1 1 1 1 1 1\n";
        let err = ArmoryFile::parse(text).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ParseErrorKind::IncompleteSuit(Slot::Arms));
    }
}
