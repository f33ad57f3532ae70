use std::fmt;

/// One Yu-Gi-Oh! card record as decoded from the shop's CSV stock list.
///
/// Equality compares the full record, not just the sortable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YGOCard {
    name: String,
    card_type: String,
    level_rank: i32,
    race: String,
    attribute: String,
    atk: i32,
    def: i32,
}

impl YGOCard {
    pub fn new(
        name: &str,
        card_type: &str,
        level_rank: i32,
        race: &str,
        attribute: &str,
        atk: i32,
        def: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            card_type: card_type.to_string(),
            level_rank,
            race: race.to_string(),
            attribute: attribute.to_string(),
            atk,
            def,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn card_type(&self) -> &str {
        &self.card_type
    }

    #[inline]
    pub fn level_rank(&self) -> i32 {
        self.level_rank
    }

    #[inline]
    pub fn race(&self) -> &str {
        &self.race
    }

    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[inline]
    pub fn atk(&self) -> i32 {
        self.atk
    }

    #[inline]
    pub fn def(&self) -> i32 {
        self.def
    }
}

impl fmt::Display for YGOCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} | {} | {}] level/rank {} atk {} def {}",
            self.name, self.card_type, self.race, self.attribute, self.level_rank, self.atk,
            self.def
        )
    }
}

/// Which numeric field drives a sort invocation.
///
/// A closed enumeration matched exhaustively: an unrecognized key cannot exist,
/// so no sort can silently compare nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Atk,
    Def,
}

impl SortKey {
    /// The selected field's value on `card`.
    #[inline]
    pub fn value_of(self, card: &YGOCard) -> i32 {
        match self {
            SortKey::Atk => card.atk,
            SortKey::Def => card.def,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> YGOCard {
        YGOCard::new("Dark Magician", "Monster", 7, "Spellcaster", "Dark", 2500, 2100)
    }

    #[test]
    fn sort_key_selects_the_right_field() {
        let card = sample();
        assert_eq!(SortKey::Atk.value_of(&card), 2500);
        assert_eq!(SortKey::Def.value_of(&card), 2100);
    }

    #[test]
    fn equality_compares_the_full_record() {
        let card = sample();
        assert_eq!(card, sample());
        let other = YGOCard::new("Dark Magician", "Monster", 7, "Spellcaster", "Dark", 2500, 2000);
        assert_ne!(card, other);
    }

    #[test]
    fn display_includes_name_and_stats() {
        let rendered = sample().to_string();
        assert!(rendered.contains("Dark Magician"));
        assert!(rendered.contains("atk 2500"));
        assert!(rendered.contains("def 2100"));
    }
}
