//! Faceted filter engine.
//!
//! `filter_characters` is a pure function of the collection, the query and
//! the filter state. Selections are lower-cased once per call into a
//! [`CharacterMatcher`]; the per-character check is then plain set lookups
//! and substring tests.

use std::collections::HashSet;

use super::facet::Facet;
use super::filters::Filters;
use crate::aggregates::Character;
use crate::types::{CharacterType, Yuga};

/// Characters matching `query` and every active facet, in collection order.
///
/// - An empty query matches everything; otherwise the query, as given, must
///   be a case-insensitive substring of the native name, the English name or
///   the significance.
/// - Facets combine with AND; values within a facet combine with OR.
pub fn filter_characters<'a>(
    all: &'a [Character],
    query: &str,
    filters: &Filters,
) -> Vec<&'a Character> {
    let matcher = CharacterMatcher::new(query, filters);
    all.iter().filter(|c| matcher.matches(c)).collect()
}

/// A query plus filter state, prepared for matching.
#[derive(Debug, Clone)]
pub struct CharacterMatcher {
    needle: Option<String>,
    types: HashSet<String>,
    yugas: HashSet<String>,
    text_sources: HashSet<String>,
    regions: HashSet<String>,
    genders: HashSet<String>,
    natures: HashSet<String>,
    roles: HashSet<String>,
}

impl CharacterMatcher {
    pub fn new(query: &str, filters: &Filters) -> Self {
        Self {
            needle: (!query.is_empty()).then(|| query.to_lowercase()),
            // Known type names are canonicalized so "celestial_being" selects
            // "Celestial Being".
            types: lowered(filters, Facet::Type, |v| {
                CharacterType::parse_known(v).map(|t| t.label().to_string())
            }),
            yugas: lowered(filters, Facet::Yuga, |v| {
                v.parse::<Yuga>().ok().map(|y| y.label().to_string())
            }),
            text_sources: lowered(filters, Facet::TextSource, |_| None),
            regions: lowered(filters, Facet::Region, |_| None),
            genders: lowered(filters, Facet::Gender, |_| None),
            natures: lowered(filters, Facet::Nature, |_| None),
            roles: lowered(filters, Facet::Role, |_| None),
        }
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.matches_query(character)
            && one_of(&self.types, Some(character.character_type().label()))
            // Only a declared era takes part; timeless-by-absence never
            // satisfies a yuga selection.
            && one_of(&self.yugas, character.declared_yuga().map(|y| y.label()))
            && any_of(&self.text_sources, character.associated_texts())
            && one_of(&self.regions, character.region())
            && one_of(&self.genders, character.gender())
            && one_of(&self.natures, character.nature())
            && any_of(&self.roles, character.roles().as_slice())
    }

    fn matches_query(&self, character: &Character) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        let name = character.name();
        name.native().to_lowercase().contains(needle.as_str())
            || name.english().to_lowercase().contains(needle.as_str())
            || character.significance().to_lowercase().contains(needle.as_str())
    }
}

fn lowered(
    filters: &Filters,
    facet: Facet,
    canonical: impl Fn(&str) -> Option<String>,
) -> HashSet<String> {
    filters
        .selection(facet)
        .iter()
        .map(|v| canonical(v).unwrap_or_else(|| v.clone()).to_lowercase())
        .collect()
}

/// Single-valued facet: inactive, or the value is selected. An absent value
/// never matches an active facet.
fn one_of(selected: &HashSet<String>, value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    value.is_some_and(|v| selected.contains(&v.to_lowercase()))
}

/// Multi-valued facet: inactive, or the values intersect the selection.
fn any_of(selected: &HashSet<String>, values: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    values.iter().any(|v| selected.contains(&v.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CharacterId;
    use crate::value_objects::{CharacterName, Roles};

    fn character(id: &str, english: &str, character_type: CharacterType) -> Character {
        Character::new(
            CharacterId::new(id).unwrap(),
            CharacterName::new("", english).unwrap(),
            character_type,
        )
    }

    fn sample() -> Vec<Character> {
        vec![
            character("indra", "Indra", CharacterType::Deva)
                .with_significance("King of gods")
                .with_yuga(Yuga::Satya)
                .with_associated_texts(["Rigveda"])
                .with_region("Svarga")
                .with_gender("Male")
                .with_nature("Divine")
                .with_roles(Roles::single("King")),
            character("ravana", "Ravana", CharacterType::Rakshasa)
                .with_significance("Demon king of Lanka")
                .with_yuga(Yuga::Treta)
                .with_associated_texts(["Ramayana"])
                .with_region("Lanka")
                .with_gender("Male")
                .with_nature("Demonic")
                .with_roles(Roles::new(["King", "Scholar"])),
            character("rama", "Rama", CharacterType::Avatar)
                .with_significance("Prince of Ayodhya")
                .with_yuga(Yuga::Treta)
                .with_associated_texts(["Ramayana", "Mahabharata"])
                .with_gender("Male")
                .with_roles(Roles::new(["Prince", "Warrior"])),
            character("narada", "Narada", CharacterType::Rishi)
                .with_significance("Wandering sage and messenger")
                .with_yuga(Yuga::Timeless)
                .with_associated_texts(["Puranas"]),
            character("kamadhenu", "Kamadhenu", CharacterType::DivineAnimal)
                .with_significance("Wish-fulfilling cow"),
        ]
    }

    fn ids(result: &[&Character]) -> Vec<String> {
        result.iter().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn empty_query_and_filters_return_everything_in_order() {
        let all = sample();
        let result = filter_characters(&all, "", &Filters::new());
        assert_eq!(
            ids(&result),
            ["indra", "ravana", "rama", "narada", "kamadhenu"]
        );
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let f = Filters::new().toggled(Facet::Type, "Deva", true);
        assert!(filter_characters(&[], "indra", &f).is_empty());
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let all = sample();
        assert!(filter_characters(&all, "   ", &Filters::new()).is_empty());
        // "King of gods" starts with "king"; only "Demon king" has " king".
        assert_eq!(ids(&filter_characters(&all, " king", &Filters::new())), ["ravana"]);
    }

    #[test]
    fn text_search_is_case_insensitive() {
        let all = sample();
        let upper = filter_characters(&all, "RAma", &Filters::new());
        let lower = filter_characters(&all, "rama", &Filters::new());
        assert_eq!(ids(&upper), ids(&lower));
        assert!(ids(&upper).contains(&"rama".to_string()));
    }

    #[test]
    fn text_search_covers_native_name_and_significance() {
        let all = vec![Character::new(
            CharacterId::new("shiva").unwrap(),
            CharacterName::new("शिव", "Shiva").unwrap(),
            CharacterType::Trimurti,
        )
        .with_significance("The destroyer")];
        assert_eq!(filter_characters(&all, "शिव", &Filters::new()).len(), 1);
        assert_eq!(filter_characters(&all, "DESTROY", &Filters::new()).len(), 1);
        assert!(filter_characters(&all, "vishnu", &Filters::new()).is_empty());
    }

    #[test]
    fn text_and_type_facet_combine() {
        // "king" matches both by significance; only Indra is a Deva.
        let all = sample();
        let f = Filters::new().toggled(Facet::Type, "Deva", true);
        assert_eq!(ids(&filter_characters(&all, "king", &f)), ["indra"]);
    }

    #[test]
    fn concrete_two_character_scenario() {
        let all = vec![
            character("a", "Indra", CharacterType::Deva)
                .with_yuga(Yuga::Satya)
                .with_significance("King of gods"),
            character("b", "Ravana", CharacterType::Asura)
                .with_yuga(Yuga::Treta)
                .with_significance("Demon king"),
        ];
        let f = Filters::new().toggled(Facet::Type, "Deva", true);
        assert_eq!(ids(&filter_characters(&all, "king", &f)), ["a"]);
    }

    #[test]
    fn within_facet_values_are_ored() {
        let all = sample();
        let f = Filters::new()
            .toggled(Facet::Type, "Deva", true)
            .toggled(Facet::Type, "Rishi", true);
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["indra", "narada"]);
    }

    #[test]
    fn across_facets_are_anded() {
        let all = sample();
        let f = Filters::new()
            .toggled(Facet::Gender, "male", true)
            .toggled(Facet::Yuga, "Treta Yuga", true);
        let result = filter_characters(&all, "", &f);

        let expected: Vec<String> = all
            .iter()
            .filter(|c| {
                c.gender().is_some_and(|g| g.eq_ignore_ascii_case("male"))
                    && c.declared_yuga() == Some(Yuga::Treta)
            })
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids(&result), expected);
        assert_eq!(ids(&result), ["ravana", "rama"]);
    }

    #[test]
    fn role_matches_single_and_multiple_shapes() {
        let all = vec![
            character("a", "Janaka", CharacterType::King).with_roles(Roles::single("King")),
            character("b", "Vasishtha", CharacterType::Brahmarishi)
                .with_roles(Roles::new(["King", "Mentor"])),
            character("c", "Hanuman", CharacterType::Vanara).with_roles(Roles::single("Devotee")),
        ];
        let f = Filters::new().toggled(Facet::Role, "kInG", true);
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["a", "b"]);
    }

    #[test]
    fn text_source_uses_intersection() {
        let all = sample();
        let f = Filters::new()
            .toggled(Facet::TextSource, "mahabharata", true)
            .toggled(Facet::TextSource, "Rigveda", true);
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["indra", "rama"]);
    }

    #[test]
    fn missing_optional_value_never_matches_active_facet() {
        let all = sample();
        let f = Filters::new().toggled(Facet::Region, "Ayodhya", true);
        // Rama's significance mentions Ayodhya but he has no region tag.
        assert!(filter_characters(&all, "", &f).is_empty());
    }

    #[test]
    fn inferred_timeless_does_not_match_all_yugas_selection() {
        let all = sample();
        let f = Filters::new().toggled(Facet::Yuga, "All Yugas", true);
        // Narada declares "All Yugas"; Kamadhenu has no era at all.
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["narada"]);
    }

    #[test]
    fn yuga_and_type_selections_are_canonicalized() {
        let all = sample();
        let f = Filters::new().toggled(Facet::Yuga, "satya", true);
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["indra"]);

        let f = Filters::new().toggled(Facet::Type, "divine_animal", true);
        assert_eq!(ids(&filter_characters(&all, "", &f)), ["kamadhenu"]);
    }

    #[test]
    fn unmatched_selection_yields_empty_result() {
        let all = sample();
        let f = Filters::new().toggled(Facet::Nature, "Mischievous", true);
        assert!(filter_characters(&all, "", &f).is_empty());
    }
}
