use super::*;
use std::collections::HashSet;

#[test]
fn builtin_has_four_sections_in_display_order() {
    let catalog = Catalog::builtin();
    let titles: Vec<_> = catalog.sections().iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        [
            "Frontend Suite (Client-Side)",
            "Backend Suite (Server-Side Microservices)",
            "Data & Persistence Layer",
            "Infrastructure & DevOps",
        ]
    );
    assert_eq!(catalog.len(), 15);
    assert!(!catalog.is_empty());
}

#[test]
fn item_ids_are_unique_and_fields_present() {
    let catalog = Catalog::builtin();
    let mut seen = HashSet::new();
    for item in catalog.items() {
        assert!(seen.insert(item.id), "duplicate id {}", item.id);
        assert!(!item.title.is_empty());
        assert!(!item.subtitle.is_empty());
        assert!(!item.description.is_empty());
        assert_eq!(item.icon.badge().chars().count(), 4);
    }
}

#[test]
fn find_and_position_agree_with_display_order() {
    let catalog = Catalog::builtin();
    let item = catalog.find("core-api").unwrap();
    assert_eq!(item.title, "Core API & User Services");
    assert_eq!(item.subtitle, "Go (Golang)");

    let index = catalog.position("core-api").unwrap();
    assert_eq!(index, 2);
    assert_eq!(catalog.item_at(index).unwrap().id, "core-api");

    assert_eq!(catalog.items().next().unwrap().id, "webapp");
    assert_eq!(catalog.items().last().unwrap().id, "infra-ci-cd");
}

#[test]
fn unknown_ids_are_not_found() {
    let catalog = Catalog::builtin();
    assert!(catalog.find("nope").is_none());
    assert!(catalog.position("").is_none());
    assert!(catalog.item_at(catalog.len()).is_none());
}

#[test]
fn tint_names_round_trip() {
    for tint in Tint::ALL {
        assert_eq!(Tint::from_name(tint.name()), Some(tint));
    }
    assert_eq!(Tint::from_name(" Sky "), Some(Tint::Sky));
    assert_eq!(Tint::from_name("mauve"), None);
    assert_eq!(IconId::Generic(Tint::Gray).tint(), Tint::Gray);
    assert_eq!(IconId::Redis.badge(), "[Rd]");
}
