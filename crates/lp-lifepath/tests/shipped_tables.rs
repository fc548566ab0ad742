//! Generates every role and sex against the shipped `data/tables.yaml`.

use std::path::Path;

use lp_lifepath::{
    CharacterRequest, Generator, RoleKind, Sex, StockNames, render_biography, validate_tables,
};
use lp_tables::TableStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

const TABLES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/tables.yaml");

fn shipped() -> TableStore {
    TableStore::load(Path::new(TABLES)).unwrap()
}

#[test]
fn shipped_tables_validate_cleanly() {
    let issues = validate_tables(&shipped());
    assert!(issues.is_empty(), "{issues:#?}");
}

#[test]
fn shipped_roles_match_generators() {
    let store = shipped();
    let configured: Vec<RoleKind> = store
        .roles()
        .iter()
        .map(|r| RoleKind::parse(r).unwrap())
        .collect();
    assert_eq!(configured, RoleKind::ALL);
}

#[test]
fn every_role_renders_for_both_sexes() {
    let store = shipped();
    let generator = Generator::new(&store, &StockNames);
    for role in RoleKind::ALL {
        for sex in [Sex::Male, Sex::Female] {
            for seed in [1, 7, 42, 1234] {
                let request = CharacterRequest::default()
                    .with_role(role.name())
                    .with_sex(sex);
                let mut rng = StdRng::seed_from_u64(seed);
                let character = generator.generate(&request, &mut rng).unwrap();
                let text = render_biography(&character);

                assert!(text.starts_with("Name: "), "{text}");
                assert!(text.contains(&format!("Role: {role}. ")), "{text}");
                assert!(text.contains("Person:\n"));
                assert!(text.contains("Family:\n"));
                assert!(text.contains(&format!("\n{role}:\n")), "{text}");
                assert!(!text.contains('{'), "{text}");

                let role_section = text
                    .split(&format!("\n{role}:\n"))
                    .nth(1)
                    .and_then(|rest| rest.split("Friends:\n").next())
                    .unwrap();
                assert!(!role_section.trim().is_empty());
                assert!(!role_section.contains("you"), "{role_section}");
                assert!(!role_section.contains("You"), "{role_section}");
            }
        }
    }
}

#[test]
fn json_output_carries_role_profile() {
    let store = shipped();
    let generator = Generator::new(&store, &StockNames);
    let request = CharacterRequest::default().with_role("nomad");
    let character = generator
        .generate(&request, &mut StdRng::seed_from_u64(9))
        .unwrap();
    let json = serde_json::to_value(&character).unwrap();
    assert_eq!(json["identity"]["role"], "Nomad");
    assert!(json["profile"]["nomad"]["pack_work"].is_string());
}

#[test]
fn unknown_role_lists_choices() {
    let store = shipped();
    let generator = Generator::new(&store, &StockNames);
    let err = generator
        .generate(
            &CharacterRequest::default().with_role("wizard"),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no such role 'wizard'; choose from: Fixer, Media, Exec, Rockerboy, Solo, \
         Netrunner, Tech, Medtech, Lawman, Nomad"
    );
}
