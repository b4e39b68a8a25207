use std::io::Write;
use tempfile::Builder;

use super::*;

fn write_catalog(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn raw_specimen(common_name: &str, category: &str) -> RawSpecimen {
    RawSpecimen {
        id: None,
        common_name: common_name.to_owned(),
        scientific_name: None,
        category: category.to_owned(),
        key_facts: None,
        image_url: None,
        source_url: None,
    }
}

#[test]
fn normalize_collapses_case_and_whitespace() {
    assert_eq!(normalize("  Rose\t\tQUARTZ \n"), "rose quartz");
    assert_eq!(normalize("Igneous  "), "igneous");
    assert_eq!(normalize(""), "");
}

#[test]
fn normalize_is_idempotent() {
    for answer in &["Quartz", "  Banded   Iron\nFormation ", "ÉCLOGITE", "\t"] {
        let once = normalize(answer);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn categories_are_sorted_unique_and_non_empty() {
    let catalog = Catalog::from_raw_specimens(vec![
        raw_specimen("Marble", "Metamorphic"),
        raw_specimen("Quartz", "Igneous"),
        raw_specimen("Slate", "Metamorphic"),
        raw_specimen("Mystery", ""),
    ])
    .unwrap();
    assert_eq!(
        catalog.get_categories(),
        &vec!["Igneous".to_owned(), "Metamorphic".to_owned()]
    );
}

#[test]
fn empty_catalog_is_a_load_error() {
    match Catalog::from_raw_specimens(vec![]) {
        Err(Error::DataLoad(_)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn filter_matches_category_exactly() {
    let catalog = Catalog::from_raw_specimens(vec![
        raw_specimen("Marble", "Metamorphic"),
        raw_specimen("Quartz", "Igneous"),
    ])
    .unwrap();

    let igneous = catalog.filter(&CategoryFilter::Category("Igneous".to_owned()));
    assert_eq!(igneous.len(), 1);
    assert_eq!(igneous[0].common_name, "Quartz");

    assert!(catalog
        .filter(&CategoryFilter::Category("igneous".to_owned()))
        .is_empty());
    assert_eq!(catalog.filter(&CategoryFilter::All).len(), 2);
}

#[test]
fn opens_json_catalog() {
    let file = write_catalog(
        ".json",
        r#"[
            {
                "id": "1",
                "common_name": "Quartz",
                "scientific_name": "Quartz",
                "category": "Igneous",
                "image_url": "",
                "source_url": "https://en.wikipedia.org/wiki/Quartz",
                "key_facts": "Hard mineral"
            },
            { "common_name": "Marble", "category": "Metamorphic", "key_facts": null }
        ]"#,
    );
    let catalog = Catalog::open(file.path()).unwrap();
    let specimens = catalog.get_specimens();
    assert_eq!(specimens.len(), 2);

    assert_eq!(specimens[0].id.as_deref(), Some("1"));
    assert_eq!(specimens[0].image_url, None);
    assert_eq!(
        specimens[0].source_url.as_deref(),
        Some("https://en.wikipedia.org/wiki/Quartz")
    );
    assert_eq!(specimens[0].key_facts, "Hard mineral");

    assert_eq!(specimens[1].key_facts, "");
    assert_eq!(specimens[1].source_url, None);
}

#[test]
fn opens_csv_catalog() {
    let file = write_catalog(
        ".csv",
        "common_name,category,key_facts,image_url,source_url\n\
         Quartz,Igneous,Hard mineral,quartz.jpg,\n\
         Marble,Metamorphic,Recrystallized carbonate,,https://en.wikipedia.org/wiki/Marble\n",
    );
    let catalog = Catalog::open(file.path()).unwrap();
    let specimens = catalog.get_specimens();
    assert_eq!(specimens.len(), 2);
    assert_eq!(specimens[0].image_url.as_deref(), Some("quartz.jpg"));
    assert_eq!(specimens[0].source_url, None);
    assert_eq!(specimens[1].image_url, None);
    assert_eq!(catalog.get_categories().len(), 2);
}

#[test]
fn missing_required_field_is_a_load_error() {
    let file = write_catalog(".json", r#"[{ "common_name": "Quartz" }]"#);
    match Catalog::open(file.path()) {
        Err(Error::DataLoad(_)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn empty_json_array_is_a_load_error() {
    let file = write_catalog(".json", "[]");
    assert!(matches!(Catalog::open(file.path()), Err(Error::DataLoad(_))));
}

#[test]
fn unsupported_or_missing_file_is_a_load_error() {
    let file = write_catalog(".txt", "Quartz");
    assert!(matches!(Catalog::open(file.path()), Err(Error::DataLoad(_))));
    assert!(matches!(
        Catalog::open(Path::new("does/not/exist.json")),
        Err(Error::DataLoad(_))
    ));
}
