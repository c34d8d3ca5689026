use agentstack_types::{AgentId, Catalog, Error};
use pretty_assertions::assert_eq;
use std::io::Write;

const DRIFTED: &str = r#"{
  "categories": [
    { "id": "coding", "name": "Coding", "icon": "💻", "description": "Code", "count": 12 },
    { "id": "research", "name": "Research", "icon": "🔬", "description": "Papers" }
  ],
  "agents": [
    { "id": 1, "name": "Alpha", "category": "coding", "description": "first",
      "views": 700, "year": 2021, "url": "https://alpha.dev", "tags": ["Open Source"] },
    { "id": "beta", "name": "Beta", "category": "research", "description": "second",
      "reviews": 30, "launchDate": "2024-02", "website": "https://beta.dev", "featured": true }
  ]
}"#;

#[test]
fn loads_drifted_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DRIFTED.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    let alpha = catalog.agent(&AgentId::new("1")).unwrap();
    assert_eq!(alpha.reviews, 700);
    assert_eq!(alpha.launch_date.as_deref(), Some("2021"));
    assert_eq!(alpha.website.as_deref(), Some("https://alpha.dev"));
    assert!(alpha.is_open_source());

    let beta = catalog.agent(&AgentId::new("beta")).unwrap();
    assert!(beta.featured);
    assert_eq!(beta.launch_date.as_deref(), Some("2024-02"));

    let counts: Vec<(String, usize)> = catalog
        .categories()
        .iter()
        .map(|c| (c.id.clone(), c.count))
        .collect();
    assert_eq!(
        counts,
        vec![("coding".to_string(), 1), ("research".to_string(), 1)]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_document_is_a_json_error() {
    let err = Catalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn duplicate_ids_across_id_types_are_rejected() {
    let json = r#"{ "agents": [
        { "id": 5, "name": "A", "category": "x", "description": "d" },
        { "id": "5", "name": "B", "category": "x", "description": "d" }
    ] }"#;
    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, Error::InvalidCatalog(_)));
}
