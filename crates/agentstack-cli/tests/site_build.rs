use agentstack_testing::TestWorld;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

#[test]
fn test_site_build_writes_every_page() {
    let world = TestWorld::new().with_small_catalog();
    let out = world.temp_dir().join("public");
    let out_arg = out.to_str().unwrap();

    let json = world.run_json(&["site", "build", "--out", out_arg]).unwrap();

    // 4 filters x 5 sorts
    assert_eq!(json["content"]["directory_pages"], 20);
    assert_eq!(json["content"]["agent_pages"], 3);
    assert_eq!(json["content"]["compare_page"], false);
    assert_eq!(json["content"]["files"].as_array().unwrap().len(), 25);

    assert!(out.join("index.html").is_file());
    assert!(out.join("assets/site.css").is_file());
    assert!(out.join("agents/zed.html").is_file());
    assert!(out.join("directory/open-source/rating.html").is_file());
    assert!(!out.join("compare.html").exists());
}

#[test]
fn test_site_build_with_compare_and_theme() {
    let world = TestWorld::new().with_small_catalog();
    world.run_json(&["theme", "set", "light"]).unwrap();

    let out = world.temp_dir().join("public");
    let out_arg = out.to_str().unwrap();
    let json = world
        .run_json(&["site", "build", "--out", out_arg, "--compare", "zed", "mason"])
        .unwrap();

    assert_eq!(json["content"]["compare_page"], true);
    assert_eq!(json["content"]["theme"], "light");

    let compare = std::fs::read_to_string(out.join("compare.html")).unwrap();
    assert!(compare.contains("Zed"));
    assert!(compare.contains("Mason"));

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"data-theme="light""#));
}

#[test]
fn test_site_index_reflects_search() {
    let world = TestWorld::new().with_small_catalog();
    let out = world.temp_dir().join("public");
    let out_arg = out.to_str().unwrap();

    world
        .run_json(&["site", "build", "--out", out_arg, "--search", "zzzqqq"])
        .unwrap();

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("No results for &quot;zzzqqq&quot;"));
}

/// Every `directory/` and `agents/` link of every written page points at a
/// file under `out`.
fn assert_site_links_resolve(out: &Path) {
    let mut pages = Vec::new();
    collect_html(out, &mut pages);
    assert!(!pages.is_empty());

    for page in pages {
        let html = std::fs::read_to_string(&page).unwrap();
        let base = page.parent().unwrap();
        for href in html.split("href=\"").skip(1).filter_map(|rest| rest.split('"').next()) {
            if !(href.contains("directory/") || href.contains("agents/")) {
                continue;
            }
            let target = resolve(base, href);
            assert!(
                target.starts_with(out) && target.is_file(),
                "{} links to missing {}",
                page.display(),
                href
            );
        }
    }
}

fn collect_html(dir: &Path, pages: &mut Vec<PathBuf>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_html(&path, pages);
        } else if path.extension().is_some_and(|e| e == "html") {
            pages.push(path);
        }
    }
}

fn resolve(base: &Path, href: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for part in href.split('/') {
        match part {
            ".." => {
                path.pop();
            }
            "." | "" => {}
            part => path.push(part),
        }
    }
    path
}

#[test]
fn test_unknown_sort_still_links_to_written_pages() {
    let world = TestWorld::new().with_small_catalog();
    let out = world.temp_dir().join("public");
    let out_arg = out.to_str().unwrap();

    world
        .run_json(&["site", "build", "--out", out_arg, "--sort", "bogus"])
        .unwrap();

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("bogus.html"));
    assert_site_links_resolve(&out);
}

#[test]
fn test_unknown_filter_still_links_to_written_pages() {
    let world = TestWorld::new().with_small_catalog();
    let out = world.temp_dir().join("public");
    let out_arg = out.to_str().unwrap();

    world
        .run_json(&["site", "build", "--out", out_arg, "--filter", "bogus"])
        .unwrap();

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("directory/bogus/"));
    assert!(index.contains("Showing 0 of 3 agents"));
    assert_site_links_resolve(&out);
}

#[test]
fn test_catalog_ids_cannot_steer_output_paths() {
    let world = TestWorld::new();
    let catalog = world.temp_dir().join("agents.json");
    std::fs::write(
        &catalog,
        r#"{"categories":[{"id":"coding","name":"Coding","icon":"💻","description":""}],
            "agents":[{"id":"../../escaped","name":"Escaped","category":"coding","description":"d"}]}"#,
    )
    .unwrap();
    let out = world.temp_dir().join("a").join("public");

    let result = world
        .run(&[
            "--catalog",
            catalog.to_str().unwrap(),
            "site",
            "build",
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("agent id '../../escaped' may only contain"));
    assert!(!world.temp_dir().join("a").join("escaped.html").exists());
    assert!(!out.exists());
}

#[test]
fn test_script_websites_are_not_linked() {
    let world = TestWorld::new().with_catalog(
        r#"{"categories":[{"id":"coding","name":"Coding","icon":"💻","description":""}],
            "agents":[
              {"id":"one","name":"One","category":"coding","description":"d","website":"javascript:alert(1)"},
              {"id":"two","name":"Two","category":"coding","description":"d","website":"https://two.dev"}]}"#,
    );
    let out = world.temp_dir().join("public");

    world
        .run_json(&["site", "build", "--out", out.to_str().unwrap()])
        .unwrap();

    let one = std::fs::read_to_string(out.join("agents/one.html")).unwrap();
    assert!(!one.contains("javascript:"));
    let two = std::fs::read_to_string(out.join("agents/two.html")).unwrap();
    assert!(two.contains(r#"href="https://two.dev""#));
    assert_site_links_resolve(&out);
}
