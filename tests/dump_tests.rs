use maplit::hashmap;
use wadl_dumper::config::Config;
use wadl_dumper::{dump_paths, DocumentTree, Error, WADL_NS_MARKER};

/// In-memory stand-in for a parsed WADL document; answers the three
/// queries the extractor issues without any real XML behind it.
struct FakeTree {
    xmlns: Option<String>,
    base: Option<String>,
    paths: Vec<String>,
}

impl FakeTree {
    fn wadl(base: Option<&str>, paths: &[&str]) -> Self {
        FakeTree {
            xmlns: Some(format!("http://{}/2009/02", WADL_NS_MARKER)),
            base: base.map(|s| s.to_string()),
            paths: paths.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DocumentTree for FakeTree {
    type Node = String;

    fn find_first(&self, query: &str) -> Option<String> {
        self.find_all(query).into_iter().next()
    }

    fn find_all(&self, query: &str) -> Vec<String> {
        match query {
            "//application/@xmlns" => self.xmlns.clone().into_iter().collect(),
            "//resources/@base" => self.base.clone().into_iter().collect(),
            "//resource/@path" => self.paths.clone(),
            _ => Vec::new(),
        }
    }

    fn node_text(&self, node: &String) -> String {
        node.clone()
    }
}

fn dump_to_lines(tree: &FakeTree, config: &Config) -> Vec<String> {
    let mut out = Vec::new();
    dump_paths(tree, config, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_missing_xmlns_is_fatal_with_no_output() {
    let tree = FakeTree {
        xmlns: None,
        base: None,
        paths: vec!["/a".to_string()],
    };
    let mut out = Vec::new();
    let result = dump_paths(&tree, &Config::default(), &mut out);
    assert!(matches!(result, Err(Error::NotWadl)));
    assert!(out.is_empty());
}

#[test]
fn test_wrong_xmlns_is_fatal() {
    let tree = FakeTree {
        xmlns: Some("http://example.com/other".to_string()),
        base: None,
        paths: vec!["/a".to_string()],
    };
    let mut out = Vec::new();
    let result = dump_paths(&tree, &Config::default(), &mut out);
    assert!(matches!(result, Err(Error::NotWadl)));
    assert!(out.is_empty());
}

#[test]
fn test_document_order_and_duplicates_preserved() {
    let tree = FakeTree::wadl(None, &["/b", "/a", "/b", "/a"]);
    let lines = dump_to_lines(&tree, &Config::default());
    assert_eq!(lines, vec!["/b", "/a", "/b", "/a"]);
}

#[test]
fn test_base_ignored_without_show_base() {
    let tree = FakeTree::wadl(Some("http://h.tld"), &["/a"]);
    let lines = dump_to_lines(&tree, &Config::default());
    assert_eq!(lines, vec!["/a"]);
}

#[test]
fn test_base_prefix_collapses_join() {
    let tree = FakeTree::wadl(Some("http://h.tld/"), &["/res/{id}"]);
    let config = Config {
        show_base: true,
        ..Config::default()
    };
    let lines = dump_to_lines(&tree, &config);
    assert_eq!(lines, vec!["http://h.tld/res/{id}"]);
}

#[test]
fn test_show_base_without_declared_base() {
    let tree = FakeTree::wadl(None, &["//raw//path"]);
    let config = Config {
        show_base: true,
        ..Config::default()
    };
    // No declared base means an empty prefix and no collapsing at all.
    let lines = dump_to_lines(&tree, &config);
    assert_eq!(lines, vec!["//raw//path"]);
}

#[test]
fn test_full_pipeline_with_placeholders() {
    let tree = FakeTree::wadl(
        Some("http://h.tld/"),
        &["/users/{id}", "/users/{id}/orders/{oid}", "/{unknown}"],
    );
    let config = Config {
        show_base: true,
        replace: Some("XXX".to_string()),
        placeholders: hashmap! {
            "id".to_string() => "42".to_string(),
        },
        ..Config::default()
    };
    let lines = dump_to_lines(&tree, &config);
    assert_eq!(
        lines,
        vec![
            "http://h.tld/users/42",
            "http://h.tld/users/42/orders/XXX",
            "http://h.tld/XXX",
        ]
    );
}
