use std::io::Read;

use xmltree::Element;

use crate::Error;

/// The tree-query capability the dumper needs from an XML backend. Queries
/// take the attribute-lookup form `//element/@attribute`; nodes are yielded
/// in document (pre-)order.
pub trait DocumentTree {
    type Node;

    /// The first node matching `query`, if any.
    fn find_first(&self, query: &str) -> Option<Self::Node>;

    /// Every node matching `query`, in document order.
    fn find_all(&self, query: &str) -> Vec<Self::Node>;

    /// The text content of a node.
    fn node_text(&self, node: &Self::Node) -> String;
}

/// A parsed XML document backed by [`xmltree`].
pub struct XmlTree {
    root: Element,
}

impl XmlTree {
    pub fn parse<R: Read>(reader: R) -> Result<Self, Error> {
        let root = Element::parse(reader)?;
        Ok(XmlTree { root })
    }
}

pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> Result<XmlTree, Error> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|err| Error::Open(path.display().to_string(), err))?;
    XmlTree::parse(file)
}

pub fn parse_string(s: &str) -> Result<XmlTree, Error> {
    XmlTree::parse(s.as_bytes())
}

pub fn parse_bytes(bytes: &[u8]) -> Result<XmlTree, Error> {
    XmlTree::parse(bytes)
}

#[cfg(feature = "blocking")]
pub fn parse_url(url: &str) -> Result<XmlTree, Error> {
    log::debug!("fetching WADL document from {}", url);
    let body = reqwest::blocking::get(url)?.bytes()?;
    XmlTree::parse(body.as_ref())
}

/// Split `//name/@attr` into its element and attribute parts. Anything
/// else yields no matches.
fn split_query(query: &str) -> Option<(&str, &str)> {
    let rest = query.strip_prefix("//")?;
    let (name, attr) = rest.split_once("/@")?;
    if name.is_empty() || attr.is_empty() {
        return None;
    }
    Some((name, attr))
}

fn attribute_value(element: &Element, attr: &str) -> Option<String> {
    // xmltree hoists xmlns declarations out of the attribute map into
    // `namespaces`; the default declaration lives under the empty prefix.
    if attr == "xmlns" {
        element
            .namespaces
            .as_ref()
            .and_then(|ns| ns.get(""))
            .map(|uri| uri.to_string())
    } else {
        element.attributes.get(attr).cloned()
    }
}

fn collect_attributes(element: &Element, name: &str, attr: &str, out: &mut Vec<String>) {
    if element.name == name {
        if let Some(value) = attribute_value(element, attr) {
            out.push(value);
        }
    }

    for node in &element.children {
        if let Some(child) = node.as_element() {
            collect_attributes(child, name, attr, out);
        }
    }
}

impl DocumentTree for XmlTree {
    type Node = String;

    fn find_first(&self, query: &str) -> Option<String> {
        self.find_all(query).into_iter().next()
    }

    fn find_all(&self, query: &str) -> Vec<String> {
        let Some((name, attr)) = split_query(query) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        collect_attributes(&self.root, name, attr, &mut out);
        out
    }

    fn node_text(&self, node: &String) -> String {
        node.clone()
    }
}

#[test]
fn test_find_all_document_order() {
    let xml = r#"
        <application xmlns="http://wadl.dev.java.net/2009/02">
            <resources base="http://example.com/">
                <resource path="/a">
                    <resource path="/a/b"/>
                </resource>
                <resource path="/c"/>
                <resource path="/a"/>
            </resources>
        </application>
    "#;
    let tree = parse_string(xml).unwrap();
    assert_eq!(
        tree.find_all("//resource/@path"),
        vec!["/a", "/a/b", "/c", "/a"]
    );
}

#[test]
fn test_find_first_xmlns_and_base() {
    let xml = r#"
        <application xmlns="http://wadl.dev.java.net/2009/02">
            <resources base="http://example.com/">
                <resource path="/a"/>
            </resources>
            <resources base="http://other.example.com/"/>
        </application>
    "#;
    let tree = parse_string(xml).unwrap();
    let xmlns = tree.find_first("//application/@xmlns").unwrap();
    assert_eq!(tree.node_text(&xmlns), "http://wadl.dev.java.net/2009/02");
    let base = tree.find_first("//resources/@base").unwrap();
    assert_eq!(tree.node_text(&base), "http://example.com/");
}

#[test]
fn test_missing_attribute_skipped() {
    let xml = r#"
        <application>
            <resources>
                <resource/>
                <resource path="/only"/>
            </resources>
        </application>
    "#;
    let tree = parse_string(xml).unwrap();
    assert!(tree.find_first("//application/@xmlns").is_none());
    assert!(tree.find_first("//resources/@base").is_none());
    assert_eq!(tree.find_all("//resource/@path"), vec!["/only"]);
}

#[test]
fn test_malformed_query_matches_nothing() {
    let tree = parse_string("<application/>").unwrap();
    assert!(tree.find_all("resource/@path").is_empty());
    assert!(tree.find_all("//resource").is_empty());
    assert!(tree.find_first("///@path").is_none());
}
