use std::collections::HashMap;

/// Everything one run needs to know, built once from the command line and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// URL or local path of the WADL document.
    pub input: String,

    /// Prefix every emitted path with the document's declared base URL.
    pub show_base: bool,

    /// Fallback value for placeholders without an explicit mapping. An
    /// empty string behaves like no fallback at all.
    pub replace: Option<String>,

    /// Explicit per-placeholder values, keyed by placeholder name.
    pub placeholders: HashMap<String, String>,
}

impl Config {
    pub fn new(
        input: String,
        show_base: bool,
        replace: Option<String>,
        placeholder_args: &[String],
    ) -> Self {
        Config {
            input,
            show_base,
            replace,
            placeholders: parse_placeholders(placeholder_args),
        }
    }
}

/// Turn `name=value` arguments into a map. The split is on the first `=`,
/// so values may themselves contain `=`. Arguments without any `=` are
/// dropped; repeats of a name keep the last value given.
pub fn parse_placeholders(args: &[String]) -> HashMap<String, String> {
    let mut placeholders = HashMap::new();

    for arg in args {
        match arg.split_once('=') {
            Some((name, value)) => {
                placeholders.insert(name.to_string(), value.to_string());
            }
            None => {
                log::debug!("ignoring malformed placeholder argument {:?}", arg);
            }
        }
    }

    placeholders
}

#[test]
fn test_parse_placeholders() {
    let args = vec![
        "id=42".to_string(),
        "slug=my=slug".to_string(),
        "novalue".to_string(),
        "id=43".to_string(),
    ];
    let placeholders = parse_placeholders(&args);
    assert_eq!(placeholders.len(), 2);
    assert_eq!(placeholders.get("id").unwrap(), "43");
    assert_eq!(placeholders.get("slug").unwrap(), "my=slug");
    assert!(!placeholders.contains_key("novalue"));
}

#[test]
fn test_parse_placeholders_empty_value() {
    let args = vec!["token=".to_string()];
    let placeholders = parse_placeholders(&args);
    assert_eq!(placeholders.get("token").unwrap(), "");
}
