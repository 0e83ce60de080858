use std::io::Write;

use crate::config::Config;
use crate::render::{compose, render};
use crate::tree::DocumentTree;
use crate::Error;

/// Substring that must appear in the `application` element's xmlns value
/// for the document to count as a WADL.
pub const WADL_NS_MARKER: &str = "wadl.dev.java.net";

/// Dump every resource path declared in `tree`, one line per declaration,
/// in document order.
///
/// The document must carry the WADL namespace marker on its `application`
/// element. When `config.show_base` is set and the document declares
/// `resources/@base`, that base is prefixed onto every path and the
/// separator artifact at the join is collapsed; placeholders are then
/// filled in per `config`. Nothing is written unless validation passes.
pub fn dump_paths<T, W>(tree: &T, config: &Config, out: &mut W) -> Result<(), Error>
where
    T: DocumentTree,
    W: Write,
{
    let xmlns = tree
        .find_first("//application/@xmlns")
        .map(|node| tree.node_text(&node));
    match xmlns {
        Some(ns) if ns.contains(WADL_NS_MARKER) => {}
        _ => return Err(Error::NotWadl),
    }

    let base = if config.show_base {
        tree.find_first("//resources/@base")
            .map(|node| tree.node_text(&node))
            .unwrap_or_default()
    } else {
        String::new()
    };
    log::debug!("effective base URL: {:?}", base);

    for node in tree.find_all("//resource/@path") {
        let path = compose(&base, &tree.node_text(&node));
        writeln!(out, "{}", render(&path, config))?;
    }

    Ok(())
}
