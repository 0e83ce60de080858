//! Extract the resource paths declared in a WADL document and print them as
//! concrete strings: the declared base URL is optionally prefixed, the
//! duplicated separator at the base/path join is collapsed, and `{name}`
//! placeholders are filled in from caller-supplied or default values.

pub mod config;
mod dump;
pub mod render;
mod tree;

pub use dump::{dump_paths, WADL_NS_MARKER};
#[cfg(feature = "blocking")]
pub use tree::parse_url;
pub use tree::{parse_bytes, parse_file, parse_string, DocumentTree, XmlTree};

#[derive(Debug)]
pub enum Error {
    MissingInput,
    Open(String, std::io::Error),
    Xml(xmltree::ParseError),
    Http(reqwest::Error),
    NotWadl,
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingInput => write!(f, "Flag -i is required, use -h flag for help."),
            Error::Open(path, _) => write!(f, "Can't open '{}' file.", path),
            // A broken document and a failed fetch both end with no usable
            // tree; they report the same parse failure.
            Error::Xml(_) | Error::Http(_) => write!(f, "Can't parse WADL file."),
            Error::NotWadl => write!(f, "Not a WADL file."),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingInput | Error::NotWadl => None,
            Error::Open(_, err) => Some(err),
            Error::Xml(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<xmltree::ParseError> for Error {
    fn from(err: xmltree::ParseError) -> Self {
        Error::Xml(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
