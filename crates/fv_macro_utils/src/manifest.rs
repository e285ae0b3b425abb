use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use proc_macro2::{Ident, Span};
use toml_edit::{Document, Item};

/// Dependency keys through which a crate can reach `fv_expose`, with the
/// path generated code uses for each. Earlier entries win.
const ROUTES: [(&str, &[&str]); 4] = [
    ("fv_expose", &["fv_expose"]),
    ("fieldview", &["fieldview", "expose"]),
    ("fv_core", &["fv_core", "expose"]),
    ("fv", &["fv", "expose"]),
];

const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The dependency keys declared by the crate being compiled.
///
/// Derive macros use it to emit paths that resolve from the invoking crate:
///
/// ```
/// # use fv_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(Manifest::expose_path);
/// ```
#[derive(Debug, Default)]
pub struct Manifest {
    dependencies: Vec<String>,
}

impl Manifest {
    /// Reads the dependency tables of a `Cargo.toml`.
    ///
    /// Returns `None` if `toml` is not valid TOML.
    pub fn parse(toml: &str) -> Option<Self> {
        let document = Document::parse(toml).ok()?;
        let dependencies = DEPENDENCY_TABLES
            .iter()
            .filter_map(|name| match document.get(name) {
                Some(Item::Table(table)) => Some(table),
                _ => None,
            })
            .flat_map(|table| table.iter().map(|(key, _)| key.to_owned()))
            .collect();
        Some(Self { dependencies })
    }

    /// Returns the path generated code uses to reach `fv_expose`.
    ///
    /// A direct dependency wins, then the facades `fieldview`, `fv_core`
    /// and `fv`, each of which re-exports it as `expose`. With none of them
    /// `::fv_expose` is assumed; inside `fv_expose` itself that name is
    /// provided by `extern crate self as fv_expose`.
    pub fn expose_path(&self) -> syn::Path {
        let segments = ROUTES
            .iter()
            .find(|(key, _)| self.dependencies.iter().any(|dep| dep == key))
            .map_or(ROUTES[0].1, |(_, segments)| *segments);
        absolute_path(segments)
    }

    /// Runs `func` with the manifest of the crate being compiled.
    ///
    /// Manifests are cached per path and read again once the file changes.
    /// A missing or unreadable manifest behaves like one without
    /// dependencies.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        type Cache = BTreeMap<PathBuf, (SystemTime, Manifest)>;
        static CACHE: Mutex<Cache> = Mutex::new(BTreeMap::new());

        let Some(path) = env::var_os("CARGO_MANIFEST_DIR").map(|dir| PathBuf::from(dir).join("Cargo.toml"))
        else {
            return func(&Self::default());
        };
        let Ok(modified) = fs::metadata(&path).and_then(|metadata| metadata.modified()) else {
            return func(&Self::default());
        };

        let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((time, manifest)) = cache.get(&path)
            && *time == modified
        {
            return func(manifest);
        }

        let manifest = fs::read_to_string(&path)
            .ok()
            .and_then(|toml| Self::parse(&toml))
            .unwrap_or_default();
        let result = func(&manifest);
        cache.insert(path, (modified, manifest));
        result
    }
}

fn absolute_path(segments: &[&str]) -> syn::Path {
    syn::Path {
        leading_colon: Some(Default::default()),
        segments: segments
            .iter()
            .map(|segment| syn::PathSegment::from(Ident::new(segment, Span::call_site())))
            .collect(),
    }
}
