//! Compile-time asset manifest.
//!
//! Images are referred to by logical name (no extension). Each name maps to
//! the formats that were exported for it; the loader prefers the modern
//! encoding and falls back to the legacy one.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: &'static str,
    pub modern: Option<&'static str>,
    pub legacy: Option<&'static str>,
}

macro_rules! asset_manifest {
    (@modern $name:literal; webp $($rest:ident)*) => {
        Some(concat!("/assets/images/", $name, ".webp"))
    };
    (@modern $name:literal; $skip:ident $($rest:ident)*) => {
        asset_manifest!(@modern $name; $($rest)*)
    };
    (@modern $name:literal;) => { None };
    (@legacy $name:literal; png $($rest:ident)*) => {
        Some(concat!("/assets/images/", $name, ".png"))
    };
    (@legacy $name:literal; $skip:ident $($rest:ident)*) => {
        asset_manifest!(@legacy $name; $($rest)*)
    };
    (@legacy $name:literal;) => { None };
    ($($name:literal => [$($format:ident),+]),* $(,)?) => {
        &[$(
            AssetEntry {
                name: $name,
                modern: asset_manifest!(@modern $name; $($format)+),
                legacy: asset_manifest!(@legacy $name; $($format)+),
            }
        ),*]
    };
}

pub const MANIFEST: &[AssetEntry] = asset_manifest! {
    "profile" => [webp, png],
    "scivis-main" => [webp, png],
    "scivis-1" => [webp, png],
    "scivis-2" => [webp, png],
    "scivis-3" => [webp, png],
    "scivis-4" => [webp, png],
    "landscape-main" => [webp, png],
    "landscape-1" => [webp, png],
    "landscape-2" => [webp, png],
    "landscape-3" => [webp],
    "abstract-main" => [webp, png],
    "abstract-1" => [webp, png],
    "abstract-2" => [png],
    "product-main" => [webp, png],
    "product-1" => [webp, png],
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("no asset named `{0}`")]
    Unknown(String),
    #[error("asset `{0}` has no exported format")]
    NoFormat(String),
}

/// What the image presenter needs: a fallback `src` and, when available, a
/// modern source offered ahead of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub src: &'static str,
    pub modern_src: Option<&'static str>,
}

pub fn lookup(name: &str) -> Option<&'static AssetEntry> {
    MANIFEST.iter().find(|entry| entry.name == name)
}

pub fn contains(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn resolve(name: &str) -> Result<ResolvedAsset, AssetError> {
    let entry = lookup(name).ok_or_else(|| AssetError::Unknown(name.to_string()))?;

    match (entry.modern, entry.legacy) {
        (Some(modern), Some(legacy)) => Ok(ResolvedAsset {
            src: legacy,
            modern_src: Some(modern),
        }),
        (Some(modern), None) => Ok(ResolvedAsset {
            src: modern,
            modern_src: None,
        }),
        (None, Some(legacy)) => Ok(ResolvedAsset {
            src: legacy,
            modern_src: None,
        }),
        (None, None) => Err(AssetError::NoFormat(name.to_string())),
    }
}

/// Resolution behind a load gate: nothing is looked up while `should_load`
/// is off, so a closed gallery never names an image to fetch.
pub fn resolve_gated(name: &str, should_load: bool) -> Option<Result<ResolvedAsset, AssetError>> {
    should_load.then(|| resolve(name))
}

/// Resolves a concrete URL previously produced by [`resolve`] back to its
/// entry, so callers holding only a URL still get the exact format pair.
pub fn resolve_url(src: &str) -> Option<ResolvedAsset> {
    let entry = MANIFEST
        .iter()
        .find(|entry| entry.modern == Some(src) || entry.legacy == Some(src))?;
    resolve(entry.name).ok()
}

/// Derives the modern variant of a concrete URL by swapping its extension.
/// Returns `None` when the last path segment has no extension or already is
/// the modern format.
pub fn modern_variant(src: &str) -> Option<String> {
    let (path, suffix) = match src.find(|c: char| c == '?' || c == '#') {
        Some(index) => src.split_at(index),
        None => (src, ""),
    };
    let file_start = path.rfind('/').map_or(0, |index| index + 1);
    let dot = path[file_start..].rfind('.')? + file_start;

    if dot == file_start || path[dot + 1..].eq_ignore_ascii_case("webp") {
        return None;
    }

    Some(format!("{}.webp{suffix}", &path[..dot]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_expands_both_formats() {
        let entry = lookup("scivis-1").expect("entry exists");
        assert_eq!(entry.modern, Some("/assets/images/scivis-1.webp"));
        assert_eq!(entry.legacy, Some("/assets/images/scivis-1.png"));
    }

    #[test]
    fn resolve_prefers_modern_with_legacy_fallback() {
        let resolved = resolve("scivis-main").expect("resolves");
        assert_eq!(resolved.modern_src, Some("/assets/images/scivis-main.webp"));
        assert_eq!(resolved.src, "/assets/images/scivis-main.png");
    }

    #[test]
    fn resolve_single_format_entries() {
        assert_eq!(
            resolve("landscape-3"),
            Ok(ResolvedAsset {
                src: "/assets/images/landscape-3.webp",
                modern_src: None,
            })
        );
        assert_eq!(
            resolve("abstract-2"),
            Ok(ResolvedAsset {
                src: "/assets/images/abstract-2.png",
                modern_src: None,
            })
        );
    }

    #[test]
    fn resolve_unknown_name_is_an_error() {
        assert_eq!(
            resolve("does-not-exist"),
            Err(AssetError::Unknown("does-not-exist".to_string()))
        );
    }

    #[test]
    fn gated_resolution_stays_idle_until_loading_is_allowed() {
        assert_eq!(resolve_gated("scivis-1", false), None);
        assert_eq!(resolve_gated("does-not-exist", false), None);
        assert_eq!(resolve_gated("scivis-1", true), Some(resolve("scivis-1")));
        assert_eq!(
            resolve_gated("does-not-exist", true),
            Some(Err(AssetError::Unknown("does-not-exist".to_string())))
        );
    }

    #[test]
    fn resolve_url_finds_the_owning_entry() {
        assert_eq!(
            resolve_url("/assets/images/scivis-3.png"),
            resolve("scivis-3").ok()
        );
        assert_eq!(
            resolve_url("/assets/images/abstract-2.png").and_then(|asset| asset.modern_src),
            None
        );
        assert_eq!(resolve_url("/elsewhere/picture.png"), None);
    }

    #[test]
    fn manifest_names_are_unique() {
        let mut names: Vec<&str> = MANIFEST.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MANIFEST.len());
    }

    #[test]
    fn modern_variant_swaps_extension() {
        assert_eq!(
            modern_variant("/assets/images/a.png").as_deref(),
            Some("/assets/images/a.webp")
        );
        assert_eq!(
            modern_variant("/x.y/photo.JPG?v=2").as_deref(),
            Some("/x.y/photo.webp?v=2")
        );
        assert_eq!(modern_variant("/x.y/photo"), None);
        assert_eq!(modern_variant("/assets/a.webp"), None);
        assert_eq!(modern_variant("/assets/.hidden"), None);
    }
}
