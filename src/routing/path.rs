//! Request path decomposition.

/// Split a request path into its top segment and the remaining subpath.
///
/// One leading slash is removed, then the path is split at the next slash.
/// The subpath keeps its leading slash; with no second segment it is empty.
/// Total function: every input, including `""` and `"/"`, decomposes.
///
/// `decompose("/openai/v1/chat")` yields `("openai", "/v1/chat")`.
pub fn decompose(path: &str) -> (&str, &str) {
    let path = path.strip_prefix('/').unwrap_or(path);
    match path.find('/') {
        Some(idx) => (&path[..idx], &path[idx..]),
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_top_and_subpath() {
        assert_eq!(decompose("/openai/v1/chat"), ("openai", "/v1/chat"));
    }

    #[test]
    fn single_segment_has_empty_subpath() {
        assert_eq!(decompose("/openai"), ("openai", ""));
    }

    #[test]
    fn root_decomposes_to_empty() {
        assert_eq!(decompose("/"), ("", ""));
        assert_eq!(decompose(""), ("", ""));
    }

    #[test]
    fn subpath_keeps_leading_slash() {
        let (_, subpath) = decompose("/a/b");
        assert_eq!(subpath, "/b");
    }

    #[test]
    fn consecutive_slashes_stay_in_subpath() {
        assert_eq!(decompose("/a//b"), ("a", "//b"));
    }
}
