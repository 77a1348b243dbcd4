//! Naming rules for generated metadata.

const BACKSTAGE_PREFIX: &str = "backstage/";

/// Removes a trailing `/.` left by directory listings.
#[must_use]
pub fn strip_trailing_dot(entry: &str) -> &str {
    entry.strip_suffix("/.").unwrap_or(entry)
}

/// Maps a plugin path to the overlay directory that holds its metadata.
///
/// Paths under `backstage/` drop `plugins` and `packages` segments.
/// Everything else keeps only the first segment.
#[must_use]
pub fn collapse_path(path: &str) -> String {
    if path.starts_with(BACKSTAGE_PREFIX) {
        collapse_grouping_segments(path)
    } else {
        path.split('/').next().unwrap_or(path).to_string()
    }
}

// Replaces each non-overlapping "/plugins/" or "/packages/" with "/", scanning
// left to right.
fn collapse_grouping_segments(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    loop {
        let next = ["/plugins/", "/packages/"]
            .iter()
            .filter_map(|needle| rest.find(needle).map(|idx| (idx, needle.len())))
            .min_by_key(|(idx, _)| *idx);

        match next {
            Some((idx, len)) => {
                out.push_str(&rest[..idx]);
                out.push('/');
                rest = &rest[idx + len..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Last path segment.
#[must_use]
pub fn plugin_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Plugin name without the `backstage-plugin-` marker.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace("backstage-plugin-", "")
}

/// Catalog component type implied by the plugin name.
#[must_use]
pub fn plugin_type(name: &str) -> &'static str {
    if ["backend-module", "actions", "processor"]
        .iter()
        .any(|marker| name.contains(marker))
    {
        "backstage-backend-plugin-module"
    } else if name.contains("backend") {
        "backstage-backend-plugin"
    } else {
        "backstage-plugin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_backstage_paths() {
        assert_eq!(collapse_path("backstage/plugins/kubernetes"), "backstage/kubernetes");
        assert_eq!(
            collapse_path("backstage/packages/app-defaults"),
            "backstage/app-defaults"
        );
        assert_eq!(collapse_path("backstage/kubernetes"), "backstage/kubernetes");
    }

    #[test]
    fn other_paths_keep_first_segment() {
        assert_eq!(collapse_path("3scale/plugins/3scale-backend"), "3scale");
        assert_eq!(collapse_path("acr"), "acr");
    }

    #[test]
    fn strips_trailing_dot() {
        assert_eq!(strip_trailing_dot("tekton/plugins/tekton/."), "tekton/plugins/tekton");
        assert_eq!(strip_trailing_dot("tekton"), "tekton");
    }

    #[test]
    fn names_and_types() {
        let name = plugin_name("backstage/plugins/scaffolder-backend-module-github");
        assert_eq!(name, "scaffolder-backend-module-github");
        assert_eq!(plugin_type(name), "backstage-backend-plugin-module");

        assert_eq!(plugin_type("kubernetes-backend"), "backstage-backend-plugin");
        assert_eq!(plugin_type("scaffolder-custom-actions"), "backstage-backend-plugin-module");
        assert_eq!(plugin_type("catalog-processor-ldap"), "backstage-backend-plugin-module");
        assert_eq!(plugin_type("tekton"), "backstage-plugin");

        assert_eq!(sanitize_name("backstage-plugin-tekton"), "tekton");
        assert_eq!(sanitize_name("tekton"), "tekton");
    }
}
