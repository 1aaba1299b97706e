/// Join one path word and one extension onto the base URL.
///
/// With a non-empty extension the word's trailing slash is dropped first, so
/// `admin/` + `.php` becomes `admin.php`. Leading slashes are trimmed so the
/// base and segment are always separated by exactly one `/`.
pub fn candidate_url(base: &str, path: &str, ext: &str) -> String {
    let segment = if ext.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", path.strip_suffix('/').unwrap_or(path), ext)
    };
    format!("{}/{}", base, segment.trim_start_matches('/'))
}

/// Cartesian product of paths and extensions, path-major.
/// No dedup: duplicate words produce duplicate URLs.
pub fn enumerate_targets(base: &str, paths: &[String], extensions: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(paths.len() * extensions.len());
    for path in paths {
        for ext in extensions {
            out.push(candidate_url(base, path, ext));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn product_is_path_major() {
        let urls = enumerate_targets(
            "https://example.com",
            &strings(&["admin", "login"]),
            &strings(&["", ".php"]),
        );
        assert_eq!(
            urls,
            vec![
                "https://example.com/admin",
                "https://example.com/admin.php",
                "https://example.com/login",
                "https://example.com/login.php",
            ]
        );
    }

    #[test]
    fn slashes_are_normalized() {
        assert_eq!(candidate_url("https://h", "/admin/", ""), "https://h/admin/");
        assert_eq!(candidate_url("https://h", "admin/", ".bak"), "https://h/admin.bak");
        assert_eq!(candidate_url("https://h", "//.git", ""), "https://h/.git");
    }

    #[test]
    fn empty_paths_give_empty_scan() {
        assert!(enumerate_targets("https://h", &[], &strings(&["", ".php"])).is_empty());
    }

    #[test]
    fn size_is_product_and_duplicates_survive() {
        let paths = strings(&["a", "b", "a"]);
        let exts = strings(&["", ".php", ".bak"]);
        let first = enumerate_targets("https://h", &paths, &exts);
        assert_eq!(first.len(), 9);
        assert_eq!(first, enumerate_targets("https://h", &paths, &exts));
        assert_eq!(first.iter().filter(|u| *u == "https://h/a").count(), 2);
    }
}
