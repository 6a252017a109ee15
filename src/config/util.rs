//! Configuration utility functions.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `local@domain.tld`, no whitespace, at least one dot in the domain.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// BCP 47-ish language tag: `en`, `pt-BR`, `zh-Hans`.
static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})*$").expect("language pattern is valid")
});

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("hex color pattern is valid")
});

/// `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)`.
static FUNC_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rgb|rgba|hsl|hsla)\([0-9.,%/ \t-]+\)$").expect("color function pattern is valid")
});

/// CSS named colors plus `transparent` and `currentcolor`, sorted.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// Twitter handle without the leading `@`.
static TWITTER_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{1,15}$").expect("twitter handle pattern is valid")
});

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Check whether `s` looks like a deliverable email address.
pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

pub fn is_language_tag(s: &str) -> bool {
    LANGUAGE.is_match(s)
}

pub fn is_twitter_handle(s: &str) -> bool {
    TWITTER_HANDLE.is_match(s)
}

/// Check whether `s` is a CSS color a browser accepts in a manifest:
/// hex, one of the color functions, or a named color like `black`.
pub fn is_css_color(s: &str) -> bool {
    HEX_COLOR.is_match(s) || FUNC_COLOR.is_match(s) || is_named_color(s)
}

/// Named colors are matched case-insensitively.
fn is_named_color(s: &str) -> bool {
    NAMED_COLORS
        .binary_search(&s.to_ascii_lowercase().as_str())
        .is_ok()
}

/// Check whether `s` parses as an absolute URL with a host.
pub fn is_absolute_url(s: &str) -> bool {
    url::Url::parse(s).is_ok_and(|u| u.has_host())
}

/// Expand `~` and anchor relative paths at `root`.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    let path = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    if path.is_relative() { root.join(path) } else { path }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/srv/blog");
        assert_eq!(
            resolve_path(Path::new("colors.toml"), root),
            PathBuf::from("/srv/blog/colors.toml")
        );
        assert_eq!(
            resolve_path(Path::new("/etc/colors.toml"), root),
            PathBuf::from("/etc/colors.toml")
        );

        let home = resolve_path(Path::new("~/colors.toml"), root);
        assert_eq!(home, PathBuf::from(shellexpand::tilde("~/colors.toml").as_ref()));
        assert!(!home.starts_with(root));
        assert!(!home.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-project/"),
            Some("my-project".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.github.io/a/b/c"),
            Some("a/b/c".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("benjamin.piouffle@protonmail.ch"));
        assert!(is_email("a+tag@sub.example.org"));
        assert!(!is_email("no-at-sign.example.com"));
        assert!(!is_email("two@@example.com"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("spaces in@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_is_language_tag() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("pt-BR"));
        assert!(is_language_tag("zh-Hans"));
        assert!(!is_language_tag("english language"));
        assert!(!is_language_tag("e"));
        assert!(!is_language_tag(""));
    }

    #[test]
    fn test_is_css_color() {
        assert!(is_css_color("#1D1E20"));
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#ffffff80"));
        assert!(is_css_color("rgb(29, 30, 32)"));
        assert!(is_css_color("hsla(220, 5%, 12%, 0.5)"));
        assert!(is_css_color("black"));
        assert!(is_css_color("RebeccaPurple"));
        assert!(is_css_color("transparent"));
        assert!(!is_css_color("banana"));
        assert!(!is_css_color("background"));
        assert!(NAMED_COLORS.windows(2).all(|w| w[0] < w[1]));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("#GGGGGG"));
        assert!(!is_css_color("url(evil)"));
        assert!(!is_css_color(""));
    }

    #[test]
    fn test_is_twitter_handle() {
        assert!(is_twitter_handle("betree83"));
        assert!(!is_twitter_handle("@betree83"));
        assert!(!is_twitter_handle("this_handle_is_too_long"));
        assert!(!is_twitter_handle(""));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://github.com/Betree"));
        assert!(!is_absolute_url("github.com/Betree"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = tempfile::TempDir::new().unwrap();
        let nested = temp.path().join("content/posts");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, temp.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let found = find_config_file_from(temp.path(), Path::new("no-such-config-file.toml"));
        assert!(found.is_none());
    }
}
