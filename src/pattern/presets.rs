//! Ready-made patterns for common cybersecurity artifacts.

use phf::{Map, phf_map};

/// One catalog entry: submenu display name plus the full pattern text.
pub struct Preset {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// The preset catalog, keyed by menu id.
///
/// Applied patterns replace the buffer wholesale and bypass the normalizer:
/// several entries use non-capturing `(?:...)` groups, and the trivial-group
/// pass would unwrap `(?` as an ordinary one-byte group.
pub const PRESETS: Map<u8, Preset> = phf_map! {
    1u8 => Preset {
        name: "IPv4 address",
        pattern: concat!(
            r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.",
            r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.",
            r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.",
            r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)",
        ),
    },
    2u8 => Preset {
        name: "Email address",
        pattern: r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
    },
    3u8 => Preset {
        name: "HTTP/HTTPS URL",
        pattern: r"https?://[A-Za-z0-9._~:/?#@!$&'()*+,;=-]+",
    },
    4u8 => Preset {
        name: "MD5 hash",
        pattern: "[A-Fa-f0-9]{32}",
    },
    5u8 => Preset {
        name: "SHA-256 hash",
        pattern: "[A-Fa-f0-9]{64}",
    },
    6u8 => Preset {
        name: "Windows file path",
        pattern: r#"[A-Za-z]:\\(?:[^\\/:*?"<>|\r\n]+\\?)*"#,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_six_entries() {
        assert_eq!(PRESETS.len(), 6);
        for id in 1..=6u8 {
            assert!(PRESETS.get(&id).is_some(), "missing preset {id}");
        }
    }

    #[test]
    fn ids_outside_catalog_miss() {
        assert!(PRESETS.get(&0).is_none());
        assert!(PRESETS.get(&7).is_none());
    }

    #[test]
    fn ipv4_repeats_the_octet_group() {
        let octet = r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)";
        let expected = format!(r"{octet}\.{octet}\.{octet}\.{octet}");
        assert_eq!(PRESETS.get(&1).unwrap().pattern, expected);
    }

    #[test]
    fn hex_digests_differ_only_in_width() {
        let md5 = PRESETS.get(&4).unwrap().pattern;
        let sha256 = PRESETS.get(&5).unwrap().pattern;
        assert_eq!(md5, "[A-Fa-f0-9]{32}");
        assert_eq!(sha256, "[A-Fa-f0-9]{64}");
    }

    #[test]
    fn windows_path_keeps_doubled_backslashes() {
        let path = PRESETS.get(&6).unwrap().pattern;
        assert!(path.starts_with(r"[A-Za-z]:\\"));
        assert!(path.contains("(?:"));
    }
}
