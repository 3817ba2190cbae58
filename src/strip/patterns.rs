//! Ordered pattern tables for technical-term stripping.
//!
//! Kept as visible data rather than inline logic so each concern
//! (source, codec, language, release group, resolution) can be tested
//! and extended independently.

use regex::Regex;
use std::sync::OnceLock;

/// One named group of ordered case-insensitive patterns.
pub struct PatternGroup {
    pub name: &'static str,
    pub patterns: Vec<Regex>,
}

static PATTERN_GROUPS: OnceLock<Vec<PatternGroup>> = OnceLock::new();

fn compile(raw: &[&str]) -> Vec<Regex> {
    raw.iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
}

/// All stripping groups, in application order.
pub fn pattern_groups() -> &'static [PatternGroup] {
    PATTERN_GROUPS.get_or_init(|| {
        vec![
            PatternGroup {
                name: "quality_source",
                patterns: compile(&[
                    r"\bweb-?rip\b",
                    r"\bweb-?dl\b",
                    r"\bblu-?ray\b",
                    r"\bbd-?rip\b",
                    r"\bbr-?rip\b",
                    r"\bdvd-?rip\b",
                    r"\bdvd-?scr\b",
                    r"\bhd-?rip\b",
                    r"\bhdtv\b",
                    r"\bpdtv\b",
                    r"\bcam-?rip\b",
                    r"\bteles?ync\b",
                    r"\bhdts\b",
                    r"\bscreener\b",
                    r"\bremux\b",
                    r"\bproper\b",
                    r"\brepack\b",
                    r"\binternal\b",
                    r"\blimited\b",
                    r"\bunrated\b",
                    r"\buncut\b",
                    r"\bextended(?:\s+cut)?\b",
                    r"\bdirector'?s\s*cut\b",
                ]),
            },
            PatternGroup {
                name: "audio_codec",
                patterns: compile(&[
                    r"\baac(?:[.\s-]?2[.\s]?0)?\b",
                    r"\be?-?ac-?3\b",
                    r"\bdts(?:-?hd)?(?:[.\s]?ma)?\b",
                    r"\btruehd\b",
                    r"\batmos\b",
                    r"\bddp?[.\s]?[257][.\s]?[01]\b",
                    r"\b[257][.\s][01]\b",
                    r"\bmp3\b",
                    r"\bflac\b",
                ]),
            },
            PatternGroup {
                name: "video_codec",
                patterns: compile(&[
                    r"\b[xh][.\s-]?26[45]\b",
                    r"\bhevc\b",
                    r"\bavc\b",
                    r"\bxvid\b",
                    r"\bdivx\b",
                    r"\bav1\b",
                    r"\b10-?bits?\b",
                    r"\bhdr(?:10)?\+?\b",
                    r"\bdolby\s*vision\b",
                    r"\bsdr\b",
                ]),
            },
            PatternGroup {
                name: "release_group",
                patterns: compile(&[
                    r"\bamzn\b",
                    r"\bnf\b",
                    r"\bdsnp\b",
                    r"\bhulu\b",
                    r"\bhmax\b",
                    r"\batvp\b",
                    r"\brarbg\b",
                    r"\byify\b",
                    r"\byts(?:[.\s][a-z]{2,3})?\b",
                    r"\beztv\b",
                    r"\bettv\b",
                    r"\bfgt\b",
                    r"\bsparks\b",
                    r"\bgeckos\b",
                    r"\btigole\b",
                    r"\bqxr\b",
                    r"\brartv\b",
                    r"\bpahe\b",
                    r"\bpsa\b",
                    r"\bgalaxyrg\b",
                    r"\bmegusta\b",
                ]),
            },
            PatternGroup {
                name: "language",
                patterns: compile(&[
                    r"\bvostfr\b",
                    r"\bvosta\b",
                    r"\btruefrench\b",
                    r"\bfrench\b",
                    r"\bmulti\b",
                    r"\bvff\b",
                    r"\bvfq\b",
                    r"\bsubbed\b",
                    r"\bsubfrench\b",
                ]),
            },
            PatternGroup {
                name: "resolution",
                patterns: compile(&[
                    r"\b(?:2160|1440|1080|720|576|480|360)[pi]\b",
                    r"\b[48]k\b",
                    r"\buhd\b",
                    r"\bfhd\b",
                    r"\bhd\b",
                ]),
            },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> &'static PatternGroup {
        pattern_groups().iter().find(|g| g.name == name).unwrap()
    }

    fn matches(group_name: &str, input: &str) -> bool {
        group(group_name).patterns.iter().any(|re| re.is_match(input))
    }

    #[test]
    fn test_group_order() {
        let names: Vec<_> = pattern_groups().iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "quality_source",
                "audio_codec",
                "video_codec",
                "release_group",
                "language",
                "resolution"
            ]
        );
    }

    #[test]
    fn test_quality_source_coverage() {
        for token in ["WEBRip", "WEB-DL", "BluRay", "HDTV", "REMUX", "BRRip"] {
            assert!(matches("quality_source", token), "missed: {token}");
        }
    }

    #[test]
    fn test_audio_codec_coverage() {
        for token in ["AAC", "AC3", "EAC3", "DTS-HD.MA", "5.1", "DDP5.1", "TrueHD"] {
            assert!(matches("audio_codec", token), "missed: {token}");
        }
    }

    #[test]
    fn test_video_codec_coverage() {
        for token in ["x264", "x265", "H.264", "HEVC", "HDR10+", "XviD"] {
            assert!(matches("video_codec", token), "missed: {token}");
        }
    }

    #[test]
    fn test_release_group_coverage() {
        for token in ["RARBG", "AMZN", "NF", "YIFY", "YTS.MX", "EZTV"] {
            assert!(matches("release_group", token), "missed: {token}");
        }
    }

    #[test]
    fn test_language_coverage() {
        for token in ["VOSTFR", "MULTI", "TRUEFRENCH", "VFF"] {
            assert!(matches("language", token), "missed: {token}");
        }
    }

    #[test]
    fn test_resolution_coverage() {
        for token in ["1080p", "720p", "2160p", "4K", "UHD", "480i"] {
            assert!(matches("resolution", token), "missed: {token}");
        }
    }

    #[test]
    fn test_no_false_positive_on_plain_words() {
        for word in ["Interstellar", "Camera", "Dispatch", "Multiplicity"] {
            for group in pattern_groups() {
                for re in &group.patterns {
                    assert!(!re.is_match(word), "{} wrongly matched by {re}", word);
                }
            }
        }
    }
}
