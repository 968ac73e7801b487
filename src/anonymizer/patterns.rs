use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

use super::GENERIC_MARKER;

/// First and last code points treated as CJK ideographs.
pub const CJK_FIRST: char = '\u{4E00}';
pub const CJK_LAST: char = '\u{9FA5}';

/// Suffixes that close a district or county name.
pub const DISTRICT_SUFFIXES: [char; 2] = ['区', '县'];

/// Fragment lengths, in characters, tried before a district suffix.
pub const FRAGMENT_MIN_CHARS: usize = 2;
pub const FRAGMENT_MAX_CHARS: usize = 4;

/// Provincial-level names ending in 区. No stage rewrites text inside them.
pub const PROVINCIAL_REGIONS: &[&str] = &[
    "内蒙古自治区",
    "广西壮族自治区",
    "西藏自治区",
    "宁夏回族自治区",
    "新疆维吾尔自治区",
    "香港特别行政区",
    "澳门特别行政区",
];

/// Byte ranges of every provincial-region name in `text`.
pub fn provincial_spans(text: &str) -> Vec<Range<usize>> {
    PROVINCIAL_REGIONS
        .iter()
        .flat_map(|name| {
            text.match_indices(*name)
                .map(|(start, m)| start..start + m.len())
        })
        .collect()
}

#[inline]
pub fn overlaps_any(spans: &[Range<usize>], start: usize, end: usize) -> bool {
    spans.iter().any(|span| start < span.end && span.start < end)
}

fn cjk_class() -> String {
    format!(r"\x{{{:X}}}-\x{{{:X}}}", CJK_FIRST as u32, CJK_LAST as u32)
}

/// `name` is a run of `min..=max` ideographs other than the marker, then
/// `suffix`, then a non-ideograph or the end of text as `boundary`.
fn bounded_pattern(min: usize, max: usize, suffixes: &str) -> String {
    let cjk = cjk_class();
    format!(
        r"(?P<name>[{cjk}--{marker}]{{{min},{max}}})(?P<suffix>{suffixes})(?P<boundary>[^{cjk}]|$)",
        marker = GENERIC_MARKER,
    )
}

/// Known district and county names of Zhejiang, without their suffix.
pub static DISTRICT_FRAGMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Hangzhou
        "临平", "拱墅", "西湖", "上城", "下城", "江干", "滨江", "萧山", "余杭", "富阳",
        "桐庐", "建德", "淳安",
        // Wenzhou
        "鹿城", "龙湾", "瓯海", "洞头", "瑞安", "乐清", "永嘉", "平阳", "苍南", "文成",
        "泰顺",
        // Jiaxing, Huzhou
        "南湖", "秀洲", "嘉善", "海盐", "海宁", "平湖", "桐乡", "吴兴", "南浔", "德清",
        "长兴", "安吉",
        // Shaoxing, Jinhua
        "越城", "柯桥", "上虞", "诸暨", "嵊州", "新昌", "婺城", "金东", "兰溪", "东阳",
        "永康", "武义", "浦江", "磐安",
        // Quzhou, Zhoushan
        "柯城", "衢江", "江山", "龙游", "常山", "开化", "定海", "普陀", "岱山", "嵊泗",
        // Taizhou, Lishui
        "椒江", "黄岩", "路桥", "三门", "天台", "仙居", "温岭", "临海", "玉环", "莲都",
        "龙泉", "青田", "缙云", "遂昌", "松阳", "云和", "庆元", "景宁",
    ]
    .into_iter()
    .collect()
});

// Name runs exclude the generic marker so anonymized units are never re-read
// as part of a longer name. The boundary is captured rather than looked ahead.
pub static BOUNDED_DISTRICT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&bounded_pattern(2, 4, "区|县")).unwrap());

pub static SUB_DISTRICT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&bounded_pattern(2, 6, "街道|乡|镇|村")).unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_pattern_text() {
        assert_eq!(
            bounded_pattern(2, 4, "区|县"),
            r"(?P<name>[\x{4E00}-\x{9FA5}--某]{2,4})(?P<suffix>区|县)(?P<boundary>[^\x{4E00}-\x{9FA5}]|$)"
        );
    }

    #[test]
    fn test_boundary_range_edges() {
        // U+9FA6 lies past the range and counts as a boundary.
        assert!(BOUNDED_DISTRICT_REGEX.is_match("天河区\u{9FA6}"));
        assert!(!BOUNDED_DISTRICT_REGEX.is_match("天河区龥"));
        assert!(BOUNDED_DISTRICT_REGEX.is_match("天河区A"));
    }

    #[test]
    fn test_provincial_spans() {
        let text = "位于广西壮族自治区，毗邻西藏自治区";
        let spans = provincial_spans(text);
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert!(text[span.clone()].ends_with("区"));
        }
        assert!(overlaps_any(&spans, spans[0].end - 3, spans[0].end));
        assert!(!overlaps_any(&spans, 0, spans[0].start));
    }

    #[test]
    fn test_fragment_set_is_complete() {
        assert_eq!(DISTRICT_FRAGMENTS.len(), 78);
        assert!(DISTRICT_FRAGMENTS.contains("西湖"));
        assert!(!DISTRICT_FRAGMENTS.contains("天河"));
    }

    #[test]
    fn test_bounded_district_requires_boundary() {
        assert!(BOUNDED_DISTRICT_REGEX.is_match("天河区，"));
        assert!(BOUNDED_DISTRICT_REGEX.is_match("天河区"));
        assert!(!BOUNDED_DISTRICT_REGEX.is_match("高新区管委会"));
        assert!(!BOUNDED_DISTRICT_REGEX.is_match("某区，"));
    }

    #[test]
    fn test_sub_district_suffixes() {
        for text in ["文一街道。", "良渚镇", "塘栖乡 ", "张家村，"] {
            assert!(SUB_DISTRICT_REGEX.is_match(text), "{}", text);
        }
        assert!(!SUB_DISTRICT_REGEX.is_match("张家村委会"));
    }
}
