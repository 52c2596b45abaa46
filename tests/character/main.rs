mod blocks;
mod classify;
mod codec;
mod scripts;
mod traversal;

use unichar::character;

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn parse_unicodes(s: &str) -> Vec<u32> {
    s.split(',')
        .map(|s| {
            let s = s.trim();
            let s = s.strip_prefix("U+").unwrap_or(s);
            u32::from_str_radix(s, 16).unwrap()
        })
        .collect()
}

/// Category, bidi class and the three simple case mappings, e.g.
/// `Lu L 0061/0041/0041`.
fn summary(cp: u32) -> String {
    format!(
        "{} {} {:04X}/{:04X}/{:04X}",
        character::get_type(cp),
        character::directionality(cp),
        character::to_lower_case(cp),
        character::to_upper_case(cp),
        character::to_title_case(cp),
    )
}

fn summaries(list: &str) -> String {
    parse_unicodes(list)
        .into_iter()
        .map(summary)
        .collect::<Vec<_>>()
        .join("|")
}
