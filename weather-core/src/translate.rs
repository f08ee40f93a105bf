//! Fuzzy translation of upstream condition text into Portuguese labels.
//!
//! Upstream providers report conditions either as a short category (`"Clouds"`) or as a
//! free-text description (`"overcast clouds"`). Rather than requiring an exact key, the
//! text is matched against a fixed, ordered keyword table by case-insensitive edit
//! distance.

/// A canonical source keyword and the label it translates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionLabel {
    pub keyword: &'static str,
    pub label: &'static str,
}

impl ConditionLabel {
    pub const fn new(keyword: &'static str, label: &'static str) -> Self {
        Self { keyword, label }
    }
}

/// OpenWeather condition groups and their Portuguese labels.
///
/// Order matters: on equal distance the earlier entry wins.
pub const PORTUGUESE_LABELS: &[ConditionLabel] = &[
    ConditionLabel::new("Clear", "Limpo"),
    ConditionLabel::new("Clouds", "Nuvens"),
    ConditionLabel::new("Rain", "Chuva"),
    ConditionLabel::new("Drizzle", "Garoa"),
    ConditionLabel::new("Thunderstorm", "Trovoadas"),
    ConditionLabel::new("Snow", "Neve"),
];

/// Translate `text` using [`PORTUGUESE_LABELS`].
pub fn translate(text: &str) -> String {
    translate_with(PORTUGUESE_LABELS, text)
}

/// Translate `text` against an explicit ordered table.
///
/// A keyword is only accepted when its distance is strictly below the byte length of
/// `text`; otherwise `text` is returned as-is. This means the empty string, and input
/// too far from every keyword, come back unchanged.
pub fn translate_with(table: &[ConditionLabel], text: &str) -> String {
    let lower = text.to_lowercase();

    let mut best = text;
    let mut best_distance = text.len();

    for entry in table {
        let distance = edit_distance(&lower, &entry.keyword.to_lowercase());
        if distance < best_distance {
            best = entry.label;
            best_distance = distance;
        }
    }

    best.to_string()
}

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
