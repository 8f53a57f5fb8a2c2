//! Term list and ontology selection parsing.

/// Split text into terms: one per line (`\n` or `\r\n`), trimmed, blank
/// lines dropped.
#[must_use]
pub fn parse_terms(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Concatenate term lists from several sources, preserving order.
#[must_use]
pub fn merge_terms<I, S>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sources
        .into_iter()
        .flat_map(|text| parse_terms(text.as_ref()))
        .collect()
}

/// Combine selected ontology prefixes with a comma-separated custom list.
///
/// Prefixes are trimmed and lowercased; duplicates keep their first
/// position.
#[must_use]
pub fn ontology_selection<S: AsRef<str>>(selected: &[S], custom: &str) -> Vec<String> {
    let custom = custom.split(',');
    let mut out: Vec<String> = Vec::new();
    for prefix in selected.iter().map(AsRef::<str>::as_ref).chain(custom) {
        let prefix = prefix.trim().to_lowercase();
        if !prefix.is_empty() && !out.contains(&prefix) {
            out.push(prefix);
        }
    }
    out
}
