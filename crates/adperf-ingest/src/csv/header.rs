//! Header row normalization.

use std::collections::{BTreeMap, BTreeSet};

/// Trim, strip a byte-order mark and collapse inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalize every header cell.
///
/// Blank cells get an `Unnamed: <index>` name and repeated names get a
/// `.<n>` suffix (`Date`, `Date.1`, ...), so the first occurrence keeps the
/// plain name.
pub(crate) fn build_headers<'a, I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let cells: Vec<String> = cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = normalize_header(cell);
            if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            }
        })
        .collect();
    let mut taken: BTreeSet<String> = cells.iter().cloned().collect();
    let mut repeats: BTreeMap<String, usize> = BTreeMap::new();
    let mut headers = Vec::with_capacity(cells.len());
    for name in cells {
        let Some(count) = repeats.get_mut(&name) else {
            repeats.insert(name.clone(), 1);
            headers.push(name);
            continue;
        };
        let mut candidate = format!("{name}.{count}");
        while taken.contains(&candidate) {
            *count += 1;
            candidate = format!("{name}.{count}");
        }
        *count += 1;
        taken.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_cells() {
        assert_eq!(normalize_header("\u{feff}Organizador"), "Organizador");
        assert_eq!(normalize_header("  Amount   spent "), "Amount spent");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn blank_headers_are_named_by_position() {
        let headers = build_headers(["Date", "", "Fase"]);
        assert_eq!(headers, vec!["Date", "Unnamed: 1", "Fase"]);
    }

    #[test]
    fn repeated_headers_get_numbered_suffixes() {
        let headers = build_headers(["Date", " Date ", "Fase", "Date"]);
        assert_eq!(headers, vec!["Date", "Date.1", "Fase", "Date.2"]);
    }

    #[test]
    fn suffixes_skip_names_already_in_the_header() {
        let headers = build_headers(["Date", "Date.1", "Date"]);
        assert_eq!(headers, vec!["Date", "Date.1", "Date.2"]);
    }
}
