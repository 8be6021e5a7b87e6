//! Fuzzy resolution of free-form input values onto appearance states.
//!
//! Input data says things like "employer contact" or "worksource"; the form
//! declares export values like `Employer-Contact`. The resolver maps one
//! onto the other with a three-tier policy, favoring a plausible answer
//! over silence: the result is a low-stakes presentation hint, and the
//! surrounding contract ranks completeness above precision.

/// Reduce a label to its comparable form: lowercase, hyphens and
/// underscores treated as spaces, whitespace collapsed.
fn canonical(label: &str) -> String {
    let spaced: String = label
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pick the appearance state best matching `desired`.
///
/// Tiers, first match wins:
/// 1. exact match (case-insensitive, separator-insensitive);
/// 2. containment in either direction — short acronyms commonly appear
///    inside longer export labels, and vice versa;
/// 3. the first candidate, so a garbled value still lands somewhere.
///
/// Returns `None` only for an empty candidate list or an empty `desired`.
pub fn resolve<'a>(candidates: &'a [String], desired: &str) -> Option<&'a str> {
    if candidates.is_empty() {
        return None;
    }
    let want = canonical(desired);
    if want.is_empty() {
        return None;
    }
    for candidate in candidates {
        if canonical(candidate) == want {
            return Some(candidate);
        }
    }
    for candidate in candidates {
        let have = canonical(candidate);
        if have.contains(&want) || want.contains(&have) {
            return Some(candidate);
        }
    }
    candidates.first().map(|s| s.as_str())
}

/// Normalize common input synonyms to the vocabulary the form uses, ahead
/// of [`resolve`]. Unknown values pass through trimmed and lowercased.
pub fn normalize_choice(raw: &str) -> String {
    let token = raw.trim().to_ascii_lowercase();
    let mapped = match token.as_str() {
        "resume" | "résumé" | "applied" | "application/resume" | "sent resume" => "application",
        "interviewed" => "interview",
        "inquired" | "asked" | "question" => "inquiry",
        "workshop" | "job fair" | "training" => "worksource",
        "employer" => "employer contact",
        _ => return token,
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec![
            "Employer-Contact".to_string(),
            "Worksource-Activity".to_string(),
            "Other-Activity".to_string(),
        ]
    }

    #[test]
    fn test_tier1_exact_ignores_case_and_separators() {
        assert_eq!(
            resolve(&candidates(), "employer contact"),
            Some("Employer-Contact")
        );
    }

    #[test]
    fn test_tier2_containment_both_directions() {
        assert_eq!(
            resolve(&candidates(), "worksource"),
            Some("Worksource-Activity")
        );
        // Desired longer than the candidate label.
        assert_eq!(
            resolve(&candidates(), "some other activity entirely"),
            Some("Other-Activity")
        );
    }

    #[test]
    fn test_tier3_falls_back_to_first_candidate() {
        assert_eq!(resolve(&candidates(), "zzz"), Some("Employer-Contact"));
    }

    #[test]
    fn test_no_candidates_resolves_to_none() {
        assert_eq!(resolve(&[], "anything"), None);
    }

    #[test]
    fn test_empty_desired_resolves_to_none() {
        assert_eq!(resolve(&candidates(), "  "), None);
    }

    #[test]
    fn test_normalize_choice_synonyms() {
        assert_eq!(normalize_choice("Resume"), "application");
        assert_eq!(normalize_choice("  Interviewed "), "interview");
        assert_eq!(normalize_choice("Workshop"), "worksource");
        assert_eq!(normalize_choice("cold call"), "cold call");
    }
}
