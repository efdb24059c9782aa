//! Slash-delimited GEDCOM name handling.
//!
//! Display names carry the surname between the first pair of `/` markers,
//! e.g. `Jack /Person/`. The closing slash may be missing, in which case the
//! surname runs to the end of the string.

/// Extract the surname from a display name; empty when no slash is present
/// or the slash pair is empty.
#[must_use]
pub fn surname(name: &str) -> &str {
    let Some(start) = name.find('/') else {
        return "";
    };
    let end = name[start + 1..]
        .find('/')
        .map_or(name.len(), |i| start + 1 + i);
    if start + 1 == end {
        return "";
    }
    &name[start + 1..end]
}

/// Extract the first name: everything outside the first slash pair, trimmed
/// of the whitespace adjoining the pair.
#[must_use]
pub fn first_name(name: &str) -> String {
    let Some(start) = name.find('/') else {
        return name.trim().to_string();
    };
    let close = name[start + 1..].find('/').map(|i| start + 1 + i);
    let before = name[..start].trim();
    let after = close.map_or("", |c| name[c + 1..].trim());
    if before.is_empty() {
        after.to_string()
    } else if after.is_empty() {
        before.to_string()
    } else {
        format!("{before} {after}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_between_slashes() {
        assert_eq!(surname("Jack /Person/"), "Person");
    }

    #[test]
    fn surname_without_slashes_is_empty() {
        assert_eq!(surname("NoSlashes"), "");
    }

    #[test]
    fn surname_runs_to_end_when_unclosed() {
        assert_eq!(surname("Jack /Person"), "Person");
    }

    #[test]
    fn adjacent_slashes_mean_empty_surname() {
        assert_eq!(surname("Jack //"), "");
    }

    #[test]
    fn first_name_excludes_surname() {
        assert_eq!(first_name("Jack /Person/"), "Jack");
        assert_eq!(first_name("Jack /Person/ Jr"), "Jack Jr");
        assert_eq!(first_name("NoSlashes"), "NoSlashes");
        assert_eq!(first_name("/Person/ Jack"), "Jack");
    }
}
