//! CSS class list composition.

/// Join class fragments into a single `class` attribute value.
///
/// Each fragment may hold several whitespace-separated classes. Empty
/// fragments are skipped and repeated classes keep their first position.
/// Utility conflicts (`p-2` vs `p-4`) are not resolved; both are kept.
pub fn class_names<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();

    for class in fragments.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }

    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_fragments() {
        assert_eq!(class_names(["flex", "items-center"]), "flex items-center");
    }

    #[test]
    fn skips_empty_and_whitespace() {
        assert_eq!(class_names(["", "  flex  ", "   "]), "flex");
        assert_eq!(class_names(Vec::<&str>::new()), "");
    }

    #[test]
    fn splits_multi_class_fragments() {
        assert_eq!(
            class_names(["relative flex", "h-8 w-8"]),
            "relative flex h-8 w-8"
        );
    }

    #[test]
    fn removes_duplicates_keeping_first() {
        assert_eq!(class_names(["flex gap-3", "gap-3 flex-col"]), "flex gap-3 flex-col");
    }

    #[test]
    fn keeps_conflicting_utilities() {
        assert_eq!(class_names(["size-8", "size-10"]), "size-8 size-10");
    }
}
