//! tag grouping stuff
use {serde::Serialize, std::collections::BTreeMap};

/// the group used when a tag has no usable prefix
pub const MISC_GROUP: &str = "misc";

/// a bucket of tags sharing a hyphen-delimited prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    /// the shared prefix
    pub key: String,
    /// the tags in this group, sorted
    pub tags: Vec<String>,
}

/// get the group key of a tag
///
/// everything before the first `-`, or the whole tag when there is no hyphen. tags with an
/// empty prefix go to [`MISC_GROUP`].
pub fn group_key(tag: &str) -> &str {
    match tag.split('-').next() {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => MISC_GROUP,
    }
}

/// partition tags into groups ordered by key
pub fn group_tags<I, S>(tags: I) -> Vec<TagGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for tag in tags {
        let tag = tag.as_ref();
        groups
            .entry(group_key(tag).to_string())
            .or_default()
            .push(tag.to_string());
    }

    groups
        .into_iter()
        .map(|(key, mut tags)| {
            tags.sort();
            tags.dedup();
            TagGroup { key, tags }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        let groups = group_tags(["saas-light", "saas-dark", "portfolio-minimal", "oneword"]);

        assert_eq!(
            groups,
            vec![
                TagGroup {
                    key: "oneword".to_string(),
                    tags: vec!["oneword".to_string()],
                },
                TagGroup {
                    key: "portfolio".to_string(),
                    tags: vec!["portfolio-minimal".to_string()],
                },
                TagGroup {
                    key: "saas".to_string(),
                    tags: vec!["saas-dark".to_string(), "saas-light".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_empty_prefix_goes_to_misc() {
        assert_eq!(group_key("-weird"), MISC_GROUP);
        assert_eq!(group_key(""), MISC_GROUP);
        assert_eq!(group_key("a-b-c"), "a");
    }

    #[test]
    fn test_every_tag_lands_once() {
        let input = ["x-1", "x-2", "y", "-z", "x-1"];
        let groups = group_tags(input);
        let total: usize = groups.iter().map(|g| g.tags.len()).sum();

        assert_eq!(total, 4);
        assert_eq!(
            groups.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(),
            vec!["misc", "x", "y"]
        );
    }

    #[test]
    fn test_no_tags() {
        assert!(group_tags(Vec::<String>::new()).is_empty());
    }
}
