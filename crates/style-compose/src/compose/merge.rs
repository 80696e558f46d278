//! Recursive style merging.

use crate::style::{Node, Style};

/// Merges styles recursively, left to right.
///
/// For every key, a nested style merged onto a nested style is merged
/// recursively; any other combination replaces the accumulated value with
/// the later one. Key positions follow first appearance. Inputs are left
/// untouched and a fresh style is returned.
///
/// # Example
///
/// ```rust
/// use style_compose::{merge, Style};
///
/// let base = Style::new()
///     .set("margin", 5)
///     .set("@media print", Style::new().set("margin", 0).set("padding", 0));
/// let print = Style::new().set("@media print", Style::new().set("padding", 5));
///
/// let merged = merge([&base, &print]);
/// let expected = Style::new()
///     .set("margin", 5)
///     .set("@media print", Style::new().set("margin", 0).set("padding", 5));
/// assert_eq!(merged, expected);
/// ```
pub fn merge<'a, I>(styles: I) -> Style
where
    I: IntoIterator<Item = &'a Style>,
{
    let mut result = Style::new();
    for style in styles {
        merge_into(&mut result, style);
    }
    result
}

fn merge_into(target: &mut Style, source: &Style) {
    for (key, value) in source {
        if let (Some(Node::Style(existing)), Node::Style(incoming)) = (target.get_mut(key), value) {
            merge_into(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

impl Style {
    /// Returns `self` merged with `other`, with `other` winning conflicts.
    pub fn merged_with(&self, other: &Style) -> Style {
        merge([self, other])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::style::Scalar;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = Node> {
        prop_oneof![
            Just(Node::from(Scalar::Null)),
            any::<bool>().prop_map(Node::from),
            (-1000i32..1000).prop_map(Node::from),
            "[a-z]{1,8}".prop_map(Node::from),
        ]
    }

    fn style() -> impl Strategy<Value = Style> {
        let key = prop::sample::select(vec!["a", "b", "c", "d"]);
        let node = leaf().prop_recursive(3, 24, 4, move |inner| {
            prop::collection::vec((key.clone(), inner), 0..4)
                .prop_map(|pairs| Node::Style(pairs.into_iter().collect()))
        });
        prop::collection::vec((prop::sample::select(vec!["a", "b", "c", "d"]), node), 0..5)
            .prop_map(|pairs| pairs.into_iter().collect::<Style>())
    }

    fn assert_last_wins(
        merged: &Style,
        earlier: &Style,
        later: &Style,
    ) -> Result<(), TestCaseError> {
        for (key, value) in later {
            let got = merged.get(key);
            match (earlier.get(key), value) {
                (Some(Node::Style(before)), Node::Style(after)) => {
                    let Some(Node::Style(got)) = got else {
                        return Err(TestCaseError::fail(format!("'{}' should stay nested", key)));
                    };
                    assert_last_wins(got, before, after)?;
                }
                _ => prop_assert_eq!(
                    got,
                    Some(value),
                    "'{}' should be taken from the later style",
                    key
                ),
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn later_style_wins_at_every_level(a in style(), b in style()) {
            let merged = merge([&a, &b]);
            assert_last_wins(&merged, &a, &b)?;
        }

        #[test]
        fn keys_are_the_union_of_inputs(a in style(), b in style()) {
            let merged = merge([&a, &b]);
            for key in a.keys().chain(b.keys()) {
                prop_assert!(merged.contains_key(key));
            }
            prop_assert!(merged.len() <= a.len() + b.len());
        }

        #[test]
        fn merging_with_empty_is_identity(a in style()) {
            prop_assert_eq!(merge([&a, &Style::new()]), a.clone());
            prop_assert_eq!(merge([&Style::new(), &a]), a);
        }
    }
}
