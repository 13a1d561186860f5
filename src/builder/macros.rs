//! Macros for declaring choice catalogs.

/// Build a [`ChoiceCatalog`](crate::core::ChoiceCatalog) from `id => (label, glyph)` entries.
///
/// Expands to a `Result<ChoiceCatalog, CatalogError>`, so duplicate ids are
/// still reported.
///
/// # Example
///
/// ```
/// use stonepaper::catalog;
///
/// let catalog = catalog! {
///     rock => ("Rock", "🪨"),
///     paper => ("Paper", "📄"),
///     scissors => ("Scissors", "✂️"),
///     lizard => ("Lizard", "🦎"),
///     spock => ("Spock", "🖖"),
/// }
/// .unwrap();
///
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.label("spock"), "Spock");
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(
            $id:ident => ($label:expr, $glyph:expr)
        ),+ $(,)?
    ) => {
        $crate::core::ChoiceCatalog::new(vec![
            $(
                $crate::core::Choice::new(stringify!($id), $label, $glyph)
            ),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{CatalogError, ChoiceCatalog};

    #[test]
    fn catalog_macro_preserves_order() {
        let catalog = catalog! {
            stone => ("Stone", "✊"),
            paper => ("Paper", "✋"),
            scissors => ("Scissors", "✌️"),
        }
        .unwrap();

        assert_eq!(catalog, ChoiceCatalog::classic());
    }

    #[test]
    fn catalog_macro_reports_duplicates() {
        let result = catalog! {
            stone => ("Stone", "✊"),
            stone => ("Rock", "🪨")
        };

        assert_eq!(
            result,
            Err(CatalogError::DuplicateId {
                id: "stone".to_string()
            })
        );
    }

    #[test]
    fn catalog_macro_accepts_single_entry() {
        let catalog = catalog! { only => ("Only", "1") }.unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
