//! Word pool shuffling

use crate::core::{Category, Tile};
use rand::Rng;
use rand::seq::SliceRandom;

/// Flatten categories into tiles and return them in uniformly random order
///
/// Works on any subset of a session, which is how the engine reshuffles
/// the unsolved categories.
///
/// # Examples
/// ```
/// use quartet::catalog::Catalog;
/// use quartet::puzzle::shuffle;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = Catalog::builtin().unwrap();
/// let tiles = shuffle(catalog.list_all().iter().take(2), &mut StdRng::seed_from_u64(1));
/// assert_eq!(tiles.len(), 8);
/// ```
pub fn shuffle<'a, I, R>(categories: I, rng: &mut R) -> Vec<Tile<'a>>
where
    I: IntoIterator<Item = &'a Category>,
    R: Rng + ?Sized,
{
    let mut tiles: Vec<Tile<'a>> = categories.into_iter().flat_map(Tile::all_of).collect();
    tiles.shuffle(rng);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_keeps_membership() {
        let catalog = Catalog::builtin().unwrap();
        let categories = &catalog.list_all()[..4];
        let tiles = shuffle(categories, &mut StdRng::seed_from_u64(5));

        assert_eq!(tiles.len(), 16);
        for category in categories {
            for word in category.words() {
                let owned: Vec<&Tile> = tiles.iter().filter(|t| t.word() == word.as_str()).collect();
                assert_eq!(owned.len(), 1, "{word} should appear once");
                assert_eq!(owned[0].category_id(), category.id());
                assert_eq!(owned[0].tag(), category.tag());
            }
        }
    }

    #[test]
    fn shuffle_empty_subset() {
        let tiles = shuffle(std::iter::empty::<&Category>(), &mut StdRng::seed_from_u64(5));
        assert!(tiles.is_empty());
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let words = |seed| {
            shuffle(catalog.list_all(), &mut StdRng::seed_from_u64(seed))
                .iter()
                .map(|t| t.word())
                .collect::<Vec<_>>()
        };

        assert_eq!(words(11), words(11));
    }

    #[test]
    fn shuffle_actually_permutes() {
        let catalog = Catalog::builtin().unwrap();
        let in_order: Vec<&str> = catalog
            .list_all()
            .iter()
            .flat_map(|c| c.words().iter().map(String::as_str))
            .collect();

        let mut rng = StdRng::seed_from_u64(8);
        let reordered = (0..10).any(|_| {
            let tiles = shuffle(catalog.list_all(), &mut rng);
            tiles.iter().map(|t| t.word()).collect::<Vec<_>>() != in_order
        });
        assert!(reordered);
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        let catalog = Catalog::builtin().unwrap();
        let categories = &catalog.list_all()[..2];
        let mut rng = StdRng::seed_from_u64(21);
        let mut first_counts = [0usize; 2];

        for _ in 0..2000 {
            let tiles = shuffle(categories, &mut rng);
            let owner = usize::from(tiles[0].category_id() != categories[0].id());
            first_counts[owner] += 1;
        }

        // Each category owns half the tiles
        assert!((850..1150).contains(&first_counts[0]), "{first_counts:?}");
    }
}
