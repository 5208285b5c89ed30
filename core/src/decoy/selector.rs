// Observer-Facing Selection
//
// Simulates which path an observer effectively sees as "selected". The
// combined list puts decoys first and the actual path last; selection
// is uniform over the whole list. Display only: the traffic path stays
// whatever the sampler reserved.

use crate::paths::Path;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of path the observer was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathTag {
    Decoy,
    Main,
}

impl fmt::Display for PathTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTag::Decoy => write!(f, "decoy"),
            PathTag::Main => write!(f, "main"),
        }
    }
}

/// Pick the path an observer sees: uniform over decoys plus the actual
/// path, decoys first in the combined list.
pub fn displayed_path<'p, R: Rng>(
    actual: &'p Path,
    decoys: &'p [Path],
    rng: &mut R,
) -> (&'p Path, PathTag) {
    let index = rng.gen_range(0..decoys.len() + 1);
    if index < decoys.len() {
        (&decoys[index], PathTag::Decoy)
    } else {
        (actual, PathTag::Main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path(nodes: &[&str]) -> Path {
        Path::from_nodes(nodes.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_tag_matches_identity() {
        let actual = path(&["A", "B", "E"]);
        let decoys = vec![path(&["A", "C", "E"]), path(&["A", "D", "E"])];
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let (seen, tag) = displayed_path(&actual, &decoys, &mut rng);
            match tag {
                PathTag::Main => assert_eq!(*seen, actual),
                PathTag::Decoy => assert!(decoys.contains(seen)),
            }
        }
    }

    #[test]
    fn test_no_decoys_always_main() {
        let actual = path(&["A", "E"]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            let (seen, tag) = displayed_path(&actual, &[], &mut rng);
            assert_eq!(tag, PathTag::Main);
            assert_eq!(*seen, actual);
        }
    }

    #[test]
    fn test_every_entry_selectable() {
        // Over many draws with several decoys, each tag should show up.
        let actual = path(&["A", "B", "E"]);
        let decoys = vec![path(&["A", "C", "E"]), path(&["A", "D", "E"])];
        let mut rng = StdRng::seed_from_u64(11);

        let mut saw_decoy = false;
        let mut saw_main = false;
        for _ in 0..200 {
            match displayed_path(&actual, &decoys, &mut rng).1 {
                PathTag::Decoy => saw_decoy = true,
                PathTag::Main => saw_main = true,
            }
        }
        assert!(saw_decoy && saw_main);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(PathTag::Decoy.to_string(), "decoy");
        assert_eq!(PathTag::Main.to_string(), "main");
    }
}
