use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Strategy for enumerating (source, target) pairs over a category's images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingMode {
    /// Chain neighbours: (0,1), (1,2), ... (N-2, N-1)
    Sequential,
    /// Every combination (i, j) with i < j
    AllPairs,
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::AllPairs => write!(f, "all-pairs"),
        }
    }
}

/// An ordered (source, target) morph pair
///
/// The identifier is derived from the images' positions in the sorted
/// category listing, never from their content, so output paths survive
/// partial re-runs.
#[derive(Debug, Clone)]
pub struct Pair {
    pub source: PathBuf,
    pub target: PathBuf,
    pub source_index: usize,
    pub target_index: usize,
}

impl Pair {
    /// Deterministic directory name for this pair's frame set
    pub fn identifier(&self) -> String {
        format!("morph_{:02}_{:02}", self.source_index, self.target_index)
    }

    /// Human-readable label for progress logs, e.g. `face_01 -> face_02`
    pub fn label(&self) -> String {
        format!("{} -> {}", stem(&self.source), stem(&self.target))
    }
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("?")
        .to_string()
}

/// Enumerate morph pairs over an ordered image sequence
///
/// Fewer than 2 images always yields zero pairs, regardless of strategy.
/// All-pairs enumeration runs i ascending outer, j ascending inner, so pair
/// identifiers are stable and reproducible.
pub fn enumerate_pairs(images: &[PathBuf], mode: PairingMode) -> Vec<Pair> {
    if images.len() < 2 {
        return Vec::new();
    }

    let mut pairs = Vec::new();
    match mode {
        PairingMode::Sequential => {
            for i in 0..images.len() - 1 {
                pairs.push(Pair {
                    source: images[i].clone(),
                    target: images[i + 1].clone(),
                    source_index: i,
                    target_index: i + 1,
                });
            }
        }
        PairingMode::AllPairs => {
            for i in 0..images.len() {
                for j in i + 1..images.len() {
                    pairs.push(Pair {
                        source: images[i].clone(),
                        target: images[j].clone(),
                        source_index: i,
                        target_index: j,
                    });
                }
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_images(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("img_{i:02}.png"))).collect()
    }

    #[test]
    fn test_sequential_pair_count_and_links() {
        let images = fake_images(5);
        let pairs = enumerate_pairs(&images, PairingMode::Sequential);

        assert_eq!(pairs.len(), 4);
        for (k, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.source_index, k);
            assert_eq!(pair.target_index, k + 1);
        }
    }

    #[test]
    fn test_all_pairs_count_no_duplicates_no_self_pairs() {
        let images = fake_images(5);
        let pairs = enumerate_pairs(&images, PairingMode::AllPairs);

        assert_eq!(pairs.len(), 5 * 4 / 2);

        let mut seen = std::collections::HashSet::new();
        for pair in &pairs {
            assert!(pair.source_index < pair.target_index);
            assert!(seen.insert((pair.source_index, pair.target_index)));
        }
    }

    #[test]
    fn test_all_pairs_enumeration_order() {
        let images = fake_images(3);
        let pairs = enumerate_pairs(&images, PairingMode::AllPairs);
        let order: Vec<_> = pairs
            .iter()
            .map(|p| (p.source_index, p.target_index))
            .collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_fewer_than_two_images_yields_zero_pairs() {
        for n in 0..2 {
            let images = fake_images(n);
            assert!(enumerate_pairs(&images, PairingMode::Sequential).is_empty());
            assert!(enumerate_pairs(&images, PairingMode::AllPairs).is_empty());
        }
    }

    #[test]
    fn test_identifier_is_zero_padded() {
        let images = fake_images(2);
        let pairs = enumerate_pairs(&images, PairingMode::Sequential);
        assert_eq!(pairs[0].identifier(), "morph_00_01");
    }

    #[test]
    fn test_label_uses_file_stems() {
        let pair = Pair {
            source: PathBuf::from("faces/alice.png"),
            target: PathBuf::from("faces/bob.jpg"),
            source_index: 0,
            target_index: 1,
        };
        assert_eq!(pair.label(), "alice -> bob");
    }
}
