use std::path::{Path, PathBuf};

/// Raster extensions recognized as category images (matched case-insensitively)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// List the images of a category directory in lexicographic path order
///
/// Returns an empty sequence when the directory does not exist or cannot be
/// read; the caller decides whether that warrants a skip. No side effects.
pub fn list_images(category_dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(category_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();

    // Pairing depends on this order being stable across runs
    images.sort();
    images
}

/// List every category (subdirectory) under the image root, sorted by name
pub fn list_categories(image_root: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(image_root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut categories: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    categories.sort();
    categories
}

/// Make a category name safe to use as a results directory name
pub fn sanitize_category_name(name: &str) -> String {
    name.replace(' ', "_")
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
