// Copyright (C) 2025  Vince Vasta.
// SPDX-License-Identifier: Apache-2.0

//! Chart images loading and painting.
use ahash::AHashMap;
use anyhow::{Context as _, Result};
use eframe::egui;
use std::path::{Path, PathBuf};

use crate::ranges::RangeResult;

/// A cache of chart textures loaded from the assets directory.
///
/// Entries are keyed by derived entry id and image path so a failed load
/// stays failed until the entry leaves the derived list, and a load
/// failure for one entry never affects the others.
pub struct Charts {
    root: PathBuf,
    entries: AHashMap<String, ChartState>,
}

enum ChartState {
    Ready(egui::TextureHandle),
    Failed,
}

impl Charts {
    /// Creates a cache for charts stored under the given assets root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: AHashMap::default(),
        }
    }

    /// Gets the texture for a derived entry, loading it on first use.
    ///
    /// Returns `None` for an entry whose image failed to read or decode.
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        entry: &RangeResult,
    ) -> Option<egui::TextureHandle> {
        let key = cache_key(entry);

        match self.entries.get(&key) {
            Some(ChartState::Ready(texture)) => return Some(texture.clone()),
            Some(ChartState::Failed) => return None,
            None => {}
        }

        let state = match load_image(&self.file_path(&entry.image_path)) {
            Ok(image) => {
                ChartState::Ready(ctx.load_texture(&key, image, Default::default()))
            }
            Err(e) => {
                log::warn!("Cannot load chart {}: {e:#}", entry.image_path);
                ChartState::Failed
            }
        };

        let texture = match &state {
            ChartState::Ready(texture) => Some(texture.clone()),
            ChartState::Failed => None,
        };

        self.entries.insert(key, state);
        texture
    }

    /// Drops cached entries no longer present in the derived list so a
    /// re-derived entry retries its load.
    pub fn sync(&mut self, ranges: &[RangeResult]) {
        self.entries
            .retain(|key, _| ranges.iter().any(|r| &cache_key(r) == key));
    }

    /// Resolves a derived image path below the assets root.
    pub fn file_path(&self, image_path: &str) -> PathBuf {
        self.root.join(image_path.trim_start_matches('/'))
    }
}

fn cache_key(entry: &RangeResult) -> String {
    format!("{}-{}", entry.id, entry.image_path)
}

fn load_image(file: &Path) -> Result<egui::ColorImage> {
    let bytes =
        std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding {}", file.display()))?;

    let size = [image.width() as _, image.height() as _];
    let image_buffer = image.to_rgba8();
    let pixels = image_buffer.as_flat_samples();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        pixels.as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &'static str, image_path: &str) -> RangeResult {
        RangeResult {
            id,
            title: String::default(),
            image_path: image_path.to_string(),
            description: None,
        }
    }

    #[test]
    fn file_path_resolves_below_root() {
        let charts = Charts::new("/tmp/assets");
        assert_eq!(
            charts.file_path("/ranges/MTT/8MAX/100BB/RFI/BTN.jpg"),
            PathBuf::from("/tmp/assets/ranges/MTT/8MAX/100BB/RFI/BTN.jpg")
        );
    }

    #[test]
    fn loads_charts_and_keeps_failures_isolated() {
        let root = std::env::temp_dir().join("rangebook-charts-test");
        let dir = root.join("ranges/MTT/8MAX/100BB/RFI");
        std::fs::create_dir_all(&dir).unwrap();
        image::RgbImage::new(4, 4).save(dir.join("BTN.jpg")).unwrap();

        let ctx = egui::Context::default();
        let mut charts = Charts::new(&root);

        let ready = entry("my-rfi-range", "/ranges/MTT/8MAX/100BB/RFI/BTN.jpg");
        let missing = entry("opponent-rfi-range", "/ranges/MTT/8MAX/100BB/RFI/UTG.jpg");

        assert!(charts.get(&ctx, &missing).is_none());
        assert!(charts.get(&ctx, &ready).is_some());

        // The failure stands while the entry is still derived.
        charts.sync(&[ready.clone(), missing.clone()]);
        assert!(charts.get(&ctx, &missing).is_none());
        assert!(charts.get(&ctx, &ready).is_some());

        // And is dropped once the entry leaves the list.
        charts.sync(&[ready.clone()]);
        assert_eq!(charts.entries.len(), 1);
        assert!(matches!(
            charts.entries.get(&cache_key(&ready)),
            Some(ChartState::Ready(_))
        ));
    }
}
