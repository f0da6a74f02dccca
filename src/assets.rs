//! Startup asset loading
//!
//! Sprites, background and font are read once as opaque byte handles. A
//! missing or empty file aborts startup. The terminal front-end draws colored
//! cells instead of images, so the handles are only held for the process
//! lifetime.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::*;
use crate::error::GameError;

/// One loaded file
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: &'static str,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Asset {
    fn load(root: &Path, name: &'static str, relative: &str) -> Result<Self, GameError> {
        let path = root.join(relative);
        let bytes = fs::read(&path).map_err(|source| GameError::AssetLoad {
            name,
            path: path.clone(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(GameError::EmptyAsset { name, path });
        }
        log::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { name, path, bytes })
    }
}

/// Every asset the game needs
#[derive(Debug, Clone)]
pub struct AssetSet {
    pub bird: Asset,
    pub upper_pipe: Asset,
    pub lower_pipe: Asset,
    pub background: Asset,
    pub font: Asset,
}

impl AssetSet {
    /// Load all assets relative to `root`, failing on the first bad file
    pub fn load(root: &Path) -> Result<Self, GameError> {
        let set = Self {
            bird: Asset::load(root, "bird image", BIRD_SPRITE_PATH)?,
            upper_pipe: Asset::load(root, "above pipe image", UPPER_PIPE_SPRITE_PATH)?,
            lower_pipe: Asset::load(root, "below pipe image", LOWER_PIPE_SPRITE_PATH)?,
            background: Asset::load(root, "background image", BACKGROUND_PATH)?,
            font: Asset::load(root, "font", FONT_PATH)?,
        };
        log::info!("Loaded 5 assets ({} bytes)", set.total_bytes());
        Ok(set)
    }

    pub fn total_bytes(&self) -> usize {
        [
            &self.bird,
            &self.upper_pipe,
            &self.lower_pipe,
            &self.background,
            &self.font,
        ]
        .iter()
        .map(|a| a.bytes.len())
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flappy-assets-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("assets/img")).unwrap();
        dir
    }

    fn write_all(dir: &Path) {
        for path in [
            BIRD_SPRITE_PATH,
            UPPER_PIPE_SPRITE_PATH,
            LOWER_PIPE_SPRITE_PATH,
            BACKGROUND_PATH,
            FONT_PATH,
        ] {
            fs::write(dir.join(path), b"data").unwrap();
        }
    }

    #[test]
    fn test_load_all() {
        let dir = scratch_dir("ok");
        write_all(&dir);

        let set = AssetSet::load(&dir).unwrap();
        assert_eq!(set.total_bytes(), 20);
        assert_eq!(set.bird.name, "bird image");
        assert!(set.lower_pipe.path.ends_with("assets/img/pipeUnder.png"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let dir = scratch_dir("missing");
        write_all(&dir);
        fs::remove_file(dir.join(BACKGROUND_PATH)).unwrap();

        let err = AssetSet::load(&dir).unwrap_err();
        match err {
            GameError::AssetLoad { name, .. } => assert_eq!(name, "background image"),
            other => panic!("unexpected error: {other}"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_asset_is_fatal() {
        let dir = scratch_dir("empty");
        write_all(&dir);
        fs::write(dir.join(FONT_PATH), b"").unwrap();

        let err = AssetSet::load(&dir).unwrap_err();
        assert!(matches!(err, GameError::EmptyAsset { name: "font", .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}
