use std::path::Path;

use crate::error::Result;
use crate::settings::{save_settings_to, Settings};

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Settings already exist at {} (use --force to overwrite).", path.display());
        return Ok(());
    }
    save_settings_to(&Settings::default(), path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::load_settings_from;

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"users": 4}"#).unwrap();

        run(&path, false).unwrap();
        assert_eq!(load_settings_from(&path).users, 4);

        run(&path, true).unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }
}
