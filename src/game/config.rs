use thiserror::Error;

pub const MAX_ATTEMPTS: u32 = 3;
pub const LEVEL_DURATION: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub grid_size: usize,
    pub target_count: usize,
    pub decoy_count: usize,
}

pub const LEVELS: [LevelConfig; 3] = [
    LevelConfig {
        grid_size: 4,
        target_count: 1,
        decoy_count: 1,
    },
    LevelConfig {
        grid_size: 6,
        target_count: 4,
        decoy_count: 2,
    },
    LevelConfig {
        grid_size: 8,
        target_count: 5,
        decoy_count: 3,
    },
];

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "level {level}: {targets} targets + {decoys} decoys do not leave a free cell on a {size}x{size} grid"
    )]
    Overfilled {
        level: usize,
        size: usize,
        targets: usize,
        decoys: usize,
    },
}

impl LevelConfig {
    pub fn total_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Position generation only terminates if at least one cell stays empty.
    pub fn validate(&self, level: usize) -> Result<(), ConfigError> {
        if self.target_count + self.decoy_count >= self.total_cells() {
            return Err(ConfigError::Overfilled {
                level,
                size: self.grid_size,
                targets: self.target_count,
                decoys: self.decoy_count,
            });
        }
        Ok(())
    }
}

pub fn validate_levels() -> Result<(), ConfigError> {
    for (index, config) in LEVELS.iter().enumerate() {
        config.validate(index + 1)?;
    }
    Ok(())
}
