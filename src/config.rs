use std::time::Duration;

use crate::constants::{
    BASE_Z_INDEX, CARD_HEIGHT, CARD_WIDTH, DOUBLE_CLICK_MS, MAXIMIZED_INSET, MIN_VISIBLE_HEIGHT,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, STATUS_TTL_MS,
};
use crate::error::ConfigError;
use crate::layout::{CascadeSpec, ChromeSpec, DockSpec, GridSpec, Size};

/// Every tunable of the window manager in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmConfig {
    /// Size given to newly provisioned windows and used by the organize grid.
    pub card: Size,
    pub min_size: Size,
    pub grid: GridSpec,
    pub cascade: CascadeSpec,
    pub chrome: ChromeSpec,
    pub dock: DockSpec,
    pub min_visible_height: u32,
    pub maximized_inset: u32,
    pub base_z_index: u64,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            card: Size::new(CARD_WIDTH, CARD_HEIGHT),
            min_size: Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            grid: GridSpec::default(),
            cascade: CascadeSpec::default(),
            chrome: ChromeSpec::default(),
            dock: DockSpec::default(),
            min_visible_height: MIN_VISIBLE_HEIGHT,
            maximized_inset: MAXIMIZED_INSET,
            base_z_index: BASE_Z_INDEX,
        }
    }
}

impl WmConfig {
    /// Change the card size everywhere it is used.
    pub fn with_card(mut self, card: Size) -> Self {
        self.card = card;
        self.grid.card = card;
        self.cascade.card = card;
        self
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size.is_empty() {
            return Err(ConfigError::DegenerateMinimum(self.min_size));
        }
        if self.card.width < self.min_size.width || self.card.height < self.min_size.height {
            return Err(ConfigError::CardBelowMinimum {
                card: self.card,
                min: self.min_size,
            });
        }
        if self.grid.stack_group == 0 {
            return Err(ConfigError::ZeroStackGroup);
        }
        Ok(())
    }
}

/// How the terminal host maps cells onto viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub cell_width: u32,
    pub cell_height: u32,
    pub double_click: Duration,
    /// Status messages older than this give way to the key hints.
    pub status_ttl: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
            double_click: Duration::from_millis(DOUBLE_CLICK_MS),
            status_ttl: Duration::from_millis(STATUS_TTL_MS),
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::ZeroCellMetrics {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(WmConfig::default().validate().is_ok());
        assert!(HostConfig::default().validate().is_ok());
    }

    #[test]
    fn with_card_propagates_to_layouts() {
        let cfg = WmConfig::default().with_card(Size::new(400, 300));
        assert_eq!(cfg.grid.card, Size::new(400, 300));
        assert_eq!(cfg.cascade.card, Size::new(400, 300));
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let cfg = WmConfig::default().with_min_size(Size::new(0, 200));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DegenerateMinimum(_))
        ));

        let cfg = WmConfig::default().with_card(Size::new(100, 100));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CardBelowMinimum { .. })
        ));

        let mut cfg = WmConfig::default();
        cfg.grid.stack_group = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroStackGroup)));

        let host = HostConfig {
            cell_width: 0,
            ..HostConfig::default()
        };
        assert!(host.validate().is_err());
    }
}
