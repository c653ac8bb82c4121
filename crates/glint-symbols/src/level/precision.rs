// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashMap;

use crate::{BasicType, Precision};

/// Default precisions declared within one scope, e.g. through `precision mediump float;`.
#[derive(Debug, Default, Clone)]
pub struct PrecisionLevel {
    defaults: HashMap<BasicType, Precision>,
}

impl PrecisionLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default precision for a type, overwriting any earlier one in this level.
    pub fn set(&mut self, basic: BasicType, precision: Precision) {
        self.defaults.insert(basic, precision);
    }

    pub fn get(&self, basic: BasicType) -> Option<Precision> {
        self.defaults.get(&basic).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut level = PrecisionLevel::new();
        assert!(level.is_empty());
        assert_eq!(level.get(BasicType::Float), None);

        level.set(BasicType::Float, Precision::Medium);
        level.set(BasicType::Float, Precision::High);
        assert_eq!(level.get(BasicType::Float), Some(Precision::High));
        assert_eq!(level.get(BasicType::Int), None);
    }
}
