//! # Item Descriptors
//!
//! Converted item stacks as the base translation layer hands them over: a
//! namespaced identifier plus a sparse container of typed data components.

pub mod data;
pub mod tool;

pub use data::{DataKey, DataValue, FoodEffect, FoodProperties, StructuredDataContainer};
pub use tool::{ToolProperties, ToolRule};

/// A single converted item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDescriptor {
    identifier: String,
    amount: u8,
    data: StructuredDataContainer,
}

impl ItemDescriptor {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            amount: 1,
            data: StructuredDataContainer::new(),
        }
    }

    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_data(mut self, data: StructuredDataContainer) -> Self {
        self.data = data;
        self
    }

    /// Namespaced identifier, e.g. `minecraft:iron_sword`
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn data(&self) -> &StructuredDataContainer {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut StructuredDataContainer {
        &mut self.data
    }
}
