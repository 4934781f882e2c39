use shared::{Ingredient, IngredientPayload};

use super::{date_input_value, required, today, DATE_FORMAT};
use crate::config::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::error::FormError;

pub const DEFAULT_UNIT: &str = "kg";

pub fn is_low_stock(stock: f64) -> bool {
    stock < DEFAULT_LOW_STOCK_THRESHOLD
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientForm {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub unit: String,
    pub price: String,
    pub supplier: String,
    pub last_restock: String,
}

impl Default for IngredientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            stock: "0".to_string(),
            unit: DEFAULT_UNIT.to_string(),
            price: "0".to_string(),
            supplier: String::new(),
            last_restock: String::new(),
        }
    }
}

impl IngredientForm {
    pub fn new() -> Self {
        Self {
            last_restock: today().format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            stock: ingredient.stock.to_string(),
            unit: ingredient.unit.clone(),
            price: ingredient.price.to_string(),
            supplier: ingredient.supplier.clone(),
            last_restock: date_input_value(&ingredient.last_restock),
        }
    }

    /// Numeric inputs that don't parse are sent as zero
    pub fn validate(&self) -> Result<IngredientPayload, FormError> {
        let name = required(&self.name, "Ingredient name")?;
        Ok(IngredientPayload {
            name,
            category: self.category.trim().to_string(),
            stock: self.stock.trim().parse().unwrap_or(0.0),
            unit: self.unit.clone(),
            price: self.price.trim().parse().unwrap_or(0.0),
            supplier: self.supplier.trim().to_string(),
            last_restock: self.last_restock.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = IngredientForm::new();
        assert_eq!(form.unit, "kg");
        assert_eq!(form.last_restock.len(), 10);
    }

    #[test]
    fn test_unparseable_numbers_become_zero() {
        let mut form = IngredientForm::new();
        form.name = "Mango".to_string();
        form.stock = "lots".to_string();
        form.price = " 3.25 ".to_string();

        let payload = form.validate().unwrap();
        assert_eq!(payload.stock, 0.0);
        assert_eq!(payload.price, 3.25);
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            IngredientForm::new().validate(),
            Err(FormError::Required("Ingredient name"))
        );
    }

    #[test]
    fn test_low_stock() {
        assert!(is_low_stock(49.5));
        assert!(!is_low_stock(50.0));
    }
}
