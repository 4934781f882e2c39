use serde::Serialize;
use shared::{Banner, Blog, BlogStatus, Category, Ingredient, User};

use crate::config::DEFAULT_LOW_STOCK_THRESHOLD;

/// Headline counts for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_categories: usize,
    pub total_banners: usize,
    pub total_blogs: usize,
    pub total_ingredients: usize,
    pub low_stock_ingredients: usize,
    pub active_banners: usize,
    pub published_blogs: usize,
}

impl DashboardStats {
    pub fn compute(
        users: &[User],
        categories: &[Category],
        banners: &[Banner],
        blogs: &[Blog],
        ingredients: &[Ingredient],
    ) -> Self {
        Self::compute_with_threshold(
            users,
            categories,
            banners,
            blogs,
            ingredients,
            DEFAULT_LOW_STOCK_THRESHOLD,
        )
    }

    pub fn compute_with_threshold(
        users: &[User],
        categories: &[Category],
        banners: &[Banner],
        blogs: &[Blog],
        ingredients: &[Ingredient],
        low_stock_threshold: f64,
    ) -> Self {
        Self {
            total_users: users.len(),
            total_categories: categories.len(),
            total_banners: banners.len(),
            total_blogs: blogs.len(),
            total_ingredients: ingredients.len(),
            low_stock_ingredients: ingredients
                .iter()
                .filter(|i| i.stock < low_stock_threshold)
                .count(),
            active_banners: banners.iter().filter(|b| b.is_active).count(),
            published_blogs: blogs
                .iter()
                .filter(|b| b.status == BlogStatus::Published)
                .count(),
        }
    }

    /// Share of ingredients that are not low on stock, as a whole percentage
    pub fn stock_health_percent(&self) -> u32 {
        if self.total_ingredients == 0 {
            return 100;
        }
        let low = self.low_stock_ingredients as f64 / self.total_ingredients as f64;
        ((1.0 - low) * 100.0).round() as u32
    }

    pub fn published_blog_percent(&self) -> u32 {
        if self.total_blogs == 0 {
            return 0;
        }
        (self.published_blogs as f64 / self.total_blogs as f64 * 100.0).round() as u32
    }
}
