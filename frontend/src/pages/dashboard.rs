use domain::DashboardStats;
use shared::{Banner, Blog, Category, Ingredient, User};
use yew::prelude::*;

use super::error_banner;
use crate::components::{Spinner, StatsCard};
use crate::hooks::{use_app, use_entity_list};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let app = use_app();
    let users = use_entity_list::<User>("users");
    let categories = use_entity_list::<Category>("categories");
    let banners = use_entity_list::<Banner>("banners");
    let blogs = use_entity_list::<Blog>("blogs");
    let ingredients = use_entity_list::<Ingredient>("ingredients");

    let loading = users.loading
        || categories.loading
        || banners.loading
        || blogs.loading
        || ingredients.loading;
    if loading {
        return html! { <Spinner /> };
    }

    let error = users
        .error
        .or(categories.error)
        .or(banners.error)
        .or(blogs.error)
        .or(ingredients.error);

    let stats = DashboardStats::compute_with_threshold(
        &users.items,
        &categories.items,
        &banners.items,
        &blogs.items,
        &ingredients.items,
        app.config.low_stock_threshold,
    );
    let health = stats.stock_health_percent();

    html! {
        <div class="dashboard">
            {error_banner(&error)}
            <div class="stats-grid">
                <StatsCard title="Total Users" value={stats.total_users.to_string()} />
                <StatsCard title="Categories" value={stats.total_categories.to_string()} />
                <StatsCard
                    title="Active Banners"
                    value={stats.active_banners.to_string()}
                    detail={format!("{} total", stats.total_banners)}
                />
                <StatsCard
                    title="Published Blogs"
                    value={stats.published_blogs.to_string()}
                    detail={format!("{}/{} published", stats.published_blogs, stats.total_blogs)}
                />
            </div>
            <section class="inventory-status">
                <h2>{"Inventory Status"}</h2>
                <p>
                    <strong>{stats.low_stock_ingredients}</strong>
                    {format!(" of {} ingredients are low on stock", stats.total_ingredients)}
                </p>
                {if stats.low_stock_ingredients > 0 {
                    html! {
                        <p class="warning">
                            {format!("{} ingredients need restocking soon.", stats.low_stock_ingredients)}
                        </p>
                    }
                } else {
                    html! {
                        <p class="ok">{format!("Your inventory is well-stocked at {}% capacity.", health)}</p>
                    }
                }}
                <div class="progress">
                    <div class="progress-bar" style={format!("width: {}%", health)}></div>
                </div>
            </section>
            <section class="content-status">
                <h2>{"Content"}</h2>
                <p>{format!("Blogs published: {}/{}", stats.published_blogs, stats.total_blogs)}</p>
                <div class="progress">
                    <div class="progress-bar" style={format!("width: {}%", stats.published_blog_percent())}></div>
                </div>
            </section>
        </div>
    }
}
