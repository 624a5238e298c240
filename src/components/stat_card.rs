use leptos::prelude::*;

use crate::api::AssetStat;

/// Top-of-dashboard card showing the latest price for one asset.
#[component]
pub fn StatCard(stat: AssetStat) -> impl IntoView {
    let price_label = match stat.price {
        Some(p) => format!("${:.2}", p),
        None => "$0.00".to_string(),
    };

    view! {
        <div class="stat-card">
            <span class="stat-label">{stat.name}</span>
            <div class="stat-price">{price_label}</div>
        </div>
    }
}
