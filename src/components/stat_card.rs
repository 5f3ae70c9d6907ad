//! Dashboard metric card.

use leptos::prelude::*;

/// A single metric with its change since the previous period.
#[component]
pub fn StatCard(
    title: &'static str,
    value: &'static str,
    change: f64,
    accent: &'static str,
) -> impl IntoView {
    let positive = change >= 0.0;
    let change_label = if positive {
        format!("+{change}%")
    } else {
        format!("{change}%")
    };
    let change_class = if positive {
        "stat-card__change stat-card__change--up"
    } else {
        "stat-card__change stat-card__change--down"
    };

    view! {
        <div class=format!("stat-card {accent}")>
            <div class="stat-card__top">
                <span class=change_class>{change_label}</span>
            </div>
            <h3 class="stat-card__title">{title}</h3>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
