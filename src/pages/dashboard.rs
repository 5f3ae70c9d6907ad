//! Dashboard page with the headline campaign metrics.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::auth::AuthStore;

const CARDS: [(&str, &str, f64, &str); 4] = [
    ("Total de Campanhas", "42", 12.5, "stat-card--blue"),
    ("Novos Seguidores", "1,256", 8.2, "stat-card--green"),
    ("Receita Total", "R$ 45,230", 15.7, "stat-card--purple"),
    ("Engajamento", "68%", 5.3, "stat-card--orange"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    let greeting = move || {
        auth.user()
            .map(|user| format!("Bem-vindo, {}", user.name))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>

            <div class="dashboard-page__grid">
                {CARDS
                    .iter()
                    .map(|&(title, value, change, accent)| {
                        view! { <StatCard title=title value=value change=change accent=accent/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
